//! Listing view model: the search box, pagination control and what to show.
//!
//! The view never mutates [`FetchState`] itself; it returns the
//! [`FetchEvent`]s to hand to the coordinator.

use std::time::Duration;

use crate::state::{FetchEvent, FetchState};

/// How long typing must pause before the search text becomes the query.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingView {
    search: String,
    searching: bool,
}

/// Which parts of the listing to render for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPlan<'a> {
    pub spinner: bool,
    pub error: Option<&'a str>,
    pub empty_notice: bool,
    pub list: bool,
}

impl ListingView {
    /// Start with the search box showing the current query.
    pub fn new(state: &FetchState) -> Self {
        Self {
            search: state.query.clone(),
            searching: false,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn searching(&self) -> bool {
        self.searching
    }

    pub fn on_search_input(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.searching = true;
    }

    /// The debounce window elapsed without further input. Commits the search
    /// text as the query (back on page 1) when it differs from the current one.
    pub fn on_debounce_elapsed(&self, state: &FetchState) -> Vec<FetchEvent> {
        if self.search == state.query {
            return Vec::new();
        }
        vec![
            FetchEvent::PageChanged(1),
            FetchEvent::QueryChanged(self.search.clone()),
        ]
    }

    /// Reset search, query and page.
    pub fn on_clear(&mut self) -> Vec<FetchEvent> {
        self.search.clear();
        self.searching = false;
        vec![FetchEvent::QueryChanged(String::new()), FetchEvent::PageChanged(1)]
    }

    /// The searching flag only lasts until a fetch finishes.
    pub fn on_loading_changed(&mut self, loading: bool) {
        if !loading {
            self.searching = false;
        }
    }

    /// Page selection from the pagination control, clamped to the known
    /// pages. `None` when it would not change the current page.
    pub fn on_page_selected(&self, state: &FetchState, requested: i64) -> Option<FetchEvent> {
        let last = state.total_pages.max(1);
        let requested = usize::try_from(requested.max(1)).unwrap_or(usize::MAX);
        let clamped = requested.min(last);
        (clamped != state.page).then_some(FetchEvent::PageChanged(clamped))
    }

    pub fn plan<'a>(&self, state: &'a FetchState) -> ViewPlan<'a> {
        let busy = state.loading || self.searching;
        let loaded = state.items.as_deref().filter(|_| !busy);
        ViewPlan {
            spinner: busy,
            error: state.error.as_deref().filter(|_| !busy),
            empty_notice: loaded.is_some_and(|items| items.is_empty()),
            list: loaded.is_some_and(|items| !items.is_empty()),
        }
    }
}
