//! Fetch state and its transitions.
//!
//! The state is a plain value owned by whoever drives the listing. It only
//! changes through [`FetchState::apply`] (or [`FetchState::next`]), so every
//! transition can be exercised without a UI or a network.

use serde::Serialize;

use catalog_items::Item;

use crate::response::ItemsPage;

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub page: usize,
    pub limit: usize,
    pub query: String,
}

/// Coarse lifecycle derived from [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchPhase {
    /// Nothing fetched yet.
    Idle,
    Loading,
    Success,
    Error,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// A request was issued.
    Started,
    /// The response body was decoded.
    Succeeded(ItemsPage),
    /// The request failed; the message is shown to the user.
    Failed(String),
    /// The request finished, whichever way it went.
    Settled,
    /// The filter text changed.
    QueryChanged(String),
    /// A different page was selected.
    PageChanged(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchState {
    /// `None` until the first fetch completes.
    pub items: Option<Vec<Item>>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            items: None,
            page: 1,
            total_pages: 1,
            total: 0,
            query: String::new(),
            loading: false,
            error: None,
        }
    }
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Error
        } else if self.items.is_some() {
            FetchPhase::Success
        } else {
            FetchPhase::Idle
        }
    }

    pub fn apply(&mut self, event: &FetchEvent) {
        match event {
            FetchEvent::Started => {
                self.loading = true;
                self.error = None;
            }
            FetchEvent::Succeeded(page) => {
                self.items = Some(page.items.clone());
                self.page = page.page;
                if let Some(total_pages) = page.total_pages {
                    self.total_pages = total_pages;
                }
                if let Some(total) = page.total {
                    self.total = total;
                }
            }
            FetchEvent::Failed(message) => {
                // Never leave stale rows on screen after a failure.
                self.error = Some(message.clone());
                self.items = Some(Vec::new());
                self.page = 1;
            }
            FetchEvent::Settled => {
                self.loading = false;
            }
            FetchEvent::QueryChanged(query) => {
                self.query = query.clone();
            }
            FetchEvent::PageChanged(page) => {
                self.page = (*page).max(1);
            }
        }
    }

    /// Consuming form of [`FetchState::apply`]: old state + event -> new state.
    pub fn next(mut self, event: &FetchEvent) -> Self {
        self.apply(event);
        self
    }
}
