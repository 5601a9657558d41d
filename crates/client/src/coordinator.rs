//! Drives listing fetches through the [`FetchState`] transitions.

use crate::config::ClientConfig;
use crate::response::decode_items_page;
use crate::state::{FetchEvent, FetchRequest, FetchState};
use crate::transport::{HttpTransport, ItemsTransport};

/// Owns the listing's fetch state and the transport used to refresh it.
///
/// A fetch always runs `Started`, then `Succeeded` or `Failed`, then
/// `Settled`, so `loading` is cleared on every path. Fetches are not
/// cancelled: when callers overlap them, whichever resolves last wins.
pub struct FetchCoordinator<T> {
    transport: T,
    state: FetchState,
    default_limit: usize,
}

impl FetchCoordinator<HttpTransport> {
    pub fn http(config: &ClientConfig) -> Self {
        Self::new(HttpTransport::new(config), config)
    }
}

impl<T: ItemsTransport> FetchCoordinator<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            state: FetchState::new(),
            default_limit: config.default_limit.max(1),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Apply a non-fetch event (query or page selection).
    pub fn dispatch(&mut self, event: FetchEvent) {
        self.state.apply(&event);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(FetchEvent::QueryChanged(query.into()));
    }

    pub fn set_page(&mut self, page: usize) {
        self.dispatch(FetchEvent::PageChanged(page));
    }

    /// Fetch a page. Omitted arguments fall back to the current page, the
    /// default limit and the current query.
    pub async fn fetch_items(
        &mut self,
        page: Option<usize>,
        limit: Option<usize>,
        query: Option<&str>,
    ) -> &FetchState {
        let request = FetchRequest {
            page: page.unwrap_or(self.state.page).max(1),
            limit: limit.unwrap_or(self.default_limit).max(1),
            query: query.map_or_else(|| self.state.query.clone(), str::to_string),
        };

        self.state.apply(&FetchEvent::Started);

        let outcome = match self.transport.fetch_items(&request).await {
            Ok(body) => FetchEvent::Succeeded(decode_items_page(body, request.page)),
            Err(e) => {
                tracing::warn!(page = request.page, query = %request.query, "item fetch failed: {e}");
                FetchEvent::Failed(e.to_string())
            }
        };
        self.state.apply(&outcome);
        self.state.apply(&FetchEvent::Settled);

        &self.state
    }

    /// Re-fetch the current page with the current query.
    pub async fn refresh(&mut self) -> &FetchState {
        self.fetch_items(None, None, None).await
    }
}
