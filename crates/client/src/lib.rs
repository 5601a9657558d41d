//! `catalog-client`
//!
//! **Responsibility:** client-side fetch state for the catalog listing.
//!
//! This crate provides:
//! - An explicit fetch state with pure transitions (`state`)
//! - Lenient decoding of listing responses (`response`)
//! - A transport seam with a `reqwest` implementation (`transport`)
//! - The coordinator that drives a fetch through its states (`coordinator`)
//! - The listing view model: search debounce, paging, visibility (`view`)
//! - Price display formatting (`format`)
//!
//! Rendering is left to whichever UI layer consumes these types.

pub mod config;
pub mod coordinator;
pub mod format;
pub mod response;
pub mod state;
pub mod transport;
pub mod view;

pub use config::ClientConfig;
pub use coordinator::FetchCoordinator;
pub use format::format_price;
pub use response::ItemsPage;
pub use state::{FetchEvent, FetchPhase, FetchRequest, FetchState};
pub use transport::{FetchError, HttpTransport, ItemsTransport};
pub use view::{ListingView, ViewPlan, SEARCH_DEBOUNCE};
