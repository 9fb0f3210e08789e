//! Route Core
//!
//! State and protocol logic for the reading-collection route page:
//! - models: task items and the route snapshot rendered by the server
//! - task_list: reorderable item sequence driven by drag samples
//! - progress: aggregate completion and finalize gating
//! - transport: reading/finalize/lookup calls over HTTP
//! - controller: the route state machine tying it all together

mod config;
mod controller;
mod draft;
mod error;
mod lookup;
mod models;
mod progress;
mod task_list;
pub mod transport;

pub use config::RouteConfig;
pub use controller::{
    FinalizeOutcome, Notice, NoticeLevel, RouteController, RoutePhase, RouteView,
    FINALIZE_CONFIRMATION, FINALIZE_FALLBACK, READING_FALLBACK, READING_REQUIRED,
};
pub use draft::{RouteDraft, MIN_ROUTE_ACCOUNTS, ROUTE_NAME_REQUIRED, ROUTE_TOO_SHORT};
pub use error::{RouteError, RouteResult, TransportError};
pub use lookup::{search_account, CONTRACT_NOT_FOUND, CONTRACT_REQUIRED, LOOKUP_FALLBACK};
pub use models::{PageSnapshot, Route, TaskItem};
pub use progress::{Progress, ProgressTracker};
pub use task_list::{DropSide, TaskList};
pub use transport::{AccountLookup, HeaderProvider, HttpTransport, RouteTransport};
