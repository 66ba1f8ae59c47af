//! Dashboard-side adapter for the vrtrack QC REST API.
//!
//! Translates graph-database method responses into flat, bindable rows:
//! [`Dispatcher::dispatch`] issues the call through the [`qc_client::QcRest`]
//! boundary, reshapes the JSON per method, and applies the result to a
//! [`DashboardState`] through clear-then-bulk-assign stores.

pub mod dispatch;
pub mod query;
pub mod state;
pub mod store;

pub use dispatch::{DispatchOptions, Dispatcher, QC_DOMAIN};
pub use query::query_param;
pub use state::{fill_properties, DashboardState, NodeTarget, QcUpdate};
pub use store::{ListStore, ValueStore};
