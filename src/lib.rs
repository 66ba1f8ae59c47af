//! Client-side adapter for the vrtrack QC graph-database REST API.
//!
//! Re-exports the workspace crates: [`types`] for the shared data model,
//! [`client`] for the REST transport boundary, and [`dashboard`] for the
//! stores, state, and method dispatch.

pub use qc_client as client;
pub use qc_dashboard as dashboard;
pub use qc_types as types;
