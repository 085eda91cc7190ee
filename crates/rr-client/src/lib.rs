//! Server-side access to the remote report service: configuration, the
//! HTTP client that issues report requests, and the one-shot store that
//! hands a finished report from the form submission to the report page.

pub mod client;
pub mod config;
pub mod store;

pub use client::{ClientError, ReportClient};
pub use config::AppConfig;
pub use store::ReportStore;
