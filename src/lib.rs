//! Mass Log Library
//!
//! Client-side data layer for a personal weight-tracking service: an async
//! REST client for mass records and sessions, plus kilogram/pound display
//! helpers.

pub mod api;
pub mod build_info;
pub mod config;
pub mod models;
pub mod session;
pub mod units;

pub use api::{ApiClient, ApiError, ApiResult};
pub use config::ClientConfig;
pub use session::{SessionEvent, SessionState};
pub use units::MassUnit;
