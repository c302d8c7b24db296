//! API client module
//!
//! One async method per REST action of the mass tracking service.

mod auth;
pub mod client;
pub mod error;
mod import;
mod masses;
pub mod notice;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use notice::{LogNotifier, Notice, Notifier};
