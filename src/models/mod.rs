//! Data models
//!
//! Rust structs mirroring the API's JSON payloads.

mod import;
mod mass;
pub mod timestamp;
mod user;

pub use import::{ImportDocument, ImportOutcome};
pub use mass::{Mass, NewMass};
pub use timestamp::{normalize_timestamp, parse_timestamp, to_wire, TimestampError};
pub use user::{Credentials, LoadedUser, User};
