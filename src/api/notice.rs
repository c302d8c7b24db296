//! User notifications
//!
//! Import results are announced to the user rather than only returned. The
//! [`Notifier`] seam lets a front end decide how (dialog, toast, stderr).

use std::fmt;

use tracing::{info, warn};

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ImportSucceeded,
    ImportFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ImportSucceeded => f.write_str("Data imported successfully!"),
            Notice::ImportFailed(reason) => write!(f, "Import failed: {}", reason),
        }
    }
}

/// Receives user-facing notices
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Notifier that writes notices to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::ImportSucceeded => info!("{}", notice),
            Notice::ImportFailed(_) => warn!("{}", notice),
        }
    }
}
