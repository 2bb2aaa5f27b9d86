//! Fatal error taxonomy and exit-code mapping
//!
//! Every failure in this program is fatal. Errors propagate up to `main`
//! untouched, which prints the message and exits with the code returned
//! by [`Error::exit_code`]. Usage errors never reach this type: clap
//! rejects bad invocations with exit code 2 before anything runs.

use std::fmt;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong after argument parsing
#[derive(Debug)]
pub enum Error {
    /// Config file missing, unreadable, or missing required keys
    Config(String),

    /// Appliance API returned a non-200 status or an unparseable body
    Upstream(String),

    /// Push backend unreachable or rejected the message
    Notification(String),
}

impl Error {
    /// Process exit code for this failure.
    ///
    /// Every fatal error currently maps to 1; the mapping lives here so
    /// the top-level driver stays the single place deciding exit codes.
    pub fn exit_code(&self) -> i32 {
        // all fatal failures exit 1; usage errors exit 2 via clap before
        // this type ever comes into play
        match self {
            Error::Config(_) | Error::Upstream(_) | Error::Notification(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::Upstream(msg) => write!(f, "appliance API error: {}", msg),
            Error::Notification(msg) => write!(f, "notification error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
