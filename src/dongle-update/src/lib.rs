//! Best-effort release check for dongle.
//!
//! The picker header shows a banner when a newer release exists. The check
//! is strictly time-bounded and advisory: network errors, timeouts and
//! malformed responses are all swallowed, never surfaced to the session.

pub mod check;
pub mod error;
pub mod version;

pub use check::{RELEASE_URL, UpdateChecker, check_for_update};
pub use error::{UpdateError, UpdateResult};
pub use version::{VersionComparison, compare_versions};

/// Version of the running binary.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
