//! dongle CLI - command parsing and dispatch.
//!
//! Subcommands:
//! - `pick` - interactive picker; prints the chosen absolute path.
//! - `scan` - one-shot cache-populating walk.
//! - `list` - prints cached (or freshly scanned) paths.
//! - `init` - prints shell integration for bash, zsh or fish.

pub mod cli;
pub mod init_cmd;
pub mod list_cmd;
pub mod pick_cmd;
pub mod scan_cmd;
pub mod utils;

pub use cli::{Cli, Commands, dispatch_command};
