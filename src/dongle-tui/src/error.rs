//! Error types for the interactive picker.

/// Result type alias for picker operations.
pub type PickerResult<T> = std::result::Result<T, PickerError>;

/// Errors that abort the picker before or during the interactive loop.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// The controlling terminal could not be acquired. The picker cannot
    /// run at all without it; this is the one fatal setup error.
    #[error("Cannot open controlling terminal (/dev/tty): {0}")]
    TerminalUnavailable(#[source] std::io::Error),

    /// I/O error while rendering or reading input.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
