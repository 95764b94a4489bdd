use thiserror::Error;

/// Failures reported by a [`Clipboard`](crate::traits::Clipboard) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The clipboard resource could not be reached at all.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read clipboard: {0}")]
    Read(String),
    #[error("failed to write clipboard: {0}")]
    Write(String),
}

/// Errors surfaced to the host when a command cannot complete.
///
/// Boundary conditions and empty operands are never errors; they clamp or
/// resolve to a no-op instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
