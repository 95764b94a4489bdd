pub mod clipboard;
pub mod commands;
pub mod edit;
pub mod engine;
pub mod error;
pub mod host;
pub mod motion;
pub mod traits;
pub mod types;
pub mod word;

#[cfg(feature = "clipboard")]
pub use crate::clipboard::SystemClipboard;
pub use crate::commands::{Action, COMMANDS, CommandSet, CommandSpec, Effects};
pub use crate::engine::{Engine, EngineBuilder, Outcome};
pub use crate::error::{ClipboardError, CommandError};
pub use crate::host::HostOp;
pub use crate::motion::Motion;
pub use crate::traits::{Buffer, Clipboard, TextOps};
pub use crate::types::{Edit, Position, Range, Selection};
