use std::borrow::Cow;

use crate::error::ClipboardError;
use crate::host::HostOp;
use crate::types::Position;

/// Read-only, line-addressable view of a text buffer.
pub trait TextOps {
    // Basic queries
    fn line_count(&self) -> u32;
    fn line(&self, line: u32) -> Cow<'_, str>; // without the line break

    fn line_len(&self, line: u32) -> u32 {
        self.line(line).chars().count() as u32
    }

    fn last_line(&self) -> u32 {
        self.line_count().saturating_sub(1)
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        let col = pos.col.min(self.line_len(line));
        Position { line, col }
    }
}

impl<S: AsRef<str>> TextOps for [S] {
    fn line_count(&self) -> u32 {
        self.len() as u32
    }

    fn line(&self, line: u32) -> Cow<'_, str> {
        self.get(line as usize)
            .map_or(Cow::Borrowed(""), |s| Cow::Borrowed(s.as_ref()))
    }
}

/// The live editor handle a host passes to every command.
///
/// The host owns storage, undo history and rendering; commands only read
/// positions and text and write results back through these calls.
pub trait Buffer: TextOps {
    fn cursor(&self) -> Position;
    fn anchor(&self) -> Position;

    fn set_cursor(&mut self, pos: Position);
    fn set_selection(&mut self, anchor: Position, head: Position);

    // Text of the current selection, empty when nothing is selected
    fn selection_text(&self) -> String;
    fn replace_selection(&mut self, text: &str);
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    // Pass-through capabilities implemented entirely by the host
    fn exec(&mut self, op: HostOp);
    fn undo(&mut self);
    fn redo(&mut self);
}

/// Text clipboard shared with the rest of the system.
///
/// Hosts backed by an asynchronous clipboard resolve the request before
/// returning.
pub trait Clipboard {
    fn get(&mut self) -> Result<String, ClipboardError>;
    fn set(&mut self, text: String) -> Result<(), ClipboardError>;
}
