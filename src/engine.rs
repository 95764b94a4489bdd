use crate::commands::{Action, COMMANDS, CommandSet, CommandSpec};
use crate::edit;
use crate::error::CommandError;
use crate::host::HostOp;
use crate::motion::{self, Motion};
use crate::traits::{Buffer, Clipboard};
use crate::types::{Edit, Position, Selection};

/// What a command did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Cursor moved, selection collapsed.
    Moved(Position),
    /// Selection set to the given anchor and head.
    Selected(Selection),
    /// Buffer text changed.
    Edited,
    /// Selected text went to the clipboard.
    Copied,
    /// Handed to the host by name.
    Delegated(HostOp),
    Undo,
    Redo,
    /// Nothing to do (edge of line, empty selection, empty clipboard).
    NoOp,
}

/// Dispatches command identifiers to their actions.
///
/// The engine keeps no state between invocations; every call reads the
/// buffer afresh and writes its result back before returning.
#[derive(Debug, Clone)]
pub struct Engine {
    set: CommandSet,
    commands: Vec<&'static CommandSpec>,
}

pub struct EngineBuilder {
    set: CommandSet,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            set: CommandSet::Full,
        }
    }
}

impl EngineBuilder {
    pub fn command_set(mut self, set: CommandSet) -> Self {
        self.set = set;
        self
    }

    pub fn build(self) -> Engine {
        let commands = COMMANDS.iter().filter(|c| c.in_set(self.set)).collect();
        Engine {
            set: self.set,
            commands,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn command_set(&self) -> CommandSet {
        self.set
    }

    /// Commands to register with the host, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &'static CommandSpec> + '_ {
        self.commands.iter().copied()
    }

    pub fn lookup(&self, id: &str) -> Option<&'static CommandSpec> {
        self.commands.iter().copied().find(|c| c.id == id)
    }

    /// Runs the command registered under `id`.
    pub fn execute<B, C>(
        &self,
        id: &str,
        buffer: &mut B,
        clipboard: &mut C,
    ) -> Result<Outcome, CommandError>
    where
        B: Buffer + ?Sized,
        C: Clipboard + ?Sized,
    {
        let Some(spec) = self.lookup(id) else {
            tracing::debug!(id, "unknown command");
            return Err(CommandError::UnknownCommand(id.to_string()));
        };

        match Self::run(spec.action, buffer, clipboard) {
            Ok(outcome) => {
                tracing::debug!(id, ?outcome, "command executed");
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "command failed");
                Err(e)
            }
        }
    }

    /// Runs `action` directly, whatever command set this engine exposes.
    pub fn run<B, C>(
        action: Action,
        buffer: &mut B,
        clipboard: &mut C,
    ) -> Result<Outcome, CommandError>
    where
        B: Buffer + ?Sized,
        C: Clipboard + ?Sized,
    {
        let cursor = buffer.cursor();
        let outcome = match action {
            Action::Host(op) => {
                buffer.exec(op);
                Outcome::Delegated(op)
            }
            Action::Move(m) => move_to(buffer, m),
            Action::Extend(m) => {
                let current = Selection {
                    anchor: buffer.anchor(),
                    head: cursor,
                };
                let sel = motion::extend(&*buffer, current, m);
                buffer.set_selection(sel.anchor, sel.head);
                Outcome::Selected(sel)
            }
            Action::SelectAll => {
                let sel = motion::select_all(&*buffer);
                buffer.set_selection(sel.anchor, sel.head);
                Outcome::Selected(sel)
            }
            Action::DeleteWordRight => {
                let e = edit::delete_word_right(&*buffer, cursor);
                delete(buffer, e)
            }
            Action::DeleteCharRight => {
                let e = edit::delete_char_right(&*buffer, cursor);
                delete(buffer, e)
            }
            Action::DeleteToLineStart => {
                let e = edit::delete_to_line_start(&*buffer, cursor);
                delete(buffer, e)
            }
            Action::DeleteToLineEnd => {
                let e = edit::delete_to_line_end(&*buffer, cursor);
                delete(buffer, e)
            }
            Action::InsertLineBelow => {
                let (e, after) = edit::insert_line_below(&*buffer, cursor);
                apply(buffer, e, after)
            }
            Action::InsertLineAbove => {
                let (e, after) = edit::insert_line_above(&*buffer, cursor);
                apply(buffer, e, after)
            }
            Action::Undo => {
                buffer.undo();
                Outcome::Undo
            }
            Action::Redo => {
                buffer.redo();
                Outcome::Redo
            }
            Action::Copy => crate::clipboard::copy(&*buffer, clipboard)?,
            Action::Cut => crate::clipboard::cut(buffer, clipboard)?,
            Action::Paste => crate::clipboard::paste(buffer, clipboard)?,
        };
        Ok(outcome)
    }
}

fn move_to<B: Buffer + ?Sized>(buffer: &mut B, m: Motion) -> Outcome {
    let sel = motion::move_cursor(&*buffer, buffer.cursor(), m);
    buffer.set_cursor(sel.head);
    Outcome::Moved(sel.head)
}

fn delete<B: Buffer + ?Sized>(buffer: &mut B, edit: Option<Edit>) -> Outcome {
    match edit {
        Some(e) => {
            let at = e.range.start;
            apply(buffer, e, at)
        }
        None => Outcome::NoOp,
    }
}

fn apply<B: Buffer + ?Sized>(buffer: &mut B, edit: Edit, cursor: Position) -> Outcome {
    tracing::trace!(?edit, ?cursor, "applying edit");
    buffer.replace_range(&edit.text, edit.range.start, edit.range.end);
    buffer.set_cursor(cursor);
    Outcome::Edited
}
