use crate::host::HostOp;
use crate::motion::Motion;

bitflags::bitflags! {
    /// What running a command can do to the buffer and its surroundings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Effects: u8 {
        const MOVES_CURSOR = 0b0_0001;
        const SELECTS      = 0b0_0010;
        const EDITS_TEXT   = 0b0_0100;
        const CLIPBOARD    = 0b0_1000;
        const DELEGATED    = 0b1_0000;
    }
}

/// The work a command performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Run a built-in operation of the host.
    Host(HostOp),
    /// Move the cursor and collapse the selection.
    Move(Motion),
    /// Move the selection head, keeping the anchor.
    Extend(Motion),
    DeleteWordRight,
    DeleteCharRight,
    DeleteToLineStart,
    DeleteToLineEnd,
    InsertLineBelow,
    InsertLineAbove,
    SelectAll,
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
}

impl Action {
    pub fn effects(self) -> Effects {
        match self {
            Action::Host(_) | Action::Undo | Action::Redo => Effects::DELEGATED,
            Action::Move(_) => Effects::MOVES_CURSOR,
            Action::Extend(_) | Action::SelectAll => Effects::MOVES_CURSOR | Effects::SELECTS,
            Action::DeleteWordRight
            | Action::DeleteCharRight
            | Action::DeleteToLineStart
            | Action::DeleteToLineEnd
            | Action::InsertLineBelow
            | Action::InsertLineAbove => Effects::EDITS_TEXT | Effects::MOVES_CURSOR,
            Action::Copy => Effects::CLIPBOARD,
            Action::Cut | Action::Paste => Effects::CLIPBOARD | Effects::EDITS_TEXT,
        }
    }
}

/// Which commands an engine exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandSet {
    /// Every command, including line, clipboard and history commands.
    #[default]
    Full,
    /// Motion, selection, word/char deletion and host-delegated commands only.
    Core,
}

/// One registered command.
///
/// `id` and `name` are what users bind keys to; they never change once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Stable identifier, e.g. `go-word-left`.
    pub id: &'static str,
    /// Human-readable name shown by the host.
    pub name: &'static str,
    pub action: Action,
    /// Not part of [`CommandSet::Core`].
    pub extended: bool,
}

impl CommandSpec {
    pub fn effects(&self) -> Effects {
        self.action.effects()
    }

    pub fn in_set(&self, set: CommandSet) -> bool {
        match set {
            CommandSet::Full => true,
            CommandSet::Core => !self.extended,
        }
    }
}

const fn core(id: &'static str, name: &'static str, action: Action) -> CommandSpec {
    CommandSpec {
        id,
        name,
        action,
        extended: false,
    }
}

const fn ext(id: &'static str, name: &'static str, action: Action) -> CommandSpec {
    CommandSpec {
        id,
        name,
        action,
        extended: true,
    }
}

pub static COMMANDS: &[CommandSpec] = &[
    core("go-left", "go left", Action::Host(HostOp::GoLeft)),
    core("go-right", "go right", Action::Host(HostOp::GoRight)),
    core("go-up", "go up", Action::Host(HostOp::GoUp)),
    core("go-down", "go down", Action::Host(HostOp::GoDown)),
    core("go-word-left", "go word left", Action::Move(Motion::WordLeft)),
    core("go-word-right", "go word right", Action::Move(Motion::WordRight)),
    core("go-left-select", "go left with selection", Action::Extend(Motion::Left)),
    core("go-right-select", "go right with selection", Action::Extend(Motion::Right)),
    core("go-up-select", "go up with selection", Action::Extend(Motion::Up)),
    core("go-down-select", "go down with selection", Action::Extend(Motion::Down)),
    core(
        "go-word-left-select",
        "go word left with selection",
        Action::Extend(Motion::WordLeft),
    ),
    core(
        "go-word-right-select",
        "go word right with selection",
        Action::Extend(Motion::WordRight),
    ),
    core("delete-word-right", "delete word right", Action::DeleteWordRight),
    core("delete-char-right", "delete character right", Action::DeleteCharRight),
    core("go-start", "go to start", Action::Host(HostOp::GoStart)),
    core("go-end", "go to end", Action::Host(HostOp::GoEnd)),
    core("indent-more", "indent more", Action::Host(HostOp::IndentMore)),
    core("indent-less", "indent less", Action::Host(HostOp::IndentLess)),
    core("new-line-indent", "new line and indent", Action::Host(HostOp::NewlineAndIndent)),
    core("swap-line-up", "swap line up", Action::Host(HostOp::SwapLineUp)),
    core("swap-line-down", "swap line down", Action::Host(HostOp::SwapLineDown)),
    core("delete-line", "delete line", Action::Host(HostOp::DeleteLine)),
    core("toggle-fold", "toggle fold", Action::Host(HostOp::ToggleFold)),
    core("fold-all", "fold all", Action::Host(HostOp::FoldAll)),
    core("unfold-all", "unfold all", Action::Host(HostOp::UnfoldAll)),
    ext("go-line-start", "go to line start", Action::Move(Motion::LineStart)),
    ext("go-line-end", "go to line end", Action::Move(Motion::LineEnd)),
    ext(
        "go-line-start-select",
        "go to line start with selection",
        Action::Extend(Motion::LineStart),
    ),
    ext(
        "go-line-end-select",
        "go to line end with selection",
        Action::Extend(Motion::LineEnd),
    ),
    ext("delete-to-line-start", "delete to line start", Action::DeleteToLineStart),
    ext("delete-to-line-end", "delete to line end", Action::DeleteToLineEnd),
    ext("insert-line-below", "insert line below", Action::InsertLineBelow),
    ext("insert-line-above", "insert line above", Action::InsertLineAbove),
    ext("select-all", "select all", Action::SelectAll),
    ext("undo", "undo", Action::Undo),
    ext("redo", "redo", Action::Redo),
    ext("copy", "copy", Action::Copy),
    ext("cut", "cut", Action::Cut),
    ext("paste", "paste", Action::Paste),
];

/// Looks up a command in the full table.
///
/// Ignores [`CommandSet`]; use [`Engine::lookup`](crate::engine::Engine::lookup)
/// to respect the set an engine was built with.
pub fn find(id: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.id == id)
}
