use crate::traits::TextOps;
use crate::types::{Position, Selection};
use crate::word::{scan_word_left, scan_word_right};

/// A directional rule that computes a new head position from an old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    WordLeft,
    WordRight,
    LineStart,
    LineEnd,
    DocStart,
    DocEnd,
}

impl Motion {
    pub fn apply<T: TextOps + ?Sized>(self, text: &T, pos: Position) -> Position {
        match self {
            Motion::Left => move_left(text, pos),
            Motion::Right => move_right(text, pos),
            Motion::Up => move_up(text, pos),
            Motion::Down => move_down(text, pos),
            Motion::WordLeft => word_left(text, pos),
            Motion::WordRight => word_right(text, pos),
            Motion::LineStart => line_start(text, pos),
            Motion::LineEnd => line_end(text, pos),
            Motion::DocStart => doc_start(),
            Motion::DocEnd => doc_end(text),
        }
    }
}

pub fn move_left<T: TextOps + ?Sized>(text: &T, pos: Position) -> Position {
    let pos = text.clamp(pos);
    Position::new(pos.line, pos.col.saturating_sub(1))
}

pub fn move_right<T: TextOps + ?Sized>(text: &T, pos: Position) -> Position {
    let pos = text.clamp(pos);
    let max = text.line_len(pos.line);
    Position::new(pos.line, (pos.col + 1).min(max))
}

// No virtual column: the column only survives as far as the target line allows.
pub fn move_up<T: TextOps + ?Sized>(text: &T, pos: Position) -> Position {
    let pos = text.clamp(pos);
    text.clamp(Position::new(pos.line.saturating_sub(1), pos.col))
}

pub fn move_down<T: TextOps + ?Sized>(text: &T, pos: Position) -> Position {
    let pos = text.clamp(pos);
    text.clamp(Position::new(pos.line.saturating_add(1), pos.col))
}

pub fn word_left<T: TextOps + ?Sized>(text: &T, pos: Position) -> Position {
    let pos = text.clamp(pos);
    Position::new(pos.line, scan_word_left(&text.line(pos.line), pos.col))
}

pub fn word_right<T: TextOps + ?Sized>(text: &T, pos: Position) -> Position {
    let pos = text.clamp(pos);
    Position::new(pos.line, scan_word_right(&text.line(pos.line), pos.col))
}

pub fn line_start<T: TextOps + ?Sized>(text: &T, pos: Position) -> Position {
    Position::new(text.clamp(pos).line, 0)
}

pub fn line_end<T: TextOps + ?Sized>(text: &T, pos: Position) -> Position {
    let line = text.clamp(pos).line;
    Position::new(line, text.line_len(line))
}

pub fn doc_start() -> Position {
    Position::ZERO
}

pub fn doc_end<T: TextOps + ?Sized>(text: &T) -> Position {
    let line = text.last_line();
    Position::new(line, text.line_len(line))
}

/// Moves the cursor, collapsing any selection onto the new position.
pub fn move_cursor<T: TextOps + ?Sized>(text: &T, head: Position, motion: Motion) -> Selection {
    Selection::collapsed(motion.apply(text, head))
}

/// Moves the head of `current` and keeps its anchor.
///
/// When nothing was selected the anchor equals the old cursor, so the
/// position before the motion becomes the anchor. An anchor outside the
/// buffer is clamped like any other input.
pub fn extend<T: TextOps + ?Sized>(text: &T, current: Selection, motion: Motion) -> Selection {
    Selection {
        anchor: text.clamp(current.anchor),
        head: motion.apply(text, current.head),
    }
}

/// Selects the whole document.
pub fn select_all<T: TextOps + ?Sized>(text: &T) -> Selection {
    Selection {
        anchor: doc_start(),
        head: doc_end(text),
    }
}
