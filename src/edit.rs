use crate::traits::TextOps;
use crate::types::{Edit, Position, Range};
use crate::word::scan_word_right;

fn non_empty(edit: Edit) -> Option<Edit> {
    (!edit.is_noop()).then_some(edit)
}

/// Deletes from the cursor to where a right word scan stops.
pub fn delete_word_right<T: TextOps + ?Sized>(text: &T, pos: Position) -> Option<Edit> {
    let pos = text.clamp(pos);
    let end = scan_word_right(&text.line(pos.line), pos.col);
    non_empty(Edit::delete(Range {
        start: pos,
        end: Position::new(pos.line, end),
    }))
}

/// Deletes the character after the cursor.
///
/// At the end of a line the line break is removed instead, joining the next
/// line onto this one. At the end of the document nothing happens.
pub fn delete_char_right<T: TextOps + ?Sized>(text: &T, pos: Position) -> Option<Edit> {
    let pos = text.clamp(pos);
    let end = if pos.col < text.line_len(pos.line) {
        Position::new(pos.line, pos.col + 1)
    } else if pos.line < text.last_line() {
        Position::new(pos.line + 1, 0)
    } else {
        return None;
    };
    Some(Edit::delete(Range { start: pos, end }))
}

pub fn delete_to_line_start<T: TextOps + ?Sized>(text: &T, pos: Position) -> Option<Edit> {
    let pos = text.clamp(pos);
    non_empty(Edit::delete(Range {
        start: Position::new(pos.line, 0),
        end: pos,
    }))
}

pub fn delete_to_line_end<T: TextOps + ?Sized>(text: &T, pos: Position) -> Option<Edit> {
    let pos = text.clamp(pos);
    non_empty(Edit::delete(Range {
        start: pos,
        end: Position::new(pos.line, text.line_len(pos.line)),
    }))
}

/// Opens an empty line below the cursor's line.
///
/// Returns the edit and the cursor position on the new line.
pub fn insert_line_below<T: TextOps + ?Sized>(text: &T, pos: Position) -> (Edit, Position) {
    let line = text.clamp(pos).line;
    let eol = Position::new(line, text.line_len(line));
    (Edit::insert(eol, "\n"), Position::new(line + 1, 0))
}

/// Opens an empty line above the cursor's line.
///
/// The new empty line takes the cursor's line index and the original
/// content moves down by one; the cursor stays at the start of the new line.
pub fn insert_line_above<T: TextOps + ?Sized>(text: &T, pos: Position) -> (Edit, Position) {
    let start = Position::new(text.clamp(pos).line, 0);
    (Edit::insert(start, "\n"), start)
}
