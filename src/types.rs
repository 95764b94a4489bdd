/// A position within a text buffer.
///
/// Positions are zero-indexed and column values are counted in `char`s
/// (Unicode scalar values), not bytes or grapheme clusters. Hosts whose
/// editors address columns in UTF-16 code units convert at the
/// [`Buffer`](crate::traits::Buffer) boundary; for text without
/// supplementary-plane characters the two agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column position in chars.
    pub col: u32,
}

impl Position {
    /// The origin position (0, 0).
    pub const ZERO: Position = Position { line: 0, col: 0 };

    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// A range of text defined by start and end positions.
///
/// Ranges are half-open intervals [start, end), meaning the start position
/// is included but the end position is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The start position (inclusive).
    pub start: Position,
    /// The end position (exclusive).
    pub end: Position,
}

impl Range {
    /// Builds a range from two positions in either order.
    pub fn ordered(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns true if the range covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A text selection.
///
/// The anchor stays put while the head follows the cursor. An empty
/// selection (anchor == head) is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The fixed end of the selection.
    pub anchor: Position,
    /// The moving end of the selection; coincides with the cursor.
    pub head: Position,
}

impl Selection {
    /// A selection collapsed to a single cursor position.
    pub const fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The covered text range in document order.
    pub fn range(&self) -> Range {
        Range::ordered(self.anchor, self.head)
    }
}

/// A request to replace the text inside `range` with `text`.
///
/// Edits are computed by the engine and applied by the host through
/// [`Buffer::replace_range`](crate::traits::Buffer::replace_range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The replaced range, start <= end in document order.
    pub range: Range,
    /// Replacement text; empty for pure deletions.
    pub text: String,
}

impl Edit {
    pub fn delete(range: Range) -> Self {
        Self {
            range,
            text: String::new(),
        }
    }

    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            range: Range { start: at, end: at },
            text: text.into(),
        }
    }

    /// An edit that would not change the buffer.
    pub fn is_noop(&self) -> bool {
        self.range.is_empty() && self.text.is_empty()
    }
}
