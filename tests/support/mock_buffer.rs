use std::borrow::Cow;

use edit_remap::host::HostOp;
use edit_remap::traits::{Buffer, TextOps};
use edit_remap::types::Position;
use ropey::Rope;

#[derive(Clone)]
struct Snapshot {
    rope: Rope,
    cursor: Position,
    anchor: Position,
}

/// Rope-backed stand-in for a host editor.
pub struct MockBuffer {
    rope: Rope,
    cursor: Position,
    anchor: Position,
    executed: Vec<HostOp>,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl MockBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Position::ZERO,
            anchor: Position::ZERO,
            executed: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn with_cursor(text: &str, pos: Position) -> Self {
        let mut buf = Self::new(text);
        buf.set_cursor(pos);
        buf
    }

    pub fn with_selection(text: &str, anchor: Position, head: Position) -> Self {
        let mut buf = Self::new(text);
        buf.set_selection(anchor, head);
        buf
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn executed(&self) -> &[HostOp] {
        &self.executed
    }

    fn char_idx(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.rope.line_to_char(pos.line as usize) + pos.col as usize
    }

    fn position(&self, idx: usize) -> Position {
        let line = self.rope.char_to_line(idx);
        let col = idx - self.rope.line_to_char(line);
        Position {
            line: line as u32,
            col: col as u32,
        }
    }

    fn checkpoint(&mut self) {
        self.undo_stack.push(self.snapshot());
        self.redo_stack.clear();
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            rope: self.rope.clone(),
            cursor: self.cursor,
            anchor: self.anchor,
        }
    }

    fn restore(&mut self, snap: Snapshot) {
        self.rope = snap.rope;
        self.cursor = snap.cursor;
        self.anchor = snap.anchor;
    }

    fn splice(&mut self, start: usize, end: usize, text: &str) {
        self.rope.remove(start..end);
        self.rope.insert(start, text);
    }
}

impl TextOps for MockBuffer {
    fn line_count(&self) -> u32 {
        self.rope.len_lines() as u32
    }

    fn line(&self, line: u32) -> Cow<'_, str> {
        if line as usize >= self.rope.len_lines() {
            return Cow::Borrowed("");
        }
        let mut s = self.rope.line(line as usize).to_string();
        // Remove trailing newline if present
        if s.ends_with('\n') {
            s.pop();
        }
        Cow::Owned(s)
    }
}

impl Buffer for MockBuffer {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn anchor(&self) -> Position {
        self.anchor
    }

    fn set_cursor(&mut self, pos: Position) {
        let pos = self.clamp(pos);
        self.cursor = pos;
        self.anchor = pos;
    }

    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.anchor = self.clamp(anchor);
        self.cursor = self.clamp(head);
    }

    fn selection_text(&self) -> String {
        let a = self.char_idx(self.anchor);
        let b = self.char_idx(self.cursor);
        self.rope.slice(a.min(b)..a.max(b)).to_string()
    }

    fn replace_selection(&mut self, text: &str) {
        self.checkpoint();
        let a = self.char_idx(self.anchor);
        let b = self.char_idx(self.cursor);
        let start = a.min(b);
        self.splice(start, a.max(b), text);
        let after = self.position(start + text.chars().count());
        self.cursor = after;
        self.anchor = after;
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        self.checkpoint();
        let a = self.char_idx(from);
        let b = self.char_idx(to);
        let (start, end) = (a.min(b), a.max(b));
        let inserted = text.chars().count();

        // Map an offset in the old text onto the new text
        let map = |idx: usize| {
            if idx <= start {
                idx
            } else if idx >= end {
                idx - (end - start) + inserted
            } else {
                start
            }
        };
        let cursor = map(self.char_idx(self.cursor));
        let anchor = map(self.char_idx(self.anchor));

        self.splice(start, end, text);
        self.cursor = self.position(cursor);
        self.anchor = self.position(anchor);
    }

    fn exec(&mut self, op: HostOp) {
        self.executed.push(op);
    }

    fn undo(&mut self) {
        if let Some(snap) = self.undo_stack.pop() {
            self.redo_stack.push(self.snapshot());
            self.restore(snap);
        }
    }

    fn redo(&mut self) {
        if let Some(snap) = self.redo_stack.pop() {
            self.undo_stack.push(self.snapshot());
            self.restore(snap);
        }
    }
}
