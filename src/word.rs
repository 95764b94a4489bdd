/// Whitespace classification used for word boundaries.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Column reached by scanning left from `col` in `line`.
///
/// Skips whitespace, then the word before it. Never leaves the line.
///
/// Columns past the end of the line are clamped first. Column 0 is returned
/// unchanged.
pub fn scan_word_left(line: &str, col: u32) -> u32 {
    let chars: Vec<char> = line.chars().collect();
    let mut i = (col as usize).min(chars.len());

    while i > 0 && is_space(chars[i - 1]) {
        i -= 1;
    }
    while i > 0 && !is_space(chars[i - 1]) {
        i -= 1;
    }
    i as u32
}

/// Column reached by scanning right from `col` in `line`.
///
/// Skips the rest of the current word, then the whitespace after it, so it
/// is not the mirror image of [`scan_word_left`].
///
/// Columns at or past the end of the line return the line length.
pub fn scan_word_right(line: &str, col: u32) -> u32 {
    let chars: Vec<char> = line.chars().collect();
    let mut i = (col as usize).min(chars.len());

    while i < chars.len() && !is_space(chars[i]) {
        i += 1;
    }
    while i < chars.len() && is_space(chars[i]) {
        i += 1;
    }
    i as u32
}
