use crate::engine::Outcome;
use crate::error::ClipboardError;
use crate::traits::{Buffer, Clipboard};
use crate::types::Selection;

fn current_selection<B: Buffer + ?Sized>(buffer: &B) -> Selection {
    Selection {
        anchor: buffer.anchor(),
        head: buffer.cursor(),
    }
}

/// Copies the selected text. An empty selection leaves the clipboard alone.
///
/// The buffer is never changed before the clipboard side has succeeded.
pub fn copy<B, C>(buffer: &B, clipboard: &mut C) -> Result<Outcome, ClipboardError>
where
    B: Buffer + ?Sized,
    C: Clipboard + ?Sized,
{
    if current_selection(buffer).is_empty() {
        return Ok(Outcome::NoOp);
    }
    let text = buffer.selection_text();
    if text.is_empty() {
        return Ok(Outcome::NoOp);
    }
    clipboard.set(text)?;
    Ok(Outcome::Copied)
}

/// Copies the selected text, then removes it from the buffer.
///
/// If the clipboard write fails the selection is kept.
pub fn cut<B, C>(buffer: &mut B, clipboard: &mut C) -> Result<Outcome, ClipboardError>
where
    B: Buffer + ?Sized,
    C: Clipboard + ?Sized,
{
    match copy(&*buffer, clipboard)? {
        Outcome::Copied => {
            buffer.replace_selection("");
            Ok(Outcome::Edited)
        }
        other => Ok(other),
    }
}

/// Replaces the selection (or inserts at the cursor) with clipboard text.
pub fn paste<B, C>(buffer: &mut B, clipboard: &mut C) -> Result<Outcome, ClipboardError>
where
    B: Buffer + ?Sized,
    C: Clipboard + ?Sized,
{
    let text = clipboard.get()?;
    if text.is_empty() {
        return Ok(Outcome::NoOp);
    }
    buffer.replace_selection(&text);
    Ok(Outcome::Edited)
}

/// The operating system clipboard, via `arboard`.
///
/// The handle is opened on first use and kept afterwards; on X11 the owner
/// has to stay alive for other applications to paste what we copied.
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(cb);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("not initialized".to_string()))
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn get(&mut self) -> Result<String, ClipboardError> {
        let result = self.handle()?.get_text();
        read_text(result).inspect_err(|_| {
            // Drop the handle so the next call reconnects
            self.inner = None;
        })
    }

    fn set(&mut self, text: String) -> Result<(), ClipboardError> {
        let result = self.handle()?.set_text(text);
        result.map_err(|e| {
            // Drop the handle so the next call reconnects
            self.inner = None;
            ClipboardError::Write(e.to_string())
        })
    }
}

// An empty clipboard, or one holding only non-text content, has nothing to paste.
#[cfg(feature = "clipboard")]
fn read_text(result: Result<String, arboard::Error>) -> Result<String, ClipboardError> {
    match result {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(e) => Err(ClipboardError::Read(e.to_string())),
    }
}
