use edit_remap::error::ClipboardError;
use edit_remap::traits::Clipboard;

#[derive(Default, Debug, Clone)]
pub struct MockClipboard {
    content: Option<String>,
    failing: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            content: Some(text.to_string()),
            failing: false,
        }
    }

    /// A clipboard whose every read and write fails.
    pub fn failing() -> Self {
        Self {
            content: None,
            failing: true,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Clipboard for MockClipboard {
    fn get(&mut self) -> Result<String, ClipboardError> {
        if self.failing {
            return Err(ClipboardError::Unavailable("mock clipboard offline".to_string()));
        }
        Ok(self.content.clone().unwrap_or_default())
    }

    fn set(&mut self, text: String) -> Result<(), ClipboardError> {
        if self.failing {
            return Err(ClipboardError::Write("mock clipboard offline".to_string()));
        }
        self.content = Some(text);
        Ok(())
    }
}
