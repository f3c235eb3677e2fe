//! System clipboard as a source of pasted codes (Ctrl+V).

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("clipboard holds no readable text: {0}")]
    Read(#[source] arboard::Error),
}

/// Lazily opened handle; the host keeps one for the whole session.
pub struct ClipboardSource {
    clipboard: Clipboard,
}

impl ClipboardSource {
    pub fn open() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { clipboard })
    }

    /// Clipboard text with trailing line breaks removed, ready for
    /// [`crate::pin::PinField::on_paste`].
    pub fn read_code(&mut self) -> Result<String, ClipboardError> {
        let text = self.clipboard.get_text().map_err(ClipboardError::Read)?;
        Ok(trim_line_breaks(&text).to_string())
    }
}

fn trim_line_breaks(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copied_line_breaks_are_trimmed() {
        assert_eq!(trim_line_breaks("1234\r\n"), "1234");
        assert_eq!(trim_line_breaks("1234\n\n"), "1234");
        assert_eq!(trim_line_breaks(" 12 "), " 12 ");
    }

    #[test]
    fn errors_name_the_failing_step() {
        let err = ClipboardError::Read(arboard::Error::ContentNotAvailable);
        assert!(err.to_string().starts_with("clipboard holds no readable text"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
