/// Plain text pulled out of a request, guaranteed non-empty and clipped to a
/// character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub const MAX_CHARS: usize = 10_000;

    /// Returns `None` when `text` is empty.
    pub fn new(text: String, max_chars: usize) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Some(Self(truncate_chars(text, max_chars)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_idx);
    }
    text
}
