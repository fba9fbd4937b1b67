use crate::{codes, ErrorMessage, Memo};

/// Length bounds for memo fields, counted in Unicode code points.
///
/// The error messages are rendered from these same values, so changing a
/// bound also changes what the client is told.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoLimits {
    pub title_max_chars: usize,
    pub body_max_chars: usize,
}

impl MemoLimits {
    pub const TITLE_MAX_CHARS: usize = 30;
    pub const BODY_MAX_CHARS: usize = 100;

    pub fn with_body_max_chars(body_max_chars: usize) -> Self {
        Self {
            body_max_chars,
            ..Self::default()
        }
    }
}

impl Default for MemoLimits {
    fn default() -> Self {
        Self {
            title_max_chars: Self::TITLE_MAX_CHARS,
            body_max_chars: Self::BODY_MAX_CHARS,
        }
    }
}

impl Memo {
    /// Checks field lengths. Every failing rule contributes one message; an
    /// empty vector means the memo is acceptable.
    pub fn validate(&self, limits: &MemoLimits) -> Vec<ErrorMessage> {
        let mut errors = Vec::new();

        let title_len = self.title.chars().count();
        if title_len < 1 || title_len > limits.title_max_chars {
            errors.push(ErrorMessage::new(
                codes::INVALID_TITLE,
                format!(
                    "タイトルの文字数は1文字以上{}文字以下にしてください",
                    limits.title_max_chars
                ),
            ));
            log::warn!(
                "title length is invalid, title = {}, length = {}",
                self.title,
                title_len
            );
        }

        let body_len = self.body.chars().count();
        if body_len < 1 || body_len > limits.body_max_chars {
            errors.push(ErrorMessage::new(
                codes::INVALID_BODY,
                format!(
                    "本文の文字数は1文字以上{}文字以下にしてください",
                    limits.body_max_chars
                ),
            ));
            log::warn!(
                "body length is invalid, body = {}, length = {}",
                self.body,
                body_len
            );
        }

        errors
    }
}
