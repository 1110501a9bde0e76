//! Single-field validation rules.

use std::sync::Arc;

use super::message::Message;

pub const NOT_EMPTY_TEMPLATE: &str = "\"%field\" cannot be empty.";
pub const NO_WHITESPACE_TEMPLATE: &str = "\"%field\" can not contain whitespaces.";

/// A stateless check over one field value.
///
/// Failures are returned as messages, never as errors. An empty vector
/// means the value passed.
pub trait Rule: Send + Sync {
    fn execute(&self, field: &str, value: &str) -> Vec<Message>;
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn execute(&self, field: &str, value: &str) -> Vec<Message> {
        (**self).execute(field, value)
    }
}

/// Rejects empty values.
///
/// With `trim` enabled (the default) a value made only of whitespace also
/// counts as empty.
#[derive(Debug, Clone, Copy)]
pub struct NotEmptyRule {
    trim: bool,
}

impl NotEmptyRule {
    pub fn new() -> Self {
        Self { trim: true }
    }

    /// Check the raw length without trimming first.
    pub fn untrimmed() -> Self {
        Self { trim: false }
    }

    pub fn with_trim(trim: bool) -> Self {
        Self { trim }
    }
}

impl Default for NotEmptyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NotEmptyRule {
    fn execute(&self, field: &str, value: &str) -> Vec<Message> {
        let checked = if self.trim { value.trim() } else { value };
        if checked.is_empty() {
            vec![Message::new(NOT_EMPTY_TEMPLATE).with_param("field", field)]
        } else {
            Vec::new()
        }
    }
}

/// Rejects values containing any Unicode whitespace, wherever it occurs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWhitespaceRule;

impl Rule for NoWhitespaceRule {
    fn execute(&self, field: &str, value: &str) -> Vec<Message> {
        if value.chars().any(char::is_whitespace) {
            vec![Message::new(NO_WHITESPACE_TEMPLATE).with_param("field", field)]
        } else {
            Vec::new()
        }
    }
}
