//! Validation results and the factory that builds them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::Message;
use crate::error::CoreError;

/// Immutable outcome of one validation call.
///
/// There is no separate validity flag: a result is valid exactly when it
/// holds no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<Message>,
}

impl ValidationResult {
    pub fn new(errors: Vec<Message>) -> Self {
        Self { errors }
    }

    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in the order the rules produced them.
    pub fn errors(&self) -> &[Message] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<Message> {
        self.errors
    }
}

/// Input to [`ValidationResultFactory::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationParams {
    pub errors: Vec<Message>,
}

impl From<Vec<Message>> for ValidationParams {
    fn from(errors: Vec<Message>) -> Self {
        Self { errors }
    }
}

/// Builds [`ValidationResult`]s. Injected into validators so tests can
/// observe or replace result construction.
pub trait ValidationResultFactory: Send + Sync {
    fn create(&self, params: ValidationParams) -> ValidationResult;

    /// Build a result from an untyped `{ "errors": [...] }` mapping.
    ///
    /// Each error is either a bare template string or an object with
    /// `template` and optional `params`. Anything else is a caller bug and
    /// yields [`CoreError::InvalidArgument`].
    fn create_from_value(&self, value: &Value) -> Result<ValidationResult, CoreError> {
        let errors = value
            .get("errors")
            .ok_or_else(|| CoreError::InvalidArgument("missing \"errors\" key".to_string()))?;

        if !errors.is_array() {
            return Err(CoreError::InvalidArgument(format!(
                "\"errors\" must be an array, got {errors}"
            )));
        }

        let errors: Vec<Message> = serde_json::from_value(errors.clone())
            .map_err(|e| CoreError::InvalidArgument(format!("malformed error message: {e}")))?;

        Ok(self.create(ValidationParams { errors }))
    }
}

/// Stores the given errors unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidationResultFactory;

impl ValidationResultFactory for DefaultValidationResultFactory {
    fn create(&self, params: ValidationParams) -> ValidationResult {
        ValidationResult::new(params.errors)
    }
}
