//! Entity-level validators built from field validators.

use std::fmt;
use std::sync::Arc;

use super::field::FieldValidator;
use super::message::Message;
use super::result::{ValidationParams, ValidationResult, ValidationResultFactory};
use crate::error::CoreError;

/// Validates one entity and returns one aggregated result.
///
/// Implementations hold no per-call state, so a single instance can be
/// shared across threads and reused for every validation.
pub trait EntityValidator<E>: Send + Sync {
    fn validate(&self, entity: &E) -> ValidationResult;
}

impl<E, V: EntityValidator<E> + ?Sized> EntityValidator<E> for Arc<V> {
    fn validate(&self, entity: &E) -> ValidationResult {
        (**self).validate(entity)
    }
}

/// Runs a fixed list of [`FieldValidator`]s and hands their flattened
/// messages to the injected factory.
pub struct FieldSetValidator<E> {
    name: String,
    fields: Vec<FieldValidator<E>>,
    factory: Arc<dyn ValidationResultFactory>,
}

impl<E> fmt::Debug for FieldSetValidator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSetValidator")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl<E> FieldSetValidator<E> {
    pub fn builder(
        name: impl Into<String>,
        factory: Arc<dyn ValidationResultFactory>,
    ) -> FieldSetValidatorBuilder<E> {
        FieldSetValidatorBuilder {
            name: name.into(),
            fields: Vec::new(),
            factory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldValidator::field)
    }
}

impl<E> EntityValidator<E> for FieldSetValidator<E> {
    fn validate(&self, entity: &E) -> ValidationResult {
        let errors: Vec<Message> = self
            .fields
            .iter()
            .flat_map(|field| field.messages(entity))
            .collect();

        tracing::debug!(
            validator = %self.name,
            fields = self.fields.len(),
            error_count = errors.len(),
            "Entity validated"
        );

        self.factory.create(ValidationParams { errors })
    }
}

pub struct FieldSetValidatorBuilder<E> {
    name: String,
    fields: Vec<FieldValidator<E>>,
    factory: Arc<dyn ValidationResultFactory>,
}

impl<E> FieldSetValidatorBuilder<E> {
    pub fn field(mut self, validator: FieldValidator<E>) -> Self {
        self.fields.push(validator);
        self
    }

    /// Fails with [`CoreError::PreconditionFailed`] when no field was
    /// registered.
    pub fn build(self) -> Result<FieldSetValidator<E>, CoreError> {
        if self.fields.is_empty() {
            return Err(CoreError::PreconditionFailed(format!(
                "validator \"{}\" has no field validators",
                self.name
            )));
        }
        Ok(FieldSetValidator {
            name: self.name,
            fields: self.fields,
            factory: self.factory,
        })
    }
}

/// Runs several entity validators in order and merges every error into a
/// single result.
pub struct ValidatorChain<E> {
    validators: Vec<Arc<dyn EntityValidator<E>>>,
    factory: Arc<dyn ValidationResultFactory>,
}

impl<E> fmt::Debug for ValidatorChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl<E> ValidatorChain<E> {
    /// Fails with [`CoreError::PreconditionFailed`] for an empty chain.
    pub fn new(
        validators: Vec<Arc<dyn EntityValidator<E>>>,
        factory: Arc<dyn ValidationResultFactory>,
    ) -> Result<Self, CoreError> {
        if validators.is_empty() {
            return Err(CoreError::PreconditionFailed(
                "validator chain needs at least one validator".to_string(),
            ));
        }
        Ok(Self {
            validators,
            factory,
        })
    }

    /// Never zero: [`new`](Self::new) rejects an empty chain.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.validators.len()
    }
}

impl<E> EntityValidator<E> for ValidatorChain<E> {
    fn validate(&self, entity: &E) -> ValidationResult {
        let errors: Vec<Message> = self
            .validators
            .iter()
            .flat_map(|v| v.validate(entity).into_errors())
            .collect();

        tracing::debug!(
            validators = self.validators.len(),
            error_count = errors.len(),
            "Validator chain finished"
        );

        self.factory.create(ValidationParams { errors })
    }
}
