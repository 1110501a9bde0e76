//! Validators for [`SourceItem`] string fields.

use std::sync::Arc;

use super::entity::{EntityValidator, FieldSetValidator, ValidatorChain};
use super::field::{FieldAccessor, FieldValidator, UnsetFieldPolicy};
use super::result::{DefaultValidationResultFactory, ValidationResult, ValidationResultFactory};
use super::rules::{NoWhitespaceRule, Rule};
use crate::config::ValidationConfig;
use crate::error::CoreError;
use crate::types::SourceItem;

pub const SKU_FIELD: &str = "sku";
pub const SOURCE_CODE_FIELD: &str = "source_code";

/// Checks that one string field of a [`SourceItem`] is present and
/// contains no whitespace.
#[derive(Debug)]
pub struct StringFieldValidator {
    inner: FieldSetValidator<SourceItem>,
}

impl StringFieldValidator {
    /// Runs `not_empty` then `no_whitespace` against `field`. The field name
    /// doubles as the validator name.
    pub fn new(
        field: &str,
        accessor: FieldAccessor<SourceItem>,
        factory: Arc<dyn ValidationResultFactory>,
        not_empty: Arc<dyn Rule>,
        no_whitespace: Arc<dyn Rule>,
        unset_policy: UnsetFieldPolicy,
    ) -> Result<Self, CoreError> {
        let field_validator = FieldValidator::new(field, accessor)?
            .with_shared_rule(not_empty)
            .with_shared_rule(no_whitespace)
            .with_unset_policy(unset_policy);

        let inner = FieldSetValidator::builder(field, factory)
            .field(field_validator)
            .build()?;
        Ok(Self { inner })
    }

    pub fn sku(
        factory: Arc<dyn ValidationResultFactory>,
        not_empty: Arc<dyn Rule>,
        no_whitespace: Arc<dyn Rule>,
    ) -> Result<Self, CoreError> {
        Self::new(
            SKU_FIELD,
            SourceItem::sku,
            factory,
            not_empty,
            no_whitespace,
            UnsetFieldPolicy::default(),
        )
    }

    pub fn source_code(
        factory: Arc<dyn ValidationResultFactory>,
        not_empty: Arc<dyn Rule>,
        no_whitespace: Arc<dyn Rule>,
    ) -> Result<Self, CoreError> {
        Self::new(
            SOURCE_CODE_FIELD,
            SourceItem::source_code,
            factory,
            not_empty,
            no_whitespace,
            UnsetFieldPolicy::default(),
        )
    }

    pub fn sku_from_config(
        config: &ValidationConfig,
        factory: Arc<dyn ValidationResultFactory>,
    ) -> Result<Self, CoreError> {
        Self::from_config(SKU_FIELD, SourceItem::sku, config, factory)
    }

    pub fn source_code_from_config(
        config: &ValidationConfig,
        factory: Arc<dyn ValidationResultFactory>,
    ) -> Result<Self, CoreError> {
        Self::from_config(SOURCE_CODE_FIELD, SourceItem::source_code, config, factory)
    }

    fn from_config(
        field: &str,
        accessor: FieldAccessor<SourceItem>,
        config: &ValidationConfig,
        factory: Arc<dyn ValidationResultFactory>,
    ) -> Result<Self, CoreError> {
        Self::new(
            field,
            accessor,
            factory,
            Arc::new(config.not_empty_rule()),
            Arc::new(NoWhitespaceRule),
            config.unset_field_policy,
        )
    }

    pub fn field(&self) -> &str {
        self.inner.name()
    }
}

impl EntityValidator<SourceItem> for StringFieldValidator {
    fn validate(&self, entity: &SourceItem) -> ValidationResult {
        self.inner.validate(entity)
    }
}

/// SKU then source code validation, merged into one result.
pub fn source_item_validator_chain(
    config: &ValidationConfig,
    factory: Arc<dyn ValidationResultFactory>,
) -> Result<ValidatorChain<SourceItem>, CoreError> {
    let sku = StringFieldValidator::sku_from_config(config, factory.clone())?;
    let source_code = StringFieldValidator::source_code_from_config(config, factory.clone())?;
    let validators: Vec<Arc<dyn EntityValidator<SourceItem>>> =
        vec![Arc::new(sku), Arc::new(source_code)];
    ValidatorChain::new(validators, factory)
}

/// [`source_item_validator_chain`] with default policy and factory.
pub fn default_source_item_validator() -> Result<ValidatorChain<SourceItem>, CoreError> {
    source_item_validator_chain(
        &ValidationConfig::default(),
        Arc::new(DefaultValidationResultFactory),
    )
}
