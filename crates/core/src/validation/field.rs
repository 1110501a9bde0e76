//! Ordered rule composition for one field of an entity.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::message::Message;
use super::rules::Rule;
use crate::error::CoreError;

/// Reads one string field from an entity. `None` means the field is unset.
pub type FieldAccessor<E> = fn(&E) -> Option<&str>;

/// What to do when the accessor reports an unset field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnsetFieldPolicy {
    /// Run the rules against `""`.
    #[default]
    Empty,
    /// Run no rules; the field produces no messages.
    Skip,
}

/// Runs every registered rule against one field, in registration order.
///
/// All rules run even after one has failed, so callers see every problem
/// with the value at once.
pub struct FieldValidator<E> {
    field: String,
    accessor: FieldAccessor<E>,
    rules: Vec<Arc<dyn Rule>>,
    unset_policy: UnsetFieldPolicy,
}

impl<E> fmt::Debug for FieldValidator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("field", &self.field)
            .field("rules", &self.rules.len())
            .field("unset_policy", &self.unset_policy)
            .finish()
    }
}

impl<E> FieldValidator<E> {
    /// Fails with [`CoreError::InvalidArgument`] for a blank field name.
    pub fn new(field: impl Into<String>, accessor: FieldAccessor<E>) -> Result<Self, CoreError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "field name must not be blank".to_string(),
            ));
        }
        Ok(Self {
            field,
            accessor,
            rules: Vec::new(),
            unset_policy: UnsetFieldPolicy::default(),
        })
    }

    pub fn with_rule(self, rule: impl Rule + 'static) -> Self {
        self.with_shared_rule(Arc::new(rule))
    }

    pub fn with_shared_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_unset_policy(mut self, policy: UnsetFieldPolicy) -> Self {
        self.unset_policy = policy;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Collect the messages of every rule for this field of `entity`.
    pub fn messages(&self, entity: &E) -> Vec<Message> {
        let value = match ((self.accessor)(entity), self.unset_policy) {
            (Some(value), _) => value,
            (None, UnsetFieldPolicy::Empty) => "",
            (None, UnsetFieldPolicy::Skip) => {
                tracing::trace!(field = %self.field, "Field unset, skipping rules");
                return Vec::new();
            }
        };

        let mut messages = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            let produced = rule.execute(&self.field, value);
            tracing::trace!(
                field = %self.field,
                rule_index = index,
                produced = produced.len(),
                "Rule executed"
            );
            messages.extend(produced);
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::{NoWhitespaceRule, NotEmptyRule};
    use assert_matches::assert_matches;

    struct Named {
        name: Option<String>,
    }

    fn name_of(n: &Named) -> Option<&str> {
        n.name.as_deref()
    }

    fn named(name: Option<&str>) -> Named {
        Named {
            name: name.map(str::to_string),
        }
    }

    fn validator() -> FieldValidator<Named> {
        FieldValidator::new("name", name_of as FieldAccessor<Named>)
            .unwrap()
            .with_rule(NotEmptyRule::new())
            .with_rule(NoWhitespaceRule)
    }

    #[test]
    fn blank_field_name_is_rejected() {
        let result = FieldValidator::<Named>::new("  ", name_of);
        assert_matches!(result, Err(CoreError::InvalidArgument(_)));
    }

    #[test]
    fn clean_value_produces_nothing() {
        assert!(validator().messages(&named(Some("abc"))).is_empty());
    }

    #[test]
    fn all_rules_run_in_registration_order() {
        let messages = validator().messages(&named(Some("   ")));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].render(), "\"name\" cannot be empty.");
        assert_eq!(messages[1].render(), "\"name\" can not contain whitespaces.");
    }

    #[test]
    fn unset_value_is_treated_as_empty_by_default() {
        let messages = validator().messages(&named(None));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].render(), "\"name\" cannot be empty.");
    }

    #[test]
    fn unset_value_can_be_skipped() {
        let v = validator().with_unset_policy(UnsetFieldPolicy::Skip);
        assert!(v.messages(&named(None)).is_empty());
        assert_eq!(v.messages(&named(Some(""))).len(), 1);
    }

    #[test]
    fn debug_shows_field_and_rule_count() {
        let rendered = format!("{:?}", validator());
        assert_eq!(
            rendered,
            "FieldValidator { field: \"name\", rules: 2, unset_policy: Empty }"
        );
    }

    #[test]
    fn reports_field_and_rule_count() {
        let v = validator();
        assert_eq!(v.field(), "name");
        assert_eq!(v.rule_count(), 2);
    }
}
