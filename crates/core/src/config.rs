use crate::error::CoreError;
use crate::validation::field::UnsetFieldPolicy;
use crate::validation::rules::NotEmptyRule;

/// Validation policy loaded from environment variables.
///
/// Defaults match the behaviour of the stock validators, so an empty
/// environment yields [`ValidationConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// How rules see a field whose accessor returns nothing (default: `Empty`).
    pub unset_field_policy: UnsetFieldPolicy,
    /// Whether the not-empty rule trims before checking (default: `true`).
    pub trim_before_empty_check: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            unset_field_policy: UnsetFieldPolicy::Empty,
            trim_before_empty_check: true,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                              | Default |
    /// |--------------------------------------|---------|
    /// | `VALIDATION_UNSET_FIELD_POLICY`      | `empty` |
    /// | `VALIDATION_TRIM_BEFORE_EMPTY_CHECK` | `true`  |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let defaults = Self::default();

        let unset_field_policy = match lookup("VALIDATION_UNSET_FIELD_POLICY") {
            None => defaults.unset_field_policy,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "empty" => UnsetFieldPolicy::Empty,
                "skip" => UnsetFieldPolicy::Skip,
                other => {
                    tracing::warn!(value = %other, "Rejected VALIDATION_UNSET_FIELD_POLICY");
                    return Err(CoreError::Config(format!(
                        "VALIDATION_UNSET_FIELD_POLICY must be \"empty\" or \"skip\", got \"{other}\""
                    )));
                }
            },
        };

        let trim_before_empty_check = match lookup("VALIDATION_TRIM_BEFORE_EMPTY_CHECK") {
            None => defaults.trim_before_empty_check,
            Some(raw) => raw.trim().parse::<bool>().map_err(|_| {
                tracing::warn!(value = %raw, "Rejected VALIDATION_TRIM_BEFORE_EMPTY_CHECK");
                CoreError::Config(format!(
                    "VALIDATION_TRIM_BEFORE_EMPTY_CHECK must be \"true\" or \"false\", got \"{raw}\""
                ))
            })?,
        };

        Ok(Self {
            unset_field_policy,
            trim_before_empty_check,
        })
    }

    pub fn not_empty_rule(&self) -> NotEmptyRule {
        NotEmptyRule::with_trim(self.trim_before_empty_check)
    }
}
