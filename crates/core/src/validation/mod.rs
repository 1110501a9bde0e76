//! Field validation pipeline.
//!
//! Rules check a single value, field validators run an ordered set of
//! rules against one entity field, and entity validators aggregate every
//! field into one [`ValidationResult`](result::ValidationResult). Business
//! rule violations are reported as messages inside the result; only misuse
//! of the API surfaces as a [`CoreError`](crate::error::CoreError).

pub mod entity;
pub mod field;
pub mod message;
pub mod result;
pub mod rules;
pub mod source_item;
