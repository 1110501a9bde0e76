//! Inventory domain logic: source item entities and field validation.

pub mod config;
pub mod error;
pub mod types;
pub mod validation;
