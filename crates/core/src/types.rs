//! Inventory source item entity.

use serde::{Deserialize, Serialize};

/// Stock status of an item at a given source.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceItemStatus {
    #[default]
    OutOfStock = 0,
    InStock = 1,
}

/// Quantity of one product (by SKU) held at one inventory source.
///
/// Validators only read through the accessor methods; they never mutate
/// the item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceItem {
    pub sku: Option<String>,
    pub source_code: Option<String>,
    pub quantity: f64,
    pub status: SourceItemStatus,
}

impl SourceItem {
    pub fn new(sku: impl Into<String>, source_code: impl Into<String>) -> Self {
        Self {
            sku: Some(sku.into()),
            source_code: Some(source_code.into()),
            ..Self::default()
        }
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn source_code(&self) -> Option<&str> {
        self.source_code.as_deref()
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn status(&self) -> SourceItemStatus {
        self.status
    }
}
