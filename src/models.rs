// models.rs - Testlet item types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core_types::ItemId;

/// Item category
///
/// Pretest items are field-tested and never scored; they are the only items
/// eligible for the out-of-order prefix. Operational items count toward the
/// score and always land in the shuffled remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Pretest,
    Operational,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Pretest => write!(f, "pretest"),
            ItemType::Operational => write!(f, "operational"),
        }
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretest" => Ok(ItemType::Pretest),
            "operational" => Ok(ItemType::Operational),
            _ => Err(format!("Invalid item type: {}", s)),
        }
    }
}

/// A single test item
///
/// Immutable once built: fields are private and only readable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    item_id: ItemId,
    item_type: ItemType,
}

impl Item {
    pub fn new(item_id: impl Into<ItemId>, item_type: ItemType) -> Self {
        Self {
            item_id: item_id.into(),
            item_type,
        }
    }

    /// Shorthand for a pretest item
    pub fn pretest(item_id: impl Into<ItemId>) -> Self {
        Self::new(item_id, ItemType::Pretest)
    }

    /// Shorthand for an operational item
    pub fn operational(item_id: impl Into<ItemId>) -> Self {
        Self::new(item_id, ItemType::Operational)
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.item_id
    }

    #[inline]
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    #[inline]
    pub fn is_pretest(&self) -> bool {
        self.item_type == ItemType::Pretest
    }
}
