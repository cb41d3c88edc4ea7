//! Testlet Error Types
//!
//! Every variant is a permanent configuration error raised at construction.
//! Nothing here is retryable.

use thiserror::Error;

use crate::models::ItemType;

/// Testlet construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TestletError {
    #[error("Value cannot be null (items)")]
    NullInput,

    #[error(
        "Count of {item_type} items not equal COUNT_{}: expected {expected}, got {actual}",
        .item_type.to_string().to_uppercase()
    )]
    InvalidComposition {
        item_type: ItemType,
        expected: usize,
        actual: usize,
    },

    #[error("ItemIds not unique: '{0}'")]
    DuplicateIdentifier(String),
}

impl TestletError {
    /// Stable error code for callers that branch on the failure kind
    pub fn code(&self) -> &'static str {
        match self {
            TestletError::NullInput => "NULL_INPUT",
            TestletError::InvalidComposition { .. } => "INVALID_COMPOSITION",
            TestletError::DuplicateIdentifier(_) => "DUPLICATE_IDENTIFIER",
        }
    }
}
