use thiserror::Error;

use crate::core::models::loops::LoopSpecError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConformationError {
    #[error("Invalid loop specification: {source}")]
    InvalidLoopSpecification {
        #[from]
        source: LoopSpecError,
    },

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
