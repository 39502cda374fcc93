//! Cost estimator errors.

use crate::types::DealId;

use super::error_code::{self, ErrorCode};
use super::storage_error::StorageError;

/// Errors that can occur while producing a cost estimate.
///
/// Missing cost-model rows are NOT errors: matching lines are skipped and
/// surfaced in the estimate metadata, so the caller can treat the result
/// as a lower bound.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("deal not found: {0}")]
    DealNotFound(DealId),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ErrorCode for EstimateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            _ => error_code::ESTIMATE_ERROR,
        }
    }
}
