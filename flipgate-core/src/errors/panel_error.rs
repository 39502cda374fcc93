//! Read-side panel errors.

use crate::types::DealId;

use super::error_code::{self, ErrorCode};
use super::estimate_error::EstimateError;
use super::storage_error::StorageError;

/// Errors that can occur building a panel projection.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("deal not found: {0}")]
    DealNotFound(DealId),

    #[error("budget ledger not found for deal: {0}")]
    LedgerNotFound(DealId),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ErrorCode for PanelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Estimate(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            _ => error_code::PANEL_ERROR,
        }
    }
}
