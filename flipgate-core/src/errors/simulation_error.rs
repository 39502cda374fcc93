//! Change-order simulator errors.

use crate::types::DealId;

use super::error_code::{self, ErrorCode};
use super::storage_error::StorageError;

/// Errors that can occur while simulating a change order.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("deal not found: {0}")]
    DealNotFound(DealId),

    #[error("budget ledger not found for deal: {0}")]
    LedgerNotFound(DealId),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            _ => error_code::SIMULATION_ERROR,
        }
    }
}
