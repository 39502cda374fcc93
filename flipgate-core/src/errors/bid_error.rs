//! Bid comparison errors.

use crate::types::DealId;

use super::error_code::{self, ErrorCode};
use super::storage_error::StorageError;

/// Errors that can occur while comparing bids.
#[derive(Debug, thiserror::Error)]
pub enum BidError {
    #[error("no comparable bids for deal: {0}")]
    NoBids(DealId),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ErrorCode for BidError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            _ => error_code::BID_ERROR,
        }
    }
}
