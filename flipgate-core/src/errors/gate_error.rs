//! Guardrail gate errors.

use crate::types::{ChangeOrderId, DealId};

use super::audit_error::AuditError;
use super::bid_error::BidError;
use super::error_code::{self, ErrorCode};
use super::estimate_error::EstimateError;
use super::simulation_error::SimulationError;
use super::storage_error::StorageError;

/// Errors that can occur during gate evaluation. A BLOCK/DENY decision
/// is a successful evaluation, not an error.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("deal not found: {0}")]
    DealNotFound(DealId),

    #[error("budget ledger not found for deal: {0}")]
    LedgerNotFound(DealId),

    #[error("change order not found: {0}")]
    ChangeOrderNotFound(ChangeOrderId),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Bid(#[from] BidError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Estimate(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
            Self::Bid(e) => e.error_code(),
            Self::Audit(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            _ => error_code::GATE_FAILED,
        }
    }
}
