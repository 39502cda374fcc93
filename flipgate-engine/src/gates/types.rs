//! Core types for the guardrail gates.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use flipgate_core::types::EventId;

/// The four guardrail gate identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GateId {
    /// G1 — deal approval against the p80 exposure ceiling.
    MaxExposure,
    /// G2 — bid submission against the acceptable vendor spread.
    BidSpread,
    /// G3 — invoice/actuals update against budget variance tiers.
    BudgetVariance,
    /// G4 — change-order proposal against exposure and ROI.
    ChangeOrder,
}

impl GateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxExposure => "max-exposure",
            Self::BidSpread => "bid-spread",
            Self::BudgetVariance => "budget-variance",
            Self::ChangeOrder => "change-order",
        }
    }

    /// The actor string every decision by this gate is recorded under.
    pub fn actor(&self) -> &'static str {
        match self {
            Self::MaxExposure => "system:G1",
            Self::BidSpread => "system:G2",
            Self::BudgetVariance => "system:G3",
            Self::ChangeOrder => "system:G4",
        }
    }

    /// The artifact kind this gate decides on.
    pub fn artifact(&self) -> &'static str {
        match self {
            Self::MaxExposure => "deal",
            Self::BidSpread => "bid",
            Self::BudgetVariance => "ledger",
            Self::ChangeOrder => "change_order",
        }
    }

    pub fn all() -> &'static [GateId] {
        &[
            Self::MaxExposure,
            Self::BidSpread,
            Self::BudgetVariance,
            Self::ChangeOrder,
        ]
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every action a gate can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateAction {
    Approve,
    Block,
    Award,
    Ok,
    FreezeTier1,
    EscalateTier2,
    ApproveCo,
    Deny,
}

impl GateAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::Block => "BLOCK",
            Self::Award => "AWARD",
            Self::Ok => "OK",
            Self::FreezeTier1 => "FREEZE_TIER1",
            Self::EscalateTier2 => "ESCALATE_TIER2",
            Self::ApproveCo => "APPROVE_CO",
            Self::Deny => "DENY",
        }
    }

    /// Actions that count as a milestone-passing decision.
    pub fn is_passing(&self) -> bool {
        matches!(self, Self::Approve | Self::Award | Self::Ok | Self::ApproveCo)
    }

    /// Actions that indicate a blocked pipeline (bottleneck detection).
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Block | Self::EscalateTier2 | Self::Deny)
    }

    /// Parse an action string as recorded on an audit event.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "APPROVE" => Some(Self::Approve),
            "BLOCK" => Some(Self::Block),
            "AWARD" => Some(Self::Award),
            "OK" => Some(Self::Ok),
            "FREEZE_TIER1" => Some(Self::FreezeTier1),
            "ESCALATE_TIER2" => Some(Self::EscalateTier2),
            "APPROVE_CO" => Some(Self::ApproveCo),
            "DENY" => Some(Self::Deny),
            _ => None,
        }
    }
}

impl fmt::Display for GateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one gate evaluation: the decision, the numeric
/// justification recorded with it, and the audit event it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateOutcome {
    pub gate: GateId,
    pub action: GateAction,
    /// Numeric justification, as written to the event. This is the only
    /// channel downstream monitoring and panels learn WHY from.
    pub payload: Value,
    pub event_id: EventId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actors_number_g1_through_g4() {
        let actors: Vec<&str> = GateId::all().iter().map(|g| g.actor()).collect();
        assert_eq!(actors, vec!["system:G1", "system:G2", "system:G3", "system:G4"]);
    }

    #[test]
    fn action_strings_round_trip() {
        for action in [
            GateAction::Approve,
            GateAction::Block,
            GateAction::Award,
            GateAction::Ok,
            GateAction::FreezeTier1,
            GateAction::EscalateTier2,
            GateAction::ApproveCo,
            GateAction::Deny,
        ] {
            assert_eq!(GateAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(GateAction::parse("NOPE"), None);
    }

    #[test]
    fn freeze_is_neither_passing_nor_blocking() {
        assert!(!GateAction::FreezeTier1.is_passing());
        assert!(!GateAction::FreezeTier1.is_blocking());
    }
}
