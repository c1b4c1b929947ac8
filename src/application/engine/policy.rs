//! Payout policy knobs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// What happens to a pool that has stake but no eligible claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Move the stake into the pools that do have claims, in proportion to
    /// each recipient's own stake.
    #[default]
    Redistribute,
    /// Hand the stake back to the wagers that formed the pool.
    Refund,
}

impl DegeneratePolicy {
    /// Stable name used in logs and command output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Redistribute => "redistribute",
            Self::Refund => "refund",
        }
    }
}

/// Policy applied by the payout engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutPolicy {
    /// Handling of pools without eligible claims.
    pub degenerate: DegeneratePolicy,
    /// Rescale payouts so the total paid equals the total wagered.
    pub normalize: bool,
    /// Drift tolerated before rescaling kicks in.
    pub epsilon: Decimal,
}

impl Default for PayoutPolicy {
    fn default() -> Self {
        Self {
            degenerate: DegeneratePolicy::Redistribute,
            normalize: true,
            epsilon: dec!(0.000001),
        }
    }
}
