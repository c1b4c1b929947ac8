//! Payout policy configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::engine::{DegeneratePolicy, PayoutPolicy};

/// Payout policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutConfig {
    /// What to do with a pool that has stake but no eligible claims.
    #[serde(default)]
    pub degenerate_pool: DegeneratePolicy,
    /// Rescale payouts so the total paid equals the total wagered.
    #[serde(default = "default_normalize")]
    pub normalize: bool,
    /// Drift tolerated before rescaling.
    #[serde(default = "default_epsilon")]
    pub epsilon: Decimal,
}

const fn default_normalize() -> bool {
    true
}

fn default_epsilon() -> Decimal {
    PayoutPolicy::default().epsilon
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            degenerate_pool: DegeneratePolicy::default(),
            normalize: default_normalize(),
            epsilon: default_epsilon(),
        }
    }
}

impl From<PayoutConfig> for PayoutPolicy {
    fn from(config: PayoutConfig) -> Self {
        Self {
            degenerate: config.degenerate_pool,
            normalize: config.normalize,
            epsilon: config.epsilon,
        }
    }
}
