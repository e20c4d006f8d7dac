use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of one commission computation. Never rounded; display layers
/// round for presentation. `total` clamps at the `Decimal` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    pub individual: Decimal,
    pub reference: Decimal,
    pub total: Decimal,
}

impl CommissionBreakdown {
    pub fn new(individual: Decimal, reference: Decimal) -> Self {
        Self {
            individual,
            reference,
            total: individual.saturating_add(reference),
        }
    }
}
