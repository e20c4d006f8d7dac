use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::TierKind;

/// One bracket of a tiered schedule over cumulative parcel volume.
///
/// `from` and `to` are inclusive bounds. Schedules are expected to be
/// ascending and non-overlapping, but nothing here enforces it; see
/// [`CommissionConfig::validate`](crate::CommissionConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionTier {
    #[serde(default)]
    pub id: String,
    pub from: u64,
    pub to: u64,
    /// Individual rate: currency per parcel (FLAT) or percent of revenue share.
    pub rate: Decimal,
    /// Secondary rate paid to the referring party. Absent means zero.
    #[serde(default)]
    pub reference_rate: Decimal,
    #[serde(rename = "type")]
    pub kind: TierKind,
}

impl CommissionTier {
    pub fn flat(
        id: impl Into<String>,
        from: u64,
        to: u64,
        rate: Decimal,
        reference_rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            from,
            to,
            rate,
            reference_rate,
            kind: TierKind::Flat,
        }
    }

    pub fn percentage(
        id: impl Into<String>,
        from: u64,
        to: u64,
        rate: Decimal,
        reference_rate: Decimal,
    ) -> Self {
        Self {
            kind: TierKind::Percentage,
            ..Self::flat(id, from, to, rate, reference_rate)
        }
    }

    /// `max(0, min(parcels, to) - from)`.
    ///
    /// Measured against the full `parcels` total, independently of any other
    /// tier in the schedule.
    pub fn applicable_volume(&self, parcels: u64) -> u64 {
        parcels.min(self.to).saturating_sub(self.from)
    }
}
