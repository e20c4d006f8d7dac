use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label given to snapshots produced by [`PerformanceSnapshot::aggregate`].
pub const CURRENT_PERIOD: &str = "Current Period";

/// Measured actuals for a date or an aggregated period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    /// Period label, e.g. `2024-06` or `2024-06-15`.
    #[serde(default)]
    pub date: String,
    pub merchants: u64,
    pub parcels: u64,
    pub revenue: Decimal,
}

impl PerformanceSnapshot {
    pub fn new(merchants: u64, parcels: u64, revenue: Decimal) -> Self {
        Self {
            date: String::new(),
            merchants,
            parcels,
            revenue,
        }
    }

    /// Sum a run of snapshots into a single "Current Period" snapshot.
    /// Sums clamp at the numeric bounds instead of overflowing.
    pub fn aggregate<'a, I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = &'a PerformanceSnapshot>,
    {
        snapshots.into_iter().fold(
            Self {
                date: CURRENT_PERIOD.to_string(),
                ..Self::default()
            },
            |mut acc, s| {
                acc.merchants = acc.merchants.saturating_add(s.merchants);
                acc.parcels = acc.parcels.saturating_add(s.parcels);
                acc.revenue = acc.revenue.saturating_add(s.revenue);
                acc
            },
        )
    }
}
