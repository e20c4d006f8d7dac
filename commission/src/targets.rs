//! Period target scaling and achievement percentages.
//!
//! Raw targets are monthly figures. Shorter periods divide them down, round
//! half away from zero to whole units, and clamp to fixed minimums so that a
//! progress percentage never divides by zero or by a degenerate target.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{PerformanceSnapshot, Period, TargetSettings};

/// Smallest merchant target after scaling.
pub const MIN_MERCHANTS: u64 = 1;
/// Smallest parcel target after scaling.
pub const MIN_PARCELS: u64 = 10;
/// Smallest revenue target after scaling.
pub const MIN_REVENUE: Decimal = Decimal::ONE_THOUSAND;

impl Period {
    /// Number of periods per month: 30 days, 4 weeks, otherwise 1.
    ///
    /// Yearly and custom ranges compare against the unscaled targets.
    pub fn divisor(self) -> u32 {
        match self {
            Period::Daily => 30,
            Period::Weekly => 4,
            Period::Monthly | Period::Yearly | Period::Custom => 1,
        }
    }

    /// `1 / divisor`.
    pub fn multiplier(self) -> Decimal {
        Decimal::ONE / Decimal::from(self.divisor())
    }
}

/// Targets scaled to a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjustedTargets {
    pub merchants: u64,
    pub parcels: u64,
    pub revenue: Decimal,
}

/// Scale the raw targets in `settings` to `period`.
pub fn adjust_targets(settings: &TargetSettings, period: Period) -> AdjustedTargets {
    let divisor = Decimal::from(period.divisor());
    let scale = |v: Decimal| {
        (v / divisor).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    };

    AdjustedTargets {
        merchants: scale_count(settings.merchant_onboard, &scale).max(MIN_MERCHANTS),
        parcels: scale_count(settings.total_parcels, &scale).max(MIN_PARCELS),
        revenue: scale(settings.total_revenue).max(MIN_REVENUE),
    }
}

fn scale_count(v: u64, scale: &impl Fn(Decimal) -> Decimal) -> u64 {
    scale(Decimal::from(v)).to_u64().unwrap_or(0)
}

/// Completion percentages of actuals against targets. Uncapped: 150.0 means
/// one and a half times the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Achievement {
    pub merchants: f64,
    pub parcels: f64,
    pub revenue: f64,
    /// Mean of the three metrics.
    pub average: f64,
}

impl Achievement {
    pub fn measure(snapshot: &PerformanceSnapshot, targets: &AdjustedTargets) -> Self {
        let merchants = percent(snapshot.merchants as f64, targets.merchants as f64);
        let parcels = percent(snapshot.parcels as f64, targets.parcels as f64);
        let revenue = percent(
            snapshot.revenue.to_f64().unwrap_or_default(),
            targets.revenue.to_f64().unwrap_or_default(),
        );

        Self {
            merchants,
            parcels,
            revenue,
            average: (merchants + parcels + revenue) / 3.0,
        }
    }

    /// Progress-bar width for a percentage, capped at 100.
    pub fn progress(pct: f64) -> f64 {
        pct.min(100.0)
    }
}

fn percent(actual: f64, target: f64) -> f64 {
    actual / target * 100.0
}
