//! Commission engine.
//!
//! A pure function from a performance snapshot and a commission schedule to
//! an individual / reference payout. No rounding, no I/O, no shared state:
//! identical inputs always produce identical output.
//!
//! # Tiered schedules
//!
//! Each tier's applicable volume is `max(0, min(parcels, to) - from)`,
//! computed against the *full* parcel total rather than the volume left over
//! by earlier tiers. With strictly disjoint brackets this is the usual
//! marginal schedule (minus one unit at each `from > 0` boundary); with
//! overlapping brackets the same parcels are paid more than once. Tiers are
//! evaluated in the order given and never re-sorted.
//!
//! PERCENTAGE tiers pay on the revenue attributable to the bracket,
//! `applicable * revenue / parcels`, multiplied before dividing so that whole
//! shares stay whole. That share is taken as zero when `parcels` is zero,
//! which for non-negative volumes is also the only value it could take.
//!
//! # Overflow
//!
//! Products and sums that do not fit in a [`Decimal`] clamp to
//! [`Decimal::MAX`] / [`Decimal::MIN`] instead of panicking, so an absurd
//! revenue or rate yields a pinned payout rather than an error.

use rust_decimal::Decimal;
use tracing::trace;

use crate::types::{
    CommissionBreakdown, CommissionConfig, CommissionTier, CommissionType, PerformanceSnapshot,
    TierKind,
};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Compute the commission owed for `snapshot` under `config`.
pub fn compute_breakdown(
    snapshot: &PerformanceSnapshot,
    config: &CommissionConfig,
) -> CommissionBreakdown {
    let (individual, reference) = match config.commission_type {
        CommissionType::Flat => {
            let parcels = Decimal::from(snapshot.parcels);
            (
                parcels.saturating_mul(config.commission_value),
                parcels.saturating_mul(config.reference_value),
            )
        }
        CommissionType::Percentage => (
            percent_of(snapshot.revenue, config.commission_value),
            percent_of(snapshot.revenue, config.reference_value),
        ),
        CommissionType::Tiered => tiered(snapshot, &config.tiers),
    };

    CommissionBreakdown::new(individual, reference)
}

/// Sum the payout of every tier, each clipped independently.
fn tiered(snapshot: &PerformanceSnapshot, tiers: &[CommissionTier]) -> (Decimal, Decimal) {
    let mut individual = Decimal::ZERO;
    let mut reference = Decimal::ZERO;

    for tier in tiers {
        let volume = tier.applicable_volume(snapshot.parcels);
        if volume == 0 {
            continue;
        }
        let volume = Decimal::from(volume);

        match tier.kind {
            TierKind::Flat => {
                individual = individual.saturating_add(volume.saturating_mul(tier.rate));
                reference = reference.saturating_add(volume.saturating_mul(tier.reference_rate));
            }
            TierKind::Percentage => {
                let share = revenue_share(volume, snapshot);
                individual = individual.saturating_add(percent_of(share, tier.rate));
                reference = reference.saturating_add(percent_of(share, tier.reference_rate));
            }
        }

        trace!(
            tier = %tier.id,
            volume = %volume,
            kind = ?tier.kind,
            %individual,
            %reference,
            "tier evaluated"
        );
    }

    (individual, reference)
}

/// Revenue attributable to `volume` parcels: `volume * revenue / parcels`.
fn revenue_share(volume: Decimal, snapshot: &PerformanceSnapshot) -> Decimal {
    if snapshot.parcels == 0 {
        return Decimal::ZERO;
    }
    let parcels = Decimal::from(snapshot.parcels);
    match volume.checked_mul(snapshot.revenue) {
        Some(product) => product / parcels,
        // volume <= parcels, so the fraction is at most 1 and the share fits.
        None => (volume / parcels).saturating_mul(snapshot.revenue),
    }
}

/// `rate` percent of `amount`, pinned at the `Decimal` bounds on overflow.
fn percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    match amount.checked_mul(rate) {
        Some(product) => product / HUNDRED,
        None => amount.saturating_mul(rate),
    }
}
