//! Tier schedule editing and validation.
//!
//! The engine accepts any schedule. [`CommissionConfig::validate`] is the
//! place to reject inverted or overlapping brackets before they are saved.

use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{CommissionError, Result};
use crate::types::{CommissionConfig, CommissionTier, CommissionType, TierKind};

/// Width of a freshly appended tier.
pub const DEFAULT_TIER_SPAN: u64 = 1000;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Random 9-character base-36 tier id.
pub fn new_tier_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

impl CommissionConfig {
    /// Append a zero-rate FLAT tier directly after the last one. Bounds clamp
    /// at `u64::MAX`.
    pub fn add_tier(&mut self) -> &CommissionTier {
        let from = self.tiers.last().map_or(0, |t| t.to.saturating_add(1));
        let tier = CommissionTier {
            id: new_tier_id(),
            from,
            to: from.saturating_add(DEFAULT_TIER_SPAN),
            rate: Decimal::ZERO,
            reference_rate: Decimal::ZERO,
            kind: TierKind::Flat,
        };
        debug!(id = %tier.id, from = tier.from, to = tier.to, "tier added");
        self.tiers.push(tier);
        &self.tiers[self.tiers.len() - 1]
    }

    /// Apply `edit` to the tier with the given id.
    pub fn update_tier<F>(&mut self, id: &str, edit: F) -> Result<&CommissionTier>
    where
        F: FnOnce(&mut CommissionTier),
    {
        let tier = self
            .tiers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CommissionError::TierNotFound(id.to_string()))?;
        edit(&mut *tier);
        debug!(id, from = tier.from, to = tier.to, "tier updated");
        Ok(&*tier)
    }

    /// Remove and return the tier with the given id.
    pub fn remove_tier(&mut self, id: &str) -> Result<CommissionTier> {
        let idx = self
            .tiers
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CommissionError::TierNotFound(id.to_string()))?;
        debug!(id, "tier removed");
        Ok(self.tiers.remove(idx))
    }

    /// Check the tier schedule: each `from <= to`, brackets strictly
    /// ascending without overlap, and at least one tier when TIERED.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.commission_type == CommissionType::Tiered && self.tiers.is_empty() {
            return Err(CommissionError::EmptyTiers);
        }

        let mut prev_to: Option<u64> = None;
        for tier in &self.tiers {
            if tier.from > tier.to {
                return Err(CommissionError::InvertedTier {
                    id: tier.id.clone(),
                    from: tier.from,
                    to: tier.to,
                });
            }
            if let Some(prev_to) = prev_to {
                if tier.from <= prev_to {
                    return Err(CommissionError::OverlappingTiers {
                        id: tier.id.clone(),
                        from: tier.from,
                        prev_to,
                    });
                }
            }
            prev_to = Some(tier.to);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetSettings;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_tier_id_shape() {
        let id = new_tier_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_add_tier_to_empty_starts_at_zero() {
        let mut cfg = CommissionConfig::tiered(Vec::new());
        let tier = cfg.add_tier();
        assert_eq!(tier.from, 0);
        assert_eq!(tier.to, 1000);
        assert_eq!(tier.rate, Decimal::ZERO);
        assert_eq!(tier.kind, TierKind::Flat);
    }

    #[test]
    fn test_add_tier_follows_last() {
        let mut cfg = TargetSettings::default().commission;
        let tier = cfg.add_tier().clone();
        assert_eq!(tier.from, 5001);
        assert_eq!(tier.to, 6001);
        assert_eq!(cfg.tiers.len(), 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_add_tier_after_max_bound_clamps() {
        let mut cfg = CommissionConfig::tiered(vec![CommissionTier::flat(
            "top",
            u64::MAX - 10,
            u64::MAX,
            dec!(1),
            dec!(0),
        )]);
        let tier = cfg.add_tier();
        assert_eq!(tier.from, u64::MAX);
        assert_eq!(tier.to, u64::MAX);
    }

    #[test]
    fn test_update_tier_applies_edit() {
        let mut cfg = TargetSettings::default().commission;
        let tier = cfg
            .update_tier("2", |t| {
                t.rate = dec!(1.25);
                t.kind = TierKind::Percentage;
            })
            .unwrap();
        assert_eq!(tier.rate, dec!(1.25));
        assert_eq!(cfg.tiers[1].kind, TierKind::Percentage);
    }

    #[test]
    fn test_update_unknown_tier() {
        let mut cfg = TargetSettings::default().commission;
        let err = cfg.update_tier("missing", |_| {}).unwrap_err();
        assert!(matches!(err, CommissionError::TierNotFound(id) if id == "missing"));
    }

    #[test]
    fn test_remove_tier() {
        let mut cfg = TargetSettings::default().commission;
        let removed = cfg.remove_tier("1").unwrap();
        assert_eq!(removed.to, 1000);
        assert_eq!(cfg.tiers.len(), 2);
        assert!(cfg.remove_tier("1").is_err());
    }

    #[test]
    fn test_validate_stock_schedule() {
        assert!(TargetSettings::default().commission.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_tiered() {
        let cfg = CommissionConfig::tiered(Vec::new());
        assert!(matches!(cfg.validate(), Err(CommissionError::EmptyTiers)));
        // Empty tiers are fine when the schedule is not tiered.
        assert!(CommissionConfig::flat(dec!(1), dec!(0)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted() {
        let cfg = CommissionConfig::tiered(vec![CommissionTier::flat(
            "x",
            500,
            100,
            dec!(1),
            dec!(0),
        )]);
        assert!(matches!(
            cfg.validate(),
            Err(CommissionError::InvertedTier { from: 500, to: 100, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_overlap_and_unsorted() {
        let overlap = CommissionConfig::tiered(vec![
            CommissionTier::flat("a", 0, 1000, dec!(1), dec!(0)),
            CommissionTier::flat("b", 1000, 2000, dec!(1), dec!(0)),
        ]);
        assert!(matches!(
            overlap.validate(),
            Err(CommissionError::OverlappingTiers { prev_to: 1000, .. })
        ));

        let unsorted = CommissionConfig::tiered(vec![
            CommissionTier::flat("a", 1001, 2000, dec!(1), dec!(0)),
            CommissionTier::flat("b", 0, 1000, dec!(1), dec!(0)),
        ]);
        assert!(unsorted.validate().is_err());
    }
}
