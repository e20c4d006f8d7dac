use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::CommissionType;
use super::tier::CommissionTier;

/// How commission is paid for a period.
///
/// `commission_value` / `reference_value` apply to FLAT and PERCENTAGE;
/// `tiers` applies to TIERED. The unused half is carried along so that
/// switching type in the editor does not lose the other values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionConfig {
    pub commission_type: CommissionType,
    #[serde(default)]
    pub commission_value: Decimal,
    #[serde(default)]
    pub reference_value: Decimal,
    #[serde(default)]
    pub tiers: Vec<CommissionTier>,
}

impl CommissionConfig {
    pub fn flat(commission_value: Decimal, reference_value: Decimal) -> Self {
        Self {
            commission_type: CommissionType::Flat,
            commission_value,
            reference_value,
            tiers: Vec::new(),
        }
    }

    pub fn percentage(commission_value: Decimal, reference_value: Decimal) -> Self {
        Self {
            commission_type: CommissionType::Percentage,
            ..Self::flat(commission_value, reference_value)
        }
    }

    pub fn tiered(tiers: Vec<CommissionTier>) -> Self {
        Self {
            commission_type: CommissionType::Tiered,
            commission_value: Decimal::ZERO,
            reference_value: Decimal::ZERO,
            tiers,
        }
    }
}

/// Period targets plus the commission schedule, as owned by either the
/// global default or an individual override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSettings {
    pub merchant_onboard: u64,
    pub total_parcels: u64,
    pub total_revenue: Decimal,
    #[serde(flatten)]
    pub commission: CommissionConfig,
}

impl Default for TargetSettings {
    /// The stock global configuration shipped with the dashboard.
    fn default() -> Self {
        Self {
            merchant_onboard: 50,
            total_parcels: 5000,
            total_revenue: Decimal::from(250_000),
            commission: CommissionConfig {
                commission_type: CommissionType::Tiered,
                commission_value: Decimal::from(5),
                reference_value: Decimal::from(2),
                tiers: vec![
                    CommissionTier::flat("1", 0, 1000, Decimal::ZERO, Decimal::ZERO),
                    CommissionTier::flat("2", 1001, 2000, Decimal::ONE, Decimal::new(5, 1)),
                    CommissionTier::percentage(
                        "3",
                        2001,
                        5000,
                        Decimal::from(5),
                        Decimal::new(15, 1),
                    ),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TierKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_matches_stock_configuration() {
        let s = TargetSettings::default();
        assert_eq!(s.merchant_onboard, 50);
        assert_eq!(s.total_parcels, 5000);
        assert_eq!(s.total_revenue, dec!(250000));
        assert_eq!(s.commission.commission_type, CommissionType::Tiered);
        assert_eq!(s.commission.tiers.len(), 3);
        assert_eq!(s.commission.tiers[1].reference_rate, dec!(0.5));
        assert_eq!(s.commission.tiers[2].kind, TierKind::Percentage);
        assert_eq!(s.commission.tiers[2].reference_rate, dec!(1.5));
    }

    #[test]
    fn test_settings_flatten_commission_fields() {
        let json = r#"{
            "merchantOnboard": 10,
            "totalParcels": 200,
            "totalRevenue": 5000,
            "commissionType": "FLAT",
            "commissionValue": 2.5,
            "referenceValue": 1,
            "tiers": []
        }"#;
        let s: TargetSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.commission, CommissionConfig::flat(dec!(2.5), dec!(1)));
        assert_eq!(s.total_revenue, dec!(5000));
    }
}
