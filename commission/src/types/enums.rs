use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommissionError;

/// How a commission schedule pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionType {
    /// Currency per parcel.
    Flat,
    /// Share of revenue, in percent.
    Percentage,
    /// Per-bracket rates over parcel volume.
    Tiered,
}

impl std::fmt::Display for CommissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommissionType::Flat => write!(f, "FLAT"),
            CommissionType::Percentage => write!(f, "PERCENTAGE"),
            CommissionType::Tiered => write!(f, "TIERED"),
        }
    }
}

/// Payout kind of a single tier. A tier can never itself be tiered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TierKind {
    #[default]
    Flat,
    Percentage,
}

/// Reporting period selected by the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Custom,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Daily => write!(f, "daily"),
            Period::Weekly => write!(f, "weekly"),
            Period::Monthly => write!(f, "monthly"),
            Period::Yearly => write!(f, "yearly"),
            Period::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for Period {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            "custom" => Ok(Period::Custom),
            other => Err(CommissionError::Validation(format!(
                "unknown period: {other}"
            ))),
        }
    }
}
