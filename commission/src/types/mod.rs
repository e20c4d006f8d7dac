pub mod breakdown;
pub mod employee;
pub mod enums;
pub mod settings;
pub mod snapshot;
pub mod tier;

pub use breakdown::CommissionBreakdown;
pub use employee::Employee;
pub use enums::{CommissionType, Period, TierKind};
pub use settings::{CommissionConfig, TargetSettings};
pub use snapshot::{PerformanceSnapshot, CURRENT_PERIOD};
pub use tier::CommissionTier;
