pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod history;
pub mod targets;
pub mod team;
pub mod tiers;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Engine
pub use engine::compute_breakdown;

// Errors
pub use error::{CommissionError, Result};

// Core types
pub use types::{
    CommissionBreakdown, CommissionConfig, CommissionTier, CommissionType, Employee,
    PerformanceSnapshot, Period, TargetSettings, TierKind,
};

// Targets
pub use targets::{adjust_targets, Achievement, AdjustedTargets};

// Directory + team
pub use directory::{Directory, Selection};
pub use team::{leaderboard, totals, TeamMemberStats, TeamTotals};

// History
pub use history::{period_totals, window, DateRange};

// Loading
pub use config::{load_roster, load_settings, parse_settings, Roster};
