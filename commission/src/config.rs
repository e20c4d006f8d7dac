//! Loading settings and team rosters from JSON files.
//!
//! Files use the dashboard's camelCase field names, e.g.
//! `{"merchantOnboard": 50, "commissionType": "TIERED", "tiers": [...]}`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::directory::Directory;
use crate::error::Result;
use crate::types::{Employee, PerformanceSnapshot, TargetSettings};

/// A team roster file: employees, their measured performance, and the
/// organisation's history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    /// Global default; when absent the caller's settings are used.
    #[serde(default)]
    pub global: Option<TargetSettings>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Current-period actuals keyed by employee id.
    #[serde(default)]
    pub performance: HashMap<String, PerformanceSnapshot>,
    /// Organisation-wide history, oldest first.
    #[serde(default)]
    pub history: Vec<PerformanceSnapshot>,
}

impl Roster {
    /// Split into a directory (using `fallback` when the roster carries no
    /// global default) and the per-employee performance map.
    pub fn into_parts(
        self,
        fallback: TargetSettings,
    ) -> (Directory, HashMap<String, PerformanceSnapshot>, Vec<PerformanceSnapshot>) {
        let global = self.global.unwrap_or(fallback);
        (
            Directory::new(global, self.employees),
            self.performance,
            self.history,
        )
    }
}

/// Parse settings from a JSON string.
pub fn parse_settings(json: &str) -> Result<TargetSettings> {
    Ok(serde_json::from_str(json)?)
}

/// Read settings from a JSON file.
pub fn load_settings(path: impl AsRef<Path>) -> Result<TargetSettings> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading settings");
    parse_settings(&std::fs::read_to_string(path)?)
}

/// Read a roster from a JSON file.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading roster");
    let roster: Roster = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    debug!(
        employees = roster.employees.len(),
        measured = roster.performance.len(),
        history = roster.history.len(),
        "roster loaded"
    );
    Ok(roster)
}
