//! Global default settings, per-employee overrides, and the current selection.
//!
//! An employee's effective settings are its own override when present, else
//! the global default. There is no merging between the two levels.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CommissionError, Result};
use crate::types::{Employee, TargetSettings};

/// Which settings the operator is looking at or editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Global,
    Employee(String),
}

/// The sales team plus the global default configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    #[serde(default)]
    pub global: TargetSettings,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Directory {
    pub fn new(global: TargetSettings, employees: Vec<Employee>) -> Self {
        Self { global, employees }
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    fn employee_mut(&mut self, id: &str) -> Result<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CommissionError::EmployeeNotFound(id.to_string()))
    }

    /// Override if present, else the global default.
    pub fn effective_settings<'a>(&'a self, employee: &'a Employee) -> &'a TargetSettings {
        employee.individual_settings.as_ref().unwrap_or(&self.global)
    }

    /// Settings shown for `selection`. An unknown employee id falls back to
    /// the global default.
    pub fn active_settings(&self, selection: &Selection) -> &TargetSettings {
        match selection {
            Selection::Global => &self.global,
            Selection::Employee(id) => self
                .employee(id)
                .map_or(&self.global, |e| self.effective_settings(e)),
        }
    }

    /// Replace the global default, or install an override for an employee.
    pub fn update_settings(
        &mut self,
        selection: &Selection,
        settings: TargetSettings,
    ) -> Result<()> {
        match selection {
            Selection::Global => {
                debug!("global settings updated");
                self.global = settings;
            }
            Selection::Employee(id) => {
                self.employee_mut(id)?.individual_settings = Some(settings);
                debug!(employee = %id, "individual settings updated");
            }
        }
        Ok(())
    }

    /// Drop an employee's override so it follows the global default again.
    ///
    /// Returns `true` if an override was removed. Resetting the global
    /// selection does nothing.
    pub fn reset(&mut self, selection: &Selection) -> Result<bool> {
        let Selection::Employee(id) = selection else {
            return Ok(false);
        };
        let reverted = self.employee_mut(id)?.individual_settings.take().is_some();
        if reverted {
            debug!(employee = %id, "reverted to system defaults");
        }
        Ok(reverted)
    }

    /// Employees whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Employee> {
        let needle = query.to_lowercase();
        self.employees
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }
}
