use serde::{Deserialize, Serialize};

use super::settings::TargetSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// `None` means the employee follows the global default.
    #[serde(default)]
    pub individual_settings: Option<TargetSettings>,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            avatar: None,
            individual_settings: None,
        }
    }

    pub fn has_override(&self) -> bool {
        self.individual_settings.is_some()
    }
}
