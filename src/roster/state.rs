use serde::Serialize;

use crate::store::State;

/// One snapshot of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterState {
    /// User names in display order. Duplicates and empty names are allowed.
    pub users: Vec<String>,
    /// Whether the view should allow editing names. Not enforced by the store.
    pub can_edit: bool,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            can_edit: true,
        }
    }
}

impl State for RosterState {
    fn summary(&self) -> String {
        format!("users={} can_edit={}", self.users.len(), self.can_edit)
    }
}

impl RosterState {
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Pretty-printed JSON dump shown by the debug panel.
    pub fn to_debug_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
