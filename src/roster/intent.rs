use crate::store::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterIntent {
    /// Append an empty name.
    AddUser,
    /// Flip the edit-permission flag.
    ToggleEdit,
    /// Replace the name at `index`. The index must be in range.
    UpdateUsername { index: usize, value: String },
}

impl Intent for RosterIntent {
    fn name(&self) -> &'static str {
        match self {
            RosterIntent::AddUser => "add_user",
            RosterIntent::ToggleEdit => "toggle_edit",
            RosterIntent::UpdateUsername { .. } => "update_username",
        }
    }
}
