use serde::{Deserialize, Serialize};

use crate::data::activity::{Activity, ActivityId};
use crate::form::ActivityDispatch;

/// Actions the store understands, wire-compatible with the host's
/// tag-and-payload action objects.
///
/// `SaveActivity` serializes as
/// `{"type":"save-activity","payload":{"newActivity":…}}`, which is the
/// exact shape hosts put on the dispatch boundary.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ActivityAction {
    #[serde(rename = "save-activity")]
    SaveActivity {
        #[serde(rename = "newActivity")]
        new_activity: Activity,
    },
    #[serde(rename = "set-active-id")]
    SetActiveId { id: ActivityId },
}

/// The authoritative activity list plus the ID of the entry currently being
/// edited, if any. This is the snapshot the form's sync hook reads from.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ActivityState {
    /// Saved entries, in insertion order. Searched by ID.
    pub activities: Vec<Activity>,
    /// The entry the user is editing in place; `None` while creating a new
    /// one.
    pub active_id: Option<ActivityId>,
}

/// Applies one action to the state, mutating it.
///
/// Saving an entry whose ID is already present replaces that entry (the
/// edit-in-place flow); an unseen ID appends. Either way the save ends any
/// running edit session by clearing the active selection.
pub fn reduce(state: &mut ActivityState, action: ActivityAction) {
    match action {
        ActivityAction::SaveActivity { new_activity } => {
            match state.activities.iter_mut().find(|a| a.id == new_activity.id) {
                Some(existing) => *existing = new_activity,
                None => state.activities.push(new_activity),
            }
            state.active_id = None;
        }
        ActivityAction::SetActiveId { id } => {
            state.active_id = Some(id);
        }
    }
}

impl ActivityDispatch for ActivityState {
    fn save(&mut self, new_activity: Activity) {
        reduce(self, ActivityAction::SaveActivity { new_activity });
    }
}
