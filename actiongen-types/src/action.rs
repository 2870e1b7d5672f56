use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The kinds of action a manifest can declare.
///
/// Parsing is case-insensitive and accepts `Vector2` as a spelling of `Vector2f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, AsRefStr, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ActionType {
    Boolean,
    Pose,
    ///Output only, never has a state to fetch
    Haptic,
    Float,
    #[strum(to_string = "Vector2f", serialize = "Vector2")]
    Vector2f,
}

impl ActionType {
    pub fn is_output(self) -> bool {
        matches!(self, ActionType::Haptic)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub name: String,
    pub localized_name: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub use_subaction_paths: bool,
}
