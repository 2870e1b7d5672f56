use thiserror::Error;

pub mod action;
pub mod action_set;
pub mod manifest;
pub mod subaction_path;

pub use action::{Action, ActionType};
pub use action_set::{ActionSet, SuggestedBindings};
pub use manifest::Manifest;
pub use subaction_path::{SubactionPath, UserPath};

/**
 * Raised when a binding path is not rooted under a user path the generator knows about.
 *
 * Every binding path has to start with one of the prefixes in [`UserPath::ALL`], e.g.
 *
 * /user/hand/left/input/trigger/value
 *
 * /user/hand/right/output/haptic
 */
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported subaction path in binding `{0}`")]
pub struct UnsupportedSubactionPath(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unimplemented operation: {0}")]
pub struct UnimplementedOperation(pub &'static str);
