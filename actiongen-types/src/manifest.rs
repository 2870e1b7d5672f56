use serde::Serialize;

use crate::action_set::ActionSet;

/// The root of an action manifest. Built once by the parser and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub action_sets: Vec<ActionSet>,
}
