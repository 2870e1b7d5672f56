//! Structure the generated code needs that the manifest only implies.
//!
//! Everything here is derived on demand from an [`ActionSet`] and returns values in a stable
//! order, so the emitter produces identical output for identical input.

use actiongen_types::{Action, ActionSet, SubactionPath, UnsupportedSubactionPath, UserPath};
use itertools::Itertools;

/// The subaction paths `action` is read through, in the order they are first bound.
///
/// With `include_null` an action that does not use subaction paths yields only
/// [`SubactionPath::Null`], whatever it is bound to. Otherwise the user paths of all its
/// suggested bindings are returned, which may be empty.
pub fn subaction_paths_for(
    action_set: &ActionSet,
    action: &Action,
    include_null: bool,
) -> Result<Vec<SubactionPath>, UnsupportedSubactionPath> {
    if include_null && !action.use_subaction_paths {
        return Ok(vec![SubactionPath::Null]);
    }

    Ok(user_paths_for(action_set, action)?
        .into_iter()
        .map(SubactionPath::User)
        .collect())
}

/// The user paths `action` is bound under, deduplicated in first-binding order
pub fn user_paths_for(
    action_set: &ActionSet,
    action: &Action,
) -> Result<Vec<UserPath>, UnsupportedSubactionPath> {
    let user_paths = action_set
        .bindings_for(&action.name)
        .map(UserPath::from_binding)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(user_paths.into_iter().unique().collect())
}

/// Every user path any action in the set is bound under
pub fn all_used_subaction_paths(
    action_set: &ActionSet,
) -> Result<Vec<UserPath>, UnsupportedSubactionPath> {
    let mut used = Vec::new();
    for action in &action_set.actions {
        used.extend(user_paths_for(action_set, action)?);
    }
    Ok(used.into_iter().unique().collect())
}

/// Every binding path in the set, deduplicated and sorted
pub fn distinct_binding_paths(action_set: &ActionSet) -> Vec<&str> {
    action_set
        .suggested_bindings
        .iter()
        .flat_map(|suggested| suggested.bindings.values())
        .flatten()
        .map(String::as_str)
        .unique()
        .sorted()
        .collect()
}

/// Everything derived for one action set, computed up front so emission cannot fail
#[derive(Debug, Clone)]
pub struct ActionSetTopology<'a> {
    pub action_set: &'a ActionSet,
    pub used_subaction_paths: Vec<UserPath>,
    pub actions: Vec<ActionTopology<'a>>,
    pub binding_paths: Vec<&'a str>,
}

#[derive(Debug, Clone)]
pub struct ActionTopology<'a> {
    pub action: &'a Action,
    /// User paths the action is bound under, passed when creating it
    pub user_paths: Vec<UserPath>,
    /// Subaction paths the action's state is tracked for, [`SubactionPath::Null`] included
    pub variants: Vec<SubactionPath>,
}

impl<'a> ActionSetTopology<'a> {
    pub fn derive(action_set: &'a ActionSet) -> Result<Self, UnsupportedSubactionPath> {
        let actions = action_set
            .actions
            .iter()
            .map(|action| {
                Ok(ActionTopology {
                    action,
                    user_paths: user_paths_for(action_set, action)?,
                    variants: subaction_paths_for(action_set, action, true)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            action_set,
            used_subaction_paths: all_used_subaction_paths(action_set)?,
            actions,
            binding_paths: distinct_binding_paths(action_set),
        })
    }

    /// Actions with state to fetch, haptics are output only
    pub fn input_actions(&self) -> impl Iterator<Item = &ActionTopology<'a>> {
        self.actions
            .iter()
            .filter(|topology| !topology.action.action_type.is_output())
    }
}
