use indexmap::IndexMap;
use serde::{ser, Serialize, Serializer};

use crate::{action::Action, UnimplementedOperation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSet {
    pub name: String,
    pub localized_name: String,
    pub priority: i32,
    pub actions: Vec<Action>,
    pub suggested_bindings: Vec<SuggestedBindings>,
}

impl ActionSet {
    /// Every binding path suggested for `action_name`, across all interaction profiles
    pub fn bindings_for<'a>(&'a self, action_name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.suggested_bindings
            .iter()
            .filter_map(move |suggested| suggested.bindings.get(action_name))
            .flatten()
            .map(String::as_str)
    }
}

/// The bindings suggested for one interaction profile.
///
/// In a manifest this is an object whose keys other than `interactionProfile` are action names:
///
/// { "interactionProfile": "/interaction_profiles/khr/simple_controller",
///   "grab_object": [ "/user/hand/left/input/select/click" ] }
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestedBindings {
    pub interaction_profile: String,
    /// Action name to binding paths, in manifest order
    pub bindings: IndexMap<String, Vec<String>>,
}

impl SuggestedBindings {
    pub fn binding_count(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    /// (action name, binding path) pairs in manifest order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().flat_map(|(action, paths)| {
            paths
                .iter()
                .map(move |path| (action.as_str(), path.as_str()))
        })
    }
}

//Manifests are only ever read, writing the action keyed object back out is not supported
impl Serialize for SuggestedBindings {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(ser::Error::custom(UnimplementedOperation(
            "serializing suggested bindings",
        )))
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::action::ActionType;

    fn action_set() -> ActionSet {
        let mut simple = IndexMap::new();
        simple.insert(
            "grab".to_owned(),
            vec![
                "/user/hand/left/input/select/click".to_owned(),
                "/user/hand/right/input/select/click".to_owned(),
            ],
        );
        simple.insert(
            "quit".to_owned(),
            vec!["/user/hand/left/input/menu/click".to_owned()],
        );

        let mut touch = IndexMap::new();
        touch.insert(
            "grab".to_owned(),
            vec!["/user/hand/right/input/squeeze/value".to_owned()],
        );

        ActionSet {
            name: "gameplay".into(),
            localized_name: "Gameplay".into(),
            priority: 0,
            actions: vec![Action {
                name: "grab".into(),
                localized_name: "Grab".into(),
                action_type: ActionType::Float,
                use_subaction_paths: true,
            }],
            suggested_bindings: vec![
                SuggestedBindings {
                    interaction_profile: "/interaction_profiles/khr/simple_controller".into(),
                    bindings: simple,
                },
                SuggestedBindings {
                    interaction_profile: "/interaction_profiles/oculus/touch_controller".into(),
                    bindings: touch,
                },
            ],
        }
    }

    #[test]
    fn bindings_for_spans_profiles() {
        let set = action_set();
        assert_eq!(
            set.bindings_for("grab").collect::<Vec<_>>(),
            vec![
                "/user/hand/left/input/select/click",
                "/user/hand/right/input/select/click",
                "/user/hand/right/input/squeeze/value",
            ]
        );
        assert_eq!(set.bindings_for("missing").count(), 0);
    }

    #[test]
    fn binding_count_sums_every_action() {
        let set = action_set();
        assert_eq!(set.suggested_bindings[0].binding_count(), 3);
        assert_eq!(set.suggested_bindings[1].binding_count(), 1);
        assert_eq!(
            set.suggested_bindings[0].pairs().last(),
            Some(("quit", "/user/hand/left/input/menu/click"))
        );
    }

    #[test]
    fn suggested_bindings_refuse_to_serialize() {
        let err = serde_json::to_string(&action_set()).unwrap_err();
        assert!(err
            .to_string()
            .contains("Unimplemented operation: serializing suggested bindings"));
    }
}
