use std::str::FromStr;

use actiongen_types::{Action, ActionSet, ActionType, Manifest, SuggestedBindings};
use indexmap::{map::Entry, IndexMap};

use crate::{document::Document, error::ParseError, jsonc};

const INTERACTION_PROFILE: &str = "interactionProfile";

/// Reads an action manifest.
///
/// Property names are matched case-insensitively, comments and trailing commas are allowed.
/// Properties the schema does not know about are ignored, except inside a suggested bindings
/// object where every property other than `interactionProfile` names an action.
pub fn parse(text: &str) -> Result<Manifest, ParseError> {
    let document = serde_json::from_str::<Document>(&jsonc::strip(text)).map_err(|err| {
        ParseError::MalformedInput {
            location: format!("line {} column {}", err.line(), err.column()),
            message: err.to_string(),
        }
    })?;

    read_manifest(&Node::root(&document))
}

fn read_manifest(node: &Node) -> Result<Manifest, ParseError> {
    Ok(Manifest {
        action_sets: node
            .required("actionSets")?
            .array()?
            .iter()
            .map(read_action_set)
            .collect::<Result<_, _>>()?,
    })
}

fn read_action_set(node: &Node) -> Result<ActionSet, ParseError> {
    Ok(ActionSet {
        name: node.required("name")?.string()?.to_owned(),
        localized_name: node.required("localizedName")?.string()?.to_owned(),
        priority: node.required("priority")?.i32()?,
        actions: node
            .required("actions")?
            .array()?
            .iter()
            .map(read_action)
            .collect::<Result<_, _>>()?,
        suggested_bindings: node
            .required("suggestedBindings")?
            .array()?
            .iter()
            .map(read_suggested_bindings)
            .collect::<Result<_, _>>()?,
    })
}

fn read_action(node: &Node) -> Result<Action, ParseError> {
    Ok(Action {
        name: node.required("name")?.string()?.to_owned(),
        localized_name: node.required("localizedName")?.string()?.to_owned(),
        action_type: node.required("type")?.enumeration::<ActionType>("action type")?,
        use_subaction_paths: match node.field("useSubactionPaths")? {
            Some(field) => field.bool()?,
            None => false,
        },
    })
}

/// The one object whose keys are data rather than schema: each property is routed by name,
/// either into the interaction profile or into the bindings of the action it names. Every
/// entry is seen, so an action listed twice is an error rather than a silent overwrite.
fn read_suggested_bindings(node: &Node) -> Result<SuggestedBindings, ParseError> {
    let properties = node.value.as_object().ok_or_else(|| ParseError::MalformedInput {
        location: node.location.clone(),
        message: format!(
            "expected an object in suggestedBindings but got {}",
            node.value.kind()
        ),
    })?;

    let mut interaction_profile = None;
    let mut bindings = IndexMap::new();

    for (key, value) in properties {
        if key.eq_ignore_ascii_case(INTERACTION_PROFILE) {
            let field = node.child(INTERACTION_PROFILE, value);
            interaction_profile = match value {
                Document::Null => None,
                _ => Some(field.string()?.to_owned()),
            };
            continue;
        }

        let field = node.child(key, value);
        let paths = field
            .array()?
            .iter()
            .map(|path| path.string().map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;
        match bindings.entry(key.clone()) {
            Entry::Occupied(_) => {
                return Err(field.malformed(format!("action `{key}` is bound more than once")))
            }
            Entry::Vacant(entry) => {
                entry.insert(paths);
            }
        }
    }

    match interaction_profile {
        Some(interaction_profile) if !interaction_profile.is_empty() => Ok(SuggestedBindings {
            interaction_profile,
            bindings,
        }),
        _ => Err(ParseError::MissingRequiredField {
            location: node.location.clone(),
            field: INTERACTION_PROFILE.to_owned(),
        }),
    }
}

/// A value in the document along with where it was found
struct Node<'a> {
    value: &'a Document,
    location: String,
}

impl<'a> Node<'a> {
    fn root(value: &'a Document) -> Self {
        Self {
            value,
            location: "$".to_owned(),
        }
    }

    fn child(&self, key: &str, value: &'a Document) -> Node<'a> {
        let location = if self.location == "$" {
            key.to_owned()
        } else {
            format!("{}.{key}", self.location)
        };
        Node { value, location }
    }

    fn malformed(&self, message: impl ToString) -> ParseError {
        ParseError::MalformedInput {
            location: self.location.clone(),
            message: message.to_string(),
        }
    }

    fn expected(&self, expected: &str) -> ParseError {
        self.malformed(format!("expected {expected} but got {}", self.value.kind()))
    }

    fn object(&self) -> Result<&'a [(String, Document)], ParseError> {
        self.value.as_object().ok_or_else(|| self.expected("an object"))
    }

    /// Looks up a property ignoring case, the last match wins
    fn field(&self, name: &str) -> Result<Option<Node<'a>>, ParseError> {
        Ok(self
            .object()?
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .last()
            .map(|(_, value)| self.child(name, value)))
    }

    fn required(&self, name: &str) -> Result<Node<'a>, ParseError> {
        self.field(name)?
            .ok_or_else(|| ParseError::MissingRequiredField {
                location: self.location.clone(),
                field: name.to_owned(),
            })
    }

    fn array(&self) -> Result<Vec<Node<'a>>, ParseError> {
        let elements = self.value.as_array().ok_or_else(|| self.expected("an array"))?;
        Ok(elements
            .iter()
            .enumerate()
            .map(|(index, value)| Node {
                value,
                location: format!("{}[{index}]", self.location),
            })
            .collect())
    }

    fn string(&self) -> Result<&'a str, ParseError> {
        self.value.as_str().ok_or_else(|| self.expected("a string"))
    }

    fn bool(&self) -> Result<bool, ParseError> {
        self.value.as_bool().ok_or_else(|| self.expected("a boolean"))
    }

    fn i32(&self) -> Result<i32, ParseError> {
        self.value
            .as_i64()
            .and_then(|int| i32::try_from(int).ok())
            .ok_or_else(|| self.expected("a 32-bit integer"))
    }

    fn enumeration<T: FromStr>(&self, kind: &'static str) -> Result<T, ParseError> {
        let name = self.string()?;
        T::from_str(name).map_err(|_| ParseError::UnknownEnumValue {
            location: self.location.clone(),
            kind,
            value: name.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
    {
        // Comments and trailing commas are fine
        "actionSets": [
            {
                "name": "gameplay",
                "LocalizedName": "Gameplay",
                "PRIORITY": 3,
                "actions": [
                    { "name": "grab_object", "localizedName": "Grab Object", "type": "float", "useSubactionPaths": true },
                    { "name": "quit_session", "localizedName": "Quit Session", "type": "Boolean", },
                ],
                "suggestedBindings": [
                    {
                        "grab_object": [ "/user/hand/right/input/select/click", "/user/hand/left/input/select/click" ],
                        "interactionProfile": "/interaction_profiles/khr/simple_controller",
                        "quit_session": [ "/user/hand/left/input/menu/click" ],
                        "Grab_Object": [],
                    },
                ],
            },
        ],
    }
    "#;

    fn set_with_bindings(bindings: &str) -> String {
        format!(
            r#"{{ "actionSets": [ {{ "name": "a", "localizedName": "A", "priority": 0,
                "actions": [], "suggestedBindings": [ {bindings} ] }} ] }}"#
        )
    }

    #[test]
    fn parses_manifest() {
        let manifest = parse(MANIFEST).unwrap();
        assert_eq!(manifest.action_sets.len(), 1);

        let set = &manifest.action_sets[0];
        assert_eq!(set.name, "gameplay");
        assert_eq!(set.localized_name, "Gameplay");
        assert_eq!(set.priority, 3);

        assert_eq!(
            set.actions[0],
            Action {
                name: "grab_object".into(),
                localized_name: "Grab Object".into(),
                action_type: ActionType::Float,
                use_subaction_paths: true,
            }
        );
        assert_eq!(set.actions[1].action_type, ActionType::Boolean);
        assert!(!set.actions[1].use_subaction_paths);
    }

    #[test]
    fn routes_dynamic_binding_keys() {
        let manifest = parse(MANIFEST).unwrap();
        let suggested = &manifest.action_sets[0].suggested_bindings[0];

        assert_eq!(
            suggested.interaction_profile,
            "/interaction_profiles/khr/simple_controller"
        );
        assert_eq!(
            suggested.bindings.keys().collect::<Vec<_>>(),
            vec!["grab_object", "quit_session", "Grab_Object"]
        );
        assert_eq!(
            suggested.bindings["grab_object"],
            vec![
                "/user/hand/right/input/select/click",
                "/user/hand/left/input/select/click"
            ]
        );
        assert!(suggested.bindings["Grab_Object"].is_empty());
    }

    #[test]
    fn bindings_without_actions() {
        let text = set_with_bindings(r#"{ "interactionProfile": "/interaction_profiles/khr/simple_controller" }"#);
        let manifest = parse(&text).unwrap();
        assert!(manifest.action_sets[0].suggested_bindings[0].bindings.is_empty());
    }

    #[test]
    fn interaction_profile_key_is_case_insensitive() {
        let text = set_with_bindings(r#"{ "InteractionPROFILE": "/interaction_profiles/khr/simple_controller", "a": [] }"#);
        let manifest = parse(&text).unwrap();
        let suggested = &manifest.action_sets[0].suggested_bindings[0];
        assert_eq!(suggested.interaction_profile, "/interaction_profiles/khr/simple_controller");
        assert_eq!(suggested.bindings.len(), 1);
    }

    #[test]
    fn missing_interaction_profile() {
        let text = set_with_bindings(r#"{ "jump": [ "/user/hand/left/input/select/click" ] }"#);
        assert_eq!(
            parse(&text),
            Err(ParseError::MissingRequiredField {
                location: "actionSets[0].suggestedBindings[0]".into(),
                field: "interactionProfile".into(),
            })
        );
    }

    #[test]
    fn empty_interaction_profile() {
        let text = set_with_bindings(r#"{ "interactionProfile": "" }"#);
        assert!(matches!(
            parse(&text),
            Err(ParseError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn bindings_entry_must_be_object() {
        let text = set_with_bindings(r#"[ "/interaction_profiles/khr/simple_controller" ]"#);
        match parse(&text) {
            Err(ParseError::MalformedInput { location, message }) => {
                assert_eq!(location, "actionSets[0].suggestedBindings[0]");
                assert_eq!(message, "expected an object in suggestedBindings but got an array");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn binding_paths_must_be_strings() {
        let text = set_with_bindings(r#"{ "interactionProfile": "/p", "jump": [ 1 ] }"#);
        match parse(&text) {
            Err(ParseError::MalformedInput { location, message }) => {
                assert_eq!(location, "actionSets[0].suggestedBindings[0].jump[0]");
                assert_eq!(message, "expected a string but got a number");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn action_bound_twice_in_one_profile() {
        let text = set_with_bindings(
            r#"{ "interactionProfile": "/p",
                 "jump": [ "/user/hand/left/input/a/click" ],
                 "jump": [ "/user/hand/right/input/a/click" ] }"#,
        );
        match parse(&text) {
            Err(ParseError::MalformedInput { location, message }) => {
                assert_eq!(location, "actionSets[0].suggestedBindings[0].jump");
                assert_eq!(message, "action `jump` is bound more than once");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn repeated_interaction_profile_keeps_the_last() {
        let text = set_with_bindings(
            r#"{ "interactionProfile": "/a", "jump": [], "INTERACTIONPROFILE": "/b" }"#,
        );
        let manifest = parse(&text).unwrap();
        let suggested = &manifest.action_sets[0].suggested_bindings[0];
        assert_eq!(suggested.interaction_profile, "/b");
        assert_eq!(suggested.bindings.len(), 1);
    }

    #[test]
    fn unknown_action_type() {
        let text = r#"{ "actionSets": [ { "name": "a", "localizedName": "A", "priority": 0,
            "actions": [ { "name": "x", "localizedName": "X", "type": "Vector3f" } ],
            "suggestedBindings": [] } ] }"#;
        assert_eq!(
            parse(text),
            Err(ParseError::UnknownEnumValue {
                location: "actionSets[0].actions[0].type".into(),
                kind: "action type",
                value: "Vector3f".into(),
            })
        );
    }

    #[test]
    fn wrong_shapes_are_malformed() {
        let text = r#"{ "actionSets": [ { "name": "a", "localizedName": "A", "priority": "high",
            "actions": [], "suggestedBindings": [] } ] }"#;
        assert!(matches!(
            parse(text),
            Err(ParseError::MalformedInput { location, .. }) if location == "actionSets[0].priority"
        ));

        assert!(matches!(
            parse(r#"{ "actionSets": {} }"#),
            Err(ParseError::MalformedInput { .. })
        ));
        assert!(matches!(parse("[]"), Err(ParseError::MalformedInput { .. })));
    }

    #[test]
    fn missing_fields() {
        assert_eq!(
            parse("{}"),
            Err(ParseError::MissingRequiredField {
                location: "$".into(),
                field: "actionSets".into(),
            })
        );

        let text = r#"{ "actionSets": [ { "name": "a", "priority": 0, "actions": [], "suggestedBindings": [] } ] }"#;
        assert_eq!(
            parse(text),
            Err(ParseError::MissingRequiredField {
                location: "actionSets[0]".into(),
                field: "localizedName".into(),
            })
        );
    }

    #[test]
    fn syntax_errors() {
        match parse("{ \"actionSets\": [ }") {
            Err(ParseError::MalformedInput { location, .. }) => {
                assert!(location.starts_with("line 1 column "), "{location}")
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
