//! OpenXR identifiers the generated code refers to.

use actiongen_types::ActionType;

pub fn action_type(action_type: ActionType) -> &'static str {
    match action_type {
        ActionType::Boolean => "XR_ACTION_TYPE_BOOLEAN_INPUT",
        ActionType::Pose => "XR_ACTION_TYPE_POSE_INPUT",
        ActionType::Haptic => "XR_ACTION_TYPE_VIBRATION_OUTPUT",
        ActionType::Float => "XR_ACTION_TYPE_FLOAT_INPUT",
        ActionType::Vector2f => "XR_ACTION_TYPE_VECTOR2F_INPUT",
    }
}

/// How the state of an input action is stored and fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    pub struct_name: &'static str,
    pub structure_type: &'static str,
    pub getter: &'static str,
}

/// `None` for output actions, which have no state
pub fn action_state(action_type: ActionType) -> Option<ActionState> {
    let (struct_name, structure_type, getter) = match action_type {
        ActionType::Boolean => (
            "XrActionStateBoolean",
            "XR_TYPE_ACTION_STATE_BOOLEAN",
            "xrGetActionStateBoolean",
        ),
        ActionType::Pose => (
            "XrActionStatePose",
            "XR_TYPE_ACTION_STATE_POSE",
            "xrGetActionStatePose",
        ),
        ActionType::Float => (
            "XrActionStateFloat",
            "XR_TYPE_ACTION_STATE_FLOAT",
            "xrGetActionStateFloat",
        ),
        ActionType::Vector2f => (
            "XrActionStateVector2f",
            "XR_TYPE_ACTION_STATE_VECTOR2F",
            "xrGetActionStateVector2f",
        ),
        ActionType::Haptic => return None,
    };

    Some(ActionState {
        struct_name,
        structure_type,
        getter,
    })
}

/// Quotes `text` as a C string literal
pub fn string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use actiongen_types::ActionType;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn inputs_have_state() {
        for ty in ActionType::iter() {
            assert_eq!(action_state(ty).is_none(), ty.is_output(), "{ty:?}");
        }
        assert_eq!(
            action_state(ActionType::Vector2f).map(|state| state.getter),
            Some("xrGetActionStateVector2f")
        );
    }

    #[test]
    fn escapes_string_literals() {
        assert_eq!(string_literal("Grab Object"), "\"Grab Object\"");
        assert_eq!(string_literal(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
    }
}
