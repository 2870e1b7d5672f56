use heck::ToSnakeCase;
use strum_macros::{Display, EnumString};

/// Turns name fragments into an identifier for the generated code.
///
/// Fragments are joined with `_` before conversion, so `rename(&["a", "b"])` and
/// `rename(&["a_b"])` always agree.
pub trait NamingConvention {
    fn rename(&self, fragments: &[&str]) -> String;
}

/// Upper-cases the first letter or digit of every word and drops the separators between them.
/// Letters inside a word keep their case, `grab_Value` becomes `GrabValue` and `XRInput` stays
/// `XRInput`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PascalCase;

impl NamingConvention for PascalCase {
    fn rename(&self, fragments: &[&str]) -> String {
        let mut name = String::new();
        let mut next_upper = true;
        for c in fragments.join("_").chars() {
            if !c.is_alphanumeric() {
                next_upper = true;
            } else if next_upper {
                name.push(c.to_ascii_uppercase());
                next_upper = false;
            } else {
                name.push(c);
            }
        }
        name
    }
}

/// [`PascalCase`] with a lower-case first letter
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCase;

impl NamingConvention for CamelCase {
    fn rename(&self, fragments: &[&str]) -> String {
        let mut name = PascalCase.rename(fragments);
        if let Some(first) = name.get_mut(..1) {
            first.make_ascii_lowercase();
        }
        name
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCase;

impl NamingConvention for SnakeCase {
    fn rename(&self, fragments: &[&str]) -> String {
        fragments.join("_").to_snake_case()
    }
}

/// Naming conventions selectable by name, e.g. from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum NamingStyle {
    #[default]
    Pascal,
    Camel,
    Snake,
}

impl NamingStyle {
    pub fn converter(self) -> &'static dyn NamingConvention {
        match self {
            NamingStyle::Pascal => &PascalCase,
            NamingStyle::Camel => &CamelCase,
            NamingStyle::Snake => &SnakeCase,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn pascal_case_capitalizes_words() {
        assert_eq!(PascalCase.rename(&["grab", "Value"]), "GrabValue");
        assert_eq!(PascalCase.rename(&["user/hand/left"]), "UserHandLeft");
        assert_eq!(
            PascalCase.rename(&["Create", "hand_pose_LeftHand", "ActionSpace"]),
            "CreateHandPoseLeftHandActionSpace"
        );
        assert_eq!(PascalCase.rename(&["khr_simple_controller", "Bindings"]), "KhrSimpleControllerBindings");
    }

    #[test]
    fn pascal_case_keeps_inner_case() {
        assert_eq!(PascalCase.rename(&["XRInput"]), "XRInput");
        assert_eq!(PascalCase.rename(&["vector2f", "state"]), "Vector2fState");
        assert_eq!(PascalCase.rename(&["_user_hand_left_input_b_click"]), "UserHandLeftInputBClick");
    }

    #[test]
    fn pascal_case_joins_fragments() {
        assert_eq!(PascalCase.rename(&["a", "b"]), PascalCase.rename(&["a_b"]));
        assert_eq!(PascalCase.rename(&["", "gameplay", "ActionStates"]), "GameplayActionStates");
        assert_eq!(PascalCase.rename(&["hand_pose_both_", "ActionState"]), "HandPoseBothActionState");
    }

    #[test]
    fn pascal_case_empty_input() {
        assert_eq!(PascalCase.rename(&[]), "");
        assert_eq!(PascalCase.rename(&["__", "/", ""]), "");
    }

    #[test]
    fn camel_case_lowers_first_letter() {
        assert_eq!(CamelCase.rename(&["grab", "Value"]), "grabValue");
        assert_eq!(CamelCase.rename(&["/user/hand/left"]), "userHandLeft");
        assert_eq!(CamelCase.rename(&["_"]), "");
    }

    #[test]
    fn snake_case_uses_words() {
        assert_eq!(SnakeCase.rename(&["grab", "Value"]), "grab_value");
        assert_eq!(SnakeCase.rename(&["Create", "HandPose", "ActionSpace"]), "create_hand_pose_action_space");
    }

    #[test]
    fn naming_style_from_str() {
        assert_eq!(NamingStyle::from_str("pascal"), Ok(NamingStyle::Pascal));
        assert_eq!(NamingStyle::from_str("Snake"), Ok(NamingStyle::Snake));
        assert_eq!(NamingStyle::Camel.to_string(), "camel");
        assert!(NamingStyle::from_str("kebab").is_err());
        assert_eq!(NamingStyle::default().converter().rename(&["a", "b"]), "AB");
    }
}
