use actiongen_types::{ActionSet, SubactionPath, UserPath};

use crate::naming::NamingConvention;

const INTERACTION_PROFILES_ROOT: &str = "/interaction_profiles/";

/// Identifiers of everything declared in the generated header
#[derive(Clone, Copy)]
pub struct Names<'a> {
    naming: &'a dyn NamingConvention,
}

impl<'a> Names<'a> {
    pub fn new(naming: &'a dyn NamingConvention) -> Self {
        Self { naming }
    }

    fn rename(&self, fragments: &[&str]) -> String {
        self.naming.rename(fragments)
    }

    pub fn action_set_struct(&self, action_set: &ActionSet) -> String {
        self.rename(&[action_set.name.as_str(), "ActionSet"])
    }

    pub fn action_states_struct(&self, action_set: &ActionSet) -> String {
        self.rename(&[action_set.name.as_str(), "ActionStates"])
    }

    pub fn suggested_bindings_struct(&self, action_set: &ActionSet) -> String {
        self.rename(&[action_set.name.as_str(), "SuggestedBindings"])
    }

    pub fn action_set_handle(&self) -> String {
        self.rename(&["ActionSet"])
    }

    pub fn action_handle(&self, action_name: &str) -> String {
        self.rename(&[action_name])
    }

    pub fn subaction_path(&self, user_path: UserPath) -> String {
        self.rename(&[user_path.name()])
    }

    pub fn action_space_helper(&self, action_name: &str, subaction_path: SubactionPath) -> String {
        self.rename(&[
            "Create",
            with_subaction(action_name, subaction_path).as_str(),
            "ActionSpace",
        ])
    }

    pub fn action_state(&self, action_name: &str, subaction_path: SubactionPath) -> String {
        self.rename(&[with_subaction(action_name, subaction_path).as_str(), "ActionState"])
    }

    /// Pointer to an action's state in `SubactionStates`
    pub fn action_state_ref(&self, action_name: &str) -> String {
        self.rename(&[action_name, "ActionState"])
    }

    pub fn subaction_states_path(&self) -> String {
        self.rename(&["SubactionPath"])
    }

    pub fn interaction_profile(&self, interaction_profile: &str) -> String {
        self.rename(&[profile_fragment(interaction_profile).as_str()])
    }

    pub fn binding_table(&self, interaction_profile: &str) -> String {
        self.rename(&[profile_fragment(interaction_profile).as_str(), "Bindings"])
    }

    pub fn binding_path(&self, binding_path: &str) -> String {
        self.rename(&[binding_path.replace('/', "_").as_str()])
    }
}

fn with_subaction(name: &str, subaction_path: SubactionPath) -> String {
    format!("{name}_{}", subaction_path.name())
}

fn profile_fragment(interaction_profile: &str) -> String {
    interaction_profile
        .replace(INTERACTION_PROFILES_ROOT, "")
        .replace('/', "_")
}
