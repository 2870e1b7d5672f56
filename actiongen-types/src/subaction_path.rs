use crate::UnsupportedSubactionPath;

/// Top level user paths that can qualify an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserPath {
    HandLeft,
    HandRight,
}

impl UserPath {
    pub const ALL: [UserPath; 2] = [UserPath::HandLeft, UserPath::HandRight];

    pub fn path(self) -> &'static str {
        match self {
            UserPath::HandLeft => "/user/hand/left",
            UserPath::HandRight => "/user/hand/right",
        }
    }

    /// Fragment used when naming members that belong to this user path
    pub fn name(self) -> &'static str {
        match self {
            UserPath::HandLeft => "LeftHand",
            UserPath::HandRight => "RightHand",
        }
    }

    /// Finds the user path a binding path lives under.
    ///
    /// The binding must continue past the user path, `/user/hand/left` on its own is rejected.
    pub fn from_binding(binding: &str) -> Result<Self, UnsupportedSubactionPath> {
        Self::ALL
            .into_iter()
            .find(|user_path| {
                binding
                    .strip_prefix(user_path.path())
                    .map_or(false, |rest| rest.starts_with('/'))
            })
            .ok_or_else(|| UnsupportedSubactionPath(binding.to_owned()))
    }
}

/// The subaction an action's state is read through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubactionPath {
    /// The action is not filtered by any user path
    Null,
    User(UserPath),
}

impl SubactionPath {
    pub fn name(self) -> &'static str {
        match self {
            SubactionPath::Null => "",
            SubactionPath::User(user_path) => user_path.name(),
        }
    }
}

impl From<UserPath> for SubactionPath {
    fn from(user_path: UserPath) -> Self {
        SubactionPath::User(user_path)
    }
}
