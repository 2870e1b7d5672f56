use std::{io, path::PathBuf};

use actiongen_types::UnsupportedSubactionPath;
use thiserror::Error;

/// Why a manifest could not be read. `location` is a path into the document such as
/// `actionSets[0].actions[2].type`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed input at `{location}`: {message}")]
    MalformedInput { location: String, message: String },
    #[error("Missing required field `{field}` at `{location}`")]
    MissingRequiredField { location: String, field: String },
    #[error("Unknown {kind} `{value}` at `{location}`")]
    UnknownEnumValue {
        location: String,
        kind: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    UnsupportedSubactionPath(#[from] UnsupportedSubactionPath),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("Failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
