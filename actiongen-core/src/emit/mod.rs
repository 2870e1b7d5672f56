//! C++ header generation.
//!
//! Each action set becomes three structs: one creating the action set and its actions, one
//! holding the latest action states and one suggesting the manifest's bindings. Every native call
//! in the generated code is guarded by `XR_SUCCEEDED(result)` so the first failure skips the
//! rest and is returned.

mod action_set;
mod action_states;
mod names;
mod suggested_bindings;

use actiongen_types::Manifest;

use crate::{
    error::GenerateError, naming::NamingConvention, topology::ActionSetTopology,
    writer::CodeWriter,
};

pub use names::Names;

const SUCCEEDED: &str = "if (XR_SUCCEEDED(result))";

/// Generates the header for `manifest`. The same manifest and convention always produce the
/// same text.
pub fn generate(
    manifest: &Manifest,
    naming: &dyn NamingConvention,
) -> Result<String, GenerateError> {
    let topologies = manifest
        .action_sets
        .iter()
        .map(ActionSetTopology::derive)
        .collect::<Result<Vec<_>, _>>()?;

    let names = Names::new(naming);
    let mut writer = CodeWriter::new();

    writer.line("#pragma once");
    writer.blank_line();

    for topology in &topologies {
        action_set::write(&mut writer, topology, names);
        action_states::write(&mut writer, topology, names);
        suggested_bindings::write(&mut writer, topology, names);
    }

    Ok(writer.finish())
}

/// Writes a block that only runs while every earlier call succeeded
fn if_succeeded(writer: &mut CodeWriter, body: impl FnOnce(&mut CodeWriter)) {
    writer.block(SUCCEEDED, body)
}
