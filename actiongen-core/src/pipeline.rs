//! Manifest file in, header file out.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{emit, error::Error, naming::NamingStyle, parser};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub naming: NamingStyle,
}

/// Parses `text` and generates its header
pub fn generate_header(text: &str, options: &GeneratorOptions) -> Result<String, Error> {
    let manifest = parser::parse(text)?;
    debug!(
        "Parsed {} action set(s): {:?}",
        manifest.action_sets.len(),
        manifest
            .action_sets
            .iter()
            .map(|action_set| action_set.name.as_str())
            .collect::<Vec<_>>()
    );

    let header = emit::generate(&manifest, options.naming.converter())?;
    debug!(
        "Generated {} line(s) with {} naming",
        header.lines().count(),
        options.naming
    );
    Ok(header)
}

/// The header written for `manifest` when no output path is given, next to it with an `h`
/// extension
pub fn output_path(manifest: &Path) -> PathBuf {
    manifest.with_extension("h")
}

/// Reads the manifest at `input` and generates its header
pub fn read_header(input: &Path, options: &GeneratorOptions) -> Result<String, Error> {
    debug!("Reading manifest {}", input.display());
    let text = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_owned(),
        source,
    })?;

    generate_header(&text, options)
}

/// Reads `input`, generates its header and writes it to `output`.
///
/// Nothing is written unless generation succeeded.
pub fn generate_file(input: &Path, output: &Path, options: &GeneratorOptions) -> Result<(), Error> {
    let header = read_header(input, options)?;

    fs::write(output, header).map_err(|source| Error::Write {
        path: output.to_owned(),
        source,
    })?;
    info!("Wrote {}", output.display());

    Ok(())
}
