//! Generates a C++ header wrapping the OpenXR calls for an action manifest.
//!
//!   actiongen actions.json
//!   actiongen actions.json --out include/actions.h --naming snake
//!   actiongen actions.json --stdout

use std::{path::PathBuf, process::ExitCode};

use actiongen_core::{generate_file, output_path, read_header, GeneratorOptions, NamingStyle};
use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use log::{debug, LevelFilter};

#[derive(Parser, Debug)]
#[command(
    name = "actiongen",
    version,
    about = "Generate a C++ OpenXR header from an action manifest"
)]
struct Args {
    /// Action manifest to read (JSON, comments and trailing commas allowed)
    manifest: PathBuf,

    /// Where to write the header (defaults to the manifest path with an `.h` extension)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Identifier style in the generated code: pascal | camel | snake
    #[arg(long, default_value_t = NamingStyle::Pascal)]
    naming: NamingStyle,

    /// Print the header instead of writing it
    #[arg(long, conflicts_with = "out")]
    stdout: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = GeneratorOptions {
        naming: args.naming,
    };
    debug!("{args:?}");

    if args.stdout {
        let header = read_header(&args.manifest, &options).with_context(|| {
            format!("Failed to generate a header for `{}`", args.manifest.display())
        })?;
        print!("{header}");
        return Ok(());
    }

    let output = args
        .out
        .clone()
        .unwrap_or_else(|| output_path(&args.manifest));
    generate_file(&args.manifest, &output, &options)
        .with_context(|| format!("Failed to generate `{}`", output.display()))
}
