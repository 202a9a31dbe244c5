//! `shieldgen generate`: run the generator for a host request.

use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use shieldgen_core::{Error, OUTPUT_FILE_NAME, construct_shield};

use crate::request::GeneratorRequest;
use crate::run_cli;

/// Arguments of `shieldgen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Generator request JSON written by the host
    #[arg(long = "request", value_name = "REQUEST_JSON")]
    pub request: PathBuf,
    /// Print the module to stdout instead of writing it to the output directory
    #[arg(long)]
    pub stdout: bool,
}

/// What a generate run did with the module text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The module was written to this path.
    Written(PathBuf),
    /// The module was printed to stdout.
    Printed,
    /// There were no operations, so no file was written.
    Skipped,
}

/// Generate the shield module for a host request.
pub fn run(args: GenerateArgs) -> i32 {
    run_cli(|| {
        match generate(&args).map_err(|err| err.to_string())? {
            Outcome::Written(path) => println!("generated {}", path.display()),
            Outcome::Skipped => println!("skipped, no operations"),
            Outcome::Printed => {}
        }
        Ok(())
    })
}

/// Run the generator for one request file.
pub fn generate(args: &GenerateArgs) -> Result<Outcome, Error> {
    let request = GeneratorRequest::read(&args.request)?;
    let operations = request.operation_set();

    debug!(
        request = %args.request.display(),
        queries = operations.queries.len(),
        mutations = operations.mutations.len(),
        subscriptions = operations.subscriptions.len(),
        "Loaded generator request."
    );

    let text = construct_shield(&operations, &request.options.generator.config, &request.options)?;

    if args.stdout {
        print!("{text}");
        return Ok(Outcome::Printed);
    }

    // An empty module needs no output location.
    if text.is_empty() {
        info!("No operations discovered, shield module not written.");
        return Ok(Outcome::Skipped);
    }

    let output_dir = request.options.output_dir()?;
    Ok(write_shield(&output_dir, &text)?.map_or(Outcome::Skipped, Outcome::Written))
}

/// Persist `text` as the shield module inside `output_dir`.
///
/// Empty text is never written; `Ok(None)` reports the skip.
pub fn write_shield(output_dir: &Path, text: &str) -> Result<Option<PathBuf>, Error> {
    if text.is_empty() {
        info!(
            output_dir = %output_dir.display(),
            "Empty shield module, nothing written."
        );
        return Ok(None);
    }

    fs::create_dir_all(output_dir).map_err(|source| Error::Io {
        action: "create",
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(OUTPUT_FILE_NAME);
    fs::write(&path, text).map_err(|source| Error::Io {
        action: "write",
        path: path.clone(),
        source,
    })?;

    info!(
        path = %path.display(),
        bytes = text.len(),
        "Shield module written."
    );

    Ok(Some(path))
}
