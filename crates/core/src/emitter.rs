//! Shield module emitter.
//!
//! The pipeline is:
//! 1. Group: OperationSet -> ShieldIR (nothing to emit when all groups are empty)
//! 2. Codegen: ShieldIR -> TsModule (TypeScript AST)
//! 3. Emit: TsModule -> String (via Emit trait)

use tracing::debug;

use crate::config::{GeneratorOptions, Layout, ShieldConfig};
use crate::error::Error;
use crate::ir::{Emit, ShieldIR, codegen_module};
use crate::operations::OperationSet;
use crate::path::resolve_import_path;

/// Render the shield module for three operation name lists in the default
/// layout.
///
/// Returns the empty string when all three lists are empty, which tells the
/// caller there is no file to write.
pub fn emit<S: AsRef<str>>(
    queries: &[S],
    mutations: &[S],
    subscriptions: &[S],
    context_import_path: &str,
) -> String {
    let operations = OperationSet::new(
        queries.iter().map(S::as_ref),
        mutations.iter().map(S::as_ref),
        subscriptions.iter().map(S::as_ref),
    );
    render_shield(&operations, context_import_path, Layout::default())
}

/// Render the shield module for `operations`, importing `Context` from
/// `context_import_path` verbatim.
pub fn render_shield(operations: &OperationSet, context_import_path: &str, layout: Layout) -> String {
    ShieldIR::new(operations, context_import_path)
        .map(|ir| codegen_module(&ir).emit(layout))
        .unwrap_or_default()
}

/// Render the shield module for a generator invocation: the context import
/// is resolved from the configured context path, the schema location and the
/// output directory.
///
/// Nothing is resolved when there are no operations, so an unset output
/// location is only an error when there is something to write.
pub fn construct_shield(
    operations: &OperationSet,
    config: &ShieldConfig,
    options: &GeneratorOptions,
) -> Result<String, Error> {
    if operations.is_empty() {
        debug!("No operations discovered, nothing to emit.");
        return Ok(String::new());
    }

    let output_dir = options.output_dir()?;
    let context_import =
        resolve_import_path(&output_dir, &config.context_path, &options.schema_path)?;

    debug!(
        output_dir = %output_dir.display(),
        context_import = %context_import,
        operations = operations.len(),
        layout = %config.layout,
        "Resolved shield context import."
    );

    Ok(render_shield(operations, &context_import, config.layout))
}
