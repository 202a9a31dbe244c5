//! Generates `trpc-shield` permission scaffolds.
//!
//! Given the operations discovered from a schema, the generator emits a
//! TypeScript module holding an allow-all rule tree, a typed `shield`
//! wrapper and one key union per operation kind. All rendering is pure;
//! only [`construct_shield`] looks at host options to resolve the import of
//! the user's `Context` type.
//!
//! ```
//! let text = shieldgen_core::emit(&["getUser"], &["createPost"], &[], "../context");
//! assert!(text.contains("export type QueryKeys = 'getUser';"));
//! ```

mod config;
mod emitter;
mod error;
mod ir;
mod operations;
mod path;

pub use config::{
    DEFAULT_CONTEXT_PATH, EnvValue, GeneratorConfig, GeneratorOptions, Layout, ShieldConfig,
};
pub use emitter::{construct_shield, emit, render_shield};
pub use error::Error;
pub use ir::{Emit, ImportSpec, RuleGroup, ShieldIR};
pub use operations::{ModelMapping, OperationKind, OperationSet};
pub use path::{normalize, resolve_import_path, resolve_import_path_from};

/// File name of the generated module inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "shield.ts";
