//! Intermediate representation for shield module generation.
//!
//! Three layers, each testable on its own:
//! 1. Shield IR: the non-empty operation groups and the context import
//! 2. TypeScript AST IR: imports, the rule tree value, type declarations
//! 3. Emission: AST to text via the `Emit` trait, per `Layout`
//!
//! ## Module Structure
//!
//! - `shield`: OperationSet -> Shield IR
//! - `types`: TypeScript AST IR
//! - `codegen`: Shield IR -> TypeScript AST
//! - `emit`: TypeScript AST -> code strings

mod codegen;
mod emit;
mod shield;
mod types;

pub use codegen::codegen_module;
pub use emit::Emit;
pub use shield::{RuleGroup, ShieldIR};
pub use types::ImportSpec;
