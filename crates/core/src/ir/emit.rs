//! TypeScript code emission via the Emit trait.
//!
//! Every AST node renders itself for a given [`Layout`]. The layout only
//! changes whitespace: separators inside the rule tree, indentation of the
//! declarations that follow it, and whether absent rule tree fields keep a
//! blank line.

use super::types::{
    ImportSpec, TsConst, TsExpr, TsField, TsFunction, TsModule, TsObject, TsParam, TsProp, TsType,
    TsTypeDef,
};
use crate::config::Layout;

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its TypeScript string representation.
    fn emit(&self, layout: Layout) -> String;
}

/// Whitespace choices of a layout.
#[derive(Debug, Clone, Copy)]
struct Style {
    /// Between the entries of an operation group.
    entry_separator: &'static str,
    /// Between the (comma-terminated) groups of the rule tree.
    tree_separator: &'static str,
    /// Between the import block and the rule tree.
    after_imports: &'static str,
    /// Leading indentation of the declarations after the rule tree.
    block_indent: &'static str,
    /// Indentation of lines inside those declarations.
    body_indent: &'static str,
    /// Appended after the last key union.
    key_types_suffix: &'static str,
    /// Appended at the very end of the module.
    trailer: &'static str,
    /// Absent rule tree fields still occupy a (blank) line.
    keep_vacant_fields: bool,
}

const UNIFORM: Style = Style {
    entry_separator: ",\n  ",
    tree_separator: "\n",
    after_imports: "\n",
    block_indent: "",
    body_indent: "  ",
    key_types_suffix: "",
    trailer: "\n",
    keep_vacant_fields: false,
};

const CLASSIC: Style = Style {
    entry_separator: ",\r\n",
    tree_separator: "",
    after_imports: "\n\n",
    block_indent: "  ",
    body_indent: "    ",
    key_types_suffix: "\n",
    trailer: "",
    keep_vacant_fields: true,
};

impl Style {
    const fn of(layout: Layout) -> Self {
        match layout {
            Layout::Uniform => UNIFORM,
            Layout::Classic => CLASSIC,
        }
    }
}

fn join_emitted<T: Emit>(items: &[T], layout: Layout, separator: &str) -> String {
    items
        .iter()
        .map(|item| item.emit(layout))
        .collect::<Vec<_>>()
        .join(separator)
}

fn type_params(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}

// =============================================================================
// Imports
// =============================================================================

impl Emit for ImportSpec {
    fn emit(&self, _layout: Layout) -> String {
        match self {
            ImportSpec::Trpc => "import * as trpc from '@trpc/server';\n".to_string(),
            ImportSpec::TrpcShield => concat!(
                "import { shield as trpcShield, allow } from 'trpc-shield';\n",
                "import { IOptions, IRuleFieldMap, IRules, ShieldRule } from 'trpc-shield/lib/types';\n",
            )
            .to_string(),
            ImportSpec::Context { from } => format!("import {{ Context }} from '{from}';\n"),
        }
    }
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsType {
    fn emit(&self, layout: Layout) -> String {
        let style = Style::of(layout);
        match self {
            TsType::Ref(name) => name.clone(),
            // Names are trusted to be string-literal safe; nothing is escaped.
            TsType::StringLiteral(value) => format!("'{value}'"),
            TsType::Union(types) => join_emitted(types, layout, " | "),
            TsType::Mapped {
                key,
                keys,
                optional,
                value,
            } => {
                let opt = if *optional { "?" } else { "" };
                format!(
                    "{{\n{}[{key} in {}]{opt}: {}\n{}}}",
                    style.body_indent,
                    keys.emit(layout),
                    value.emit(layout),
                    style.block_indent,
                )
            }
            TsType::Object(fields) => {
                let lines: Vec<String> = fields
                    .iter()
                    .filter(|field| style.keep_vacant_fields || !matches!(field, TsField::Vacant))
                    .map(|field| format!("{}{}", style.body_indent, field.emit(layout)))
                    .collect();
                if lines.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{\n{}\n{}}}", lines.join("\n"), style.block_indent)
                }
            }
        }
    }
}

impl Emit for TsField {
    fn emit(&self, layout: Layout) -> String {
        match self {
            TsField::Prop(prop) => prop.emit(layout),
            TsField::Vacant => String::new(),
        }
    }
}

impl Emit for TsProp {
    fn emit(&self, layout: Layout) -> String {
        let opt = if self.optional { "?" } else { "" };
        format!("{}{opt}: {};", self.name, self.ty.emit(layout))
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for TsExpr {
    fn emit(&self, layout: Layout) -> String {
        match self {
            TsExpr::Ident(name) => name.clone(),
            TsExpr::Call {
                callee,
                type_args,
                args,
            } => {
                let generics = if type_args.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", join_emitted(type_args, layout, ", "))
                };
                match args.as_slice() {
                    [object @ TsExpr::Object(_)] => {
                        format!("{callee}{generics}(\n  {}\n)", object.emit(layout))
                    }
                    _ => format!("{callee}{generics}({})", join_emitted(args, layout, ", ")),
                }
            }
            TsExpr::Cast { expr, ty } => format!("{} as {}", expr.emit(layout), ty.emit(layout)),
            TsExpr::Object(object) => object.emit(layout),
        }
    }
}

impl Emit for TsObject {
    fn emit(&self, layout: Layout) -> String {
        let style = Style::of(layout);
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| {
                let comma = if self.terminated { "," } else { "" };
                format!("{key}: {}{comma}", value.emit(layout))
            })
            .collect::<Vec<_>>();
        let separator = if self.terminated {
            style.tree_separator
        } else {
            style.entry_separator
        };
        format!("{{\n  {}\n}}", entries.join(separator))
    }
}

impl Emit for TsParam {
    fn emit(&self, layout: Layout) -> String {
        let opt = if self.optional { "?" } else { "" };
        format!("{}{opt}: {}", self.name, self.ty.emit(layout))
    }
}

// =============================================================================
// Declarations
// =============================================================================

impl Emit for TsConst {
    fn emit(&self, layout: Layout) -> String {
        format!("export const {} = {};", self.name, self.init.emit(layout))
    }
}

impl Emit for TsFunction {
    fn emit(&self, layout: Layout) -> String {
        let style = Style::of(layout);
        format!(
            "export function {}{}({}) {{\n{}return {};\n{}}}",
            self.name,
            type_params(&self.type_params),
            join_emitted(&self.params, layout, ", "),
            style.body_indent,
            self.returns.emit(layout),
            style.block_indent,
        )
    }
}

impl Emit for TsTypeDef {
    fn emit(&self, layout: Layout) -> String {
        format!(
            "export type {}{} = {};",
            self.name,
            type_params(&self.type_params),
            self.ty.emit(layout)
        )
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit(&self, layout: Layout) -> String {
        let style = Style::of(layout);
        let gap = format!("\n\n{}", style.block_indent);

        let mut output: String = self.imports.iter().map(|import| import.emit(layout)).collect();
        output.push_str(style.after_imports);
        output.push_str(&self.permissions.emit(layout));

        output.push_str(&gap);
        output.push_str(&self.wrapper.emit(layout));

        output.push_str(&gap);
        output.push_str(&self.rule_type_map.emit(layout));

        output.push_str(&gap);
        output.push_str(&join_emitted(&self.key_types, layout, "\n"));
        output.push_str(style.key_types_suffix);

        output.push_str(&gap);
        output.push_str(&self.rule_tree.emit(layout));
        output.push_str(style.trailer);

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
