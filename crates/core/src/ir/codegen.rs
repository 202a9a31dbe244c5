//! Code generation from Shield IR to TypeScript AST.
//!
//! The generated AST can then be emitted to strings via the `Emit` trait.

use super::shield::{RuleGroup, ShieldIR};
use super::types::{
    ImportSpec, TsConst, TsExpr, TsField, TsFunction, TsModule, TsObject, TsParam, TsProp, TsType,
    TsTypeDef,
};
use crate::operations::OperationKind;

/// Token granting unrestricted access to an operation.
const ALLOW_MARKER: &str = "allow";

/// Generate the complete shield module from Shield IR.
pub fn codegen_module(ir: &ShieldIR) -> TsModule {
    TsModule {
        imports: vec![
            ImportSpec::TrpcShield,
            ImportSpec::Context {
                from: ir.context_import.clone(),
            },
        ],
        permissions: codegen_permissions(&ir.groups),
        wrapper: codegen_wrapper(),
        rule_type_map: codegen_rule_type_map(),
        key_types: ir.groups.iter().map(codegen_key_type).collect(),
        rule_tree: codegen_rule_tree(ir),
    }
}

/// `export const permissions = shield<Context>({ query: { name: allow } })`
fn codegen_permissions(groups: &[RuleGroup]) -> TsConst {
    let tree = TsObject {
        entries: groups
            .iter()
            .map(|group| {
                (
                    group.kind.tree_key().to_string(),
                    TsExpr::Object(codegen_group(group)),
                )
            })
            .collect(),
        terminated: true,
    };

    TsConst {
        name: "permissions".into(),
        init: TsExpr::Call {
            callee: "shield".into(),
            type_args: vec![TsType::Ref("Context".into())],
            args: vec![TsExpr::Object(tree)],
        },
    }
}

fn codegen_group(group: &RuleGroup) -> TsObject {
    TsObject {
        entries: group
            .names
            .iter()
            .map(|name| (name.clone(), TsExpr::Ident(ALLOW_MARKER.into())))
            .collect(),
        terminated: false,
    }
}

/// Typed passthrough so user code builds its tree against `RuleTree`.
fn codegen_wrapper() -> TsFunction {
    TsFunction {
        name: "shield".into(),
        type_params: vec!["TContext extends Record<string, any>".into()],
        params: vec![
            TsParam {
                name: "ruleTree".into(),
                ty: TsType::Ref("RuleTree<TContext>".into()),
                optional: false,
            },
            TsParam {
                name: "options".into(),
                ty: TsType::Ref("IOptions<TContext>".into()),
                optional: true,
            },
        ],
        returns: TsExpr::Call {
            callee: "trpcShield".into(),
            type_args: vec![],
            args: vec![
                TsExpr::Cast {
                    expr: Box::new(TsExpr::Ident("ruleTree".into())),
                    ty: TsType::Ref("IRules<TContext>".into()),
                },
                TsExpr::Ident("options".into()),
            ],
        },
    }
}

fn codegen_rule_type_map() -> TsTypeDef {
    TsTypeDef {
        name: "RuleTypeMap".into(),
        type_params: vec!["TContext".into(), "IRuleKeys extends string".into()],
        ty: TsType::Mapped {
            key: "K".into(),
            keys: Box::new(TsType::Ref("IRuleKeys".into())),
            optional: true,
            value: Box::new(TsType::Union(vec![
                TsType::Ref("ShieldRule<TContext>".into()),
                TsType::Ref("IRuleFieldMap<TContext>".into()),
            ])),
        },
    }
}

/// `export type QueryKeys = 'a' | 'b';`
fn codegen_key_type(group: &RuleGroup) -> TsTypeDef {
    TsTypeDef {
        name: group.kind.keys_type_name().into(),
        type_params: vec![],
        ty: TsType::Union(
            group
                .names
                .iter()
                .map(|name| TsType::StringLiteral(name.clone()))
                .collect(),
        ),
    }
}

/// One optional field per operation kind; kinds without operations leave a
/// vacant slot.
fn codegen_rule_tree(ir: &ShieldIR) -> TsTypeDef {
    let fields = OperationKind::ALL
        .into_iter()
        .map(|kind| match ir.group(kind) {
            Some(_) => TsField::Prop(TsProp {
                name: kind.tree_key().into(),
                ty: TsType::Union(vec![
                    TsType::Ref("ShieldRule<TContext>".into()),
                    TsType::Ref(format!("RuleTypeMap<TContext, {}>", kind.keys_type_name())),
                ]),
                optional: true,
            }),
            None => TsField::Vacant,
        })
        .collect();

    TsTypeDef {
        name: "RuleTree".into(),
        type_params: vec!["TContext".into()],
        ty: TsType::Object(fields),
    }
}
