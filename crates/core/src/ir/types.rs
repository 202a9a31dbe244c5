//! TypeScript IR types for the shield module.
//!
//! Only the handful of constructs the permission scaffold needs are modelled:
//! - ImportSpec: the fixed import statements
//! - TsType / TsField: type aliases, unions, mapped and object types
//! - TsExpr / TsObject: the rule tree value and the wrapper call
//! - TsConst, TsFunction, TsTypeDef: top-level items
//! - TsModule: the complete file

/// One of the fixed import statements a shield module can start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpec {
    /// `import * as trpc from '@trpc/server';`
    Trpc,
    /// The shield constructor, the allow marker and the library's rule types.
    TrpcShield,
    /// `import { Context } from '<from>';`
    Context {
        /// Module specifier of the user's context module.
        from: String,
    },
}

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Named type reference, generic arguments included: `ShieldRule<TContext>`
    Ref(String),
    /// Single-quoted string literal type, emitted verbatim: `'getUser'`
    StringLiteral(String),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Mapped type: `{ [K in Keys]?: Value }`
    Mapped {
        /// Name of the key binding (`K`).
        key: String,
        /// Type the key ranges over.
        keys: Box<TsType>,
        /// Whether each mapped property is optional.
        optional: bool,
        /// Property value type.
        value: Box<TsType>,
    },
    /// Object type, one field per line
    Object(Vec<TsField>),
}

/// A line in an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsField {
    /// A property declaration.
    Prop(TsProp),
    /// A reserved, empty line standing in for a property that is absent.
    /// Layouts that keep one line per operation kind render it blank; the
    /// others drop it.
    Vacant,
}

/// Object property definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProp {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: TsType,
    /// `name?:` when true.
    pub optional: bool,
}

/// TypeScript expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsExpr {
    /// Identifier: allow
    Ident(String),
    /// Function call: `callee<T>(a, b)`.
    ///
    /// A call whose only argument is an object literal is broken across
    /// lines; any other call stays on one line.
    Call {
        /// Callee name.
        callee: String,
        /// Explicit generic arguments.
        type_args: Vec<TsType>,
        /// Call arguments.
        args: Vec<TsExpr>,
    },
    /// Type assertion: `expr as Type`
    Cast {
        /// Expression being asserted.
        expr: Box<TsExpr>,
        /// Asserted type.
        ty: TsType,
    },
    /// Object literal
    Object(TsObject),
}

/// Object literal with unquoted keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsObject {
    /// Key/value entries in emission order. Keys are emitted verbatim.
    pub entries: Vec<(String, TsExpr)>,
    /// Every entry, the last included, is followed by a comma. Used for the
    /// top level of the rule tree, whose entries are themselves objects.
    pub terminated: bool,
}

/// `export const name = init;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsConst {
    /// Binding name.
    pub name: String,
    /// Initializer.
    pub init: TsExpr,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParam {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TsType,
    /// `name?:` when true.
    pub optional: bool,
}

/// Exported function whose body is a single `return` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsFunction {
    /// Function name.
    pub name: String,
    /// Generic parameters, constraints included: `TContext extends ...`.
    pub type_params: Vec<String>,
    /// Parameters.
    pub params: Vec<TsParam>,
    /// Returned expression.
    pub returns: TsExpr,
}

/// `export type Name<Params> = Type;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeDef {
    /// Alias name.
    pub name: String,
    /// Generic parameters, constraints included.
    pub type_params: Vec<String>,
    /// Aliased type.
    pub ty: TsType,
}

/// Complete shield module, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsModule {
    /// Leading imports.
    pub imports: Vec<ImportSpec>,
    /// The exported rule tree.
    pub permissions: TsConst,
    /// Typed passthrough to the library constructor.
    pub wrapper: TsFunction,
    /// Mapped-type helper shared by the rule tree fields.
    pub rule_type_map: TsTypeDef,
    /// One key union per non-empty operation group.
    pub key_types: Vec<TsTypeDef>,
    /// Composite rule tree type.
    pub rule_tree: TsTypeDef,
}
