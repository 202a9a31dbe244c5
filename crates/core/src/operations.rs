//! Discovered operations, grouped by kind.

use std::collections::BTreeMap;

use serde::Deserialize;

/// RPC operation kind. Declaration order is the order groups appear in the
/// generated rule tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    /// Read operation
    Query,
    /// Write operation
    Mutation,
    /// Streaming operation
    Subscription,
}

impl OperationKind {
    /// All kinds, in rule tree order.
    pub const ALL: [Self; 3] = [Self::Query, Self::Mutation, Self::Subscription];

    /// Key of this group in the rule tree (`query`).
    pub const fn tree_key(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Name of the union type listing this group's operations (`QueryKeys`).
    pub const fn keys_type_name(self) -> &'static str {
        match self {
            OperationKind::Query => "QueryKeys",
            OperationKind::Mutation => "MutationKeys",
            OperationKind::Subscription => "SubscriptionKeys",
        }
    }

    /// Kind of a model action from the mapping table, if it is exposed as an
    /// operation at all.
    pub fn for_model_action(action: &str) -> Option<Self> {
        match action {
            "findUnique" | "findUniqueOrThrow" | "findFirst" | "findFirstOrThrow" | "findMany"
            | "aggregate" | "groupBy" => Some(OperationKind::Query),
            "createOne" | "createMany" | "deleteOne" | "updateOne" | "deleteMany"
            | "updateMany" | "upsertOne" => Some(OperationKind::Mutation),
            _ => None,
        }
    }
}

/// One row of the model-operation mapping table produced by schema tooling:
/// the model name plus one generated operation name per supported action.
///
/// ```json
/// { "model": "User", "plural": "users", "findUnique": "findUniqueUser", "createOne": "createOneUser" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelMapping {
    /// Model name.
    pub model: String,
    /// Plural accessor name, unused by the generator.
    #[serde(default)]
    pub plural: Option<String>,
    /// Action name to generated operation name. Unsupported actions map to
    /// `null`.
    #[serde(flatten)]
    pub actions: BTreeMap<String, Option<String>>,
}

/// Operation names per kind, in emission order.
///
/// Names are expected to be unique, non-empty identifiers; nothing here
/// checks that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OperationSet {
    /// Query operation names.
    pub queries: Vec<String>,
    /// Mutation operation names.
    pub mutations: Vec<String>,
    /// Subscription operation names.
    pub subscriptions: Vec<String>,
}

impl OperationSet {
    /// Build a set from three name lists.
    pub fn new<Q, M, S>(queries: Q, mutations: M, subscriptions: S) -> Self
    where
        Q: IntoIterator,
        Q::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            queries: queries.into_iter().map(Into::into).collect(),
            mutations: mutations.into_iter().map(Into::into).collect(),
            subscriptions: subscriptions.into_iter().map(Into::into).collect(),
        }
    }

    /// Classify every action of every model and sort each group.
    pub fn from_model_mappings(mappings: &[ModelMapping]) -> Self {
        let mut set = Self::default();
        set.extend_from_model_mappings(mappings);
        set
    }

    /// Add the operations of `mappings` to this set, then sort each group.
    pub fn extend_from_model_mappings(&mut self, mappings: &[ModelMapping]) {
        for mapping in mappings {
            for (action, name) in &mapping.actions {
                let (Some(kind), Some(name)) = (OperationKind::for_model_action(action), name)
                else {
                    continue;
                };
                self.push(kind, name.clone());
            }
        }
        self.sort();
    }

    /// Sort every group lexicographically.
    pub fn sort(&mut self) {
        self.queries.sort();
        self.mutations.sort();
        self.subscriptions.sort();
    }

    /// Append an operation name to its group.
    pub fn push(&mut self, kind: OperationKind, name: impl Into<String>) {
        self.group_mut(kind).push(name.into());
    }

    /// Names of one group.
    pub fn names(&self, kind: OperationKind) -> &[String] {
        match kind {
            OperationKind::Query => &self.queries,
            OperationKind::Mutation => &self.mutations,
            OperationKind::Subscription => &self.subscriptions,
        }
    }

    fn group_mut(&mut self, kind: OperationKind) -> &mut Vec<String> {
        match kind {
            OperationKind::Query => &mut self.queries,
            OperationKind::Mutation => &mut self.mutations,
            OperationKind::Subscription => &mut self.subscriptions,
        }
    }

    /// True when no group has any operation.
    pub fn is_empty(&self) -> bool {
        OperationKind::ALL
            .iter()
            .all(|kind| self.names(*kind).is_empty())
    }

    /// Total number of operations.
    pub fn len(&self) -> usize {
        OperationKind::ALL
            .iter()
            .map(|kind| self.names(*kind).len())
            .sum()
    }
}
