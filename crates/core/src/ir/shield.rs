//! Shield-level IR: what goes into the permission module, before any
//! TypeScript is shaped.

use crate::operations::{OperationKind, OperationSet};

/// Operations of one kind, all granted the allow marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    /// Operation kind of the group.
    pub kind: OperationKind,
    /// Operation names, in input order. Never empty.
    pub names: Vec<String>,
}

/// Everything needed to render one shield module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShieldIR {
    /// Non-empty groups in rule tree order.
    pub groups: Vec<RuleGroup>,
    /// Module specifier of the user's context module.
    pub context_import: String,
}

impl ShieldIR {
    /// Group `operations` for emission. `None` when there is nothing to emit.
    pub fn new(operations: &OperationSet, context_import: &str) -> Option<Self> {
        let groups: Vec<RuleGroup> = OperationKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let names = operations.names(kind);
                (!names.is_empty()).then(|| RuleGroup {
                    kind,
                    names: names.to_vec(),
                })
            })
            .collect();

        if groups.is_empty() {
            return None;
        }

        Some(Self {
            groups,
            context_import: context_import.to_string(),
        })
    }

    /// The group of `kind`, if it has any operation.
    pub fn group(&self, kind: OperationKind) -> Option<&RuleGroup> {
        self.groups.iter().find(|group| group.kind == kind)
    }
}
