//! Generator request written by the host for one invocation.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use shieldgen_core::{Error, GeneratorOptions, ModelMapping, OperationSet};

/// Options plus the operations discovered upstream.
///
/// ```json
/// {
///   "schemaPath": "/app/prisma/schema.prisma",
///   "generator": { "output": { "value": "/app/prisma/generated" }, "config": {} },
///   "operations": { "subscriptions": ["onPostCreated"] },
///   "modelOperations": [{ "model": "User", "findMany": "findManyUser" }]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorRequest {
    /// Schema location and generator block.
    pub options: GeneratorOptions,
    /// Operation names handed over as plain lists.
    pub operations: OperationSet,
    /// Model-operation mapping table from the schema tooling.
    pub model_operations: Vec<ModelMapping>,
}

/// The operation part of a request, next to the options.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Discovered {
    #[serde(default)]
    operations: OperationSet,
    #[serde(default)]
    model_operations: Vec<ModelMapping>,
}

impl GeneratorRequest {
    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let Discovered {
            operations,
            model_operations,
        } = Discovered::deserialize(&value)?;
        Ok(Self {
            options: GeneratorOptions::from_json(value)?,
            operations,
            model_operations,
        })
    }

    /// Read and parse a request file.
    pub fn read(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Every operation of the request. Lists given explicitly keep their
    /// order unless a mapping table is present, in which case all groups are
    /// sorted after merging.
    pub fn operation_set(&self) -> OperationSet {
        let mut operations = self.operations.clone();
        if !self.model_operations.is_empty() {
            operations.extend_from_model_mappings(&self.model_operations);
        }
        operations
    }
}
