//! Generator configuration and host-supplied options.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Context module location used when the generator block does not set one.
pub const DEFAULT_CONTEXT_PATH: &str = "../../../../src/context";

/// Whitespace layout of the generated module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// LF line endings everywhere, one rule group per line, declarations at
    /// column zero.
    #[default]
    Uniform,
    /// Byte-for-byte the layout of previously generated shield files: CRLF
    /// between the entries of a group, groups run together, indented
    /// declarations and blank lines for absent rule tree fields.
    Classic,
}

impl Layout {
    /// Config value naming this layout.
    pub const fn as_str(self) -> &'static str {
        match self {
            Layout::Uniform => "uniform",
            Layout::Classic => "classic",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "uniform" => Ok(Layout::Uniform),
            "classic" => Ok(Layout::Classic),
            other => Err(Error::Config(format!(
                "unknown layout '{other}', expected 'uniform' or 'classic'"
            ))),
        }
    }
}

/// Settings read from the generator block of the schema.
///
/// Generator blocks only carry strings, so every field is a string on the
/// wire. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShieldConfig {
    /// Path of the module exporting `Context`, relative to the schema file.
    #[serde(default = "default_context_path")]
    pub context_path: String,
    /// Output layout.
    #[serde(default)]
    pub layout: Layout,
}

fn default_context_path() -> String {
    DEFAULT_CONTEXT_PATH.to_string()
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            context_path: default_context_path(),
            layout: Layout::default(),
        }
    }
}

impl ShieldConfig {
    /// Parse a generator config object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(|err| Error::Config(err.to_string()))
    }
}

/// A value that is either given literally or read from an environment
/// variable, as the host hands over the generator output location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvValue {
    /// Name of the environment variable holding the value.
    #[serde(default)]
    pub from_env_var: Option<String>,
    /// Literal value.
    #[serde(default)]
    pub value: Option<String>,
}

impl EnvValue {
    /// A literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            from_env_var: None,
            value: Some(value.into()),
        }
    }

    /// A value read from `var`.
    pub fn from_env(var: impl Into<String>) -> Self {
        Self {
            from_env_var: Some(var.into()),
            value: None,
        }
    }

    /// Resolve to a concrete string.
    ///
    /// The environment variable wins when it is named; hosts serialise "no
    /// variable" as the string `null`, which counts as unset.
    pub fn resolve(&self) -> Result<String, Error> {
        match self.from_env_var.as_deref() {
            Some(var) if var != "null" => {
                env::var(var).map_err(|_| Error::MissingEnvVar(var.to_string()))
            }
            _ => self.value.clone().ok_or(Error::MissingOutput),
        }
    }
}

/// Generator block as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Output directory of the generator.
    pub output: EnvValue,
    /// Generator-specific settings.
    #[serde(default)]
    pub config: ShieldConfig,
}

/// Per-invocation options from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Location of the schema file the operations were discovered from.
    pub schema_path: PathBuf,
    /// The generator block.
    pub generator: GeneratorConfig,
}

impl GeneratorOptions {
    /// Options from host JSON. The generator block's `config` goes through
    /// [`ShieldConfig::from_json`], so mistakes in it are reported as
    /// [`Error::Config`] rather than as malformed JSON.
    pub fn from_json(mut value: serde_json::Value) -> Result<Self, Error> {
        let config = value
            .get_mut("generator")
            .and_then(serde_json::Value::as_object_mut)
            .and_then(|generator| generator.remove("config"));

        let mut options: Self = serde_json::from_value(value)?;
        if let Some(config) = config.filter(|config| !config.is_null()) {
            options.generator.config = ShieldConfig::from_json(config)?;
        }
        Ok(options)
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> Result<PathBuf, Error> {
        self.generator.output.resolve().map(PathBuf::from)
    }
}
