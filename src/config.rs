//! `dotnet-to-ts.config.json` loading, validation and defaults.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CONFIG_FILE: &str = "dotnet-to-ts.config.json";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// glob patterns for C# sources, relative to the working directory unless absolute
    pub input: Vec<String>,
    /// output `.ts` file
    pub output: PathBuf,
    pub options: GeneratorOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub indentation: String,
    pub add_timestamp: bool,
    pub export_interfaces: bool,
    pub property_naming_convention: NamingConvention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamingConvention {
    #[default]
    #[serde(rename = "preserve")]
    Preserve,
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("Invalid JSON in config file: {}", .0.display())]
    InvalidJson(PathBuf),
    #[error("Config must have \"input\" field")]
    MissingInput,
    #[error("\"input\" must be an array of glob patterns")]
    InputNotArray,
    #[error("\"input\" array cannot be empty")]
    EmptyInput,
    #[error("Config must have \"output\" field")]
    MissingOutput,
    #[error("\"output\" must be a string")]
    OutputNotString,
    #[error("Invalid generator option {0}")]
    InvalidOption(String),
}

/// Options as written by the user; every key optional, unknown keys ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    indentation: Option<String>,
    add_timestamp: Option<bool>,
    export_interfaces: Option<bool>,
    property_naming_convention: Option<NamingConvention>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indentation: "  ".to_string(),
            add_timestamp: true,
            export_interfaces: true,
            property_naming_convention: NamingConvention::Preserve,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: vec!["**/*.cs".to_string()],
            output: PathBuf::from("generated.ts"),
            options: GeneratorOptions::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value = serde_json::from_str::<Value>(&source)
            .map_err(|_| ConfigError::InvalidJson(path.to_path_buf()))?;
        Self::from_value(value)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    /// Every other failure still surfaces.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Validate a parsed document and merge its options over the defaults.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let input = match value.get("input") {
            None | Some(Value::Null) => return Err(ConfigError::MissingInput),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or(ConfigError::InputNotArray))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(ConfigError::InputNotArray),
        };
        if input.is_empty() {
            return Err(ConfigError::EmptyInput);
        }

        let output = match value.get("output") {
            None | Some(Value::Null) => return Err(ConfigError::MissingOutput),
            Some(Value::String(s)) if s.is_empty() => return Err(ConfigError::MissingOutput),
            Some(Value::String(s)) => PathBuf::from(s),
            Some(_) => return Err(ConfigError::OutputNotString),
        };

        let raw = match value.get("options") {
            None | Some(Value::Null) => RawOptions::default(),
            Some(options) => crate::path_de::from_value_with_path::<RawOptions>(options.clone())
                .map_err(ConfigError::InvalidOption)?,
        };

        Ok(Self { input, output, options: raw.merge_over(GeneratorOptions::default()) })
    }

    /// Pretty JSON in the on-disk format, as written by `init`.
    pub fn to_json_pretty(&self) -> String {
        // a struct of strings, bools and unit variants always serializes
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl RawOptions {
    fn merge_over(self, defaults: GeneratorOptions) -> GeneratorOptions {
        GeneratorOptions {
            indentation: self.indentation.unwrap_or(defaults.indentation),
            add_timestamp: self.add_timestamp.unwrap_or(defaults.add_timestamp),
            export_interfaces: self.export_interfaces.unwrap_or(defaults.export_interfaces),
            property_naming_convention: self
                .property_naming_convention
                .unwrap_or(defaults.property_naming_convention),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
