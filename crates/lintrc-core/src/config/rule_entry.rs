//! Rule severity and per-rule configuration entries
//!
//! A rule entry is written either as a bare severity or as a tuple whose
//! first element is the severity and whose remaining elements are the
//! rule-specific options:
//!
//! ```jsonc
//! {
//!   "no-console": "off",
//!   "eqeqeq": 2,
//!   "quotes": ["error", "single", { "avoidEscape": true }]
//! }
//! ```

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Report violations without failing
    Warn,
    /// Report violations as failures
    Error,
}

impl Severity {
    /// Whether the rule runs at all
    pub fn is_enabled(self) -> bool {
        self != Severity::Off
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Parse a severity from its name (`off`/`warn`/`error`) or level (`0`/`1`/`2`)
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::String(name) => Self::from_name(name),
            Value::Number(level) => match level.as_u64() {
                Some(level) => Self::from_level(level),
                None => Err(format!("invalid severity level {level}")),
            },
            other => Err(format!(
                "expected a severity (\"off\", \"warn\", \"error\", 0, 1 or 2), got {other}"
            )),
        }
    }

    /// Severity names are matched case-insensitively
    fn from_name(name: &str) -> Result<Self, String> {
        match name.to_ascii_lowercase().as_str() {
            "off" => Ok(Severity::Off),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(format!(
                "unknown severity '{name}' (expected \"off\", \"warn\" or \"error\")"
            )),
        }
    }

    fn from_level(level: u64) -> Result<Self, String> {
        match level {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Warn),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity level {other} (expected 0, 1 or 2)")),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Severity::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for Severity {
    fn schema_name() -> Cow<'static, str> {
        "Severity".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Rule severity: \"off\" (0), \"warn\" (1) or \"error\" (2)",
            "oneOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "integer", "enum": [0, 1, 2] }
            ]
        })
    }
}

/// Configuration of a single rule: a severity plus rule-specific options
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub severity: Severity,
    pub options: Vec<Value>,
}

impl RuleEntry {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn with_options(severity: Severity, options: Vec<Value>) -> Self {
        Self { severity, options }
    }

    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    pub fn is_enabled(&self) -> bool {
        self.severity.is_enabled()
    }
}

impl From<Severity> for RuleEntry {
    fn from(severity: Severity) -> Self {
        Self::new(severity)
    }
}

impl Serialize for RuleEntry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.options.is_empty() {
            return self.severity.serialize(serializer);
        }

        let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
        seq.serialize_element(&self.severity)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(items) => {
                let mut items = items.into_iter();
                let first = items.next().ok_or_else(|| {
                    serde::de::Error::custom("rule entry array must start with a severity")
                })?;
                let severity = Severity::from_value(&first).map_err(serde::de::Error::custom)?;
                Ok(RuleEntry::with_options(severity, items.collect()))
            }
            other => {
                let severity = Severity::from_value(&other).map_err(serde::de::Error::custom)?;
                Ok(RuleEntry::new(severity))
            }
        }
    }
}

impl JsonSchema for RuleEntry {
    fn schema_name() -> Cow<'static, str> {
        "RuleEntry".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let severity = generator.subschema_for::<Severity>();
        json_schema!({
            "description": "A severity, or an array of a severity followed by rule options",
            "oneOf": [
                severity,
                {
                    "type": "array",
                    "prefixItems": [severity],
                    "minItems": 1
                }
            ]
        })
    }
}
