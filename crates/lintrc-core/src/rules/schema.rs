//! Option schemas declared by rules
//!
//! A rule's options are the tuple elements after the severity in its rule
//! entry. The schema describes them positionally:
//!
//! ```yaml
//! schema:
//!   kind: tuple
//!   items:
//!     - type: enum
//!       values: [single, double]
//!     - type: object
//!       properties:
//!         avoidEscape: { type: boolean }
//! ```

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Positional option schema of a rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OptionSchema {
    /// The rule takes no options
    #[default]
    #[serde(rename = "none")]
    NoOptions,
    /// Options are not checked
    Any,
    /// Options are checked element by element
    #[serde(rename_all = "camelCase")]
    Tuple {
        items: Vec<OptionType>,
        #[serde(default)]
        min_items: usize,
    },
}

/// Type of a single option value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OptionType {
    Any,
    Boolean,
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maximum: Option<i64>,
    },
    Number,
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
    },
    Enum {
        values: Vec<Value>,
    },
    Array {
        items: Box<OptionType>,
    },
    #[serde(rename_all = "camelCase")]
    Object {
        #[serde(default)]
        properties: IndexMap<String, OptionType>,
        #[serde(default)]
        required: Vec<String>,
        #[serde(default)]
        additional_properties: bool,
    },
    OneOf {
        variants: Vec<OptionType>,
    },
}

impl OptionSchema {
    /// Schema for rules taking no options
    pub fn none() -> Self {
        OptionSchema::NoOptions
    }

    /// A single optional option
    pub fn single(item: OptionType) -> Self {
        OptionSchema::Tuple {
            items: vec![item],
            min_items: 0,
        }
    }

    /// Several optional positional options
    pub fn tuple(items: Vec<OptionType>) -> Self {
        OptionSchema::Tuple {
            items,
            min_items: 0,
        }
    }

    /// Check configured options against the schema
    ///
    /// The error describes the first mismatch and where it occurred.
    pub fn validate(&self, options: &[Value]) -> Result<(), String> {
        match self {
            OptionSchema::NoOptions => {
                if options.is_empty() {
                    Ok(())
                } else {
                    Err(format!(
                        "rule accepts no options, got {} option(s)",
                        options.len()
                    ))
                }
            }
            OptionSchema::Any => Ok(()),
            OptionSchema::Tuple { items, min_items } => {
                if options.len() > items.len() {
                    return Err(format!(
                        "expected at most {} option(s), got {}",
                        items.len(),
                        options.len()
                    ));
                }
                if options.len() < *min_items {
                    return Err(format!(
                        "expected at least {} option(s), got {}",
                        min_items,
                        options.len()
                    ));
                }
                for (index, (value, item)) in options.iter().zip(items).enumerate() {
                    item.check(value, &format!("options[{index}]"))?;
                }
                Ok(())
            }
        }
    }
}

impl OptionType {
    /// Enumeration of string values
    pub fn one_of_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionType::Enum {
            values: values
                .into_iter()
                .map(|value| Value::String(value.into()))
                .collect(),
        }
    }

    pub fn integer_at_least(minimum: i64) -> Self {
        OptionType::Integer {
            minimum: Some(minimum),
            maximum: None,
        }
    }

    pub fn string() -> Self {
        OptionType::String { pattern: None }
    }

    pub fn array_of(items: OptionType) -> Self {
        OptionType::Array {
            items: Box::new(items),
        }
    }

    /// Closed object with the given optional properties
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, OptionType)>,
        K: Into<String>,
    {
        OptionType::Object {
            properties: properties
                .into_iter()
                .map(|(key, ty)| (key.into(), ty))
                .collect(),
            required: Vec::new(),
            additional_properties: false,
        }
    }

    fn check(&self, value: &Value, path: &str) -> Result<(), String> {
        match self {
            OptionType::Any => Ok(()),
            OptionType::Boolean => expect(value.is_boolean(), path, "a boolean", value),
            OptionType::Number => expect(value.is_number(), path, "a number", value),
            OptionType::Integer { minimum, maximum } => {
                let Some(number) = value.as_i64() else {
                    return Err(mismatch(path, "an integer", value));
                };
                if let Some(min) = minimum
                    && number < *min
                {
                    return Err(format!("{path} must be >= {min}, got {number}"));
                }
                if let Some(max) = maximum
                    && number > *max
                {
                    return Err(format!("{path} must be <= {max}, got {number}"));
                }
                Ok(())
            }
            OptionType::String { pattern } => {
                let Some(text) = value.as_str() else {
                    return Err(mismatch(path, "a string", value));
                };
                if let Some(pattern) = pattern {
                    let regex = Regex::new(pattern)
                        .map_err(|e| format!("{path} has an invalid schema pattern: {e}"))?;
                    if !regex.is_match(text) {
                        return Err(format!("{path} must match /{pattern}/, got \"{text}\""));
                    }
                }
                Ok(())
            }
            OptionType::Enum { values } => {
                if values.contains(value) {
                    Ok(())
                } else {
                    let allowed: Vec<String> = values.iter().map(Value::to_string).collect();
                    Err(format!(
                        "{path} must be one of {}, got {value}",
                        allowed.join(", ")
                    ))
                }
            }
            OptionType::Array { items } => {
                let Some(elements) = value.as_array() else {
                    return Err(mismatch(path, "an array", value));
                };
                for (index, element) in elements.iter().enumerate() {
                    items.check(element, &format!("{path}[{index}]"))?;
                }
                Ok(())
            }
            OptionType::Object {
                properties,
                required,
                additional_properties,
            } => {
                let Some(object) = value.as_object() else {
                    return Err(mismatch(path, "an object", value));
                };
                for key in required {
                    if !object.contains_key(key) {
                        return Err(format!("{path} is missing required property '{key}'"));
                    }
                }
                for (key, property) in object {
                    match properties.get(key) {
                        Some(ty) => ty.check(property, &format!("{path}.{key}"))?,
                        None if *additional_properties => {}
                        None => return Err(format!("{path} has unexpected property '{key}'")),
                    }
                }
                Ok(())
            }
            OptionType::OneOf { variants } => {
                if variants.iter().any(|ty| ty.check(value, path).is_ok()) {
                    Ok(())
                } else {
                    Err(format!("{path} does not match any allowed form, got {value}"))
                }
            }
        }
    }
}

fn expect(ok: bool, path: &str, expected: &str, value: &Value) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(mismatch(path, expected, value))
    }
}

fn mismatch(path: &str, expected: &str, value: &Value) -> String {
    format!("{path} must be {expected}, got {value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quotes_schema() -> OptionSchema {
        OptionSchema::tuple(vec![
            OptionType::one_of_strings(["single", "double", "backtick"]),
            OptionType::object([
                ("avoidEscape", OptionType::Boolean),
                ("allowTemplateLiterals", OptionType::Boolean),
            ]),
        ])
    }

    #[test]
    fn test_no_options_schema() {
        assert!(OptionSchema::none().validate(&[]).is_ok());
        let err = OptionSchema::none().validate(&[json!(1)]).unwrap_err();
        assert!(err.contains("accepts no options"));
    }

    #[test]
    fn test_tuple_accepts_prefix() {
        let schema = quotes_schema();
        assert!(schema.validate(&[]).is_ok());
        assert!(schema.validate(&[json!("single")]).is_ok());
        assert!(
            schema
                .validate(&[json!("double"), json!({ "avoidEscape": true })])
                .is_ok()
        );
    }

    #[test]
    fn test_tuple_rejects_bad_values() {
        let schema = quotes_schema();

        let err = schema.validate(&[json!("triple")]).unwrap_err();
        assert!(err.starts_with("options[0] must be one of"));

        let err = schema
            .validate(&[json!("single"), json!({ "avoidEscape": "yes" })])
            .unwrap_err();
        assert_eq!(err, r#"options[1].avoidEscape must be a boolean, got "yes""#);

        let err = schema
            .validate(&[json!("single"), json!({ "unknown": true })])
            .unwrap_err();
        assert!(err.contains("unexpected property 'unknown'"));

        let err = schema
            .validate(&[json!("single"), json!({}), json!(3)])
            .unwrap_err();
        assert_eq!(err, "expected at most 2 option(s), got 3");
    }

    #[test]
    fn test_integer_bounds_and_one_of() {
        let schema = OptionSchema::single(OptionType::OneOf {
            variants: vec![
                OptionType::one_of_strings(["tab"]),
                OptionType::integer_at_least(0),
            ],
        });
        assert!(schema.validate(&[json!("tab")]).is_ok());
        assert!(schema.validate(&[json!(4)]).is_ok());
        assert!(schema.validate(&[json!(-1)]).is_err());
        assert!(schema.validate(&[json!(2.5)]).is_err());
    }

    #[test]
    fn test_string_pattern_and_arrays() {
        let schema = OptionSchema::single(OptionType::array_of(OptionType::String {
            pattern: Some("^[a-z]+$".to_string()),
        }));
        assert!(schema.validate(&[json!(["log", "warn"])]).is_ok());
        let err = schema.validate(&[json!(["log", "Warn"])]).unwrap_err();
        assert_eq!(err, r#"options[0][1] must match /^[a-z]+$/, got "Warn""#);
    }

    #[test]
    fn test_required_properties_and_min_items() {
        let schema = OptionSchema::Tuple {
            items: vec![OptionType::Object {
                properties: IndexMap::from([("max".to_string(), OptionType::integer_at_least(1))]),
                required: vec!["max".to_string()],
                additional_properties: false,
            }],
            min_items: 1,
        };
        assert_eq!(
            schema.validate(&[]).unwrap_err(),
            "expected at least 1 option(s), got 0"
        );
        assert!(schema.validate(&[json!({})]).unwrap_err().contains("'max'"));
        assert!(schema.validate(&[json!({ "max": 3 })]).is_ok());
    }

    #[test]
    fn test_schema_deserializes_from_yaml() {
        let schema: OptionSchema = serde_yaml::from_str(
            "kind: tuple\nitems:\n  - type: enum\n    values: [always, never]\n",
        )
        .unwrap();
        assert!(schema.validate(&[json!("always")]).is_ok());
        assert!(schema.validate(&[json!("sometimes")]).is_err());
    }
}
