//! Parameter schemas for constraint templates.

use hotelforge_core::SolverError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The type of one named parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterType {
    Integer { min: i64, max: i64 },
    Boolean,
    Enum { values: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterField {
    pub name: String,
    #[serde(flatten)]
    pub ty: ParameterType,
}

impl ParameterField {
    pub fn integer(name: &str, min: i64, max: i64) -> Self {
        Self {
            name: name.to_string(),
            ty: ParameterType::Integer { min, max },
        }
    }

    pub fn boolean(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ParameterType::Boolean,
        }
    }

    pub fn enumeration(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ty: ParameterType::Enum {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        }
    }
}

/// Named, typed parameters accepted by a constraint template.
///
/// # Example
///
/// ```
/// use hotelforge_scoring::{ParameterField, ParameterSchema};
/// use serde_json::json;
///
/// let schema = ParameterSchema::new(vec![ParameterField::integer("min_floor", 0, 200)]);
/// let ok = json!({ "min_floor": 5 });
/// let bad = json!({ "min_floor": "high" });
///
/// assert!(schema.validate("high_floor_preference", ok.as_object().unwrap()).is_ok());
/// assert!(schema.validate("high_floor_preference", bad.as_object().unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    pub fields: Vec<ParameterField>,
}

impl ParameterSchema {
    pub fn new(fields: Vec<ParameterField>) -> Self {
        Self { fields }
    }

    /// A schema accepting no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> Option<&ParameterField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks a complete parameter object: every field present, no unknown
    /// keys, every value of the declared type and range.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming `code`.
    pub fn validate(&self, code: &str, values: &Map<String, Value>) -> Result<(), SolverError> {
        if let Some(unknown) = values.keys().find(|k| self.field(k).is_none()) {
            return Err(SolverError::configuration(
                code,
                format!("unknown parameter '{}'", unknown),
            ));
        }

        for field in &self.fields {
            let value = values.get(&field.name).ok_or_else(|| {
                SolverError::configuration(code, format!("missing parameter '{}'", field.name))
            })?;
            check_value(code, field, value)?;
        }
        Ok(())
    }
}

fn check_value(code: &str, field: &ParameterField, value: &Value) -> Result<(), SolverError> {
    let name = &field.name;
    match &field.ty {
        ParameterType::Integer { min, max } => {
            let n = value.as_i64().ok_or_else(|| {
                SolverError::configuration(
                    code,
                    format!("parameter '{}' must be an integer, got {}", name, value),
                )
            })?;
            if n < *min || n > *max {
                return Err(SolverError::configuration(
                    code,
                    format!(
                        "parameter '{}' must be within [{}, {}], got {}",
                        name, min, max, n
                    ),
                ));
            }
        }
        ParameterType::Boolean => {
            if !value.is_boolean() {
                return Err(SolverError::configuration(
                    code,
                    format!("parameter '{}' must be a boolean, got {}", name, value),
                ));
            }
        }
        ParameterType::Enum { values } => {
            let s = value.as_str().ok_or_else(|| {
                SolverError::configuration(
                    code,
                    format!("parameter '{}' must be a string, got {}", name, value),
                )
            })?;
            if !values.iter().any(|v| v.eq_ignore_ascii_case(s)) {
                return Err(SolverError::configuration(
                    code,
                    format!(
                        "parameter '{}' must be one of [{}], got '{}'",
                        name,
                        values.join(", "),
                        s
                    ),
                ));
            }
        }
    }
    Ok(())
}
