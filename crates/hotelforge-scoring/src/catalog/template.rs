//! Constraint templates and tenant overrides.

use hotelforge_config::{TemplateEntry, TenantConstraintEntry};
use hotelforge_core::{ConstraintKind, SolverError};
use serde_json::{json, Map, Value};

use super::schema::{ParameterField, ParameterSchema};
use crate::constraint::ConstraintCode;

/// Global definition of one constraint. Read-only reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintTemplate {
    pub code: String,
    pub kind: ConstraintKind,
    pub default_weight: i64,
    pub category: String,
    pub enabled_by_default: bool,
    pub parameter_schema: ParameterSchema,
    pub default_parameters: Map<String, Value>,
}

impl ConstraintTemplate {
    /// The canonical template for a code.
    pub fn canonical(code: ConstraintCode) -> Self {
        let (kind, weight, category) = canonical_definition(code);
        Self {
            code: code.as_str().to_string(),
            kind,
            default_weight: weight,
            category: category.to_string(),
            enabled_by_default: true,
            parameter_schema: canonical_schema(code),
            default_parameters: canonical_defaults(code),
        }
    }

    /// Builds a template from a catalog file entry.
    ///
    /// The schema comes from the code; entry parameters replace individual
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown codes or non-object
    /// parameters.
    pub fn from_entry(entry: &TemplateEntry) -> Result<Self, SolverError> {
        let code = ConstraintCode::from_code(&entry.code).ok_or_else(|| {
            SolverError::configuration(&entry.code, "unknown constraint code")
        })?;
        let canonical = Self::canonical(code);
        let mut default_parameters = canonical.default_parameters;
        if let Some(params) = &entry.parameters {
            merge_parameters(&entry.code, &mut default_parameters, params)?;
        }
        Ok(Self {
            code: entry.code.clone(),
            kind: entry.kind,
            default_weight: entry.default_weight,
            category: entry.category.clone().unwrap_or(canonical.category),
            enabled_by_default: entry.enabled_by_default,
            parameter_schema: canonical.parameter_schema,
            default_parameters,
        })
    }
}

/// One tenant's override of one template.
#[derive(Debug, Clone, PartialEq)]
pub struct TenantConstraintConfig {
    pub tenant_id: String,
    pub code: String,
    pub enabled: bool,
    pub weight: Option<i64>,
    /// Loosely-typed override values, merged over the template defaults.
    pub parameters: Option<Value>,
}

impl TenantConstraintConfig {
    pub fn new(tenant_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            code: code.into(),
            enabled: true,
            weight: None,
            parameters: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn from_entry(tenant_id: &str, entry: &TenantConstraintEntry) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            code: entry.code.clone(),
            enabled: entry.enabled,
            weight: entry.weight,
            parameters: entry.parameters.clone(),
        }
    }
}

/// The fourteen canonical templates.
pub fn builtin_templates() -> Vec<ConstraintTemplate> {
    ConstraintCode::ALL
        .iter()
        .map(|&code| ConstraintTemplate::canonical(code))
        .collect()
}

/// Overlays `overrides` (a JSON object or null) onto `target`.
pub(crate) fn merge_parameters(
    code: &str,
    target: &mut Map<String, Value>,
    overrides: &Value,
) -> Result<(), SolverError> {
    match overrides {
        Value::Null => Ok(()),
        Value::Object(values) => {
            for (key, value) in values {
                target.insert(key.clone(), value.clone());
            }
            Ok(())
        }
        other => Err(SolverError::configuration(
            code,
            format!("parameters must be an object, got {}", other),
        )),
    }
}

fn canonical_definition(code: ConstraintCode) -> (ConstraintKind, i64, &'static str) {
    use ConstraintKind::{Hard, Soft};
    match code {
        ConstraintCode::NoDoubleBooking
        | ConstraintCode::RoomTypeMatch
        | ConstraintCode::AccessibilityRequired
        | ConstraintCode::ValidDateRange
        | ConstraintCode::BookingUnallocated => (Hard, -1, "feasibility"),
        ConstraintCode::VipBestRoom => (Soft, 20, "guest_experience"),
        ConstraintCode::ViewPreference => (Soft, 50, "guest_preference"),
        ConstraintCode::HighFloorPreference => (Soft, 30, "guest_preference"),
        ConstraintCode::QuietZonePreference => (Soft, 25, "guest_preference"),
        ConstraintCode::PetFriendlyMatch => (Soft, 40, "guest_preference"),
        ConstraintCode::SmokingPreferenceMatch => (Soft, 20, "guest_preference"),
        ConstraintCode::BudgetFit => (Soft, -60, "revenue"),
        ConstraintCode::LoyaltyTierReward => (Soft, 30, "loyalty"),
        ConstraintCode::EarlyLateReadiness => (Soft, 15, "operations"),
    }
}

fn canonical_schema(code: ConstraintCode) -> ParameterSchema {
    match code {
        ConstraintCode::VipBestRoom => ParameterSchema::new(vec![ParameterField::enumeration(
            "premium_view",
            &["ocean", "city", "garden", "courtyard"],
        )]),
        ConstraintCode::HighFloorPreference => {
            ParameterSchema::new(vec![ParameterField::integer("min_floor", 0, 200)])
        }
        ConstraintCode::QuietZonePreference => ParameterSchema::new(vec![
            ParameterField::integer("min_floor", 0, 200),
            ParameterField::integer("min_distance_from_elevator", 0, 1000),
        ]),
        ConstraintCode::BudgetFit => {
            ParameterSchema::new(vec![ParameterField::integer("tolerance_percent", 0, 100)])
        }
        ConstraintCode::LoyaltyTierReward => {
            ParameterSchema::new(vec![ParameterField::integer("min_tier", 1, 3)])
        }
        _ => ParameterSchema::empty(),
    }
}

fn canonical_defaults(code: ConstraintCode) -> Map<String, Value> {
    let defaults = match code {
        ConstraintCode::VipBestRoom => json!({ "premium_view": "ocean" }),
        ConstraintCode::HighFloorPreference => json!({ "min_floor": 5 }),
        ConstraintCode::QuietZonePreference => {
            json!({ "min_floor": 3, "min_distance_from_elevator": 10 })
        }
        ConstraintCode::BudgetFit => json!({ "tolerance_percent": 0 }),
        ConstraintCode::LoyaltyTierReward => json!({ "min_tier": 1 }),
        _ => json!({}),
    };
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
