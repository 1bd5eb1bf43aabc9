//! Catalog files: constraint templates and per-tenant overrides.
//!
//! ```
//! use hotelforge_config::CatalogFile;
//!
//! let file = CatalogFile::from_toml_str(r#"
//!     [[tenants]]
//!     tenant_id = "seaside"
//!     version = 3
//!
//!     [[tenants.constraints]]
//!     code = "high_floor_preference"
//!     weight = 45
//!     parameters = { min_floor = 8 }
//!
//!     [[tenants.constraints]]
//!     code = "pet_friendly_match"
//!     enabled = false
//! "#).unwrap();
//!
//! let tenant = file.tenant("seaside").unwrap();
//! assert_eq!(tenant.version, 3);
//! assert_eq!(tenant.constraints.len(), 2);
//! assert!(!tenant.constraints[1].enabled);
//! ```

use std::path::Path;

use hotelforge_core::ConstraintKind;
use serde::{Deserialize, Serialize};

use crate::{read_by_extension, ConfigError};

/// Contents of a catalog file.
///
/// An empty `templates` list means the built-in templates apply.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogFile {
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,

    #[serde(default)]
    pub tenants: Vec<TenantEntry>,
}

impl CatalogFile {
    /// Loads a catalog from a `.toml`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_by_extension(path.as_ref())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn tenant(&self, tenant_id: &str) -> Option<&TenantEntry> {
        self.tenants.iter().find(|t| t.tenant_id == tenant_id)
    }
}

/// A constraint template as written in a catalog file.
///
/// The parameter schema is fixed per code; `parameters` replaces the
/// template's default parameter values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TemplateEntry {
    pub code: String,
    pub kind: ConstraintKind,
    pub default_weight: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub enabled_by_default: bool,
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

/// All overrides for one tenant.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TenantEntry {
    pub tenant_id: String,

    /// Bumped whenever the tenant's overrides change.
    #[serde(default)]
    pub version: u64,

    #[serde(default)]
    pub constraints: Vec<TenantConstraintEntry>,
}

/// One tenant override of one template.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TenantConstraintEntry {
    pub code: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

fn default_true() -> bool {
    true
}
