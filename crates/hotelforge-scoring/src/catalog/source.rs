//! The external configuration store, as seen by the solver.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use hotelforge_config::CatalogFile;
use hotelforge_core::SolverError;

use super::template::{builtin_templates, ConstraintTemplate, TenantConstraintConfig};
use super::CatalogError;

/// Read-only access to constraint templates and tenant overrides.
///
/// Implementations may block on an external fetch. Both lists are treated as
/// immutable snapshots for the duration of one solve call.
pub trait ConstraintSource: Send + Sync {
    fn constraint_templates(&self) -> Result<Vec<ConstraintTemplate>, CatalogError>;

    /// Overrides for one tenant. An unknown tenant has none.
    fn tenant_constraint_configs(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<TenantConstraintConfig>, CatalogError>;

    /// Version stamp of everything `tenant_id` resolves from. Must change
    /// whenever the templates or the tenant's overrides change.
    fn config_version(&self, tenant_id: &str) -> u64;
}

#[derive(Debug, Default)]
struct SourceState {
    templates: Vec<ConstraintTemplate>,
    templates_version: u64,
    tenants: HashMap<String, TenantState>,
    next_version: u64,
}

#[derive(Debug, Default)]
struct TenantState {
    configs: Vec<TenantConstraintConfig>,
    version: u64,
}

impl SourceState {
    fn bump(&mut self) -> u64 {
        self.next_version += 1;
        self.next_version
    }
}

/// A [`ConstraintSource`] held in memory.
///
/// Every mutation bumps the affected version stamps, so caches keyed on
/// [`ConstraintSource::config_version`] never serve stale data.
#[derive(Debug, Default)]
pub struct InMemoryConstraintSource {
    state: RwLock<SourceState>,
}

impl InMemoryConstraintSource {
    /// A source with the given templates and no tenant overrides.
    pub fn new(templates: Vec<ConstraintTemplate>) -> Self {
        Self {
            state: RwLock::new(SourceState {
                templates,
                ..SourceState::default()
            }),
        }
    }

    /// A source seeded with the built-in templates.
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    /// Builds a source from a catalog file.
    ///
    /// An empty template list in the file means the built-in templates.
    /// Tenant versions from the file seed the version stamps.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for template entries with unknown codes.
    pub fn from_catalog_file(file: &CatalogFile) -> Result<Self, SolverError> {
        let templates = if file.templates.is_empty() {
            builtin_templates()
        } else {
            file.templates
                .iter()
                .map(ConstraintTemplate::from_entry)
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut state = SourceState {
            templates,
            ..SourceState::default()
        };
        for tenant in &file.tenants {
            let configs = tenant
                .constraints
                .iter()
                .map(|c| TenantConstraintConfig::from_entry(&tenant.tenant_id, c))
                .collect();
            state.next_version = state.next_version.max(tenant.version);
            state.tenants.insert(
                tenant.tenant_id.clone(),
                TenantState {
                    configs,
                    version: tenant.version,
                },
            );
        }
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Replaces all templates.
    pub fn set_templates(&self, templates: Vec<ConstraintTemplate>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.templates = templates;
        state.templates_version = state.bump();
    }

    /// Replaces one tenant's overrides.
    pub fn set_tenant_configs(&self, tenant_id: &str, configs: Vec<TenantConstraintConfig>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let version = state.bump();
        state.tenants.insert(
            tenant_id.to_string(),
            TenantState { configs, version },
        );
    }

    /// Removes one tenant's overrides, reverting it to global defaults.
    pub fn remove_tenant(&self, tenant_id: &str) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.tenants.remove(tenant_id).is_some() {
            // Its version must still change for caches holding this tenant.
            state.templates_version = state.bump();
        }
    }
}

impl ConstraintSource for InMemoryConstraintSource {
    fn constraint_templates(&self) -> Result<Vec<ConstraintTemplate>, CatalogError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.templates.clone())
    }

    fn tenant_constraint_configs(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<TenantConstraintConfig>, CatalogError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state
            .tenants
            .get(tenant_id)
            .map(|t| t.configs.clone())
            .unwrap_or_default())
    }

    fn config_version(&self, tenant_id: &str) -> u64 {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let tenant_version = state.tenants.get(tenant_id).map_or(0, |t| t.version);
        state.templates_version.max(tenant_version)
    }
}
