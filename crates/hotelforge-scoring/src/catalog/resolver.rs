//! Resolution of templates and tenant overrides into active constraints.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use hotelforge_core::{ConstraintKind, SolverError};
use tracing::debug;

use super::cache::CatalogCache;
use super::source::ConstraintSource;
use super::template::{merge_parameters, ConstraintTemplate, TenantConstraintConfig};
use crate::constraint::{ActiveConstraint, ConstraintCode, ConstraintParams};

/// Largest accepted constraint weight magnitude.
///
/// Match magnitudes stay below 256 (loyalty tier), so weighted scores and
/// their sums over any realistic hotel fit in `i64`.
pub const MAX_CONSTRAINT_WEIGHT: i64 = 1_000_000;

/// Resolves the ordered active constraint list for one tenant.
///
/// Templates without a tenant override use their defaults; disabled
/// overrides drop the template. The result is sorted by category, then code.
///
/// # Errors
///
/// Returns [`SolverError::Configuration`] naming the offending code for
/// duplicate or unknown codes, HARD constraints with a non-negative weight,
/// weights beyond [`MAX_CONSTRAINT_WEIGHT`], and parameters that fail schema
/// validation.
pub fn resolve_constraints(
    source: &dyn ConstraintSource,
    tenant_id: &str,
) -> Result<Vec<ActiveConstraint>, SolverError> {
    let templates = source.constraint_templates()?;
    let configs = source.tenant_constraint_configs(tenant_id)?;

    let mut seen = HashSet::with_capacity(templates.len());
    for template in &templates {
        if !seen.insert(template.code.as_str()) {
            return Err(SolverError::configuration(
                &template.code,
                "duplicate constraint template",
            ));
        }
    }

    let mut overrides: HashMap<&str, &TenantConstraintConfig> = HashMap::new();
    for config in &configs {
        if !seen.contains(config.code.as_str()) {
            return Err(SolverError::configuration(
                &config.code,
                "override references an unknown constraint template",
            ));
        }
        if overrides.insert(config.code.as_str(), config).is_some() {
            return Err(SolverError::configuration(
                &config.code,
                format!("duplicate override for tenant '{}'", tenant_id),
            ));
        }
    }

    let mut active = Vec::with_capacity(templates.len());
    for template in &templates {
        let config = overrides.get(template.code.as_str()).copied();
        if let Some(constraint) = activate(template, config)? {
            active.push(constraint);
        }
    }

    active.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.code().as_str().cmp(b.code().as_str()))
    });

    debug!(
        event = "catalog_resolved",
        tenant_id = tenant_id,
        template_count = templates.len(),
        override_count = configs.len(),
        constraint_count = active.len()
    );
    Ok(active)
}

fn activate(
    template: &ConstraintTemplate,
    config: Option<&TenantConstraintConfig>,
) -> Result<Option<ActiveConstraint>, SolverError> {
    let code = ConstraintCode::from_code(&template.code)
        .ok_or_else(|| SolverError::configuration(&template.code, "unknown constraint code"))?;

    check_weight(template, template.default_weight)?;

    let enabled = config.map_or(template.enabled_by_default, |c| c.enabled);
    if !enabled {
        return Ok(None);
    }

    let weight = config
        .and_then(|c| c.weight)
        .unwrap_or(template.default_weight);
    check_weight(template, weight)?;

    let mut values = template.default_parameters.clone();
    if let Some(overrides) = config.and_then(|c| c.parameters.as_ref()) {
        merge_parameters(&template.code, &mut values, overrides)?;
    }
    template.parameter_schema.validate(&template.code, &values)?;
    let params = ConstraintParams::from_values(code, &values)?;

    Ok(Some(ActiveConstraint::new(
        template.kind,
        weight,
        template.category.clone(),
        params,
    )))
}

fn check_weight(template: &ConstraintTemplate, weight: i64) -> Result<(), SolverError> {
    if weight.unsigned_abs() > MAX_CONSTRAINT_WEIGHT.unsigned_abs() {
        return Err(SolverError::configuration(
            &template.code,
            format!(
                "weight {} is outside [-{max}, {max}]",
                weight,
                max = MAX_CONSTRAINT_WEIGHT
            ),
        ));
    }
    if template.kind == ConstraintKind::Hard && weight >= 0 {
        return Err(SolverError::configuration(
            &template.code,
            format!("HARD constraint weight must be negative, got {}", weight),
        ));
    }
    Ok(())
}

/// Resolves constraints from a source, optionally through a cache.
pub struct CatalogResolver {
    source: Arc<dyn ConstraintSource>,
    cache: Option<CatalogCache>,
}

impl CatalogResolver {
    pub fn new(source: Arc<dyn ConstraintSource>) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    /// Enables the version-stamped cache.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(CatalogCache::new());
        self
    }

    pub fn source(&self) -> &Arc<dyn ConstraintSource> {
        &self.source
    }

    pub fn cache(&self) -> Option<&CatalogCache> {
        self.cache.as_ref()
    }

    /// The active constraints for a tenant, fetched fresh unless cached for
    /// the tenant's current config version.
    pub fn resolve(&self, tenant_id: &str) -> Result<Arc<[ActiveConstraint]>, SolverError> {
        match &self.cache {
            Some(cache) => cache.get_or_resolve(self.source.as_ref(), tenant_id),
            None => resolve_constraints(self.source.as_ref(), tenant_id).map(Arc::from),
        }
    }

    /// Drops the cached entry for a tenant, if caching is enabled.
    pub fn invalidate(&self, tenant_id: &str) {
        if let Some(cache) = &self.cache {
            cache.invalidate(tenant_id);
        }
    }
}

impl std::fmt::Debug for CatalogResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogResolver")
            .field("cached", &self.cache.is_some())
            .finish()
    }
}
