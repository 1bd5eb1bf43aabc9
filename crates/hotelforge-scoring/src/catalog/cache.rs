use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use hotelforge_core::SolverError;
use tracing::debug;

use super::resolver::resolve_constraints;
use super::source::ConstraintSource;
use crate::constraint::ActiveConstraint;

#[derive(Debug)]
struct CacheEntry {
    version: u64,
    constraints: Arc<[ActiveConstraint]>,
}

/// Resolved constraint lists keyed by tenant and config version.
///
/// An entry is only served while the source reports the version it was
/// resolved under; any version bump misses and re-resolves.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_resolve(
        &self,
        source: &dyn ConstraintSource,
        tenant_id: &str,
    ) -> Result<Arc<[ActiveConstraint]>, SolverError> {
        let version = source.config_version(tenant_id);
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = entries.get(tenant_id) {
                if entry.version == version {
                    debug!(event = "catalog_cache_hit", tenant_id = tenant_id, version = version);
                    return Ok(Arc::clone(&entry.constraints));
                }
            }
        }

        let constraints: Arc<[ActiveConstraint]> = resolve_constraints(source, tenant_id)?.into();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            tenant_id.to_string(),
            CacheEntry {
                version,
                constraints: Arc::clone(&constraints),
            },
        );
        Ok(constraints)
    }

    /// Drops one tenant's entry.
    pub fn invalidate(&self, tenant_id: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(tenant_id);
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Version the tenant's entry was resolved under, if cached.
    pub fn cached_version(&self, tenant_id: &str) -> Option<u64> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(tenant_id).map(|e| e.version)
    }
}
