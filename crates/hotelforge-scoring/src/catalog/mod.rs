//! Constraint catalog: templates, tenant overrides and their resolution.
//!
//! The catalog is read from a [`ConstraintSource`] once per solve call and
//! turned into an ordered, immutable list of active constraints. Parameter
//! overrides are validated against the template's [`ParameterSchema`] before
//! any solving starts.

mod cache;
mod resolver;
mod schema;
mod source;
mod template;

#[cfg(test)]
mod tests;

use hotelforge_core::SolverError;
use thiserror::Error;

pub use cache::CatalogCache;
pub use resolver::{resolve_constraints, CatalogResolver, MAX_CONSTRAINT_WEIGHT};
pub use schema::{ParameterField, ParameterSchema, ParameterType};
pub use source::{ConstraintSource, InMemoryConstraintSource};
pub use template::{builtin_templates, ConstraintTemplate, TenantConstraintConfig};

/// Failure of the external configuration store.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("constraint source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed catalog data: {0}")]
    Malformed(String),
}

impl From<CatalogError> for SolverError {
    fn from(err: CatalogError) -> Self {
        SolverError::configuration("catalog", err.to_string())
    }
}
