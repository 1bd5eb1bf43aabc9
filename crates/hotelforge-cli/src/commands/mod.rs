pub mod constraints;
pub mod solve;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use hotelforge::{CatalogFile, ConstraintSource, InMemoryConstraintSource};

/// The constraint source for a command: a catalog file or the built-ins.
pub(crate) fn constraint_source(catalog: Option<&Path>) -> anyhow::Result<Arc<dyn ConstraintSource>> {
    let source = match catalog {
        Some(path) => {
            let file = CatalogFile::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            InMemoryConstraintSource::from_catalog_file(&file)?
        }
        None => InMemoryConstraintSource::builtin(),
    };
    Ok(Arc::new(source))
}
