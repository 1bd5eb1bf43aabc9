use std::path::Path;

use hotelforge::CatalogResolver;
use serde_json::json;

use super::constraint_source;

pub fn list(tenant: &str, catalog: Option<&Path>) -> anyhow::Result<()> {
    let resolver = CatalogResolver::new(constraint_source(catalog)?);
    let constraints = resolver.resolve(tenant)?;
    let rows: Vec<_> = constraints
        .iter()
        .map(|c| {
            json!({
                "code": c.code().as_str(),
                "kind": c.kind,
                "weight": c.weight,
                "category": c.category,
                "parameters": format!("{:?}", c.params),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
