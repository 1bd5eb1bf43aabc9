use std::sync::Arc;

use hotelforge_config::CatalogFile;
use hotelforge_core::{ConstraintKind, SolverError, View};
use serde_json::json;

use super::*;
use crate::constraint::{ConstraintCode, ConstraintParams, HighFloorParams, VipBestRoomParams};

fn config_error_code(err: SolverError) -> String {
    match err {
        SolverError::Configuration { code, .. } => code,
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_builtin_templates_resolve_for_unknown_tenant() {
    let source = InMemoryConstraintSource::builtin();
    let active = resolve_constraints(&source, "never-configured").unwrap();

    assert_eq!(active.len(), 14);
    assert_eq!(builtin_templates().len(), 14);
    let hard = active.iter().filter(|c| c.kind == ConstraintKind::Hard).count();
    assert_eq!(hard, 5);
    assert!(active
        .iter()
        .filter(|c| c.kind == ConstraintKind::Hard)
        .all(|c| c.weight == -1));
}

#[test]
fn test_ordering_is_category_then_code() {
    let source = InMemoryConstraintSource::builtin();
    let active = resolve_constraints(&source, "t").unwrap();
    let keys: Vec<(String, &str)> = active
        .iter()
        .map(|c| (c.category.clone(), c.code().as_str()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(active[0].code(), ConstraintCode::AccessibilityRequired);
}

#[test]
fn test_tenant_overrides_weight_params_and_enablement() {
    let source = InMemoryConstraintSource::builtin();
    source.set_tenant_configs(
        "seaside",
        vec![
            TenantConstraintConfig::new("seaside", "high_floor_preference")
                .with_weight(45)
                .with_parameters(json!({ "min_floor": 8 })),
            TenantConstraintConfig::new("seaside", "vip_best_room")
                .with_parameters(json!({ "premium_view": "city" })),
            TenantConstraintConfig::new("seaside", "pet_friendly_match").disabled(),
        ],
    );

    let active = resolve_constraints(&source, "seaside").unwrap();
    assert_eq!(active.len(), 13);
    assert!(active.iter().all(|c| c.code() != ConstraintCode::PetFriendlyMatch));

    let high_floor = active
        .iter()
        .find(|c| c.code() == ConstraintCode::HighFloorPreference)
        .unwrap();
    assert_eq!(high_floor.weight, 45);
    assert_eq!(
        high_floor.params,
        ConstraintParams::HighFloorPreference(HighFloorParams { min_floor: 8 })
    );

    let vip = active
        .iter()
        .find(|c| c.code() == ConstraintCode::VipBestRoom)
        .unwrap();
    assert_eq!(
        vip.params,
        ConstraintParams::VipBestRoom(VipBestRoomParams {
            premium_view: View::City
        })
    );

    // Other tenants are unaffected.
    assert_eq!(resolve_constraints(&source, "other").unwrap().len(), 14);
}

#[test]
fn test_invalid_parameters_name_the_code() {
    let cases = vec![
        TenantConstraintConfig::new("t", "high_floor_preference")
            .with_parameters(json!({ "min_floor": "high" })),
        TenantConstraintConfig::new("t", "high_floor_preference")
            .with_parameters(json!({ "min_floor": 900 })),
        TenantConstraintConfig::new("t", "high_floor_preference")
            .with_parameters(json!({ "max_floor": 3 })),
        TenantConstraintConfig::new("t", "high_floor_preference").with_parameters(json!([1, 2])),
    ];
    for config in cases {
        let source = InMemoryConstraintSource::builtin();
        source.set_tenant_configs("t", vec![config]);
        let err = resolve_constraints(&source, "t").unwrap_err();
        assert_eq!(config_error_code(err), "high_floor_preference");
    }

    let source = InMemoryConstraintSource::builtin();
    source.set_tenant_configs(
        "t",
        vec![TenantConstraintConfig::new("t", "vip_best_room")
            .with_parameters(json!({ "premium_view": "mountain" }))],
    );
    let err = resolve_constraints(&source, "t").unwrap_err();
    assert_eq!(config_error_code(err), "vip_best_room");
}

#[test]
fn test_hard_weight_must_be_negative() {
    let source = InMemoryConstraintSource::builtin();
    source.set_tenant_configs(
        "t",
        vec![TenantConstraintConfig::new("t", "no_double_booking").with_weight(0)],
    );
    let err = resolve_constraints(&source, "t").unwrap_err();
    assert_eq!(config_error_code(err), "no_double_booking");

    // Template defaults are checked as well.
    let mut templates = builtin_templates();
    templates[0].default_weight = 1;
    let source = InMemoryConstraintSource::new(templates);
    let err = resolve_constraints(&source, "t").unwrap_err();
    assert_eq!(config_error_code(err), "no_double_booking");
}

#[test]
fn test_weight_magnitude_is_bounded() {
    let source = InMemoryConstraintSource::builtin();
    source.set_tenant_configs(
        "t",
        vec![TenantConstraintConfig::new("t", "loyalty_tier_reward").with_weight(i64::MAX / 2)],
    );
    let err = resolve_constraints(&source, "t").unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert_eq!(config_error_code(err), "loyalty_tier_reward");

    source.set_tenant_configs(
        "t",
        vec![TenantConstraintConfig::new("t", "no_double_booking").with_weight(i64::MIN)],
    );
    let err = resolve_constraints(&source, "t").unwrap_err();
    assert_eq!(config_error_code(err), "no_double_booking");

    source.set_tenant_configs(
        "t",
        vec![
            TenantConstraintConfig::new("t", "loyalty_tier_reward")
                .with_weight(MAX_CONSTRAINT_WEIGHT),
            TenantConstraintConfig::new("t", "no_double_booking")
                .with_weight(-MAX_CONSTRAINT_WEIGHT),
        ],
    );
    assert!(resolve_constraints(&source, "t").is_ok());
}

#[test]
fn test_unknown_and_duplicate_codes() {
    let source = InMemoryConstraintSource::builtin();
    source.set_tenant_configs("t", vec![TenantConstraintConfig::new("t", "free_breakfast")]);
    assert_eq!(
        config_error_code(resolve_constraints(&source, "t").unwrap_err()),
        "free_breakfast"
    );

    let mut templates = builtin_templates();
    templates.push(ConstraintTemplate::canonical(ConstraintCode::BudgetFit));
    let source = InMemoryConstraintSource::new(templates);
    assert_eq!(
        config_error_code(resolve_constraints(&source, "t").unwrap_err()),
        "budget_fit"
    );

    let mut templates = builtin_templates();
    templates[3].code = "mystery".to_string();
    let source = InMemoryConstraintSource::new(templates);
    assert_eq!(
        config_error_code(resolve_constraints(&source, "t").unwrap_err()),
        "mystery"
    );
}

#[test]
fn test_catalog_file_source() {
    let file = CatalogFile::from_toml_str(
        r#"
        [[templates]]
        code = "booking_unallocated"
        kind = "hard"
        default_weight = -1

        [[templates]]
        code = "view_preference"
        kind = "soft"
        default_weight = 70
        category = "views"

        [[tenants]]
        tenant_id = "harbor"
        version = 4
        [[tenants.constraints]]
        code = "view_preference"
        weight = 10
        "#,
    )
    .unwrap();

    let source = InMemoryConstraintSource::from_catalog_file(&file).unwrap();
    assert_eq!(source.config_version("harbor"), 4);
    assert_eq!(source.config_version("other"), 0);

    let harbor = resolve_constraints(&source, "harbor").unwrap();
    assert_eq!(harbor.len(), 2);
    let view = harbor
        .iter()
        .find(|c| c.code() == ConstraintCode::ViewPreference)
        .unwrap();
    assert_eq!(view.weight, 10);
    assert_eq!(view.category, "views");

    let other = resolve_constraints(&source, "other").unwrap();
    assert_eq!(other.iter().map(|c| c.weight).sum::<i64>(), 69);
}

#[test]
fn test_catalog_file_rejects_unknown_template() {
    let file = CatalogFile::from_toml_str(
        r#"
        [[templates]]
        code = "spa_access"
        kind = "soft"
        default_weight = 5
        "#,
    )
    .unwrap();
    let err = InMemoryConstraintSource::from_catalog_file(&file).unwrap_err();
    assert_eq!(config_error_code(err), "spa_access");
}

#[test]
fn test_cache_serves_until_version_changes() {
    let source = Arc::new(InMemoryConstraintSource::builtin());
    let resolver = CatalogResolver::new(source.clone()).with_cache();

    let first = resolver.resolve("t").unwrap();
    let second = resolver.resolve("t").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(resolver.cache().unwrap().len(), 1);

    source.set_tenant_configs(
        "t",
        vec![TenantConstraintConfig::new("t", "budget_fit").disabled()],
    );
    let third = resolver.resolve("t").unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(third.len(), 13);

    source.remove_tenant("t");
    assert_eq!(resolver.resolve("t").unwrap().len(), 14);
}

#[test]
fn test_cache_invalidate_and_clear() {
    let source = Arc::new(InMemoryConstraintSource::builtin());
    let resolver = CatalogResolver::new(source).with_cache();

    let first = resolver.resolve("a").unwrap();
    resolver.resolve("b").unwrap();
    assert_eq!(resolver.cache().unwrap().len(), 2);

    resolver.invalidate("a");
    assert_eq!(resolver.cache().unwrap().cached_version("a"), None);
    let again = resolver.resolve("a").unwrap();
    assert!(!Arc::ptr_eq(&first, &again));
    assert_eq!(first, again);

    resolver.cache().unwrap().clear();
    assert!(resolver.cache().unwrap().is_empty());
}

#[test]
fn test_uncached_resolver_fetches_fresh() {
    let source = Arc::new(InMemoryConstraintSource::builtin());
    let resolver = CatalogResolver::new(source.clone());
    assert!(resolver.cache().is_none());

    assert_eq!(resolver.resolve("t").unwrap().len(), 14);
    source.set_tenant_configs(
        "t",
        vec![TenantConstraintConfig::new("t", "view_preference").disabled()],
    );
    assert_eq!(resolver.resolve("t").unwrap().len(), 13);
}

#[test]
fn test_source_failure_becomes_configuration_error() {
    struct Offline;

    impl ConstraintSource for Offline {
        fn constraint_templates(&self) -> Result<Vec<ConstraintTemplate>, CatalogError> {
            Err(CatalogError::Unavailable("store offline".into()))
        }

        fn tenant_constraint_configs(
            &self,
            _tenant_id: &str,
        ) -> Result<Vec<TenantConstraintConfig>, CatalogError> {
            Ok(Vec::new())
        }

        fn config_version(&self, _tenant_id: &str) -> u64 {
            0
        }
    }

    let err = resolve_constraints(&Offline, "t").unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert!(err.to_string().contains("store offline"));
}
