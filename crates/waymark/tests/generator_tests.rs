//! End-to-end suite: aggregation determinism, regeneration lifecycle, and
//! artifact injection.

use pretty_assertions::assert_eq;
use waymark::{
    aggregate_routes, build_template_context, generate_path_helpers, HelperGenerator,
    ResolvedRoute, SingularNamespaceRule, WaymarkConfig, GENERATED_CODE_FILE,
    GENERATED_MANIFEST_FILE,
};

fn sample_routes() -> Vec<ResolvedRoute> {
    vec![
        ResolvedRoute::from_pattern("/"),
        ResolvedRoute::from_pattern("/products"),
        ResolvedRoute::from_pattern("/products/[id]"),
        ResolvedRoute::from_pattern("/blog/[...slug]"),
        ResolvedRoute::from_pattern("/role/[slug]/members"),
    ]
}

#[test]
fn pipeline_is_idempotent() {
    let routes = sample_routes();

    let first = generate_path_helpers(&aggregate_routes(&routes), false);
    let second = generate_path_helpers(&aggregate_routes(&routes), false);
    assert_eq!(first, second);
}

#[test]
fn non_colliding_contexts_are_order_independent() {
    let product = ResolvedRoute::from_pattern("/products/[id]");
    let blog = ResolvedRoute::from_pattern("/blog/posts/[id]");

    let forward = aggregate_routes(&[product.clone(), blog.clone()]);
    let backward = aggregate_routes(&[blog, product]);

    for name in ["productPath", "blogPostPath"] {
        assert_eq!(forward.get(name), backward.get(name), "{name}");
    }
}

#[test]
fn context_builder_matches_aggregate_output() {
    let route = ResolvedRoute::from_pattern("/products/[id]");
    let context = build_template_context(&route, &SingularNamespaceRule);

    let store = aggregate_routes(&[route]);
    assert_eq!(store.get("productPath"), Some(&context));
}

#[test]
fn resolve_cycle_replaces_previous_helpers() {
    let mut generator = HelperGenerator::new(WaymarkConfig::default());

    generator.routes_resolved(&sample_routes());
    assert!(generator.store().get("productPath").is_some());

    generator.routes_resolved(&[ResolvedRoute::from_pattern("/about")]);
    assert!(generator.store().get("productPath").is_none());
    assert_eq!(generator.store().len(), 1);
}

#[test]
fn write_emits_code_and_manifest() {
    let dir = tempfile::tempdir().unwrap();

    let mut generator = HelperGenerator::new(WaymarkConfig::default());
    generator.routes_resolved(&sample_routes());
    generator.write_to(dir.path()).unwrap();

    let code = std::fs::read_to_string(dir.path().join(GENERATED_CODE_FILE)).unwrap();
    assert!(code.starts_with("// This file is auto-generated by waymark"));
    assert!(code.contains("pub fn root_path() -> String {"));
    assert!(code.contains("pub fn product_path(product_id: &str) -> String {"));
    assert!(code.contains("pub fn role_slug_members_path(slug: &str) -> String {"));

    let manifest = std::fs::read_to_string(dir.path().join(GENERATED_MANIFEST_FILE)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(5));
}

#[test]
fn trailing_slash_config_flows_into_emitted_paths() {
    let dir = tempfile::tempdir().unwrap();
    let config = WaymarkConfig {
        trailing_slash: true,
        ..WaymarkConfig::default()
    };

    let mut generator = HelperGenerator::new(config);
    generator.routes_resolved(&[ResolvedRoute::from_pattern("/products")]);
    generator.write_to(dir.path()).unwrap();

    let code = std::fs::read_to_string(dir.path().join(GENERATED_CODE_FILE)).unwrap();
    assert!(code.contains("\"/products/\".to_string()"));
}
