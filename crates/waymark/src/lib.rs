//! # Waymark
//!
//! Derives human-friendly, collision-resistant path helper functions from
//! a framework's resolved route table and emits source code for them:
//!
//! - `/products` → `productsPath` → `/products`
//! - `/products/[id]` → `productPath(productId)` → `/products/${productId}`
//! - `/role/[slug]/members` → `roleSlugMembersPath(slug)`
//! - `/blog/[...slug]` → `blogSlugPath(slug)` with the values joined by `/`
//!
//! The derivation core is pure and synchronous: filter unsupported routes,
//! build `(name, params, path template)` per survivor, aggregate by name
//! with last-write-wins on collisions. Code emission and file injection
//! sit behind the [`HelperGenerator`] facade.
//!
//! ## Example
//!
//! ```
//! use waymark::{aggregate_routes, ResolvedRoute};
//!
//! let routes = vec![
//!     ResolvedRoute::from_pattern("/products"),
//!     ResolvedRoute::from_pattern("/products/[id]"),
//! ];
//!
//! let store = aggregate_routes(&routes);
//! assert_eq!(store.len(), 2);
//!
//! let helper = store.get("productPath").unwrap();
//! assert_eq!(helper.params[0].name, "productId");
//! assert_eq!(helper.path_template, "/products/${productId}");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod builders;
pub mod codegen;
pub mod config;
pub mod generator;
pub mod inject;
pub mod route;
pub mod segment;
pub mod store;
pub mod validation;

// Re-export the public surface at the crate root
pub use builders::{
    build_helper_name, build_helper_name_with, build_helper_path, helper_params,
    helper_params_with, HelperParam,
};
pub use codegen::{generate_helper_manifest, generate_path_helpers};
pub use config::WaymarkConfig;
pub use generator::HelperGenerator;
pub use inject::{
    inject_helper_manifest, inject_path_helpers, GENERATED_CODE_FILE, GENERATED_MANIFEST_FILE,
};
pub use route::{ResolvedRoute, RouteOrigin, RoutePart, RouteType};
pub use segment::{
    is_dynamic_segment, is_multi_part_segment, is_static_segment, normalize_segment,
    NamespaceRule, SingularNamespaceRule,
};
pub use store::{
    aggregate_routes, aggregate_routes_with, build_template_context, HelperTemplateContext,
    TemplateContextStore,
};
pub use validation::is_supported_route;
