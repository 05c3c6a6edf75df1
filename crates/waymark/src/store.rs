//! Aggregation of per-route build outputs into the emission set
//!
//! The store is keyed by generated helper name. Two routes can derive the
//! same name (`/dashboard/[section]` and `/dashboard/sections/[id]` both
//! yield `dashboardSectionPath`); the later-processed route wins the key
//! without raising an error. Overwriting keeps the name's original
//! position in emission order, so output stays stable across rebuilds.

use std::collections::HashMap;

use crate::builders::{build_helper_name_with, build_helper_path, helper_params_with, HelperParam};
use crate::route::ResolvedRoute;
use crate::segment::{NamespaceRule, SingularNamespaceRule};
use crate::validation::is_supported_route;

/// The unit handed to code emission: one helper's name, ordered parameter
/// list, and parametrized path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperTemplateContext {
    pub name: String,
    pub params: Vec<HelperParam>,
    pub path_template: String,
}

/// Insertion-ordered collection of template contexts, keyed by helper name.
#[derive(Debug, Clone, Default)]
pub struct TemplateContextStore {
    order: Vec<String>,
    entries: HashMap<String, HelperTemplateContext>,
}

impl TemplateContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a context under its helper name. A later entry with an
    /// existing name replaces the earlier one (last-write-wins) but keeps
    /// the name's position in emission order.
    pub fn insert(&mut self, context: HelperTemplateContext) {
        if !self.entries.contains_key(&context.name) {
            self.order.push(context.name.clone());
        }
        self.entries.insert(context.name.clone(), context);
    }

    pub fn get(&self, name: &str) -> Option<&HelperTemplateContext> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }

    /// Contexts in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &HelperTemplateContext> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }
}

/// Builds the template context for a single accepted route.
///
/// Parameters are derived once and shared with the path builder so the
/// parameter list and the template's interpolation markers cannot diverge.
pub fn build_template_context(
    route: &ResolvedRoute,
    namespaces: &dyn NamespaceRule,
) -> HelperTemplateContext {
    let name = build_helper_name_with(route, namespaces);
    let params = helper_params_with(route, namespaces);
    let path_template = build_helper_path(route, &params);

    HelperTemplateContext {
        name,
        params,
        path_template,
    }
}

/// Runs the whole derivation batch: filter unsupported routes, build a
/// context per survivor, aggregate by name.
pub fn aggregate_routes(routes: &[ResolvedRoute]) -> TemplateContextStore {
    aggregate_routes_with(routes, &SingularNamespaceRule)
}

/// [`aggregate_routes`] with a caller-supplied namespace rule.
pub fn aggregate_routes_with(
    routes: &[ResolvedRoute],
    namespaces: &dyn NamespaceRule,
) -> TemplateContextStore {
    let mut store = TemplateContextStore::new();

    for route in routes {
        if !is_supported_route(route) {
            continue;
        }

        store.insert(build_template_context(route, namespaces));
    }

    store
}
