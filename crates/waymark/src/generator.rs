//! Generation facade driven by the host's resolve cycle
//!
//! The host serializes regeneration triggers, so the generator holds no
//! locks: each [`HelperGenerator::routes_resolved`] call discards the
//! previous cycle's contexts and rebuilds the store from scratch.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::codegen::{generate_helper_manifest, generate_path_helpers};
use crate::config::WaymarkConfig;
use crate::inject::{inject_helper_manifest, inject_path_helpers};
use crate::route::ResolvedRoute;
use crate::segment::{NamespaceRule, SingularNamespaceRule};
use crate::store::{aggregate_routes_with, TemplateContextStore};

/// Owns the configuration and the current emission set.
pub struct HelperGenerator {
    config: WaymarkConfig,
    namespaces: Box<dyn NamespaceRule + Send + Sync>,
    store: TemplateContextStore,
}

impl HelperGenerator {
    pub fn new(config: WaymarkConfig) -> Self {
        Self::with_namespace_rule(config, Box::new(SingularNamespaceRule))
    }

    /// Overrides the namespace heuristic used by the name and parameter
    /// builders.
    pub fn with_namespace_rule(
        config: WaymarkConfig,
        namespaces: Box<dyn NamespaceRule + Send + Sync>,
    ) -> Self {
        Self {
            config,
            namespaces,
            store: TemplateContextStore::new(),
        }
    }

    /// Rebuilds the helper set from a freshly resolved route table.
    pub fn routes_resolved(&mut self, routes: &[ResolvedRoute]) -> &TemplateContextStore {
        self.store = aggregate_routes_with(routes, self.namespaces.as_ref());
        info!(
            routes = routes.len(),
            helpers = self.store.len(),
            "regenerated path helpers"
        );
        &self.store
    }

    pub fn store(&self) -> &TemplateContextStore {
        &self.store
    }

    /// Emits both artifacts into the configured output directory.
    pub fn write(&self) -> anyhow::Result<()> {
        let out_dir = self.config.out_dir.clone();
        self.write_to(&out_dir)
    }

    /// Emits both artifacts into `dir`.
    pub fn write_to(&self, dir: &Path) -> anyhow::Result<()> {
        let code = generate_path_helpers(&self.store, self.config.trailing_slash);
        let manifest =
            generate_helper_manifest(&self.store).context("failed to serialize helper manifest")?;

        inject_path_helpers(&code, dir)?;
        inject_helper_manifest(&manifest, dir)?;
        Ok(())
    }
}
