//! Writes generated artifacts into the codegen directory

use std::fs;
use std::path::Path;

use anyhow::Context;

/// File name of the emitted helper source.
pub const GENERATED_CODE_FILE: &str = "generated.rs";
/// File name of the emitted helper manifest.
pub const GENERATED_MANIFEST_FILE: &str = "generated.json";

/// Writes the generated helper source into `dir`, creating it if needed.
pub fn inject_path_helpers(code: &str, dir: &Path) -> anyhow::Result<()> {
    write_generated(dir, GENERATED_CODE_FILE, code)
}

/// Writes the helper manifest into `dir`, creating it if needed.
pub fn inject_helper_manifest(manifest: &str, dir: &Path) -> anyhow::Result<()> {
    write_generated(dir, GENERATED_MANIFEST_FILE, manifest)
}

fn write_generated(dir: &Path, file_name: &str, contents: &str) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create codegen dir {}", dir.display()))?;

    let path = dir.join(file_name);
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))
}
