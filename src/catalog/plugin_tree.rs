//! Discovery of specialists installed as marketplace plugins.
//!
//! Layout on disk: `<root>/<category-dir>/.claude-plugin/plugin.json`, where
//! each manifest declares relative paths to the specialist documents it
//! ships. Absence of the root is the normal state on a fresh install and is
//! silent; every other failure degrades to skipping the offending item.

use std::path::Path;

use serde::Deserialize;

use super::metadata::{DEFAULT_DESCRIPTION, MetadataOutcome, extract_metadata};
use super::{CapabilityRecord, category_for_dir};

/// Manifest location inside each category directory.
const MANIFEST_SUBPATH: &str = ".claude-plugin/plugin.json";

/// Per-category plugin manifest. Both fields are optional on disk.
#[derive(Debug, Deserialize)]
struct PluginManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    agents: Option<Vec<String>>,
}

/// Enumerate specialists from an installed plugin tree.
///
/// Returns one record per declared agent reference, named
/// `"<prefix>:<identifier>"`. A missing `categories_root` yields an empty
/// catalog without logging; malformed manifests are warned about and
/// skipped without aborting sibling categories.
pub fn scan_plugin_tree(categories_root: &Path) -> Vec<CapabilityRecord> {
    if !categories_root.exists() {
        // Plugins not installed; nothing to enumerate.
        return Vec::new();
    }

    let entries = match std::fs::read_dir(categories_root) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!(
                "error enumerating plugin categories in {}: {err}",
                categories_root.display()
            );
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for entry in entries.flatten() {
        let category_path = entry.path();
        let Some(dir_name) = category_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        records.extend(scan_category(&category_path, dir_name));
    }
    super::dedupe_by_name(records, |r| &r.name)
}

fn scan_category(category_path: &Path, dir_name: &str) -> Vec<CapabilityRecord> {
    let manifest_path = category_path.join(MANIFEST_SUBPATH);
    if !manifest_path.exists() {
        return Vec::new();
    }

    let manifest = match read_manifest(&manifest_path) {
        Ok(manifest) => manifest,
        Err(err) => {
            tracing::warn!("could not parse {}: {err}", manifest_path.display());
            return Vec::new();
        }
    };

    let Some(category) = category_for_dir(dir_name) else {
        return Vec::new();
    };
    let Some(agent_refs) = manifest.agents else {
        return Vec::new();
    };

    // The manifest's own name field wins over the static default prefix.
    let prefix = manifest.name.unwrap_or_else(|| category.prefix.to_string());

    let mut records = Vec::new();
    for agent_ref in &agent_refs {
        let relative = agent_ref.strip_prefix("./").unwrap_or(agent_ref);
        let identifier = relative.strip_suffix(".md").unwrap_or(relative);

        // An unreadable document degrades to the default description; the
        // record itself is still emitted.
        let description = match extract_metadata(&category_path.join(relative)) {
            MetadataOutcome::Extracted(meta) => meta.description,
            MetadataOutcome::Unreadable => DEFAULT_DESCRIPTION.to_string(),
        };

        records.push(CapabilityRecord {
            name: format!("{prefix}:{identifier}"),
            description,
            category: category.key.to_string(),
        });
    }
    records
}

fn read_manifest(path: &Path) -> anyhow::Result<PluginManifest> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
