//! Discovery of custom specialists from a flat agents directory.
//!
//! Unlike the plugin tree this source is user-edited and expected to change
//! between invocations, so results are never cached.

use std::path::Path;

use super::metadata::{AgentMetadata, MetadataOutcome, extract_metadata};

/// Filenames starting with this prefix are reserved for system agents and
/// are excluded from the catalog unconditionally.
pub const SYSTEM_AGENT_PREFIX: &str = "gsd-";

/// Drop reserved system agents from a list of filenames.
pub fn filter_system_agents<S: AsRef<str>>(filenames: Vec<S>) -> Vec<S> {
    filenames
        .into_iter()
        .filter(|f| !f.as_ref().starts_with(SYSTEM_AGENT_PREFIX))
        .collect()
}

/// Enumerate custom specialists from a flat directory of `.md` documents.
///
/// A missing directory logs a warning and yields an empty catalog; files the
/// extractor cannot read are skipped. Never fails visibly to the caller.
pub fn scan_agents_dir(agents_dir: &Path) -> Vec<AgentMetadata> {
    if !agents_dir.exists() {
        tracing::warn!("agents directory not found: {}", agents_dir.display());
        return Vec::new();
    }

    let entries = match std::fs::read_dir(agents_dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!("error enumerating agents in {}: {err}", agents_dir.display());
            return Vec::new();
        }
    };

    let mut filenames: Vec<String> = entries
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".md"))
        .collect();
    filenames.sort();

    let mut agents = Vec::new();
    for filename in filter_system_agents(filenames) {
        match extract_metadata(&agents_dir.join(&filename)) {
            MetadataOutcome::Extracted(meta) => agents.push(meta),
            MetadataOutcome::Unreadable => {}
        }
    }
    // Two files may declare the same name; keep one record per name.
    super::dedupe_by_name(agents, |a| &a.name)
}
