//! Specialist capability discovery: plugin-tree and flat-directory catalogs.

pub mod cache;
pub mod flat_dir;
pub mod metadata;
pub mod plugin_tree;
pub mod render;

pub use cache::CatalogCache;
pub use flat_dir::{SYSTEM_AGENT_PREFIX, filter_system_agents, scan_agents_dir};
pub use metadata::{AgentMetadata, DEFAULT_DESCRIPTION, MetadataOutcome, extract_metadata};
pub use plugin_tree::scan_plugin_tree;
pub use render::render_catalog;

use serde::{Deserialize, Serialize};

/// One discovered specialist capability.
///
/// Plugin-tree records carry a composite `"<prefix>:<identifier>"` name and a
/// category key from [`CATEGORIES`]; flat-directory records are represented by
/// [`AgentMetadata`] instead and have no category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    pub name: String,
    pub description: String,
    pub category: String,
}

/// Static display info for one recognized plugin category folder.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    /// On-disk folder name under the marketplace `categories/` root.
    pub dir_name: &'static str,
    /// Short key stored on each [`CapabilityRecord`].
    pub key: &'static str,
    /// Section title used by the catalog renderer.
    pub title: &'static str,
    /// Naming prefix used when the plugin manifest declares no `name`.
    pub prefix: &'static str,
}

/// Recognized category folders, in display order.
///
/// Slice order is the sole determinant of section ordering in rendered
/// output; the renderer never re-sorts it.
pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        dir_name: "01-core-development",
        key: "core-dev",
        title: "Core Development",
        prefix: "voltagent-core-dev",
    },
    CategoryInfo {
        dir_name: "02-language-specialists",
        key: "lang",
        title: "Language",
        prefix: "voltagent-lang",
    },
    CategoryInfo {
        dir_name: "03-infrastructure",
        key: "infra",
        title: "Infrastructure",
        prefix: "voltagent-infra",
    },
    CategoryInfo {
        dir_name: "04-quality-security",
        key: "qa-sec",
        title: "QA & Security",
        prefix: "voltagent-qa-sec",
    },
    CategoryInfo {
        dir_name: "05-data-ai",
        key: "data-ai",
        title: "Data & AI",
        prefix: "voltagent-data-ai",
    },
    CategoryInfo {
        dir_name: "06-developer-experience",
        key: "dev-exp",
        title: "Developer Experience",
        prefix: "voltagent-dev-exp",
    },
    CategoryInfo {
        dir_name: "07-specialized-domains",
        key: "domains",
        title: "Specialized Domains",
        prefix: "voltagent-domains",
    },
    CategoryInfo {
        dir_name: "08-business-product",
        key: "biz",
        title: "Business & Product",
        prefix: "voltagent-biz",
    },
    CategoryInfo {
        dir_name: "09-meta-orchestration",
        key: "meta",
        title: "Meta & Orchestration",
        prefix: "voltagent-meta",
    },
    CategoryInfo {
        dir_name: "10-research-analysis",
        key: "research",
        title: "Research & Analysis",
        prefix: "voltagent-research",
    },
];

/// Look up a category by its on-disk folder name.
pub fn category_for_dir(dir_name: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|c| c.dir_name == dir_name)
}

/// Enforce name uniqueness within one source catalog: on collision the
/// later record replaces the earlier one in place.
pub(crate) fn dedupe_by_name<T>(items: Vec<T>, name: impl Fn(&T) -> &str) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if let Some(existing) = result.iter_mut().find(|r| name(r) == name(&item)) {
            *existing = item;
        } else {
            result.push(item);
        }
    }
    result
}
