//! Rendering of the merged specialist catalog as a markdown document.

use std::fmt::Write;

use super::metadata::AgentMetadata;
use super::{CATEGORIES, CapabilityRecord};

/// Render the merged catalog.
///
/// Pure function of its inputs: plugin records are grouped into sections
/// following [`CATEGORIES`] order and sorted by name within each section,
/// custom agents get their own section with a distinct marker, and sections
/// with zero records are omitted entirely.
pub fn render_catalog(
    plugin_records: &[CapabilityRecord],
    custom_agents: &[AgentMetadata],
    timestamp: &str,
) -> String {
    let mut out = String::new();

    out.push_str("# Available Specialists\n\n");
    let _ = writeln!(out, "_Generated: {timestamp}_\n");

    if !plugin_records.is_empty() {
        out.push_str("## VoltAgent Specialists (Installed Plugins)\n\n");
        out.push_str(
            "These specialists are available via the Task tool. \
             Use the full name as `specialist:` value.\n\n",
        );

        for category in CATEGORIES {
            let mut section: Vec<&CapabilityRecord> = plugin_records
                .iter()
                .filter(|r| r.category == category.key)
                .collect();
            if section.is_empty() {
                continue;
            }
            section.sort_by(|a, b| a.name.cmp(&b.name));

            let _ = writeln!(out, "### {}", category.title);
            for record in section {
                let _ = writeln!(out, "- `{}`: {}", record.name, record.description);
            }
            out.push('\n');
        }
    }

    if !custom_agents.is_empty() {
        out.push_str("## Custom Specialists (from ~/.claude/agents/)\n\n");

        let mut sorted: Vec<&AgentMetadata> = custom_agents.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        for agent in sorted {
            let _ = writeln!(out, "- **{}**: {}", agent.name, agent.description);
        }
        out.push('\n');
    }

    out.push_str(USAGE_FOOTER);
    out
}

const USAGE_FOOTER: &str = "## Usage\n\n\
    Reference specialists in PLAN.md task frontmatter:\n\n\
    ```yaml\n\
    specialist: voltagent-lang:python-pro\n\
    ```\n\n\
    For custom agents:\n\
    ```yaml\n\
    specialist: code-reviewer\n\
    ```\n\n\
    The executor will spawn the specialist for task execution. \
    If unavailable, falls back to direct execution.\n";
