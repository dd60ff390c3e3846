//! Command handlers behind the CLI surface.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;

use crate::catalog::{CatalogCache, render_catalog, scan_agents_dir, scan_plugin_tree};
use crate::cli::{AgentsCommands, Cli, Commands, TriageCommands};
use crate::config::Config;
use crate::error::CatalogError;
use crate::triage::{TriageOptions, classify, detect_domain};

pub fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Agents { agents_command } => match agents_command {
            AgentsCommands::List => cmd_agents_list(&config),
            AgentsCommands::Generate { output } => cmd_agents_generate(&config, output),
        },
        Commands::Triage { triage_command } => match triage_command {
            TriageCommands::Tier {
                description,
                files,
                tier,
                check_available,
                raw,
            } => cmd_triage_tier(&config, &description, files, tier, check_available, raw),
            TriageCommands::Domain { description, raw } => cmd_triage_domain(&description, raw),
        },
    }
}

fn cmd_agents_list(config: &Config) -> Result<()> {
    let cache = CatalogCache::new();
    let plugin_records = cache.get_or_compute(|| scan_plugin_tree(&config.plugin_root));
    let custom_agents = scan_agents_dir(&config.agents_dir);

    println!(
        "{} plugin + {} custom = {} specialists",
        plugin_records.len(),
        custom_agents.len(),
        plugin_records.len() + custom_agents.len()
    );
    for record in plugin_records.iter() {
        println!("  {} [{}]", record.name, record.category);
    }
    for agent in &custom_agents {
        println!("  {} [custom]", agent.name);
    }
    Ok(())
}

fn cmd_agents_generate(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let output_path = output.unwrap_or_else(|| config.catalog_output.clone());

    let cache = CatalogCache::new();
    let plugin_records = cache.get_or_compute(|| scan_plugin_tree(&config.plugin_root));
    let custom_agents = scan_agents_dir(&config.agents_dir);

    let timestamp = Utc::now().to_rfc3339();
    let document = render_catalog(&plugin_records, &custom_agents, &timestamp);

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output_path, &document).map_err(|source| CatalogError::Write {
        path: output_path.clone(),
        source,
    })?;

    println!(
        "Generated: {} ({} plugin + {} custom = {} specialists)",
        output_path.display(),
        plugin_records.len(),
        custom_agents.len(),
        plugin_records.len() + custom_agents.len()
    );
    Ok(())
}

fn cmd_triage_tier(
    config: &Config,
    description: &str,
    files: Option<String>,
    tier: Option<i64>,
    check_available: bool,
    raw: bool,
) -> Result<()> {
    if description.trim().is_empty() {
        bail!("missing required task description");
    }

    // Comma-separated file lists are accepted and normalized to spaces.
    let files = files.unwrap_or_default().replace(',', " ");

    let options = TriageOptions {
        override_tier: tier,
        check_available: check_available || config.triage.check_available,
        agents_dir: Some(config.agents_dir.clone()),
    };
    let result = classify(description, &files, &options);

    if raw {
        println!("{}", result.tier.as_u8());
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

fn cmd_triage_domain(description: &str, raw: bool) -> Result<()> {
    if description.trim().is_empty() {
        bail!("missing required task description");
    }

    let result = detect_domain(description);
    if raw {
        println!("{}", result.specialist);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
