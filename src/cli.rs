use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// `triagent` - specialist discovery and verification-tier triage.
#[derive(Parser, Debug)]
#[command(name = "triagent")]
#[command(version = "0.1.0")]
#[command(about = "Discover specialist agents and triage tasks into verification tiers.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate and publish the specialist catalog
    Agents {
        #[command(subcommand)]
        agents_command: AgentsCommands,
    },

    /// Classify tasks: verification tier and domain specialist
    Triage {
        #[command(subcommand)]
        triage_command: TriageCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AgentsCommands {
    /// Print a summary of discovered specialists per source
    List,

    /// Write the rendered catalog document
    Generate {
        /// Output path (default: .planning/available_agents.md)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TriageCommands {
    /// Determine the verification tier for a task
    Tier {
        /// Task description
        #[arg(short, long)]
        description: String,

        /// Files modified (comma- or space-separated)
        #[arg(short, long)]
        files: Option<String>,

        /// Explicit tier override (0-3; out-of-range values are ignored)
        #[arg(long)]
        tier: Option<i64>,

        /// Downgrade to tier 0 when no code-reviewer specialist exists
        #[arg(long)]
        check_available: bool,

        /// Print only the tier number instead of JSON
        #[arg(long)]
        raw: bool,
    },

    /// Detect the task domain and recommend a specialist
    Domain {
        /// Task description
        #[arg(short, long)]
        description: String,

        /// Print only the specialist name instead of JSON
        #[arg(long)]
        raw: bool,
    },
}
