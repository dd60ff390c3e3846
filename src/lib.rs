#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default
)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod triage;

pub use catalog::{AgentMetadata, CapabilityRecord, CatalogCache};
pub use config::Config;
pub use error::{Result, TriagentError};
pub use triage::{DomainMatch, Tier, TierResult};
