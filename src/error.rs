use thiserror::Error;

/// Structured error hierarchy for `triagent`.
///
/// Only structural failures surface here: missing config, unwritable
/// output. Catalog scans and classification degrade to empty/default
/// results instead of erroring (see the module docs). Internal code uses
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum TriagentError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find home directory")]
    NoHome,

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to write catalog to {}: {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, TriagentError>;
