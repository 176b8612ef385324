use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankboardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unknown project status: {0}")]
    UnknownStatus(String),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RankboardError>;
