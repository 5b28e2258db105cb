use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("event payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("event payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No event name provided")]
    MissingEventName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("Tag manager queue is not available yet")]
    Unavailable,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
