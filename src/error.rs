use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolvError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    #[error("no free ticket id after '{0}'")]
    IdGenerationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("login required to open '{0}'")]
    AuthRequired(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, ResolvError>;
