use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskcheckError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("profile parse error: {0}")]
    ProfileParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RiskcheckError>;
