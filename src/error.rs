use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Not an image file: {0} (choose a JPEG, PNG, WebP, GIF or similar image)")]
    NotAnImage(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Analyze(#[from] sinu_common::AnalyzeError),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
