use thiserror::Error;

pub type HtmlBasicResult<T> = Result<T, HtmlBasicError>;

#[derive(Error, Debug)]
pub enum HtmlBasicError {
    #[error("Invalid color value '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("Invalid line height {value}: must be a positive number")]
    InvalidLineHeight { value: f64 },

    #[error("Invalid font size '{value}': must be a positive number")]
    InvalidFontSize { value: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_yaml::Error> for HtmlBasicError {
    fn from(err: serde_yaml::Error) -> Self {
        HtmlBasicError::ConfigError(err.to_string())
    }
}
