use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown {kind} `{value}`")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file `{}`: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl PatternError {
    pub fn unknown<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        Self::DeserializationError(err.to_string())
    }
}
