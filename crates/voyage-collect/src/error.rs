use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    InvalidInterval(String),
    InvalidResolution { width: u32, height: u32 },
    /// A model was given without a labels file.
    MissingLabels,
    Labels(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidInterval(msg) => write!(f, "invalid interval: {msg}"),
            ConfigError::InvalidResolution { width, height } => {
                write!(f, "invalid resolution: {width}x{height}")
            }
            ConfigError::MissingLabels => write!(f, "a model needs a labels file"),
            ConfigError::Labels(msg) => write!(f, "labels error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<voyage_classify::ClassifyError> for ConfigError {
    fn from(err: voyage_classify::ClassifyError) -> Self {
        ConfigError::Labels(err.to_string())
    }
}
