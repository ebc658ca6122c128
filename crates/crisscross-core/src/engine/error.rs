use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid word '{word}': {reason}")]
    InvalidWord { word: String, reason: &'static str },

    #[error("Duplicate word in input: '{0}'")]
    DuplicateWord(String),

    #[error("Invalid search configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
