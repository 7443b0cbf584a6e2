use schelling_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("parameter file line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("missing parameter `{0}`")]
    MissingKey(&'static str),

    #[error("parameter `{key}` must be an integer, got {value}")]
    NotInteger { key: &'static str, value: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParamResult<T> = Result<T, ParamError>;
