use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid scoring table: {0}")]
    Config(#[from] ConfigError),
}
