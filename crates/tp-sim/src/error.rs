use thiserror::Error;
use tp_core::CoreError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("invalid service times: {0}")]
    ServiceTimes(String),
}

pub type SimResult<T> = Result<T, SimError>;
