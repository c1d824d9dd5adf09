use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("manifest has {got} passengers; ids are limited to {max}")]
    TooManyPassengers { got: usize, max: usize },
}

pub type SimResult<T> = Result<T, SimError>;
