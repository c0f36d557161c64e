use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(
        "Invalid scenario: {0} (expected 0..={max})",
        max = crate::control::scenario::Scenario::COUNT - 1
    )]
    InvalidScenario(usize),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
