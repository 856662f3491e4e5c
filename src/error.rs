use thiserror::Error;

/// Rejected slider configuration.
///
/// Only produced while building a model; interaction never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("invalid domain: min ({min}) must be strictly below max ({max})")]
    InvalidDomain { min: f64, max: f64 },

    #[error("invalid step size {0}: must be a positive finite number")]
    InvalidStepSize(f64),

    #[error("{name} = {value} lies outside the domain [{min}, {max}]")]
    ValueOutOfDomain {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("from ({from}) must not exceed to ({to})")]
    CrossedHandles { from: f64, to: f64 },
}
