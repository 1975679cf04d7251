use admin_role::ContractError;
use thiserror::Error;

/// Falhas do rollout: configuração, chamadas aos contratos e conferência final.
#[derive(Debug, Error)]
pub enum RolloutError {
    #[error("config value {key} is invalid: {reason}")]
    Config { key: String, reason: String },

    #[error("{field} address invalid: {value}")]
    InvalidAddress { field: String, value: String },

    #[error("invalid ratio {numerator}/{denominator}: both parts must be > 0")]
    InvalidRatio { numerator: u128, denominator: u128 },

    #[error("contract rejected the call: {0:?}")]
    Contract(ContractError),

    #[error("host invocation failed: {0}")]
    Host(String),

    #[error("expected {field} to be {expected}, got {actual}")]
    Mismatch {
        field: String,
        expected: String,
        actual: String,
    },
}

impl From<ContractError> for RolloutError {
    fn from(err: ContractError) -> Self {
        RolloutError::Contract(err)
    }
}

pub type Result<T> = std::result::Result<T, RolloutError>;
