//! Rollout off-chain do Registry e do Minter.
//!
//! Sobe os contratos num `Env` Soroban, aplica a configuração inicial, entrega
//! owner e upgrade admin para a governança e confere o estado final.

pub mod config;
pub mod deploy;
pub mod error;
pub mod verify;

pub use config::{MinterInit, MinterRatio, RegistryInit, RolloutConfig, DEFAULT_RATIO};
pub use deploy::{hand_off_minter, hand_off_registry, rollout_minter, rollout_registry};
pub use error::{Result, RolloutError};
