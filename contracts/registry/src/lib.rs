#![no_std]

pub mod contract;
pub mod events;
pub mod storage;
pub mod types;
mod validation;

pub use admin_role::ContractError;
pub use contract::{Registry, RegistryClient};
pub use types::*;
