#![no_std]

pub mod contract;
pub mod events;
pub mod storage;
pub mod token_manager;
mod validation;

pub use admin_role::ContractError;
pub use contract::{Minter, MinterClient};
pub use token_manager::{TokenManagerClient, TokenManagerInterface};
