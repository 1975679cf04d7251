#![no_std]

//! Controle de acesso compartilhado pelos contratos Registry e Minter.
//!
//! Cada contrato guarda o seu próprio conjunto de admins e as suas duas
//! autoridades (owner lógico e upgrade admin) no storage de instância; este
//! crate só fornece as funções que leem e validam esse estado.

pub mod authority;
pub mod events;
pub mod roles;
pub mod storage;
pub mod types;
pub mod validation;

pub use roles::AdminRole;
pub use types::ContractError;
pub use validation::{is_zero_address, require_valid_address, zero_address, ZERO_ACCOUNT};
