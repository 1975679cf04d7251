use soroban_sdk::{Address, Env, String};
use crate::types::ContractError;

/// Conta ed25519 com chave toda zerada. Soroban não tem endereço nulo, então
/// este é o "endereço zero" dos contratos.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn is_zero_address(env: &Env, addr: &Address) -> bool {
    *addr == zero_address(env)
}

/// Valida que o endereço não é o endereço zero
pub fn require_valid_address(env: &Env, addr: &Address) -> Result<(), ContractError> {
    if is_zero_address(env, addr) {
        return Err(ContractError::InvalidAddress);
    }
    Ok(())
}
