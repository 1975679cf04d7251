use soroban_sdk::{panic_with_error, symbol_short, Address, Env, Symbol};
use admin_role::ContractError;

const BRIDGE: Symbol = symbol_short!("bridge");
const TOKEN_MANAGER: Symbol = symbol_short!("tkn_mgr");
const REGISTRY: Symbol = symbol_short!("registry");
const TOKEN: Symbol = symbol_short!("token");
const NUMERATOR: Symbol = symbol_short!("numer");
const DENOMINATOR: Symbol = symbol_short!("denom");
const DUES: Symbol = symbol_short!("dues");

fn get_required_address(env: &Env, key: &Symbol) -> Address {
    env.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

// ============================================================================
// ENDEREÇOS
// ============================================================================

pub fn get_bridge(env: &Env) -> Address {
    get_required_address(env, &BRIDGE)
}

pub fn set_bridge(env: &Env, bridge: &Address) {
    env.storage().instance().set(&BRIDGE, bridge);
}

pub fn get_token_manager(env: &Env) -> Address {
    get_required_address(env, &TOKEN_MANAGER)
}

pub fn set_token_manager(env: &Env, token_manager: &Address) {
    env.storage().instance().set(&TOKEN_MANAGER, token_manager);
}

pub fn get_registry(env: &Env) -> Address {
    get_required_address(env, &REGISTRY)
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&REGISTRY, registry);
}

pub fn get_token(env: &Env) -> Address {
    get_required_address(env, &TOKEN)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&TOKEN, token);
}

// ============================================================================
// RATIO E ANUIDADE
// ============================================================================

/// Padrão 1/1 antes de qualquer `set_ratio`
pub fn get_ratio(env: &Env) -> (u128, u128) {
    let numerator = env.storage().instance().get(&NUMERATOR).unwrap_or(1);
    let denominator = env.storage().instance().get(&DENOMINATOR).unwrap_or(1);
    (numerator, denominator)
}

pub fn set_ratio(env: &Env, numerator: u128, denominator: u128) {
    env.storage().instance().set(&NUMERATOR, &numerator);
    env.storage().instance().set(&DENOMINATOR, &denominator);
}

pub fn get_membership_dues(env: &Env) -> u128 {
    env.storage().instance().get(&DUES).unwrap_or(0)
}

pub fn set_membership_dues(env: &Env, amount: u128) {
    env.storage().instance().set(&DUES, &amount);
}
