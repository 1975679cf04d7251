use soroban_sdk::{log, panic_with_error, Address, BytesN, Env};
use crate::events;
use crate::storage;
use crate::types::ContractError;
use crate::validation;

// ============================================================================
// AUTORIDADES - OWNER LÓGICO E UPGRADE ADMIN
// ============================================================================
//
// São dois campos independentes. O owner lógico responde pelo contrato; o
// upgrade admin é o único que pode trocar o wasm. Cada um tem a sua própria
// operação de transferência.

/// Define owner e upgrade admin iniciais (mesmo endereço).
pub fn init(env: &Env, owner: &Address) -> Result<(), ContractError> {
    validation::require_valid_address(env, owner)?;
    storage::set_owner(env, owner);
    storage::set_upgrade_admin(env, owner);
    Ok(())
}

pub fn owner(env: &Env) -> Address {
    storage::get_owner(env).unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn upgrade_admin(env: &Env) -> Address {
    storage::get_upgrade_admin(env)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != owner(env) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn require_upgrade_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != upgrade_admin(env) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Transfere o owner lógico. Não mexe no conjunto de admins nem no upgrade admin.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), ContractError> {
    // === CHECKS ===
    require_owner(env, caller)?;
    validation::require_valid_address(env, new_owner)?;
    storage::bump_instance(env);

    // === EFFECTS ===
    storage::set_owner(env, new_owner);

    // === INTERACTIONS ===
    log!(env, "ownership transferred to {}", new_owner.clone());
    events::emit_ownership_transferred(env, caller, new_owner);
    Ok(())
}

/// Transfere o upgrade admin. Não mexe no owner lógico.
pub fn change_upgrade_admin(
    env: &Env,
    caller: &Address,
    new_admin: &Address,
) -> Result<(), ContractError> {
    require_upgrade_admin(env, caller)?;
    validation::require_valid_address(env, new_admin)?;
    storage::bump_instance(env);

    storage::set_upgrade_admin(env, new_admin);

    log!(env, "upgrade admin changed to {}", new_admin.clone());
    events::emit_upgrade_admin_changed(env, caller, new_admin);
    Ok(())
}

/// Substitui o wasm do contrato mantendo endereço e storage.
pub fn upgrade(env: &Env, caller: &Address, wasm_hash: BytesN<32>) -> Result<(), ContractError> {
    require_upgrade_admin(env, caller)?;
    storage::bump_instance(env);

    events::emit_upgraded(env, &wasm_hash);
    env.deployer().update_current_contract_wasm(wasm_hash);
    Ok(())
}
