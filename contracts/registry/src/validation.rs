use soroban_sdk::{Env, Vec};
use admin_role::{require_valid_address, ContractError};
use crate::storage;
use crate::types::ContributorRecord;

// ============================================================================
// VALIDAÇÕES
// ============================================================================

/// Valida um registro novo: conta real, teto positivo, ainda não registrada
pub fn require_registrable(env: &Env, record: &ContributorRecord) -> Result<(), ContractError> {
    require_valid_address(env, &record.account)?;
    if record.max_trust == 0 {
        return Err(ContractError::InvalidTrust);
    }
    if storage::has_contributor(env, &record.account) {
        return Err(ContractError::AlreadyRegistered);
    }
    Ok(())
}

/// Valida o lote inteiro antes de qualquer escrita.
/// Contas repetidas dentro do próprio lote também contam como já registradas.
pub fn require_registrable_batch(
    env: &Env,
    records: &Vec<ContributorRecord>,
) -> Result<(), ContractError> {
    if records.len() > storage::MAX_BATCH_SIZE {
        return Err(ContractError::BatchTooLarge);
    }

    let mut seen = Vec::new(env);
    for record in records.iter() {
        require_registrable(env, &record)?;
        if seen.contains(&record.account) {
            return Err(ContractError::AlreadyRegistered);
        }
        seen.push_back(record.account.clone());
    }
    Ok(())
}
