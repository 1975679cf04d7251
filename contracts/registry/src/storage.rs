use soroban_sdk::{panic_with_error, symbol_short, Address, Env, IntoVal, Symbol, Val, Vec};
use admin_role::storage::{CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL};
use admin_role::{zero_address, ContractError};
use crate::types::ContributorRecord;

// ============================================================================
// CONSTANTES
// ============================================================================

/// Limite de contribuidores por chamada de `register_contributors`
pub const MAX_BATCH_SIZE: u32 = 100;

const TOKEN: Symbol = symbol_short!("token");
const MINTER: Symbol = symbol_short!("minter");
const CONTRIBUTOR: Symbol = symbol_short!("ctb");
const CONTRIBUTOR_COUNT: Symbol = symbol_short!("ctb_cnt");
const CONTRIBUTOR_AT: Symbol = symbol_short!("ctb_at");
const CONTRIBUTOR_INDEX: Symbol = symbol_short!("ctb_idx");

// ============================================================================
// CONTRATOS VINCULADOS
// ============================================================================

pub fn get_token_contract(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&TOKEN)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn set_token_contract(env: &Env, token: &Address) {
    env.storage().instance().set(&TOKEN, token);
}

/// Endereço zero enquanto nenhum minter foi configurado
pub fn get_minter_contract(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&MINTER)
        .unwrap_or_else(|| zero_address(env))
}

pub fn set_minter_contract(env: &Env, minter: &Address) {
    env.storage().instance().set(&MINTER, minter);
}

// ============================================================================
// CONTRIBUIDORES
// ============================================================================
//
// Cada conta ocupa três entradas persistentes: o registro, a posição na
// enumeração (`ctb_idx`) e a conta naquela posição (`ctb_at`). A remoção
// move o último para o buraco, então nenhuma operação toca a lista inteira.

fn contributor_key(account: &Address) -> (Symbol, Address) {
    (CONTRIBUTOR, account.clone())
}

fn index_key(account: &Address) -> (Symbol, Address) {
    (CONTRIBUTOR_INDEX, account.clone())
}

fn slot_key(index: u32) -> (Symbol, u32) {
    (CONTRIBUTOR_AT, index)
}

fn bump<K: IntoVal<Env, Val>>(env: &Env, key: &K) {
    env.storage()
        .persistent()
        .extend_ttl(key, CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
}

/// Lê o registro e, se existir, renova o TTL dele e do índice
pub fn get_contributor(env: &Env, account: &Address) -> Option<ContributorRecord> {
    let record = env.storage().persistent().get(&contributor_key(account));
    if record.is_some() {
        bump(env, &contributor_key(account));
        bump(env, &index_key(account));
    }
    record
}

pub fn has_contributor(env: &Env, account: &Address) -> bool {
    env.storage().persistent().has(&contributor_key(account))
}

pub fn get_contributor_count(env: &Env) -> u32 {
    match env.storage().persistent().get(&CONTRIBUTOR_COUNT) {
        Some(count) => {
            bump(env, &CONTRIBUTOR_COUNT);
            count
        }
        None => 0,
    }
}

fn set_contributor_count(env: &Env, count: u32) {
    env.storage().persistent().set(&CONTRIBUTOR_COUNT, &count);
    bump(env, &CONTRIBUTOR_COUNT);
}

fn get_slot(env: &Env, index: u32) -> Option<Address> {
    let account = env.storage().persistent().get(&slot_key(index));
    if account.is_some() {
        bump(env, &slot_key(index));
    }
    account
}

fn set_slot(env: &Env, index: u32, account: &Address) {
    env.storage().persistent().set(&slot_key(index), account);
    env.storage().persistent().set(&index_key(account), &index);
    bump(env, &slot_key(index));
    bump(env, &index_key(account));
}

/// Contas registradas. Sem remoções, na ordem de inserção.
pub fn get_contributor_list(env: &Env) -> Vec<Address> {
    let mut list = Vec::new(env);
    for index in 0..get_contributor_count(env) {
        if let Some(account) = get_slot(env, index) {
            list.push_back(account);
        }
    }
    list
}

/// Grava o registro e o põe no fim da enumeração. Não valida nada.
pub fn insert_contributor(env: &Env, record: &ContributorRecord) {
    env.storage()
        .persistent()
        .set(&contributor_key(&record.account), record);

    let count = get_contributor_count(env);
    set_slot(env, count, &record.account);
    set_contributor_count(env, count + 1);
    bump(env, &contributor_key(&record.account));
}

/// Apaga o registro (o teto de confiança passa a ler 0) e o tira da
/// enumeração trocando-o pelo último.
pub fn delete_contributor(env: &Env, account: &Address) {
    let storage = env.storage().persistent();
    storage.remove(&contributor_key(account));

    let Some(index) = storage.get::<_, u32>(&index_key(account)) else {
        return;
    };
    storage.remove(&index_key(account));

    let last = get_contributor_count(env).saturating_sub(1);
    if index != last {
        if let Some(moved) = get_slot(env, last) {
            set_slot(env, index, &moved);
        }
    }
    storage.remove(&slot_key(last));
    set_contributor_count(env, last);
}
