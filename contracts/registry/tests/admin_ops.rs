#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use setup::TestEnv;
use soroban_sdk::testutils::{Address as _, BytesN as _};
use soroban_sdk::{symbol_short, vec, Address, BytesN, Env, IntoVal, TryFromVal, Val, Vec};

use contributor_registry::{ContractError, ContributorRecord, Registry, RegistryClient};

fn fresh(env: &Env) -> RegistryClient<'_> {
    env.mock_all_auths();
    let contract_id = env.register_contract(None, Registry);
    RegistryClient::new(env, &contract_id)
}

// ============================================================================
// INICIALIZAÇÃO
// ============================================================================

#[test]
fn test_initialize_sets_admins_and_token() {
    let t = TestEnv::new();

    assert!(t.client.is_admin(&t.admin_first));
    assert!(t.client.is_admin(&t.admin_second));
    // O owner é admin implícito
    assert!(t.client.is_admin(&t.owner));
    assert_eq!(t.client.token_contract(), t.token);
    assert_eq!(t.client.owner(), t.owner);
    assert_eq!(t.client.upgrade_admin(), t.owner);
}

#[test]
fn test_initialize_twice_fails() {
    let t = TestEnv::new();
    let other = t.anyone();

    let res = t
        .client
        .try_initialize(&other, &vec![&t.env, other.clone()], &t.token);
    assert_eq!(res, Err(Ok(ContractError::AlreadyInitialized)));
    assert!(!t.client.is_admin(&other));
}

#[test]
fn test_initialize_rejects_zero_token() {
    let env = Env::default();
    let client = fresh(&env);
    let owner = Address::generate(&env);
    let zero = admin_role::zero_address(&env);

    let res = client.try_initialize(&owner, &vec![&env, owner.clone()], &zero);
    assert_eq!(res, Err(Ok(ContractError::InvalidAddress)));
}

#[test]
fn test_initialize_rejects_zero_admin() {
    let env = Env::default();
    let client = fresh(&env);
    let owner = Address::generate(&env);
    let token = Address::generate(&env);
    let zero = admin_role::zero_address(&env);

    let res = client.try_initialize(&owner, &vec![&env, owner.clone(), zero], &token);
    assert_eq!(res, Err(Ok(ContractError::InvalidAddress)));
}

#[test]
fn test_initialize_rejects_empty_admins() {
    let env = Env::default();
    let client = fresh(&env);
    let owner = Address::generate(&env);
    let token = Address::generate(&env);

    let res = client.try_initialize(&owner, &Vec::new(&env), &token);
    assert_eq!(res, Err(Ok(ContractError::EmptyAdminSet)));
}

#[test]
fn test_uninitialized_token_read_fails() {
    let env = Env::default();
    let client = fresh(&env);

    assert!(client.try_token_contract().is_err());
    assert!(client.try_owner().is_err());
}

// ============================================================================
// AUTORIDADES
// ============================================================================

#[test]
fn test_transfer_ownership() {
    let t = TestEnv::new();
    let governance = t.anyone();

    t.client.transfer_ownership(&t.owner, &governance);
    assert_eq!(t.client.owner(), governance);
    // Upgrade admin é independente
    assert_eq!(t.client.upgrade_admin(), t.owner);

    let (_contract, topics, data) = t.last_event();
    let expected: Vec<Val> = (symbol_short!("own_xfer"), t.owner.clone()).into_val(&t.env);
    assert_eq!(topics, expected);
    assert_eq!(Address::try_from_val(&t.env, &data).unwrap(), governance);
}

#[test]
fn test_transfer_ownership_only_owner() {
    let t = TestEnv::new();
    let governance = t.anyone();

    // Admin não é owner
    let res = t.client.try_transfer_ownership(&t.admin_first, &governance);
    assert_eq!(res, Err(Ok(ContractError::Unauthorized)));
    assert_eq!(t.client.owner(), t.owner);
}

#[test]
fn test_transfer_ownership_rejects_zero() {
    let t = TestEnv::new();
    let zero = admin_role::zero_address(&t.env);

    let res = t.client.try_transfer_ownership(&t.owner, &zero);
    assert_eq!(res, Err(Ok(ContractError::InvalidAddress)));
}

#[test]
fn test_change_upgrade_admin_is_independent() {
    let t = TestEnv::new();
    let governance = t.anyone();

    t.client.change_upgrade_admin(&t.owner, &governance);
    assert_eq!(t.client.upgrade_admin(), governance);
    assert_eq!(t.client.owner(), t.owner);

    // O antigo upgrade admin perdeu o poder
    let res = t.client.try_change_upgrade_admin(&t.owner, &t.owner);
    assert_eq!(res, Err(Ok(ContractError::Unauthorized)));
}

#[test]
fn test_upgrade_auth_protection() {
    let t = TestEnv::new();
    let hacker = t.anyone();
    let fake_wasm_hash = BytesN::<32>::random(&t.env);

    let res = t.client.try_upgrade(&hacker, &fake_wasm_hash);
    assert_eq!(res, Err(Ok(ContractError::Unauthorized)));
}

#[test]
fn test_ownership_moves_admin_power() {
    let t = TestEnv::new();
    let governance = t.anyone();
    let newcomer = t.anyone();
    let token = t.anyone();

    t.client.transfer_ownership(&t.owner, &governance);
    assert!(t.client.is_admin(&governance));
    assert!(!t.client.is_admin(&t.owner));
    assert_eq!(t.client.admins().len(), 3);

    // Governança administra; o owner antigo não
    let record = ContributorRecord { account: newcomer.clone(), max_trust: 1000, balance: 0 };
    t.client.register_contributor(&governance, &record);
    t.client.set_token_contract(&governance, &token);
    assert_eq!(t.client.token_contract(), token);
    assert_eq!(
        t.client.try_remove_contributor(&t.owner, &newcomer),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(t.client.get_max_trust(&newcomer), 1000);

    // Admins explícitos continuam
    assert!(t.client.is_admin(&t.admin_first));
    assert!(t.client.is_admin(&t.admin_second));
}
