use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};
use admin_role::storage::bump_instance;
use admin_role::{authority, require_valid_address, AdminRole, ContractError};
use crate::events;
use crate::storage;
use crate::types::ContributorRecord;
use crate::validation;

//
// CONTRATO PRINCIPAL - REGISTRY
//

#[contract]
pub struct Registry;

#[contractimpl]
impl Registry {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o Registry.
    ///
    /// # Parâmetros
    /// - `owner`: owner lógico e upgrade admin iniciais (precisa assinar)
    /// - `admins`: conjunto fixo de admins
    /// - `token_contract`: contrato do token
    ///
    /// # Erros
    /// - `AlreadyInitialized`: Se o contrato já foi inicializado
    /// - `EmptyAdminSet` / `InvalidAddress`: parâmetros inválidos
    pub fn initialize(
        env: Env,
        owner: Address,
        admins: Vec<Address>,
        token_contract: Address,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        // CHECKS
        let role = AdminRole::new(&env);
        if role.is_initialized() {
            return Err(ContractError::AlreadyInitialized);
        }
        require_valid_address(&env, &token_contract)?;

        // EFFECTS
        role.init(&admins)?;
        authority::init(&env, &owner)?;
        storage::set_token_contract(&env, &token_contract);
        bump_instance(&env);

        log!(&env, "registry initialized, admins: {}", admins.len());
        Ok(())
    }

    //
    // CONTRIBUIDORES
    //

    /// Registra um contribuidor (apenas admin).
    ///
    /// # Erros
    /// - `Unauthorized`: caller não é admin
    /// - `InvalidAddress`: conta zero
    /// - `InvalidTrust`: `max_trust == 0`
    /// - `AlreadyRegistered`: conta já registrada
    pub fn register_contributor(
        env: Env,
        caller: Address,
        contributor: ContributorRecord,
    ) -> Result<(), ContractError> {
        // === CHECKS ===
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);
        validation::require_registrable(&env, &contributor)?;

        // === EFFECTS ===
        storage::insert_contributor(&env, &contributor);

        // === INTERACTIONS ===
        log!(&env, "contributor registered: {}", contributor.account.clone());
        events::emit_contributor_added(&env, &contributor.account);
        Ok(())
    }

    /// Registra vários contribuidores de uma vez (apenas admin).
    /// Tudo ou nada: o lote inteiro é validado antes da primeira escrita.
    pub fn register_contributors(
        env: Env,
        caller: Address,
        contributors: Vec<ContributorRecord>,
    ) -> Result<(), ContractError> {
        // === CHECKS ===
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);
        validation::require_registrable_batch(&env, &contributors)?;

        // === EFFECTS ===
        for contributor in contributors.iter() {
            storage::insert_contributor(&env, &contributor);
        }

        // === INTERACTIONS ===
        log!(&env, "contributors registered: {}", contributors.len());
        for contributor in contributors.iter() {
            events::emit_contributor_added(&env, &contributor.account);
        }
        Ok(())
    }

    /// Remove um contribuidor (apenas admin). O teto de confiança lê 0 logo em seguida.
    ///
    /// # Erros
    /// - `InvalidAddress`: conta zero
    /// - `NotRegistered`: conta não registrada
    pub fn remove_contributor(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        // === CHECKS ===
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);
        require_valid_address(&env, &account)?;
        if !storage::has_contributor(&env, &account) {
            return Err(ContractError::NotRegistered);
        }

        // === EFFECTS ===
        storage::delete_contributor(&env, &account);

        // === INTERACTIONS ===
        log!(&env, "contributor removed: {}", account.clone());
        events::emit_contributor_removed(&env, &account);
        Ok(())
    }

    //
    // LEITURA
    //

    /// Contas registradas (sem ordem garantida).
    pub fn get_contributors(env: Env) -> Vec<Address> {
        storage::get_contributor_list(&env)
    }

    /// Registros completos de todas as contas registradas.
    pub fn get_contributor_info(env: Env) -> Vec<ContributorRecord> {
        let mut info = Vec::new(&env);
        for account in storage::get_contributor_list(&env).iter() {
            if let Some(record) = storage::get_contributor(&env, &account) {
                info.push_back(record);
            }
        }
        info
    }

    /// Teto de confiança; 0 para contas não registradas ou removidas.
    pub fn get_max_trust(env: Env, account: Address) -> u128 {
        storage::get_contributor(&env, &account)
            .map(|c| c.max_trust)
            .unwrap_or(0)
    }

    /// Saldo pendente gravado no registro; 0 para contas não registradas.
    pub fn get_pending_balance(env: Env, account: Address) -> u128 {
        storage::get_contributor(&env, &account)
            .map(|c| c.balance)
            .unwrap_or(0)
    }

    //
    // CONTRATOS VINCULADOS
    //

    /// Define o minter autorizado (apenas admin). Aceita o endereço zero para desfazer.
    pub fn set_minter_contract(
        env: Env,
        caller: Address,
        minter: Address,
    ) -> Result<(), ContractError> {
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);

        storage::set_minter_contract(&env, &minter);

        events::emit_minter_contract_set(&env, &minter);
        Ok(())
    }

    /// Define o contrato do token (apenas admin). Rejeita o endereço zero.
    pub fn set_token_contract(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);
        require_valid_address(&env, &token)?;

        storage::set_token_contract(&env, &token);

        events::emit_token_contract_set(&env, &token);
        Ok(())
    }

    pub fn token_contract(env: Env) -> Address {
        storage::get_token_contract(&env)
    }

    pub fn minter_contract(env: Env) -> Address {
        storage::get_minter_contract(&env)
    }

    //
    // ADMINS E AUTORIDADES
    //

    pub fn is_admin(env: Env, account: Address) -> bool {
        AdminRole::new(&env).is_admin(&account)
    }

    pub fn admins(env: Env) -> Vec<Address> {
        AdminRole::new(&env).admins()
    }

    pub fn owner(env: Env) -> Address {
        authority::owner(&env)
    }

    pub fn upgrade_admin(env: Env) -> Address {
        authority::upgrade_admin(&env)
    }

    /// Transfere o owner lógico (apenas owner).
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        authority::transfer_ownership(&env, &caller, &new_owner)
    }

    /// Transfere o upgrade admin (apenas upgrade admin).
    pub fn change_upgrade_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        authority::change_upgrade_admin(&env, &caller, &new_admin)
    }

    /// Troca o wasm do contrato (apenas upgrade admin).
    pub fn upgrade(env: Env, caller: Address, wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        authority::upgrade(&env, &caller, wasm_hash)
    }
}

//
// TESTES UNITÁRIOS
//
