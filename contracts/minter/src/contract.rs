use soroban_sdk::{contract, contractimpl, log, vec, Address, BytesN, Env, String, Vec};
use admin_role::storage::bump_instance;
use admin_role::{authority, require_valid_address, AdminRole, ContractError};
use crate::events;
use crate::storage;
use crate::token_manager::TokenManagerClient;
use crate::validation;

//
// CONTRATO PRINCIPAL - MINTER
//

#[contract]
pub struct Minter;

#[contractimpl]
impl Minter {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o Minter.
    ///
    /// A bridge entra no conjunto explícito de admins (o relay precisa chamar
    /// `bridge_donation`); o owner é admin implícito enquanto for owner.
    /// Ratio começa em 1/1.
    ///
    /// # Erros
    /// - `AlreadyInitialized`: Se o contrato já foi inicializado
    /// - `InvalidAddress`: algum endereço é zero
    pub fn initialize(
        env: Env,
        owner: Address,
        bridge: Address,
        token_manager: Address,
        registry: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        // CHECKS
        let role = AdminRole::new(&env);
        if role.is_initialized() {
            return Err(ContractError::AlreadyInitialized);
        }
        for addr in [&owner, &bridge, &token_manager, &registry, &token] {
            require_valid_address(&env, addr)?;
        }

        // EFFECTS
        role.init(&vec![&env, bridge.clone()])?;
        authority::init(&env, &owner)?;
        storage::set_bridge(&env, &bridge);
        storage::set_token_manager(&env, &token_manager);
        storage::set_registry(&env, &registry);
        storage::set_token(&env, &token);
        storage::set_ratio(&env, 1, 1);
        bump_instance(&env);

        log!(&env, "minter initialized, bridge: {}", bridge);
        Ok(())
    }

    //
    // BRIDGE
    //

    /// Registra uma doação vinda da bridge e autoriza o mint proporcional.
    ///
    /// Cunha `amount * numerator / denominator` para `sender` via Token
    /// Manager (nada é chamado quando o resultado truncado é 0) e retorna o
    /// valor cunhado.
    ///
    /// # Erros
    /// - `Unauthorized`: caller não é admin
    /// - `ArithmeticOverflow`: resultado não cabe no tipo de valor do token
    pub fn bridge_donation(
        env: Env,
        caller: Address,
        sender: Address,
        amount: u128,
        home_tx_id: String,
    ) -> Result<u128, ContractError> {
        // === CHECKS ===
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);

        let (numerator, denominator) = storage::get_ratio(&env);
        let minted = validation::mint_amount(&env, amount, numerator, denominator)?;

        // === INTERACTIONS ===
        if minted > 0 {
            let token_manager = storage::get_token_manager(&env);
            TokenManagerClient::new(&env, &token_manager).mint(&sender, &minted);
        }

        log!(&env, "donation bridged: {}, minted {}", amount, minted);
        events::emit_donation_bridged(&env, &sender, amount, &home_tx_id);

        // `minted` nunca é negativo
        Ok(minted as u128)
    }

    //
    // RATIO E ANUIDADE
    //

    /// Define o ratio (apenas admin). Ambos precisam ser > 0.
    pub fn set_ratio(
        env: Env,
        caller: Address,
        numerator: u128,
        denominator: u128,
    ) -> Result<(), ContractError> {
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);
        validation::require_valid_ratio(numerator, denominator)?;

        storage::set_ratio(&env, numerator, denominator);

        events::emit_ratio_changed(&env, numerator, denominator);
        Ok(())
    }

    pub fn numerator(env: Env) -> u128 {
        storage::get_ratio(&env).0
    }

    pub fn denominator(env: Env) -> u128 {
        storage::get_ratio(&env).1
    }

    /// `numerator / denominator` com truncamento inteiro (1/10 lê 0).
    /// Quem precisa de precisão lê numerador e denominador separados.
    pub fn ratio(env: Env) -> u128 {
        let (numerator, denominator) = storage::get_ratio(&env);
        numerator / denominator
    }

    /// Define a anuidade de membro (apenas admin).
    pub fn set_membership_dues(
        env: Env,
        caller: Address,
        amount: u128,
    ) -> Result<(), ContractError> {
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);

        storage::set_membership_dues(&env, amount);

        events::emit_membership_dues_changed(&env, amount, &caller);
        Ok(())
    }

    pub fn membership_dues(env: Env) -> u128 {
        storage::get_membership_dues(&env)
    }

    //
    // CONTRATOS VINCULADOS
    //

    pub fn set_token_manager_contract(
        env: Env,
        caller: Address,
        token_manager: Address,
    ) -> Result<(), ContractError> {
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);
        require_valid_address(&env, &token_manager)?;

        storage::set_token_manager(&env, &token_manager);

        events::emit_token_manager_changed(&env, &token_manager, &caller);
        Ok(())
    }

    pub fn set_token_contract(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);
        require_valid_address(&env, &token)?;

        storage::set_token(&env, &token);

        events::emit_token_changed(&env, &token, &caller);
        Ok(())
    }

    pub fn set_registry(
        env: Env,
        caller: Address,
        registry: Address,
    ) -> Result<(), ContractError> {
        AdminRole::new(&env).require_admin(&caller)?;
        bump_instance(&env);
        require_valid_address(&env, &registry)?;

        storage::set_registry(&env, &registry);

        events::emit_registry_changed(&env, &registry, &caller);
        Ok(())
    }

    pub fn bridge_address(env: Env) -> Address {
        storage::get_bridge(&env)
    }

    pub fn token_manager(env: Env) -> Address {
        storage::get_token_manager(&env)
    }

    pub fn registry(env: Env) -> Address {
        storage::get_registry(&env)
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    //
    // TRANSFERÊNCIAS NÃO SOLICITADAS
    //

    /// Não existe caminho "payable": qualquer transferência direta é rejeitada.
    pub fn receive(_env: Env, _from: Address, _amount: i128) -> Result<(), ContractError> {
        Err(ContractError::RejectedTransfer)
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

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        authority::transfer_ownership(&env, &caller, &new_owner)
    }

    pub fn change_upgrade_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        authority::change_upgrade_admin(&env, &caller, &new_admin)
    }

    pub fn upgrade(env: Env, caller: Address, wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        authority::upgrade(&env, &caller, wasm_hash)
    }
}
