#![cfg(test)]
#![cfg(not(tarpaulin_include))]
#![allow(dead_code)]
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol, Val, Vec};

use donation_minter::{Minter, MinterClient};

// ============================================================================
// TOKEN MANAGER DE TESTE
// ============================================================================

/// Token Manager que só acumula o que foi cunhado por conta.
#[contract]
pub struct MockTokenManager;

const MINTED: Symbol = symbol_short!("minted");

#[contractimpl]
impl MockTokenManager {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let key = (MINTED, to);
        let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        env.storage().persistent().set(&key, &(current + amount));
    }

    pub fn minted(env: Env, to: Address) -> i128 {
        env.storage().persistent().get(&(MINTED, to)).unwrap_or(0)
    }
}

// ============================================================================
// FIXTURE
// ============================================================================

pub struct TestEnv<'a> {
    pub env: Env,
    pub client: MinterClient<'a>,
    pub contract_id: Address,
    pub token_manager: MockTokenManagerClient<'a>,
    /// Owner do Minter (primeiro admin)
    pub admin_first: Address,
    /// Relay da bridge (segundo admin)
    pub admin_second: Address,
    pub registry: Address,
    pub token: Address,
}

impl<'a> TestEnv<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin_first = Address::generate(&env);
        let admin_second = Address::generate(&env);
        let registry = Address::generate(&env);
        let token = Address::generate(&env);

        let token_manager_id = env.register_contract(None, MockTokenManager);
        let token_manager = MockTokenManagerClient::new(&env, &token_manager_id);

        let contract_id = env.register_contract(None, Minter);
        let client = MinterClient::new(&env, &contract_id);

        client.initialize(&admin_first, &admin_second, &token_manager_id, &registry, &token);

        // Mesmo estado inicial do fixture de deploy
        client.set_ratio(&admin_first, &500, &1000);
        client.set_membership_dues(&admin_first, &4_500_000_000);

        Self {
            env,
            client,
            contract_id,
            token_manager,
            admin_first,
            admin_second,
            registry,
            token,
        }
    }

    pub fn anyone(&self) -> Address {
        Address::generate(&self.env)
    }

    /// Último evento publicado: (contrato, tópicos, dados)
    pub fn last_event(&self) -> (Address, Vec<Val>, Val) {
        self.env
            .events()
            .all()
            .last()
            .expect("nenhum evento publicado")
    }
}
