use soroban_sdk::{contractclient, Address, Env};

/// Interface do Token Manager, o contrato que de fato cunha os tokens.
/// O Minter só autoriza; a execução do mint é do Token Manager.
#[contractclient(name = "TokenManagerClient")]
pub trait TokenManagerInterface {
    fn mint(env: Env, to: Address, amount: i128);
}
