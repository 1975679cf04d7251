use std::fmt::Debug;

use admin_role::ContractError;
use contributor_registry::{Registry, RegistryClient};
use donation_minter::{Minter, MinterClient};
use soroban_sdk::{Address, Env, String as SorobanString, Vec as SorobanVec};
use tracing::{info, warn};

use crate::config::{check_address, MinterInit, MinterRatio, RegistryInit};
use crate::error::{Result, RolloutError};
use crate::verify;

/// Converte uma strkey já validada em `Address`.
pub fn address(env: &Env, strkey: &str) -> Address {
    Address::from_string(&SorobanString::from_str(env, strkey))
}

// ============================================================================
// CHAMADAS AOS CONTRATOS
// ============================================================================

// Forma do retorno dos métodos `try_*` dos clients gerados
type TryResult<T, C, E, I> = std::result::Result<std::result::Result<T, C>, std::result::Result<E, I>>;

// Operações que retornam `ContractError`
fn invoke<T, C, I>(res: TryResult<T, C, ContractError, I>) -> Result<T>
where
    C: Debug,
    I: Debug,
{
    match res {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(RolloutError::Host(format!("{:?}", conversion))),
        Err(Ok(err)) => Err(RolloutError::Contract(err)),
        Err(Err(invoke)) => Err(RolloutError::Host(format!("{:?}", invoke))),
    }
}

// Leituras: o erro chega como `soroban_sdk::Error`
pub(crate) fn query<T, C, E, I>(res: TryResult<T, C, E, I>) -> Result<T>
where
    C: Debug,
    E: Debug,
    I: Debug,
{
    match res {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(RolloutError::Host(format!("{:?}", conversion))),
        Err(Ok(err)) => Err(RolloutError::Host(format!("{:?}", err))),
        Err(Err(invoke)) => Err(RolloutError::Host(format!("{:?}", invoke))),
    }
}

/// As duas autoridades que todo contrato do sistema expõe.
pub trait Authorities {
    fn current_owner(&self) -> Result<Address>;
    fn current_upgrade_admin(&self) -> Result<Address>;
    fn hand_over_ownership(&self, caller: &Address, to: &Address) -> Result<()>;
    fn hand_over_upgrade_admin(&self, caller: &Address, to: &Address) -> Result<()>;
}

macro_rules! impl_authorities {
    ($($client:ident),*) => {
        $(
            impl Authorities for $client<'_> {
                fn current_owner(&self) -> Result<Address> {
                    query(self.try_owner())
                }

                fn current_upgrade_admin(&self) -> Result<Address> {
                    query(self.try_upgrade_admin())
                }

                fn hand_over_ownership(&self, caller: &Address, to: &Address) -> Result<()> {
                    invoke(self.try_transfer_ownership(caller, to))
                }

                fn hand_over_upgrade_admin(&self, caller: &Address, to: &Address) -> Result<()> {
                    invoke(self.try_change_upgrade_admin(caller, to))
                }
            }
        )*
    };
}

impl_authorities!(RegistryClient, MinterClient);

// ============================================================================
// HANDOFF
// ============================================================================

/// Entrega owner e upgrade admin para a governança.
///
/// Cada passo só roda se a governança ainda não detém a autoridade, então
/// rodar de novo sobre o mesmo contrato não faz nada.
pub fn hand_off<C: Authorities>(
    client: &C,
    name: &str,
    deployer: &Address,
    governance: &Address,
) -> Result<()> {
    if governance == deployer {
        info!(contract = name, "governance is the deployer, nothing to hand off");
        return Ok(());
    }

    if client.current_owner()? != *governance {
        info!(contract = name, governance = ?governance, "transferring ownership");
        client.hand_over_ownership(deployer, governance)?;
    } else {
        warn!(contract = name, "governance already owns the contract, skipping");
    }

    if client.current_upgrade_admin()? != *governance {
        info!(contract = name, governance = ?governance, "changing upgrade admin");
        client.hand_over_upgrade_admin(deployer, governance)?;
    } else {
        warn!(contract = name, "governance already is the upgrade admin, skipping");
    }
    Ok(())
}

pub fn hand_off_registry(
    env: &Env,
    contract_id: &Address,
    deployer: &Address,
    governance: &Address,
) -> Result<()> {
    hand_off(&RegistryClient::new(env, contract_id), "Registry", deployer, governance)
}

pub fn hand_off_minter(
    env: &Env,
    contract_id: &Address,
    deployer: &Address,
    governance: &Address,
) -> Result<()> {
    hand_off(&MinterClient::new(env, contract_id), "Minter", deployer, governance)
}

// ============================================================================
// ROLLOUT
// ============================================================================

/// Sobe o Registry com o deployer como owner inicial, entrega as autoridades
/// para `governance` e confere o estado final.
///
/// O `env` precisa autorizar o deployer (no sandbox, `mock_all_auths`).
pub fn rollout_registry(
    env: &Env,
    deployer: &Address,
    init: &RegistryInit,
    governance: &str,
) -> Result<Address> {
    init.check()?;
    check_address("RegistryOwner", governance)?;
    info!(admins = init.admins.len(), token = %init.token_contract, "deploying Registry");

    let contract_id = env.register_contract(None, Registry);
    let client = RegistryClient::new(env, &contract_id);

    let mut admins = SorobanVec::new(env);
    for admin in &init.admins {
        admins.push_back(address(env, admin));
    }
    invoke(client.try_initialize(deployer, &admins, &address(env, &init.token_contract)))?;
    info!(contract = ?contract_id, "Registry initialized");

    let governance = address(env, governance);
    hand_off(&client, "Registry", deployer, &governance)?;

    verify::verify_registry(env, &contract_id, init, &governance)?;
    info!(contract = ?contract_id, "Registry rollout completed");
    Ok(contract_id)
}

/// Sobe o Minter com o deployer como owner inicial, aplica o ratio, entrega as
/// autoridades para `init.owner` e confere o estado final.
pub fn rollout_minter(
    env: &Env,
    deployer: &Address,
    init: &MinterInit,
    ratio: &MinterRatio,
) -> Result<Address> {
    init.check()?;
    ratio.check()?;
    info!(
        bridge = %init.bridge,
        numerator = ratio.numerator,
        denominator = ratio.denominator,
        "deploying Minter"
    );

    let contract_id = env.register_contract(None, Minter);
    let client = MinterClient::new(env, &contract_id);

    invoke(client.try_initialize(
        deployer,
        &address(env, &init.bridge),
        &address(env, &init.token_manager),
        &address(env, &init.registry),
        &address(env, &init.token_contract),
    ))?;
    info!(contract = ?contract_id, "Minter initialized");

    invoke(client.try_set_ratio(deployer, &ratio.numerator, &ratio.denominator))?;
    info!("ratio set");

    let governance = address(env, &init.owner);
    hand_off(&client, "Minter", deployer, &governance)?;

    verify::verify_minter(env, &contract_id, init, ratio)?;
    info!(contract = ?contract_id, "Minter rollout completed");
    Ok(contract_id)
}
