//! Conferência do estado depois do deploy: tudo que foi configurado precisa
//! ser lido de volta exatamente igual.

use contributor_registry::RegistryClient;
use donation_minter::MinterClient;
use soroban_sdk::{Address, Env};
use tracing::info;

use crate::config::{MinterInit, MinterRatio, RegistryInit};
use crate::deploy::{address, query};
use crate::error::{Result, RolloutError};

pub fn must_match_address(env: &Env, field: &str, expected: &str, actual: &Address) -> Result<()> {
    if address(env, expected) != *actual {
        return Err(RolloutError::Mismatch {
            field: field.into(),
            expected: expected.into(),
            actual: format!("{:?}", actual),
        });
    }
    Ok(())
}

pub fn must_match_amount(field: &str, expected: u128, actual: u128) -> Result<()> {
    if expected != actual {
        return Err(RolloutError::Mismatch {
            field: field.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

pub fn verify_registry(
    env: &Env,
    contract_id: &Address,
    init: &RegistryInit,
    governance: &Address,
) -> Result<()> {
    let client = RegistryClient::new(env, contract_id);
    info!("checking deployed Registry state");

    for (index, admin) in init.admins.iter().enumerate() {
        if !query(client.try_is_admin(&address(env, admin)))? {
            return Err(RolloutError::Mismatch {
                field: format!("IsAdmin at index {}", index),
                expected: "true".into(),
                actual: "false".into(),
            });
        }
    }

    must_match_address(env, "Token", &init.token_contract, &query(client.try_token_contract())?)?;
    must_match_authority("RegistryOwner", governance, &query(client.try_owner())?)?;
    must_match_authority("UpgradeAdmin", governance, &query(client.try_upgrade_admin())?)
}

pub fn verify_minter(
    env: &Env,
    contract_id: &Address,
    init: &MinterInit,
    ratio: &MinterRatio,
) -> Result<()> {
    let client = MinterClient::new(env, contract_id);
    info!("checking deployed Minter state");

    must_match_amount("Numerator", ratio.numerator, query(client.try_numerator())?)?;
    must_match_amount("Denominator", ratio.denominator, query(client.try_denominator())?)?;

    must_match_address(env, "Owner", &init.owner, &query(client.try_owner())?)?;
    must_match_address(env, "UpgradeAdmin", &init.owner, &query(client.try_upgrade_admin())?)?;
    must_match_address(env, "Bridge", &init.bridge, &query(client.try_bridge_address())?)?;
    must_match_address(
        env,
        "TokenManager",
        &init.token_manager,
        &query(client.try_token_manager())?,
    )?;
    must_match_address(env, "Registry", &init.registry, &query(client.try_registry())?)?;
    must_match_address(env, "Token", &init.token_contract, &query(client.try_token())?)
}

fn must_match_authority(field: &str, expected: &Address, actual: &Address) -> Result<()> {
    if expected != actual {
        return Err(RolloutError::Mismatch {
            field: field.into(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        });
    }
    Ok(())
}
