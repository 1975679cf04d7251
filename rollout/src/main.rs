use std::process::ExitCode;

use rollout::{rollout_minter, rollout_registry, RolloutConfig};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "rollout failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> rollout::Result<()> {
    let config = RolloutConfig::from_env()?;

    // Sandbox local: o deployer assina tudo
    let env = Env::default();
    env.mock_all_auths();
    let deployer = Address::generate(&env);
    tracing::info!(deployer = ?deployer, "deploying from sandbox account");

    let registry = rollout_registry(&env, &deployer, &config.registry, &config.registry_owner)?;
    let minter = rollout_minter(&env, &deployer, &config.minter, &config.ratio)?;

    tracing::info!(registry = ?registry, minter = ?minter, "deployment completed");
    Ok(())
}
