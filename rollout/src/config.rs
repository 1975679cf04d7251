//! Parâmetros de deploy lidos do ambiente (`.env` incluso).
//!
//! Todo endereço é uma strkey Stellar (`G...` ou `C...`) e nunca a conta zero.

use stellar_strkey::{ed25519, Contract, Strkey};

use crate::error::{Result, RolloutError};

pub const REGISTRY_ADMINS: &str = "REGISTRY_ADMINS";
pub const REGISTRY_TOKEN_CONTRACT: &str = "REGISTRY_TOKEN_CONTRACT";
pub const REGISTRY_OWNER: &str = "REGISTRY_OWNER";
pub const MINTER_OWNER: &str = "MINTER_OWNER";
pub const MINTER_BRIDGE: &str = "MINTER_BRIDGE";
pub const MINTER_TOKEN_MANAGER: &str = "MINTER_TOKEN_MANAGER";
pub const MINTER_REGISTRY: &str = "MINTER_REGISTRY";
pub const MINTER_TOKEN_CONTRACT: &str = "MINTER_TOKEN_CONTRACT";
pub const MINTER_RATIO_NUMERATOR: &str = "MINTER_RATIO_NUMERATOR";
pub const MINTER_RATIO_DENOMINATOR: &str = "MINTER_RATIO_DENOMINATOR";

/// 5 tokens por 2e18 unidades doadas.
pub const DEFAULT_RATIO: MinterRatio = MinterRatio {
    numerator: 5,
    denominator: 2_000_000_000_000_000_000,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryInit {
    pub admins: Vec<String>,
    pub token_contract: String,
}

impl RegistryInit {
    pub fn check(&self) -> Result<()> {
        if self.admins.is_empty() {
            return Err(RolloutError::Config {
                key: REGISTRY_ADMINS.into(),
                reason: "at least one admin is required".into(),
            });
        }
        for (index, admin) in self.admins.iter().enumerate() {
            check_address(&format!("Admin at index {}", index), admin)?;
        }
        check_address("TokenContract", &self.token_contract)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinterInit {
    pub owner: String,
    pub bridge: String,
    pub token_manager: String,
    pub registry: String,
    pub token_contract: String,
}

impl MinterInit {
    pub fn check(&self) -> Result<()> {
        check_address("Owner", &self.owner)?;
        check_address("Bridge", &self.bridge)?;
        check_address("TokenManager", &self.token_manager)?;
        check_address("Registry", &self.registry)?;
        check_address("TokenContract", &self.token_contract)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinterRatio {
    pub numerator: u128,
    pub denominator: u128,
}

impl MinterRatio {
    pub fn check(&self) -> Result<()> {
        if self.numerator == 0 || self.denominator == 0 {
            return Err(RolloutError::InvalidRatio {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(())
    }
}

impl Default for MinterRatio {
    fn default() -> Self {
        DEFAULT_RATIO
    }
}

/// Configuração completa de um rollout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloutConfig {
    pub registry: RegistryInit,
    /// Governança que recebe owner e upgrade admin do Registry
    pub registry_owner: String,
    pub minter: MinterInit,
    pub ratio: MinterRatio,
}

impl RolloutConfig {
    /// Carrega `.env` (se existir) e lê as variáveis do processo.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração de qualquer fonte chave -> valor.
    /// O ratio é opcional e cai em [`DEFAULT_RATIO`] quando nenhuma parte é informada.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RolloutError::Config {
                    key: key.into(),
                    reason: "not set".into(),
                })
        };

        let admins = required(REGISTRY_ADMINS)?
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(String::from)
            .collect();

        let ratio = match (
            lookup(MINTER_RATIO_NUMERATOR),
            lookup(MINTER_RATIO_DENOMINATOR),
        ) {
            (None, None) => DEFAULT_RATIO,
            (numerator, denominator) => MinterRatio {
                numerator: parse_amount(MINTER_RATIO_NUMERATOR, numerator)?,
                denominator: parse_amount(MINTER_RATIO_DENOMINATOR, denominator)?,
            },
        };

        let config = RolloutConfig {
            registry: RegistryInit {
                admins,
                token_contract: required(REGISTRY_TOKEN_CONTRACT)?,
            },
            registry_owner: required(REGISTRY_OWNER)?,
            minter: MinterInit {
                owner: required(MINTER_OWNER)?,
                bridge: required(MINTER_BRIDGE)?,
                token_manager: required(MINTER_TOKEN_MANAGER)?,
                registry: required(MINTER_REGISTRY)?,
                token_contract: required(MINTER_TOKEN_CONTRACT)?,
            },
            ratio,
        };
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> Result<()> {
        self.registry.check()?;
        check_address("RegistryOwner", &self.registry_owner)?;
        self.minter.check()?;
        self.ratio.check()
    }
}

fn parse_amount(key: &str, value: Option<String>) -> Result<u128> {
    let value = value.ok_or_else(|| RolloutError::Config {
        key: key.into(),
        reason: "both ratio parts must be set together".into(),
    })?;
    value.trim().parse::<u128>().map_err(|e| RolloutError::Config {
        key: key.into(),
        reason: e.to_string(),
    })
}

/// Aceita contas (`G...`) e contratos (`C...`); rejeita a conta zero.
pub fn check_address(field: &str, value: &str) -> Result<()> {
    let invalid = || RolloutError::InvalidAddress {
        field: field.into(),
        value: value.into(),
    };
    match Strkey::from_string(value).map_err(|_| invalid())? {
        Strkey::PublicKeyEd25519(ed25519::PublicKey(key)) if key != [0u8; 32] => Ok(()),
        Strkey::Contract(Contract(_)) => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_role::ZERO_ACCOUNT;
    use std::collections::HashMap;

    fn account(seed: u8) -> String {
        Strkey::PublicKeyEd25519(ed25519::PublicKey([seed; 32])).to_string()
    }

    fn contract(seed: u8) -> String {
        Strkey::Contract(Contract([seed; 32])).to_string()
    }

    fn vars() -> HashMap<&'static str, String> {
        HashMap::from([
            (REGISTRY_ADMINS, format!("{}, {}", account(1), account(2))),
            (REGISTRY_TOKEN_CONTRACT, contract(3)),
            (REGISTRY_OWNER, account(4)),
            (MINTER_OWNER, account(4)),
            (MINTER_BRIDGE, account(5)),
            (MINTER_TOKEN_MANAGER, contract(6)),
            (MINTER_REGISTRY, contract(7)),
            (MINTER_TOKEN_CONTRACT, contract(3)),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<RolloutConfig> {
        RolloutConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_check_address() {
        assert!(check_address("x", &account(1)).is_ok());
        assert!(check_address("x", &contract(1)).is_ok());
        assert!(matches!(
            check_address("x", ZERO_ACCOUNT),
            Err(RolloutError::InvalidAddress { .. })
        ));
        assert!(check_address("x", "0x000000000000000000000000000000000000dEaD").is_err());
        assert!(check_address("x", "").is_err());
    }

    #[test]
    fn test_from_lookup_defaults_ratio() {
        let config = load(&vars()).unwrap();
        assert_eq!(config.registry.admins, vec![account(1), account(2)]);
        assert_eq!(config.ratio, DEFAULT_RATIO);
        assert_eq!(config.minter.bridge, account(5));
    }

    #[test]
    fn test_from_lookup_reads_ratio() {
        let mut vars = vars();
        vars.insert(MINTER_RATIO_NUMERATOR, "500".into());
        vars.insert(MINTER_RATIO_DENOMINATOR, " 1000 ".into());

        let config = load(&vars).unwrap();
        assert_eq!(config.ratio, MinterRatio { numerator: 500, denominator: 1000 });
    }

    #[test]
    fn test_from_lookup_rejects_half_ratio() {
        let mut vars = vars();
        vars.insert(MINTER_RATIO_NUMERATOR, "500".into());

        let err = load(&vars).unwrap_err();
        assert!(matches!(err, RolloutError::Config { ref key, .. } if key == MINTER_RATIO_DENOMINATOR));
    }

    #[test]
    fn test_from_lookup_rejects_zero_ratio() {
        let mut vars = vars();
        vars.insert(MINTER_RATIO_NUMERATOR, "0".into());
        vars.insert(MINTER_RATIO_DENOMINATOR, "1000".into());

        assert!(matches!(load(&vars), Err(RolloutError::InvalidRatio { .. })));
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let mut vars = vars();
        vars.remove(MINTER_BRIDGE);

        let err = load(&vars).unwrap_err();
        assert!(matches!(err, RolloutError::Config { ref key, .. } if key == MINTER_BRIDGE));
    }

    #[test]
    fn test_from_lookup_names_bad_admin_index() {
        let mut vars = vars();
        vars.insert(REGISTRY_ADMINS, format!("{},{}", account(1), ZERO_ACCOUNT));

        let err = load(&vars).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Admin at index 1 address invalid: {}", ZERO_ACCOUNT)
        );
    }

    #[test]
    fn test_from_lookup_rejects_empty_admins() {
        let mut vars = vars();
        vars.insert(REGISTRY_ADMINS, " , ".into());

        let err = load(&vars).unwrap_err();
        assert!(matches!(err, RolloutError::Config { ref key, .. } if key == REGISTRY_ADMINS));
    }
}
