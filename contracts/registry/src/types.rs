use soroban_sdk::{contracttype, Address};

// ============================================================================
// CONTRIBUIDOR
// ============================================================================

/// Conta confiável rastreada pelo Registry.
///
/// `max_trust` é o teto de confiança consultado pela lógica de negócio fora
/// deste contrato; `balance` é o saldo pendente gravado no registro.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributorRecord {
    pub account: Address,
    pub max_trust: u128,
    pub balance: u128,
}
