use soroban_sdk::contracterror;

// ============================================================================
// ERROS DOS CONTRATOS
// ============================================================================

/// Erros compartilhados por Registry e Minter.
///
/// Todos são falhas síncronas de validação: a chamada aborta sem alterar
/// estado.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller fora do conjunto de admins, ou não é o owner/upgrade admin.
    Unauthorized = 3,
    /// Endereço zero onde um endereço real é exigido.
    InvalidAddress = 4,
    InvalidTrust = 5,
    InvalidRatio = 6,
    AlreadyRegistered = 7,
    NotRegistered = 8,
    RejectedTransfer = 9,
    ArithmeticOverflow = 10,
    EmptyAdminSet = 11,
    BatchTooLarge = 12,
}
