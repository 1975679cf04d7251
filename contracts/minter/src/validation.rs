use admin_role::ContractError;
use soroban_sdk::{Env, U256};

// ============================================================================
// VALIDAÇÕES
// ============================================================================

/// Numerador e denominador precisam ser > 0
pub fn require_valid_ratio(numerator: u128, denominator: u128) -> Result<(), ContractError> {
    if numerator == 0 || denominator == 0 {
        return Err(ContractError::InvalidRatio);
    }
    Ok(())
}

/// amount * numerator / denominator, truncado, no tipo de valor do token (i128).
/// O produto intermediário é calculado em 256 bits; só o resultado precisa
/// caber em i128.
pub fn mint_amount(
    env: &Env,
    amount: u128,
    numerator: u128,
    denominator: u128,
) -> Result<i128, ContractError> {
    require_valid_ratio(numerator, denominator)?;
    let scaled = U256::from_u128(env, amount)
        .mul(&U256::from_u128(env, numerator))
        .div(&U256::from_u128(env, denominator));
    let minted = scaled.to_u128().ok_or(ContractError::ArithmeticOverflow)?;
    i128::try_from(minted).map_err(|_| ContractError::ArithmeticOverflow)
}
