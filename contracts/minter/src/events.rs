use soroban_sdk::{symbol_short, Address, Env, String};

//
// EVENTOS DO MINTER
//

pub fn emit_donation_bridged(env: &Env, sender: &Address, amount: u128, home_tx_id: &String) {
    env.events().publish(
        (symbol_short!("donation"), sender),
        (amount, home_tx_id.clone()),
    );
}

pub fn emit_ratio_changed(env: &Env, numerator: u128, denominator: u128) {
    env.events().publish(
        (symbol_short!("ratio"),),
        (numerator, denominator),
    );
}

pub fn emit_membership_dues_changed(env: &Env, amount: u128, actor: &Address) {
    env.events().publish(
        (symbol_short!("dues"),),
        (amount, actor.clone()),
    );
}

pub fn emit_token_manager_changed(env: &Env, token_manager: &Address, actor: &Address) {
    env.events().publish(
        (symbol_short!("tm_chg"), token_manager),
        actor.clone(),
    );
}

pub fn emit_token_changed(env: &Env, token: &Address, actor: &Address) {
    env.events().publish(
        (symbol_short!("tok_chg"), token),
        actor.clone(),
    );
}

pub fn emit_registry_changed(env: &Env, registry: &Address, actor: &Address) {
    env.events().publish(
        (symbol_short!("reg_chg"), registry),
        actor.clone(),
    );
}
