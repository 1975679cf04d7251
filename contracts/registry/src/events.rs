use soroban_sdk::{symbol_short, Address, Env};

//
// EVENTOS DO REGISTRY
//

pub fn emit_contributor_added(env: &Env, account: &Address) {
    env.events().publish(
        (symbol_short!("ctb_add"), account),
        (),
    );
}

pub fn emit_contributor_removed(env: &Env, account: &Address) {
    env.events().publish(
        (symbol_short!("ctb_rem"), account),
        (),
    );
}

// Endereço zero significa "sem minter"
pub fn emit_minter_contract_set(env: &Env, minter: &Address) {
    env.events().publish(
        (symbol_short!("mntr_set"),),
        minter.clone(),
    );
}

pub fn emit_token_contract_set(env: &Env, token: &Address) {
    env.events().publish(
        (symbol_short!("token_set"),),
        token.clone(),
    );
}
