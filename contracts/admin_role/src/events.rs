use soroban_sdk::{symbol_short, Address, BytesN, Env};

//
// EVENTOS DE AUTORIDADE
//

// Owner lógico transferido
pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"), previous),
        new_owner.clone(),
    );
}

// Upgrade admin (equivalente ao admin do proxy) transferido
pub fn emit_upgrade_admin_changed(env: &Env, previous: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("upg_admin"), previous),
        new_admin.clone(),
    );
}

// Wasm do contrato substituído
pub fn emit_upgraded(env: &Env, wasm_hash: &BytesN<32>) {
    env.events().publish(
        (symbol_short!("upgraded"),),
        wasm_hash.clone(),
    );
}
