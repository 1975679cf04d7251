use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

// ============================================================================
// CONSTANTES
// ============================================================================

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
pub const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
pub const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

const ADMINS: Symbol = symbol_short!("admins");
const OWNER: Symbol = symbol_short!("owner");
const UPGRADE_ADMIN: Symbol = symbol_short!("upg_admin");

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL do storage de instância (admins, owner, configuração)
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
}

// ============================================================================
// ADMINS
// ============================================================================

pub fn has_admins(env: &Env) -> bool {
    env.storage().instance().has(&ADMINS)
}

pub fn get_admins(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&ADMINS)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_admins(env: &Env, admins: &Vec<Address>) {
    env.storage().instance().set(&ADMINS, admins);
}

// ============================================================================
// AUTORIDADES
// ============================================================================

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn get_upgrade_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&UPGRADE_ADMIN)
}

pub fn set_upgrade_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&UPGRADE_ADMIN, admin);
}
