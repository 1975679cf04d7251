use soroban_sdk::{Address, Env, Vec};
use crate::storage;
use crate::types::ContractError;
use crate::validation;

/// Conjunto de admins de um contrato.
///
/// O conjunto explícito é definido uma única vez na inicialização e não muda
/// depois. O owner lógico atual é super-admin: conta como admin enquanto for
/// owner, e o poder passa junto com `transfer_ownership`.
/// Toda operação privilegiada passa por [`AdminRole::require_admin`].
pub struct AdminRole<'a> {
    env: &'a Env,
}

impl<'a> AdminRole<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Grava o conjunto inicial. Duplicatas são ignoradas.
    ///
    /// # Erros
    /// - `AlreadyInitialized`: conjunto já definido
    /// - `EmptyAdminSet`: lista vazia
    /// - `InvalidAddress`: algum admin é o endereço zero
    pub fn init(&self, admins: &Vec<Address>) -> Result<(), ContractError> {
        if storage::has_admins(self.env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if admins.is_empty() {
            return Err(ContractError::EmptyAdminSet);
        }

        let mut set = Vec::new(self.env);
        for admin in admins.iter() {
            validation::require_valid_address(self.env, &admin)?;
            if !set.contains(&admin) {
                set.push_back(admin);
            }
        }

        storage::set_admins(self.env, &set);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        storage::has_admins(self.env)
    }

    pub fn is_admin(&self, account: &Address) -> bool {
        self.is_owner(account) || storage::get_admins(self.env).contains(account)
    }

    /// Owner atual (se houver) seguido do conjunto explícito, sem repetição.
    pub fn admins(&self) -> Vec<Address> {
        let members = storage::get_admins(self.env);
        match storage::get_owner(self.env) {
            Some(owner) if !members.contains(&owner) => {
                let mut all = Vec::new(self.env);
                all.push_back(owner);
                all.append(&members);
                all
            }
            _ => members,
        }
    }

    fn is_owner(&self, account: &Address) -> bool {
        storage::get_owner(self.env).as_ref() == Some(account)
    }

    /// Exige a assinatura do caller e que ele pertença ao conjunto de admins.
    pub fn require_admin(&self, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        if !self.is_admin(caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}
