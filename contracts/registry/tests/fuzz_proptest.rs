#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use proptest::prelude::*;
use setup::TestEnv;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Vec};
use std::collections::HashMap;

use contributor_registry::{ContractError, ContributorRecord};

const POOL: usize = 6;

// Ações possíveis sobre um pool fixo de contas
#[derive(Debug, Clone)]
enum Action {
    Register { who: usize, max_trust: u128, balance: u128 },
    Remove { who: usize },
}

fn action_strategy() -> impl Strategy<Value = std::vec::Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            (0..POOL, 0..5_000u128, 0..5_000u128).prop_map(|(who, max_trust, balance)| {
                Action::Register { who, max_trust, balance }
            }),
            (0..POOL).prop_map(|who| Action::Remove { who }),
        ],
        1..30,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// O Registry se comporta como um mapa simples conta -> (teto, saldo)
    #[test]
    fn fuzz_registry_matches_model(actions in action_strategy()) {
        let t = TestEnv::new();
        let pool: std::vec::Vec<Address> = (0..POOL).map(|_| Address::generate(&t.env)).collect();
        let mut model: HashMap<usize, (u128, u128)> = HashMap::new();

        for action in actions {
            match action {
                Action::Register { who, max_trust, balance } => {
                    let res = t.client.try_register_contributor(
                        &t.admin_first,
                        &ContributorRecord { account: pool[who].clone(), max_trust, balance },
                    );
                    if max_trust == 0 {
                        prop_assert_eq!(res, Err(Ok(ContractError::InvalidTrust)));
                    } else if model.contains_key(&who) {
                        prop_assert_eq!(res, Err(Ok(ContractError::AlreadyRegistered)));
                    } else {
                        prop_assert!(res.is_ok());
                        model.insert(who, (max_trust, balance));
                    }
                }
                Action::Remove { who } => {
                    let res = t.client.try_remove_contributor(&t.admin_first, &pool[who]);
                    if model.remove(&who).is_some() {
                        prop_assert!(res.is_ok());
                    } else {
                        prop_assert_eq!(res, Err(Ok(ContractError::NotRegistered)));
                    }
                }
            }
        }

        // === INVARIANTE FINAL ===
        // teto == 0 sse a conta nunca foi registrada ou foi removida
        let listed = t.client.get_contributors();
        for (i, account) in pool.iter().enumerate() {
            let (trust, balance) = model.get(&i).copied().unwrap_or((0, 0));
            prop_assert_eq!(t.client.get_max_trust(account), trust);
            prop_assert_eq!(t.client.get_pending_balance(account), balance);
            prop_assert_eq!(listed.contains(account), model.contains_key(&i));
        }
        // Fixture (4) + modelo
        prop_assert_eq!(listed.len() as usize, 4 + model.len());
    }

    /// Lote com uma entrada inválida em qualquer posição não aplica nada
    #[test]
    fn fuzz_batch_is_all_or_nothing(size in 1usize..10, bad_at in 0usize..10) {
        let t = TestEnv::new();
        let bad_at = bad_at % size;
        let before = t.client.get_contributors().len();

        let mut batch = Vec::new(&t.env);
        for i in 0..size {
            let max_trust = if i == bad_at { 0 } else { 1000 + i as u128 };
            batch.push_back(ContributorRecord {
                account: Address::generate(&t.env),
                max_trust,
                balance: 0,
            });
        }

        let res = t.client.try_register_contributors(&t.admin_first, &batch);
        prop_assert_eq!(res, Err(Ok(ContractError::InvalidTrust)));
        prop_assert_eq!(t.client.get_contributors().len(), before);
        for c in batch.iter() {
            prop_assert_eq!(t.client.get_max_trust(&c.account), 0);
        }
    }
}
