use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

use crate::custodian::AssetCustodianClient;
use crate::errors::WalletError;
use crate::types::{ApprovalKey, DataKey, Transaction};

#[contract]
pub struct QuorumWallet;

#[contractimpl]
impl QuorumWallet {
    pub fn initialize(env: Env, owners: Vec<Address>, threshold: u32) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(&env, WalletError::AlreadyInitialized);
        }

        if owners.len() == 0 || threshold == 0 || threshold > owners.len() {
            panic_with_error!(&env, WalletError::InvalidConfiguration);
        }

        // Check for duplicate owners
        for i in 0..owners.len() {
            for j in (i + 1)..owners.len() {
                if owners.get_unchecked(i) == owners.get_unchecked(j) {
                    panic_with_error!(&env, WalletError::InvalidConfiguration);
                }
            }
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Threshold, &threshold);
        env.storage().instance().set(&DataKey::TransactionCount, &0u64);
        env.storage().instance().set(&DataKey::Owners, &owners);

        for owner in owners.iter() {
            env.storage().instance().set(&DataKey::Owner(owner), &true);
        }
    }

    pub fn request_transaction(
        env: Env,
        caller: Address,
        to: Address,
        asset_contract: Address,
        asset_id: u128,
    ) -> u64 {
        Self::require_initialized(&env);
        caller.require_auth();
        Self::require_owner(&env, &caller);

        // The wallet must currently hold the asset; a failed ownership query
        // means the asset does not exist at the custodian
        let custodian = AssetCustodianClient::new(&env, &asset_contract);
        let held = match custodian.try_owner_of(&asset_id) {
            Ok(Ok(holder)) => holder == env.current_contract_address(),
            _ => false,
        };
        if !held {
            panic_with_error!(&env, WalletError::InvalidAsset);
        }

        let id: u64 = env.storage().instance().get(&DataKey::TransactionCount).unwrap();

        let transaction = Transaction {
            to,
            asset_contract,
            asset_id,
            approval_count: 0,
            executed: false,
        };

        env.storage().instance().set(&DataKey::Transaction(id), &transaction);
        env.storage().instance().set(&DataKey::TransactionCount, &(id + 1));

        id
    }

    pub fn approve_transaction(env: Env, caller: Address, id: u64) {
        Self::require_initialized(&env);
        caller.require_auth();
        Self::require_owner(&env, &caller);

        if !env.storage().instance().has(&DataKey::Transaction(id)) {
            panic_with_error!(&env, WalletError::TransactionNotFound);
        }

        let mut transaction: Transaction =
            env.storage().instance().get(&DataKey::Transaction(id)).unwrap();

        if transaction.executed {
            panic_with_error!(&env, WalletError::AlreadyExecuted);
        }

        let approval_key = DataKey::Approval(ApprovalKey {
            id,
            owner: caller.clone(),
        });

        if env.storage().instance().has(&approval_key) {
            panic_with_error!(&env, WalletError::DuplicateApproval);
        }

        transaction.approval_count += 1;

        let threshold: u32 = env.storage().instance().get(&DataKey::Threshold).unwrap();

        if transaction.approval_count == threshold {
            // Quorum reached: execute the asset transfer first (external
            // call), and commit the approval only if it succeeds
            let custodian = AssetCustodianClient::new(&env, &transaction.asset_contract);
            let transferred = custodian.try_transfer(
                &env.current_contract_address(),
                &transaction.to,
                &transaction.asset_id,
            );
            if transferred.is_err() {
                panic_with_error!(&env, WalletError::TransferFailed);
            }
            transaction.executed = true;
        }

        env.storage().instance().set(&approval_key, &true);
        env.storage().instance().set(&DataKey::Transaction(id), &transaction);
    }

    pub fn owners(env: Env) -> Vec<Address> {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::Owners).unwrap()
    }

    pub fn threshold(env: Env) -> u32 {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::Threshold).unwrap()
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        Self::require_initialized(&env);
        env.storage().instance().has(&DataKey::Owner(address))
    }

    pub fn transaction_count(env: Env) -> u64 {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::TransactionCount).unwrap()
    }

    pub fn get_transaction(env: Env, id: u64) -> Transaction {
        Self::require_initialized(&env);
        match env.storage().instance().get(&DataKey::Transaction(id)) {
            Some(transaction) => transaction,
            None => panic_with_error!(&env, WalletError::TransactionNotFound),
        }
    }

    pub fn has_approved(env: Env, id: u64, owner: Address) -> bool {
        Self::require_initialized(&env);
        env.storage().instance().has(&DataKey::Approval(ApprovalKey { id, owner }))
    }

    fn require_initialized(env: &Env) {
        if !env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(env, WalletError::NotInitialized);
        }
    }

    fn require_owner(env: &Env, owner: &Address) {
        if !env.storage().instance().has(&DataKey::Owner(owner.clone())) {
            panic_with_error!(env, WalletError::Unauthorized);
        }
    }
}
