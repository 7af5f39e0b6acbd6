use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    Owner(Address),
    Threshold,
    TransactionCount,
    Transaction(u64),
    Approval(ApprovalKey),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalKey {
    pub id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub to: Address,
    pub asset_contract: Address,
    pub asset_id: u128,
    pub approval_count: u32,
    pub executed: bool,
}
