use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfiguration = 3,
    Unauthorized = 4,
    InvalidAsset = 5,
    TransactionNotFound = 6,
    AlreadyExecuted = 7,
    DuplicateApproval = 8,
    TransferFailed = 9,
}
