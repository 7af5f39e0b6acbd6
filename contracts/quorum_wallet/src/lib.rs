#![no_std]

mod custodian;
mod errors;
mod types;
mod wallet;


pub use crate::custodian::{AssetCustodian, AssetCustodianClient};
pub use crate::errors::WalletError;
pub use crate::types::Transaction;
pub use crate::wallet::{QuorumWallet, QuorumWalletClient};
