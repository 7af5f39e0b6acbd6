use soroban_sdk::{contractclient, Address, Env};

/// Interface of the external contract holding custody records for the
/// non-fungible assets the wallet manages. The wallet only ever queries
/// current ownership and, at quorum, asks the custodian to move the asset.
#[contractclient(name = "AssetCustodianClient")]
pub trait AssetCustodian {
    /// Returns the current holder. Fails if the asset does not exist.
    fn owner_of(env: Env, asset_id: u128) -> Address;

    /// Moves the asset. Fails if `from` is not the current holder or the
    /// recipient cannot accept it.
    fn transfer(env: Env, from: Address, to: Address, asset_id: u128);
}
