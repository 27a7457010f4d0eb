#![no_std]

mod auction;
mod bundle;
mod dispatch;
mod errors;
mod escrow;
pub mod events;
mod lifecycle;
mod storage;
mod types;

pub use auction::{AUCTION_NOTE, START_DEPOSIT};
pub use errors::Error;
pub use types::*;

use dispatch::Request;
use soroban_sdk::{contract, contractimpl, log, Address, Env};

/// Single-instance escrow auction.
///
/// One item is put up for a fixed duration. The contract holds the start
/// deposit and the leading bid in custody, refunds each outbid leader, and
/// pays the winning bid to the creator when the owner ends the auction.
#[contract]
pub struct SealedAuction;

#[contractimpl]
impl SealedAuction {
    /// Creates the auction record. Only admitted once per instance.
    ///
    /// # Errors
    /// * `Error::AlreadyCreated` - If the record already exists
    /// * `Error::InvalidNote` - If `params.note` is not the protocol tag
    /// * `Error::InvalidDuration` / `Error::InvalidStartingBid` - On zero values
    pub fn create(
        env: Env,
        creator: Address,
        ledger: LedgerConfig,
        params: CreateParams,
    ) -> Result<(), Error> {
        let request = Request::Create {
            creator,
            ledger,
            params,
        };
        dispatch::dispatch(&env, request).map_err(|e| reject(&env, e))
    }

    /// Evaluates the application call at `bundle.position` and admits or
    /// rejects the whole bundle.
    pub fn execute(env: Env, bundle: Bundle) -> Result<(), Error> {
        Request::from_bundle(bundle)
            .and_then(|request| dispatch::dispatch(&env, request))
            .map_err(|e| reject(&env, e))
    }

    pub fn get_auction(env: Env) -> Result<AuctionState, Error> {
        storage::require_auction(&env)
    }

    pub fn get_ledger_config(env: Env) -> Result<LedgerConfig, Error> {
        storage::require_auction(&env)?;
        storage::get_ledger_config(&env).ok_or(Error::NotCreated)
    }

    pub fn get_creator(env: Env) -> Result<Address, Error> {
        storage::require_auction(&env)?;
        storage::get_creator(&env).ok_or(Error::NotCreated)
    }

    /// Whether `requester` would currently be allowed to delete the instance.
    pub fn can_delete(env: Env, requester: Address) -> bool {
        storage::load_auction(&env)
            .map(|auction| auction::may_delete(&auction, &requester))
            .unwrap_or(false)
    }
}

fn reject(env: &Env, error: Error) -> Error {
    let code = error as u32;
    log!(env, "bundle rejected: {} {}", error.category(), code);
    error
}

#[cfg(test)]
mod test;
