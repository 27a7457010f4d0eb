use crate::errors::Error;
use crate::lifecycle::Phase;
use crate::types::{AuctionState, AuctionStatus, LedgerConfig};
use soroban_sdk::{Address, Env, IntoVal, Symbol, TryFromVal, Val};

// TTL constants (same cadence as the marketplace contracts)
const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Global state keys ==========

pub const DURATION: &str = "DURATION";
pub const AUCTION_START: &str = "AUCTIONSTART";
pub const AUCTION_END: &str = "AUCTIONEND";
pub const ITEM_NAME: &str = "NAME";
pub const ITEM_IMAGE: &str = "IMAGE";
pub const ITEM_DESCRIPTION: &str = "DESC";
pub const ITEM_OWNER: &str = "OWNER";
pub const STARTING_BID: &str = "STARTINGBID";
pub const HIGHEST_BID: &str = "HIGHESTBID";
pub const HIGHEST_BIDDER: &str = "HIGHESTBIDDER";
pub const STATUS: &str = "STATUS";

// Runtime facts kept next to the auction record
const CREATOR: &str = "CREATOR";
const LEDGER: &str = "LEDGER";
const DELETED: &str = "DELETED";

const AUCTION_KEYS: [&str; 11] = [
    DURATION,
    AUCTION_START,
    AUCTION_END,
    ITEM_NAME,
    ITEM_IMAGE,
    ITEM_DESCRIPTION,
    ITEM_OWNER,
    STARTING_BID,
    HIGHEST_BID,
    HIGHEST_BIDDER,
    STATUS,
];

fn key(env: &Env, name: &str) -> Symbol {
    Symbol::new(env, name)
}

fn read<V: TryFromVal<Env, Val>>(env: &Env, name: &str) -> Option<V> {
    env.storage().instance().get(&key(env, name))
}

fn write<V: IntoVal<Env, Val>>(env: &Env, name: &str, value: &V) {
    env.storage().instance().set(&key(env, name), value);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Lifecycle ==========

pub fn phase(env: &Env) -> Phase {
    if env.storage().instance().has(&key(env, DELETED)) {
        return Phase::Destroyed;
    }
    match read::<AuctionStatus>(env, STATUS) {
        Some(status) => Phase::Live(status),
        None => Phase::NotYetCreated,
    }
}

// ========== Auction record ==========

pub fn load_auction(env: &Env) -> Option<AuctionState> {
    Some(AuctionState {
        duration: read(env, DURATION)?,
        auction_start: read(env, AUCTION_START)?,
        auction_end: read(env, AUCTION_END)?,
        item_name: read(env, ITEM_NAME)?,
        item_image: read(env, ITEM_IMAGE)?,
        item_description: read(env, ITEM_DESCRIPTION)?,
        item_owner: read(env, ITEM_OWNER)?,
        starting_bid: read(env, STARTING_BID)?,
        highest_bid: read(env, HIGHEST_BID)?,
        highest_bidder: read(env, HIGHEST_BIDDER)?,
        status: read(env, STATUS)?,
    })
}

/// Like [`load_auction`], but maps a missing record to the right rejection.
pub fn require_auction(env: &Env) -> Result<AuctionState, Error> {
    match phase(env) {
        Phase::Destroyed => Err(Error::AuctionDestroyed),
        _ => load_auction(env).ok_or(Error::NotCreated),
    }
}

pub fn save_auction(env: &Env, auction: &AuctionState) {
    write(env, DURATION, &auction.duration);
    write(env, AUCTION_START, &auction.auction_start);
    write(env, AUCTION_END, &auction.auction_end);
    write(env, ITEM_NAME, &auction.item_name);
    write(env, ITEM_IMAGE, &auction.item_image);
    write(env, ITEM_DESCRIPTION, &auction.item_description);
    write(env, ITEM_OWNER, &auction.item_owner);
    write(env, STARTING_BID, &auction.starting_bid);
    write(env, HIGHEST_BID, &auction.highest_bid);
    write(env, HIGHEST_BIDDER, &auction.highest_bidder);
    write(env, STATUS, &auction.status);
    extend_instance_ttl(env);
}

/// Drops the auction record and marks the instance as gone for good.
pub fn destroy(env: &Env) {
    for name in AUCTION_KEYS.iter().chain([CREATOR, LEDGER].iter()) {
        env.storage().instance().remove(&key(env, name));
    }
    write(env, DELETED, &true);
}

// ========== Runtime facts ==========

pub fn get_creator(env: &Env) -> Option<Address> {
    read(env, CREATOR)
}

pub fn set_creator(env: &Env, creator: &Address) {
    write(env, CREATOR, creator);
}

pub fn get_ledger_config(env: &Env) -> Option<LedgerConfig> {
    read(env, LEDGER)
}

pub fn set_ledger_config(env: &Env, config: &LedgerConfig) {
    write(env, LEDGER, config);
}
