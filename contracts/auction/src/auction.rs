use crate::bundle;
use crate::errors::Error;
use crate::escrow;
use crate::events::*;
use crate::storage;
use crate::types::{AppCall, AuctionState, AuctionStatus, Bundle, CreateParams, LedgerConfig};
use soroban_sdk::{Address, Bytes, Env};

// ============================================================================
// Constants
// ============================================================================

/// Protocol tag every creation request must carry.
pub const AUCTION_NOTE: &[u8] = b"auction:uv2";

/// Deposit taken into custody when the auction starts.
pub const START_DEPOSIT: i128 = 1_000_000;

/// Operations a refunding bid pays for: the call, the bid payment and the refund.
pub const REFUND_FEE_OPERATIONS: i128 = 3;

/// Operations a paying `end` pays for: the call and the payout.
pub const PAYOUT_FEE_OPERATIONS: i128 = 2;

fn ledger_config(env: &Env) -> Result<LedgerConfig, Error> {
    storage::get_ledger_config(env).ok_or(Error::NotCreated)
}

// ============================================================================
// Handlers
// ============================================================================
// Each handler validates its bundle and the business rules against the stored
// record before committing state or escrow payments. The transition table has
// already been checked by the dispatcher.

/// Records a new auction owned by `creator`.
pub fn create(
    env: &Env,
    creator: &Address,
    ledger: &LedgerConfig,
    params: &CreateParams,
) -> Result<(), Error> {
    if params.note != Bytes::from_slice(env, AUCTION_NOTE) {
        return Err(Error::InvalidNote);
    }
    if params.duration == 0 {
        return Err(Error::InvalidDuration);
    }
    if params.starting_bid <= 0 {
        return Err(Error::InvalidStartingBid);
    }
    if ledger.min_fee < 0 {
        return Err(Error::InvalidLedgerConfig);
    }

    let auction = AuctionState {
        duration: params.duration,
        auction_start: 0,
        auction_end: 0,
        item_name: params.item_name.clone(),
        item_image: params.item_image.clone(),
        item_description: params.item_description.clone(),
        item_owner: creator.clone(),
        starting_bid: params.starting_bid,
        highest_bid: params.starting_bid,
        highest_bidder: None,
        status: AuctionStatus::Created,
    };

    storage::set_creator(env, creator);
    storage::set_ledger_config(env, ledger);
    storage::save_auction(env, &auction);

    AuctionCreatedEventData {
        creator: creator.clone(),
        item_name: auction.item_name,
        duration: auction.duration,
        starting_bid: auction.starting_bid,
    }
    .publish(env);

    Ok(())
}

pub fn start(env: &Env, call: &AppCall, bundle: &Bundle) -> Result<(), Error> {
    let deposit = bundle::call_with_payment(env, bundle, call)?;
    if deposit.amount != START_DEPOSIT {
        return Err(Error::InvalidDeposit);
    }

    let mut auction = storage::require_auction(env)?;
    let ledger = ledger_config(env)?;

    let now = env.ledger().timestamp();
    auction.auction_start = now;
    auction.auction_end = now
        .checked_add(auction.duration)
        .ok_or(Error::ClockOverflow)?;
    auction.status = AuctionStatus::Started;

    escrow::collect(env, &ledger, &deposit);
    storage::save_auction(env, &auction);

    AuctionStartedEventData {
        starter: call.sender.clone(),
        auction_start: auction.auction_start,
        auction_end: auction.auction_end,
    }
    .publish(env);

    Ok(())
}

pub fn bid(
    env: &Env,
    call: &AppCall,
    bundle: &Bundle,
    previous: Option<Address>,
) -> Result<(), Error> {
    let payment = bundle::call_with_payment(env, bundle, call)?;

    let mut auction = storage::require_auction(env)?;
    if payment.amount <= auction.highest_bid {
        return Err(Error::BidTooLow);
    }
    if !auction.accepts_bids_at(env.ledger().timestamp()) {
        return Err(Error::AuctionClosed);
    }

    let ledger = ledger_config(env)?;

    // A real leader must be named in the request and refunded in full.
    let refund = match auction.leading_bid() {
        Some((leader, amount)) => {
            if previous.as_ref() != Some(&leader) {
                return Err(Error::RefundTargetMismatch);
            }
            escrow::require_fee(&ledger, call.fee, REFUND_FEE_OPERATIONS)?;
            Some((leader, amount))
        }
        None => None,
    };

    escrow::collect(env, &ledger, &payment);
    if let Some((leader, amount)) = &refund {
        escrow::pay(env, &ledger, leader, *amount);
    }

    auction.highest_bid = payment.amount;
    auction.highest_bidder = Some(call.sender.clone());
    storage::save_auction(env, &auction);

    BidPlacedEventData {
        bidder: call.sender.clone(),
        amount: payment.amount,
        previous_bidder: refund.map(|(leader, _)| leader),
    }
    .publish(env);

    Ok(())
}

pub fn end(env: &Env, call: &AppCall, bundle: &Bundle) -> Result<(), Error> {
    bundle::lone_call(bundle)?;

    let mut auction = storage::require_auction(env)?;
    if env.ledger().timestamp() <= auction.auction_end {
        return Err(Error::AuctionStillOpen);
    }
    if call.sender != auction.item_owner {
        return Err(Error::Unauthorized);
    }

    let winning_bid = match auction.leading_bid() {
        Some((winner, amount)) => {
            let ledger = ledger_config(env)?;
            escrow::require_fee(&ledger, call.fee, PAYOUT_FEE_OPERATIONS)?;
            let creator = storage::get_creator(env).ok_or(Error::NotCreated)?;
            escrow::pay(env, &ledger, &creator, amount);
            auction.item_owner = winner;
            Some(amount)
        }
        None => None,
    };

    auction.status = AuctionStatus::Ended;
    storage::save_auction(env, &auction);

    AuctionEndedEventData {
        item_owner: auction.item_owner,
        winning_bid,
    }
    .publish(env);

    Ok(())
}

pub fn delete(env: &Env, call: &AppCall, bundle: &Bundle) -> Result<(), Error> {
    bundle::lone_call(bundle)?;

    let auction = storage::require_auction(env)?;
    if !may_delete(&auction, &call.sender) {
        return Err(Error::Unauthorized);
    }

    storage::destroy(env);

    AuctionDeletedEventData {
        owner: call.sender.clone(),
    }
    .publish(env);

    Ok(())
}

/// Deletion guard: only the owner, and never while bidding runs.
pub fn may_delete(auction: &AuctionState, requester: &Address) -> bool {
    *requester == auction.item_owner && auction.status != AuctionStatus::Started
}
