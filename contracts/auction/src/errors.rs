use soroban_sdk::{contracterror, symbol_short, Symbol};

/// Rejection reasons for the auction contract.
///
/// Any `Err` aborts the whole invocation, so every variant means the same
/// thing to the caller: the bundle did not happen. Codes are grouped so logs
/// show which kind of rule failed:
/// - 1xx: malformed bundle
/// - 2xx: business rule violated
/// - 3xx: action requested in the wrong lifecycle state
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Group holds the wrong number of operations
    WrongGroupSize = 100,
    /// Application call is not at the required group position
    WrongGroupPosition = 101,
    /// Operation at the evaluated position is not an application call
    NotAnApplicationCall = 102,
    /// Second operation is not a payment
    NotAPayment = 103,
    /// Payment is not addressed to this contract
    WrongPaymentReceiver = 104,
    /// Payment sender differs from the application call sender
    SenderMismatch = 105,
    /// NoOp call without an action
    MissingAction = 106,

    /// Creation note does not match the protocol tag
    InvalidNote = 200,
    /// Auction duration must be positive
    InvalidDuration = 201,
    /// Starting bid must be positive
    InvalidStartingBid = 202,
    /// Ledger parameters are unusable
    InvalidLedgerConfig = 203,
    /// Start deposit differs from the required amount
    InvalidDeposit = 204,
    /// Bid does not exceed the current highest bid
    BidTooLow = 205,
    /// Bidding window has closed
    AuctionClosed = 206,
    /// Auction end time has not passed yet
    AuctionStillOpen = 207,
    /// Requester is not the item owner
    Unauthorized = 208,
    /// Declared fee does not cover the operations this request causes
    InsufficientFee = 209,
    /// Refund reference does not name the current leader
    RefundTargetMismatch = 210,
    /// Timestamp arithmetic overflowed
    ClockOverflow = 211,

    /// Auction state already exists
    AlreadyCreated = 300,
    /// No auction state exists yet
    NotCreated = 301,
    /// Action is not allowed from the current status
    InvalidStatus = 302,
    /// A started auction cannot be deleted
    AuctionInProgress = 303,
    /// Instance was deleted
    AuctionDestroyed = 304,
}

impl Error {
    pub fn category(&self) -> Symbol {
        match *self as u32 {
            100..=199 => symbol_short!("malformed"),
            200..=299 => symbol_short!("business"),
            _ => symbol_short!("state"),
        }
    }
}
