use soroban_sdk::{contracttype, Address, Bytes, Vec};

/// Lifecycle of the auction record. Only ever moves forward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Created = 0,
    Started = 1,
    Ended = 2,
}

/// The single auction record owned by this contract instance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub duration: u64,
    pub auction_start: u64,
    pub auction_end: u64,
    pub item_name: Bytes,
    pub item_image: Bytes,
    pub item_description: Bytes,
    pub item_owner: Address,
    pub starting_bid: i128,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub status: AuctionStatus,
}

impl AuctionState {
    /// The current leader and the amount held for them, if a real bid has
    /// been admitted. `highest_bid` still equal to `starting_bid` means no
    /// bid was ever accepted.
    pub fn leading_bid(&self) -> Option<(Address, i128)> {
        match &self.highest_bidder {
            Some(bidder) if self.highest_bid != self.starting_bid => {
                Some((bidder.clone(), self.highest_bid))
            }
            _ => None,
        }
    }

    /// Bidding window is open strictly before `auction_end`.
    pub fn accepts_bids_at(&self, now: u64) -> bool {
        self.status == AuctionStatus::Started && now < self.auction_end
    }
}

/// Runtime parameters fixed at creation: the asset custody is held in and the
/// minimum fee the runtime charges per operation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub asset: Address,
    pub min_fee: i128,
}

/// The five creation arguments plus the authentication note.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateParams {
    pub note: Bytes,
    pub duration: u64,
    pub item_name: Bytes,
    pub item_image: Bytes,
    pub item_description: Bytes,
    pub starting_bid: i128,
}

/// Out-of-band completion intent carried by an application call.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OnCompletion {
    NoOp = 0,
    DeleteApplication = 5,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// No action attached. Only valid alongside a delete intent.
    Nothing,
    Start,
    /// Carries the account the caller believes is the current leader, so the
    /// refund destination is named explicitly in the request.
    Bid(Option<Address>),
    End,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppCall {
    pub sender: Address,
    pub fee: i128,
    pub on_completion: OnCompletion,
    pub action: Action,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub sender: Address,
    pub receiver: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Call(AppCall),
    Payment(Payment),
}

/// An atomic group of operations. `position` is the index of the call being
/// evaluated; the group size is `operations.len()`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bundle {
    pub position: u32,
    pub operations: Vec<Operation>,
}
