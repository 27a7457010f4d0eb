use soroban_sdk::{contractevent, Address, Bytes};

/// Event emitted when the auction record is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub creator: Address,
    pub item_name: Bytes,
    pub duration: u64,
    pub starting_bid: i128,
}

/// Event emitted when the bidding timer is armed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    #[topic]
    pub starter: Address,
    pub auction_start: u64,
    pub auction_end: u64,
}

/// Event emitted when a bid takes the lead
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub previous_bidder: Option<Address>,
}

/// Event emitted for every payment originated from custody
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentIssuedEventData {
    #[topic]
    pub receiver: Address,
    pub amount: i128,
}

/// Event emitted when the auction is closed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub item_owner: Address,
    pub winning_bid: Option<i128>,
}

/// Event emitted when the instance is deleted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionDeletedEventData {
    #[topic]
    pub owner: Address,
}
