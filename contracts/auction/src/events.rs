use soroban_sdk::{contractevent, Address, Env, String};

/// Event emitted when the registry opens an auction for a domain
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub auction_id: u64,
    pub domain: String,
    pub bidding_end: u64,
    pub reveal_end: u64,
}

/// Event emitted for every sealed bid. Carries the deposit, never the value.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub index: u32,
    pub deposit: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidsRevealed {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub valid: u32,
    pub forfeited: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionClaimed {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub winner: Address,
    pub domain: String,
    pub price: i128,
}

/// Event emitted when the admin pays out an auction's forfeited deposits
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForfeitsSwept {
    #[topic]
    pub auction_id: u64,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_auction_created(env: &Env, auction_id: u64, domain: String, bidding_end: u64, reveal_end: u64) {
    AuctionCreated { auction_id, domain, bidding_end, reveal_end }.publish(env);
}

pub fn emit_bid_placed(env: &Env, auction_id: u64, bidder: Address, index: u32, deposit: i128) {
    BidPlaced { auction_id, bidder, index, deposit }.publish(env);
}

pub fn emit_bids_revealed(env: &Env, auction_id: u64, bidder: Address, valid: u32, forfeited: i128) {
    BidsRevealed { auction_id, bidder, valid, forfeited }.publish(env);
}

pub fn emit_withdrawn(env: &Env, auction_id: u64, recipient: Address, amount: i128) {
    Withdrawn { auction_id, recipient, amount }.publish(env);
}

pub fn emit_auction_claimed(env: &Env, auction_id: u64, winner: Address, domain: String, price: i128) {
    AuctionClaimed { auction_id, winner, domain, price }.publish(env);
}

pub fn emit_forfeits_swept(env: &Env, auction_id: u64, to: Address, amount: i128) {
    ForfeitsSwept { auction_id, to, amount }.publish(env);
}
