use crate::types::{
    Auction, AuctionConfig, BidCommitment, StorageKey, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

fn bump(env: &Env, key: &StorageKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Persistent read that keeps a live entry from expiring.
fn read<V: TryFromVal<Env, Val>>(env: &Env, key: &StorageKey) -> Option<V> {
    let value = env.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        bump(env, key);
    }
    value
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &StorageKey, value: &V) {
    env.storage().persistent().set(key, value);
    bump(env, key);
}

// ========== Config ==========

pub fn get_config(env: &Env) -> Option<AuctionConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Auctions ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .instance()
        .set(&StorageKey::AuctionCounter, &counter);
    counter
}

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    read(env, &StorageKey::Auction(auction_id))
}

pub fn save_auction(env: &Env, auction: &Auction) {
    write(env, &StorageKey::Auction(auction.auction_id), auction);
}

// ========== Bids ==========

pub fn get_bids(env: &Env, auction_id: u64, bidder: &Address) -> Vec<BidCommitment> {
    read(env, &StorageKey::Bids(auction_id, bidder.clone())).unwrap_or(Vec::new(env))
}

/// Appends a commitment and returns its index in the bidder's sequence.
pub fn push_bid(env: &Env, auction_id: u64, bidder: &Address, bid: BidCommitment) -> u32 {
    let mut bids = get_bids(env, auction_id, bidder);
    let index = bids.len();
    bids.push_back(bid);
    write(env, &StorageKey::Bids(auction_id, bidder.clone()), &bids);
    index
}

// ========== Bidders ==========

pub fn get_bidder_count(env: &Env, auction_id: u64) -> u32 {
    read(env, &StorageKey::BidderCount(auction_id)).unwrap_or(0)
}

pub fn get_bidder_at(env: &Env, auction_id: u64, index: u32) -> Option<Address> {
    read(env, &StorageKey::BidderAt(auction_id, index))
}

/// One entry per bidder, so the index never outgrows a ledger entry.
pub fn add_bidder(env: &Env, auction_id: u64, bidder: &Address) {
    let count = get_bidder_count(env, auction_id);
    write(env, &StorageKey::BidderAt(auction_id, count), bidder);
    write(env, &StorageKey::BidderCount(auction_id), &(count + 1));
}

// ========== Deposits ==========

pub fn get_deposit_total(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    read(env, &StorageKey::DepositTotal(auction_id, bidder.clone())).unwrap_or(0)
}

pub fn set_deposit_total(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    write(env, &StorageKey::DepositTotal(auction_id, bidder.clone()), &amount);
}

// ========== Reveals ==========

pub fn has_revealed(env: &Env, auction_id: u64, bidder: &Address) -> bool {
    read(env, &StorageKey::Revealed(auction_id, bidder.clone())).unwrap_or(false)
}

pub fn set_revealed(env: &Env, auction_id: u64, bidder: &Address) {
    write(env, &StorageKey::Revealed(auction_id, bidder.clone()), &true);
}

// ========== Pending Returns ==========

pub fn get_pending_return(env: &Env, auction_id: u64, who: &Address) -> i128 {
    read(env, &StorageKey::PendingReturn(auction_id, who.clone())).unwrap_or(0)
}

pub fn add_pending_return(env: &Env, auction_id: u64, who: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let owed = get_pending_return(env, auction_id, who) + amount;
    write(env, &StorageKey::PendingReturn(auction_id, who.clone()), &owed);
}

pub fn clear_pending_return(env: &Env, auction_id: u64, who: &Address) {
    let key = StorageKey::PendingReturn(auction_id, who.clone());
    env.storage().persistent().remove(&key);
}
