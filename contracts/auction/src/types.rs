use soroban_sdk::{contracttype, Address, BytesN, String};

// TTL constants
pub const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Largest page returned by paged queries
pub const MAX_PAGE_SIZE: u32 = 50;

/// Storage keys for the auction house
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Config,
    AuctionCounter,
    Auction(u64),
    Bids(u64, Address),
    DepositTotal(u64, Address),
    Revealed(u64, Address),
    PendingReturn(u64, Address),
    BidderAt(u64, u32),
    BidderCount(u64),
}

/// Auction house configuration, set once by `initialize`.
///
/// `admin` may sweep deposits that were forfeited once an auction has left
/// the reveal window.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionConfig {
    pub admin: Address,
    pub registry: Address,
    pub token: Address,
}

/// Stage of an auction, always derived from the ledger clock and never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Stage {
    Bidding = 0,
    Reveal = 1,
    Claim = 2,
    /// Terminal: the winner has claimed the domain.
    Claimed = 3,
}

/// A sealed bid: the commitment hash and the deposit escrowed alongside it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidCommitment {
    pub commitment: BytesN<32>,
    pub deposit: i128,
}

/// One sealed-bid auction for a single domain.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub domain: String,
    pub created_at: u64,
    pub bidding_end: u64,
    pub reveal_end: u64,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub ended: bool,
    /// Sum of every deposit taken in by `bid`
    pub escrowed: i128,
    /// Sum of every amount credited to pending returns
    pub credited: i128,
    /// Forfeited deposits already paid out by `sweep_forfeited`
    pub swept: i128,
}
