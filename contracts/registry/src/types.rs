use soroban_sdk::{contracttype, Address, BytesN, String};

/// Longest accepted domain name, in bytes
pub const MAX_DOMAIN_LEN: u32 = 253;

/// Largest page returned by paged listings
pub const MAX_PAGE_SIZE: u32 = 50;

/// Storage keys for registry contract.
///
/// Per-domain entries are keyed by the sha256 of the domain so every key has
/// a fixed size whatever the name length.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Config,
    Registration(BytesN<32>),
    ActiveAuction(BytesN<32>),
    RegisteredAt(u32),
    RegisteredCount,
    ActiveAt(u32),
    ActiveCount,
}

/// Registry configuration
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryConfig {
    pub admin: Address,
    pub auction_house: Address,
    pub token: Address,
    pub bid_period: u64,
    pub reveal_period: u64,
    pub updated_at: u64,
}

/// A claimed domain
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DomainRecord {
    pub domain: String,
    pub owner: Address,
    pub auction_id: u64,
    pub price: i128,
    pub claimed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DomainOwner {
    pub domain: String,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DomainAuction {
    pub domain: String,
    pub auction_id: u64,
}

/// A running auction and its slot in the active index
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveEntry {
    pub auction_id: u64,
    pub slot: u32,
}

/// Registry statistics
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryStats {
    pub registered_domains: u32,
    pub active_auctions: u32,
}
