use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    Unauthorized = 102,
    AlreadyRegistered = 103,
    AuctionInProgress = 104,
    UnknownDomain = 105,
    NotActiveAuction = 106,
    InvalidDomain = 107,
    InvalidAmount = 108,
    InvalidPeriod = 109,
    InsufficientProceeds = 110,
}
