use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Only the configured registry may open auctions
    Unauthorized = 3,
    AuctionNotFound = 4,
    /// The operation is not valid in the auction's current stage
    WrongStage = 5,
    /// Reveal does not cover exactly the caller's commitments, or was already made
    RevealMismatch = 6,
    NotWinner = 7,
    AlreadyEnded = 8,
    InvalidAmount = 9,
    InvalidPeriod = 10,
}
