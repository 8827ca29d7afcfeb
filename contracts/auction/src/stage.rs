use crate::types::{Auction, Stage};

/// Stage boundaries for an auction created at `created_at`.
///
/// Returns `(bidding_end, reveal_end)`, saturating at `u64::MAX`.
pub fn boundaries(created_at: u64, bid_period: u64, reveal_period: u64) -> (u64, u64) {
    let bidding_end = created_at.saturating_add(bid_period);
    let reveal_end = bidding_end.saturating_add(reveal_period);
    (bidding_end, reveal_end)
}

/// Stage of `auction` at ledger time `now`.
pub fn stage_at(auction: &Auction, now: u64) -> Stage {
    if auction.ended {
        Stage::Claimed
    } else if now < auction.bidding_end {
        Stage::Bidding
    } else if now < auction.reveal_end {
        Stage::Reveal
    } else {
        Stage::Claim
    }
}
