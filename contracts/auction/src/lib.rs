#![no_std]

mod commitment;
mod errors;
mod events;
mod stage;
mod storage;
mod types;

use soroban_sdk::{
    contract, contractimpl, log, token, vec, Address, BytesN, Env, IntoVal, String, Symbol, Val,
    Vec,
};

pub use errors::Error;
pub use types::{Auction, AuctionConfig, BidCommitment, Stage, MAX_PAGE_SIZE};

/// Sealed-bid auction house.
///
/// Each auction sells one domain on behalf of the registry. Bidders submit
/// commitments with a deposit while bidding is open, open all of them at once
/// during the reveal window, and pull refunds out with `withdraw`. The stage is
/// recomputed from the ledger clock on every call.
#[contract]
pub struct BlindAuction;

#[contractimpl]
impl BlindAuction {
    // ========== INITIALIZATION ==========

    pub fn initialize(env: Env, admin: Address, registry: Address, token: Address) -> Result<(), Error> {
        if storage::get_config(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_config(&env, &AuctionConfig { admin, registry, token });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Open a new auction for `domain` (registry only). Returns the auction id.
    pub fn create_auction(
        env: Env,
        caller: Address,
        domain: String,
        bid_period: u64,
        reveal_period: u64,
    ) -> Result<u64, Error> {
        let config = Self::config(&env)?;
        caller.require_auth();
        if caller != config.registry {
            return Err(Error::Unauthorized);
        }
        if bid_period == 0 || reveal_period == 0 {
            return Err(Error::InvalidPeriod);
        }

        let created_at = env.ledger().timestamp();
        let (bidding_end, reveal_end) = stage::boundaries(created_at, bid_period, reveal_period);
        let auction_id = storage::increment_auction_counter(&env);

        let auction = Auction {
            auction_id,
            domain: domain.clone(),
            created_at,
            bidding_end,
            reveal_end,
            highest_bidder: None,
            highest_bid: 0,
            ended: false,
            escrowed: 0,
            credited: 0,
            swept: 0,
        };
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction created", auction_id, bidding_end, reveal_end);
        events::emit_auction_created(&env, auction_id, domain, bidding_end, reveal_end);

        Ok(auction_id)
    }

    // ========== BIDDING ==========

    /// Submit a sealed bid and escrow `deposit` with it.
    ///
    /// Returns the index of the commitment within the bidder's own sequence;
    /// `reveal` must later open the commitments in this order.
    pub fn bid(
        env: Env,
        auction_id: u64,
        bidder: Address,
        commitment: BytesN<32>,
        deposit: i128,
    ) -> Result<u32, Error> {
        let config = Self::config(&env)?;
        bidder.require_auth();

        if deposit < 0 {
            return Err(Error::InvalidAmount);
        }

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Self::require_stage(&env, &auction, Stage::Bidding)?;

        if deposit > 0 {
            let token_client = token::TokenClient::new(&env, &config.token);
            token_client.transfer(&bidder, &env.current_contract_address(), &deposit);
        }

        let previous_total = storage::get_deposit_total(&env, auction_id, &bidder);
        if storage::get_bids(&env, auction_id, &bidder).is_empty() {
            storage::add_bidder(&env, auction_id, &bidder);
        }
        let index = storage::push_bid(&env, auction_id, &bidder, BidCommitment { commitment, deposit });
        storage::set_deposit_total(&env, auction_id, &bidder, previous_total + deposit);

        auction.escrowed += deposit;
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        log!(&env, "bid placed", auction_id, index, deposit);
        events::emit_bid_placed(&env, auction_id, bidder, index, deposit);

        Ok(index)
    }

    /// Open every commitment the bidder made, in submission order.
    ///
    /// An entry whose hash does not match forfeits its deposit. Fake or
    /// underfunded entries are refunded in full. Real entries refund their
    /// excess deposit and either take the lead or are refunded outright.
    pub fn reveal(
        env: Env,
        auction_id: u64,
        bidder: Address,
        values: Vec<i128>,
        fakes: Vec<bool>,
        secrets: Vec<BytesN<32>>,
    ) -> Result<(), Error> {
        Self::config(&env)?;
        bidder.require_auth();

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Self::require_stage(&env, &auction, Stage::Reveal)?;

        if storage::has_revealed(&env, auction_id, &bidder) {
            return Err(Error::RevealMismatch);
        }
        let bids = storage::get_bids(&env, auction_id, &bidder);
        let count = bids.len();
        if count == 0 || values.len() != count || fakes.len() != count || secrets.len() != count {
            return Err(Error::RevealMismatch);
        }
        if values.iter().any(|value| value < 0) {
            return Err(Error::InvalidAmount);
        }

        let mut valid: u32 = 0;
        let mut forfeited: i128 = 0;

        for i in 0..count {
            let entry = bids.get_unchecked(i);
            let value = values.get_unchecked(i);
            let is_fake = fakes.get_unchecked(i);
            let secret = secrets.get_unchecked(i);

            if commitment::hash_bid(&env, value, is_fake, &secret) != entry.commitment {
                forfeited += entry.deposit;
                continue;
            }
            valid += 1;

            if is_fake || entry.deposit < value {
                Self::credit(&env, &mut auction, &bidder, entry.deposit);
                continue;
            }

            Self::credit(&env, &mut auction, &bidder, entry.deposit - value);
            if value > auction.highest_bid {
                let previous = auction.highest_bid;
                if let Some(displaced) = auction.highest_bidder.take() {
                    Self::credit(&env, &mut auction, &displaced, previous);
                }
                auction.highest_bidder = Some(bidder.clone());
                auction.highest_bid = value;
            } else {
                Self::credit(&env, &mut auction, &bidder, value);
            }
        }

        storage::set_revealed(&env, auction_id, &bidder);
        storage::save_auction(&env, &auction);

        log!(&env, "bids revealed", auction_id, valid, forfeited);
        events::emit_bids_revealed(&env, auction_id, bidder, valid, forfeited);

        Ok(())
    }

    // ========== SETTLEMENT ==========

    /// Pay out everything owed to `bidder`. Returns the amount transferred;
    /// zero when nothing is owed.
    pub fn withdraw(env: Env, auction_id: u64, bidder: Address) -> Result<i128, Error> {
        let config = Self::config(&env)?;
        bidder.require_auth();

        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }

        let amount = storage::get_pending_return(&env, auction_id, &bidder);
        if amount == 0 {
            return Ok(0);
        }

        // Zero the balance before paying out.
        storage::clear_pending_return(&env, auction_id, &bidder);

        let token_client = token::TokenClient::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &bidder, &amount);

        log!(&env, "withdrawn", auction_id, amount);
        events::emit_withdrawn(&env, auction_id, bidder, amount);

        Ok(amount)
    }

    /// Winner takes the domain. The winning bid moves to the registry and the
    /// registry records the new owner.
    pub fn claim(env: Env, auction_id: u64, claimant: Address) -> Result<(), Error> {
        let config = Self::config(&env)?;
        claimant.require_auth();

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        if auction.ended {
            return Err(Error::AlreadyEnded);
        }
        Self::require_stage(&env, &auction, Stage::Claim)?;
        if auction.highest_bidder.as_ref() != Some(&claimant) {
            return Err(Error::NotWinner);
        }

        auction.ended = true;
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        if auction.highest_bid > 0 {
            let token_client = token::TokenClient::new(&env, &config.token);
            token_client.transfer(&env.current_contract_address(), &config.registry, &auction.highest_bid);
        }

        Self::notify_registry(
            &env,
            &config.registry,
            &auction.domain,
            auction_id,
            &claimant,
            auction.highest_bid,
        );

        log!(&env, "auction claimed", auction_id, auction.highest_bid);
        events::emit_auction_claimed(&env, auction_id, claimant, auction.domain, auction.highest_bid);

        Ok(())
    }

    /// Pay out the deposits this auction forfeited (admin only). Returns the
    /// amount transferred.
    ///
    /// Only possible once reveals are closed, when no further refund can be
    /// credited. The winning bid is never part of the sweep.
    pub fn sweep_forfeited(env: Env, auction_id: u64, admin: Address, to: Address) -> Result<i128, Error> {
        let config = Self::config(&env)?;
        admin.require_auth();
        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        match stage::stage_at(&auction, env.ledger().timestamp()) {
            Stage::Claim | Stage::Claimed => {}
            _ => return Err(Error::WrongStage),
        }

        let amount = Self::unswept_forfeits(&auction);
        if amount <= 0 {
            return Ok(0);
        }

        auction.swept += amount;
        storage::save_auction(&env, &auction);

        let token_client = token::TokenClient::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &to, &amount);

        log!(&env, "forfeits swept", auction_id, amount);
        events::emit_forfeits_swept(&env, auction_id, to, amount);

        Ok(amount)
    }

    // ========== QUERIES ==========

    pub fn get_stage(env: Env, auction_id: u64) -> Result<Stage, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(stage::stage_at(&auction, env.ledger().timestamp()))
    }

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    /// Current leader among revealed real bids, and the leading amount.
    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn get_bids(env: Env, auction_id: u64, bidder: Address) -> Vec<BidCommitment> {
        storage::get_bids(&env, auction_id, &bidder)
    }

    pub fn get_bid_count(env: Env, auction_id: u64, bidder: Address) -> u32 {
        storage::get_bids(&env, auction_id, &bidder).len()
    }

    pub fn get_deposit_total(env: Env, auction_id: u64, bidder: Address) -> i128 {
        storage::get_deposit_total(&env, auction_id, &bidder)
    }

    pub fn get_pending_return(env: Env, auction_id: u64, who: Address) -> i128 {
        storage::get_pending_return(&env, auction_id, &who)
    }

    pub fn has_revealed(env: Env, auction_id: u64, bidder: Address) -> bool {
        storage::has_revealed(&env, auction_id, &bidder)
    }

    /// Addresses that placed at least one bid, in order of their first bid.
    /// At most `MAX_PAGE_SIZE` entries starting at `start`.
    pub fn get_bidders(env: Env, auction_id: u64, start: u32, limit: u32) -> Vec<Address> {
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(storage::get_bidder_count(&env, auction_id));
        let mut bidders = Vec::new(&env);
        for index in start..end {
            if let Some(bidder) = storage::get_bidder_at(&env, auction_id, index) {
                bidders.push_back(bidder);
            }
        }
        bidders
    }

    pub fn get_bidder_count(env: Env, auction_id: u64) -> u32 {
        storage::get_bidder_count(&env, auction_id)
    }

    /// Deposits held for this auction that nobody can reclaim: mismatched
    /// reveals, plus every bid never revealed. Final once reveals close.
    pub fn get_forfeited(env: Env, auction_id: u64) -> Result<i128, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(Self::unswept_forfeits(&auction))
    }

    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    pub fn get_config(env: Env) -> Result<AuctionConfig, Error> {
        Self::config(&env)
    }

    /// Dry-run of `reveal`'s hash check: true iff the inputs open every one of
    /// the bidder's commitments, in order.
    pub fn check_hash(
        env: Env,
        auction_id: u64,
        bidder: Address,
        values: Vec<i128>,
        fakes: Vec<bool>,
        secrets: Vec<BytesN<32>>,
    ) -> Result<bool, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        if values.iter().any(|value| value < 0) {
            return Err(Error::InvalidAmount);
        }

        let bids = storage::get_bids(&env, auction_id, &bidder);
        let count = bids.len();
        if count == 0 || values.len() != count || fakes.len() != count || secrets.len() != count {
            return Ok(false);
        }

        for i in 0..count {
            let digest = commitment::hash_bid(
                &env,
                values.get_unchecked(i),
                fakes.get_unchecked(i),
                &secrets.get_unchecked(i),
            );
            if digest != bids.get_unchecked(i).commitment {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The commitment function, so clients can seal bids exactly as `reveal`
    /// will check them.
    pub fn hash_bid(env: Env, value: i128, is_fake: bool, secret: BytesN<32>) -> Result<BytesN<32>, Error> {
        if value < 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(commitment::hash_bid(&env, value, is_fake, &secret))
    }

    // ========== INTERNAL HELPERS ==========

    fn config(env: &Env) -> Result<AuctionConfig, Error> {
        storage::get_config(env).ok_or(Error::NotInitialized)
    }

    fn credit(env: &Env, auction: &mut Auction, who: &Address, amount: i128) {
        storage::add_pending_return(env, auction.auction_id, who, amount);
        auction.credited += amount;
    }

    /// Escrow not owed back to a bidder, not reserved for the winner, and not
    /// yet swept.
    fn unswept_forfeits(auction: &Auction) -> i128 {
        auction.escrowed - auction.credited - auction.highest_bid - auction.swept
    }

    fn require_stage(env: &Env, auction: &Auction, expected: Stage) -> Result<(), Error> {
        if stage::stage_at(auction, env.ledger().timestamp()) != expected {
            return Err(Error::WrongStage);
        }
        Ok(())
    }

    /// Call `notify_claimed` on the registry, identifying this contract as the caller
    fn notify_registry(
        env: &Env,
        registry: &Address,
        domain: &String,
        auction_id: u64,
        owner: &Address,
        price: i128,
    ) {
        let notify_fn = Symbol::new(env, "notify_claimed");
        let args: Vec<Val> = vec![
            env,
            env.current_contract_address().into_val(env),
            domain.into_val(env),
            auction_id.into_val(env),
            owner.into_val(env),
            price.into_val(env),
        ];
        env.invoke_contract::<()>(registry, &notify_fn, args);
    }
}

#[cfg(test)]
mod test;
