#![no_std]

use soroban_sdk::{
    contract, contractimpl, log, token, vec, Address, Env, IntoVal, String, Symbol, Val, Vec,
};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::{
    DomainAuction, DomainOwner, DomainRecord, RegistryConfig, RegistryStats, MAX_DOMAIN_LEN, MAX_PAGE_SIZE,
};

/// Domain name registry.
///
/// Names are sold through sealed-bid auctions run by the auction house. The
/// registry opens one auction per unclaimed domain, records the winner when
/// the auction house reports a claim, and keeps the winning payments.
#[contract]
pub struct DomainRegistry;

#[contractimpl]
impl DomainRegistry {
    // ========== INITIALIZATION ==========

    /// Initialize the registry with its admin, auction house and payment token
    pub fn initialize(
        env: Env,
        admin: Address,
        auction_house: Address,
        token: Address,
        bid_period: u64,
        reveal_period: u64,
    ) -> Result<(), Error> {
        if storage::get_config(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        if bid_period == 0 || reveal_period == 0 {
            return Err(Error::InvalidPeriod);
        }

        storage::set_config(
            &env,
            &RegistryConfig {
                admin: admin.clone(),
                auction_house: auction_house.clone(),
                token: token.clone(),
                bid_period,
                reveal_period,
                updated_at: env.ledger().timestamp(),
            },
        );

        events::emit_registry_initialized(&env, admin, auction_house, token);

        Ok(())
    }

    // ========== AUCTIONS ==========

    /// Put an unclaimed domain up for auction. Returns the auction id.
    pub fn start_auction(env: Env, starter: Address, domain: String) -> Result<u64, Error> {
        let config = Self::config(&env)?;
        starter.require_auth();

        if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
            return Err(Error::InvalidDomain);
        }
        if storage::get_registration(&env, &domain).is_some() {
            return Err(Error::AlreadyRegistered);
        }
        if storage::get_active_auction(&env, &domain).is_some() {
            return Err(Error::AuctionInProgress);
        }

        let auction_id = Self::call_create_auction(
            &env,
            &config.auction_house,
            &domain,
            config.bid_period,
            config.reveal_period,
        );
        storage::add_active_auction(&env, &domain, auction_id);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction started", domain, auction_id);
        events::emit_auction_started(&env, domain, auction_id, starter);

        Ok(auction_id)
    }

    /// Record the winner of a finished auction (auction house only).
    ///
    /// `auction_id` must be the auction currently running for `domain`, so a
    /// stale or foreign auction can never take ownership.
    pub fn notify_claimed(
        env: Env,
        caller: Address,
        domain: String,
        auction_id: u64,
        owner: Address,
        price: i128,
    ) -> Result<(), Error> {
        let config = Self::config(&env)?;
        caller.require_auth();

        if caller != config.auction_house {
            return Err(Error::NotActiveAuction);
        }
        if storage::get_active_auction(&env, &domain) != Some(auction_id) {
            return Err(Error::NotActiveAuction);
        }

        storage::remove_active_auction(&env, &domain);
        storage::set_registration(
            &env,
            &DomainRecord {
                domain: domain.clone(),
                owner: owner.clone(),
                auction_id,
                price,
                claimed_at: env.ledger().timestamp(),
            },
        );
        storage::extend_instance_ttl(&env);

        log!(&env, "domain claimed", domain, auction_id, price);
        events::emit_domain_claimed(&env, domain, owner, auction_id, price);

        Ok(())
    }

    // ========== PAYMENTS ==========

    /// Pay `amount` to whoever owns `domain`. Returns the owner paid.
    ///
    /// A zero amount is a valid no-op payment; only negative amounts fail.
    pub fn forward(env: Env, sender: Address, domain: String, amount: i128) -> Result<Address, Error> {
        let config = Self::config(&env)?;
        sender.require_auth();

        let record = storage::get_registration(&env, &domain).ok_or(Error::UnknownDomain)?;
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let token_client = token::TokenClient::new(&env, &config.token);
        token_client.transfer(&sender, &record.owner, &amount);

        events::emit_payment_forwarded(&env, domain, sender, record.owner.clone(), amount);

        Ok(record.owner)
    }

    /// Winning payments held by the registry
    pub fn get_proceeds(env: Env) -> Result<i128, Error> {
        let config = Self::config(&env)?;
        let token_client = token::TokenClient::new(&env, &config.token);
        Ok(token_client.balance(&env.current_contract_address()))
    }

    pub fn withdraw_proceeds(env: Env, admin: Address, to: Address, amount: i128) -> Result<(), Error> {
        let config = Self::require_admin(&env, &admin)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let token_client = token::TokenClient::new(&env, &config.token);
        let registry = env.current_contract_address();
        if token_client.balance(&registry) < amount {
            return Err(Error::InsufficientProceeds);
        }
        token_client.transfer(&registry, &to, &amount);

        log!(&env, "proceeds withdrawn", amount);
        events::emit_proceeds_withdrawn(&env, to, amount);

        Ok(())
    }

    // ========== QUERIES ==========

    /// Owner of `domain`, if it has been claimed
    pub fn resolve_domain(env: Env, domain: String) -> Option<Address> {
        storage::get_registration(&env, &domain).map(|record| record.owner)
    }

    pub fn get_registration(env: Env, domain: String) -> Result<DomainRecord, Error> {
        storage::get_registration(&env, &domain).ok_or(Error::UnknownDomain)
    }

    /// Id of the auction currently running for `domain`
    pub fn get_active_auction(env: Env, domain: String) -> Option<u64> {
        storage::get_active_auction(&env, &domain)
    }

    /// Claimed domains with their owners, in order of registration.
    ///
    /// Reads one entry per domain; large registries should use
    /// `get_registered_domains_page`.
    pub fn get_registered_domains(env: Env) -> Vec<DomainOwner> {
        Self::registered_range(&env, 0, storage::get_registered_count(&env))
    }

    /// Up to `limit` claimed domains starting at position `start`
    pub fn get_registered_domains_page(env: Env, start: u32, limit: u32) -> Vec<DomainOwner> {
        let count = storage::get_registered_count(&env);
        Self::registered_range(&env, start, Self::page_end(start, limit, count))
    }

    /// Domains under auction with their auction ids.
    ///
    /// Ordered by start time until an auction finishes; the most recent
    /// auction then takes the finished one's position.
    pub fn get_current_auctions(env: Env) -> Vec<DomainAuction> {
        Self::active_range(&env, 0, storage::get_active_count(&env))
    }

    /// Up to `limit` running auctions starting at position `start`
    pub fn get_current_auctions_page(env: Env, start: u32, limit: u32) -> Vec<DomainAuction> {
        let count = storage::get_active_count(&env);
        Self::active_range(&env, start, Self::page_end(start, limit, count))
    }

    pub fn get_stats(env: Env) -> RegistryStats {
        RegistryStats {
            registered_domains: storage::get_registered_count(&env),
            active_auctions: storage::get_active_count(&env),
        }
    }

    // ========== ACCESS CONTROL ==========

    /// Change the auction windows. Running auctions keep their own.
    pub fn set_periods(env: Env, admin: Address, bid_period: u64, reveal_period: u64) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;

        if bid_period == 0 || reveal_period == 0 {
            return Err(Error::InvalidPeriod);
        }

        config.bid_period = bid_period;
        config.reveal_period = reveal_period;
        config.updated_at = env.ledger().timestamp();
        storage::set_config(&env, &config);

        events::emit_periods_updated(&env, bid_period, reveal_period);

        Ok(())
    }

    pub fn set_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &current_admin)?;

        config.admin = new_admin.clone();
        config.updated_at = env.ledger().timestamp();
        storage::set_config(&env, &config);

        events::emit_admin_changed(&env, current_admin, new_admin);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Ok(Self::config(&env)?.admin)
    }

    pub fn get_config(env: Env) -> Result<RegistryConfig, Error> {
        Self::config(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn config(env: &Env) -> Result<RegistryConfig, Error> {
        storage::get_config(env).ok_or(Error::NotInitialized)
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<RegistryConfig, Error> {
        let config = Self::config(env)?;
        admin.require_auth();
        if *admin != config.admin {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    fn page_end(start: u32, limit: u32, count: u32) -> u32 {
        start.saturating_add(limit.min(MAX_PAGE_SIZE)).min(count)
    }

    fn registered_range(env: &Env, start: u32, end: u32) -> Vec<DomainOwner> {
        let mut result = Vec::new(env);
        for index in start..end {
            if let Some(entry) = storage::get_registered_at(env, index) {
                result.push_back(entry);
            }
        }
        result
    }

    fn active_range(env: &Env, start: u32, end: u32) -> Vec<DomainAuction> {
        let mut result = Vec::new(env);
        for slot in start..end {
            if let Some(entry) = storage::get_active_at(env, slot) {
                result.push_back(entry);
            }
        }
        result
    }

    /// Call create_auction on the auction house, identifying this registry as the caller
    fn call_create_auction(
        env: &Env,
        auction_house: &Address,
        domain: &String,
        bid_period: u64,
        reveal_period: u64,
    ) -> u64 {
        let create_fn = Symbol::new(env, "create_auction");
        let args: Vec<Val> = vec![
            env,
            env.current_contract_address().into_val(env),
            domain.into_val(env),
            bid_period.into_val(env),
            reveal_period.into_val(env),
        ];
        env.invoke_contract(auction_house, &create_fn, args)
    }
}
