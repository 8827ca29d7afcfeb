use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInitialized {
    pub admin: Address,
    pub auction_house: Address,
    pub token: Address,
}

/// Event emitted when a domain goes up for auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStarted {
    #[topic]
    pub domain: String,
    pub auction_id: u64,
    pub starter: Address,
}

/// Event emitted when the winner of an auction takes ownership
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomainClaimed {
    #[topic]
    pub domain: String,
    #[topic]
    pub owner: Address,
    pub auction_id: u64,
    pub price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentForwarded {
    #[topic]
    pub domain: String,
    #[topic]
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsWithdrawn {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeriodsUpdated {
    pub bid_period: u64,
    pub reveal_period: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    pub old_admin: Address,
    pub new_admin: Address,
}

pub fn emit_registry_initialized(env: &Env, admin: Address, auction_house: Address, token: Address) {
    RegistryInitialized { admin, auction_house, token }.publish(env);
}

pub fn emit_auction_started(env: &Env, domain: String, auction_id: u64, starter: Address) {
    AuctionStarted { domain, auction_id, starter }.publish(env);
}

pub fn emit_domain_claimed(env: &Env, domain: String, owner: Address, auction_id: u64, price: i128) {
    DomainClaimed { domain, owner, auction_id, price }.publish(env);
}

pub fn emit_payment_forwarded(env: &Env, domain: String, from: Address, to: Address, amount: i128) {
    PaymentForwarded { domain, from, to, amount }.publish(env);
}

pub fn emit_proceeds_withdrawn(env: &Env, to: Address, amount: i128) {
    ProceedsWithdrawn { to, amount }.publish(env);
}

pub fn emit_periods_updated(env: &Env, bid_period: u64, reveal_period: u64) {
    PeriodsUpdated { bid_period, reveal_period }.publish(env);
}

pub fn emit_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    AdminChanged { old_admin, new_admin }.publish(env);
}
