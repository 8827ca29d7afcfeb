
use crate::{BlindAuction, BlindAuctionClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, vec, Address, BytesN, Env, String, Vec,
};

pub const START_TIME: u64 = 1000;
pub const BID_PERIOD: u64 = 3600;
pub const REVEAL_PERIOD: u64 = 1800;

/// What the auction house reported to the registry on claim
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimNotice {
    pub caller: Address,
    pub domain: String,
    pub auction_id: u64,
    pub owner: Address,
    pub price: i128,
}

/// Stands in for the domain registry: records the last claim notification.
#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn notify_claimed(env: Env, caller: Address, domain: String, auction_id: u64, owner: Address, price: i128) {
        let notice = ClaimNotice { caller, domain, auction_id, owner, price };
        env.storage().instance().set(&0u32, &notice);
    }

    pub fn last_claim(env: Env) -> Option<ClaimNotice> {
        env.storage().instance().get(&0u32)
    }
}

pub struct TestContext {
    pub env: Env,
    pub client: BlindAuctionClient<'static>,
    pub contract_id: Address,
    pub registry: MockRegistryClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl TestContext {
    pub fn bidder(&self, funds: i128) -> Address {
        let bidder = Address::generate(&self.env);
        self.token_admin.mint(&bidder, &funds);
        bidder
    }

    pub fn open_auction(&self, domain: &str) -> u64 {
        self.client.create_auction(
            &self.registry.address,
            &String::from_str(&self.env, domain),
            &BID_PERIOD,
            &REVEAL_PERIOD,
        )
    }

    /// Seal and submit a bid, returning the commitment index.
    pub fn place(&self, auction_id: u64, bidder: &Address, value: i128, fake: bool, seed: u8, deposit: i128) -> u32 {
        let commitment = sealed(&self.env, value, fake, seed);
        self.client.bid(&auction_id, bidder, &commitment, &deposit)
    }

    pub fn reveal(&self, auction_id: u64, bidder: &Address, entries: &[(i128, bool, u8)]) {
        let (values, fakes, secrets) = openings(&self.env, entries);
        self.client.reveal(&auction_id, bidder, &values, &fakes, &secrets);
    }

    pub fn pending(&self, auction_id: u64, who: &Address) -> i128 {
        self.client.get_pending_return(&auction_id, who)
    }
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START_TIME);

    let contract_id = env.register(BlindAuction, ());
    let client = BlindAuctionClient::new(&env, &contract_id);

    let registry_id = env.register(MockRegistry, ());
    let registry = MockRegistryClient::new(&env, &registry_id);

    let admin = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    client.initialize(&admin, &registry_id, &token_address);

    TestContext {
        env,
        client,
        contract_id,
        registry,
        token: token_client,
        token_admin: token_admin_client,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

/// Move the clock into the reveal window of an auction opened at `START_TIME`.
pub fn enter_reveal(env: &Env) {
    env.ledger().with_mut(|li| li.timestamp = START_TIME + BID_PERIOD);
}

/// Move the clock into the claim window of an auction opened at `START_TIME`.
pub fn enter_claim(env: &Env) {
    env.ledger().with_mut(|li| li.timestamp = START_TIME + BID_PERIOD + REVEAL_PERIOD);
}

pub fn secret(env: &Env, seed: u8) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[0] = seed;
    bytes[31] = seed.wrapping_mul(7);
    BytesN::from_array(env, &bytes)
}

pub fn sealed(env: &Env, value: i128, fake: bool, seed: u8) -> BytesN<32> {
    crate::commitment::hash_bid(env, value, fake, &secret(env, seed))
}

pub fn openings(env: &Env, entries: &[(i128, bool, u8)]) -> (Vec<i128>, Vec<bool>, Vec<BytesN<32>>) {
    let mut values = vec![env];
    let mut fakes = vec![env];
    let mut secrets = vec![env];
    for (value, fake, seed) in entries {
        values.push_back(*value);
        fakes.push_back(*fake);
        secrets.push_back(secret(env, *seed));
    }
    (values, fakes, secrets)
}
