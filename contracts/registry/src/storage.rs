use soroban_sdk::{BytesN, Env, IntoVal, String, TryFromVal, Val};
use crate::types::{ActiveEntry, DomainAuction, DomainOwner, DomainRecord, RegistryConfig, StorageKey};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

fn read<V: TryFromVal<Env, Val>>(env: &Env, key: &StorageKey) -> Option<V> {
    let value = env.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        env.storage().persistent().extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    value
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &StorageKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Fixed-size storage id of a domain name
pub fn domain_hash(env: &Env, domain: &String) -> BytesN<32> {
    env.crypto().sha256(&domain.to_bytes()).to_bytes()
}

// ========== Registry Config ==========

pub fn get_config(env: &Env) -> Option<RegistryConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
    extend_instance_ttl(env);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Registrations ==========

pub fn get_registration(env: &Env, domain: &String) -> Option<DomainRecord> {
    read(env, &StorageKey::Registration(domain_hash(env, domain)))
}

/// Store the record and append the domain to the registration index.
pub fn set_registration(env: &Env, record: &DomainRecord) {
    write(env, &StorageKey::Registration(domain_hash(env, &record.domain)), record);

    let count = get_registered_count(env);
    let entry = DomainOwner { domain: record.domain.clone(), owner: record.owner.clone() };
    write(env, &StorageKey::RegisteredAt(count), &entry);
    env.storage().instance().set(&StorageKey::RegisteredCount, &(count + 1));
}

pub fn get_registered_count(env: &Env) -> u32 {
    env.storage().instance().get(&StorageKey::RegisteredCount).unwrap_or(0)
}

pub fn get_registered_at(env: &Env, index: u32) -> Option<DomainOwner> {
    read(env, &StorageKey::RegisteredAt(index))
}

// ========== Active Auctions ==========

pub fn get_active_auction(env: &Env, domain: &String) -> Option<u64> {
    read::<ActiveEntry>(env, &StorageKey::ActiveAuction(domain_hash(env, domain)))
        .map(|entry| entry.auction_id)
}

pub fn add_active_auction(env: &Env, domain: &String, auction_id: u64) {
    let slot = get_active_count(env);
    write(env, &StorageKey::ActiveAt(slot), &DomainAuction { domain: domain.clone(), auction_id });
    write(
        env,
        &StorageKey::ActiveAuction(domain_hash(env, domain)),
        &ActiveEntry { auction_id, slot },
    );
    env.storage().instance().set(&StorageKey::ActiveCount, &(slot + 1));
}

/// Drop the domain's running auction. The last slot moves into the freed one.
pub fn remove_active_auction(env: &Env, domain: &String) {
    let key = StorageKey::ActiveAuction(domain_hash(env, domain));
    let Some(entry) = read::<ActiveEntry>(env, &key) else {
        return;
    };
    let last = get_active_count(env).saturating_sub(1);

    if entry.slot != last {
        if let Some(moved) = get_active_at(env, last) {
            let moved_key = StorageKey::ActiveAuction(domain_hash(env, &moved.domain));
            write(env, &moved_key, &ActiveEntry { auction_id: moved.auction_id, slot: entry.slot });
            write(env, &StorageKey::ActiveAt(entry.slot), &moved);
        }
    }

    env.storage().persistent().remove(&StorageKey::ActiveAt(last));
    env.storage().persistent().remove(&key);
    env.storage().instance().set(&StorageKey::ActiveCount, &last);
}

pub fn get_active_count(env: &Env) -> u32 {
    env.storage().instance().get(&StorageKey::ActiveCount).unwrap_or(0)
}

pub fn get_active_at(env: &Env, slot: u32) -> Option<DomainAuction> {
    read(env, &StorageKey::ActiveAt(slot))
}
