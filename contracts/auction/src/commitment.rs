use soroban_sdk::{Bytes, BytesN, Env};

/// Sealed-bid commitment: `keccak256(value[32] || is_fake[1] || secret[32])`.
///
/// `value` is written as a 32-byte big-endian word, so for any non-negative
/// value the digest matches Solidity's
/// `keccak256(abi.encodePacked(uint256 value, bool isFake, bytes32 secret))`.
pub fn hash_bid(env: &Env, value: i128, is_fake: bool, secret: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.extend_from_array(&value_word(value));
    preimage.push_back(is_fake as u8);
    preimage.append(&Bytes::from(secret));
    env.crypto().keccak256(&preimage).to_bytes()
}

fn value_word(value: i128) -> [u8; 32] {
    let fill = if value < 0 { 0xff } else { 0x00 };
    let mut word = [fill; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}
