//! # EIP-712 Structured Digest Construction
//!
//! Builds the digest that the off-chain signer and the on-chain verifier must
//! agree on byte-for-byte. Any deviation between the two sides silently
//! recovers a different address, so the layouts here are fixed:
//!
//! - Domain separator: `keccak256(keccak256(DOMAIN_TYPE) || keccak256(name) ||
//!   keccak256(version) || u256(chain_id) || pad32(verifying_contract))`
//! - Struct hash: `keccak256(CLAIM_TYPEHASH || pad32(wallet))`
//! - Final digest: `keccak256(0x19 || 0x01 || domain_separator || struct_hash)`
//!
//! The domain separator binds every signature to one
//! `(name, version, chain_id, verifying_contract)` tuple; a redeploy or chain
//! fork changes the tuple and invalidates all previously issued signatures.

use sha3::{Digest, Keccak256};

use super::entities::{Address, Hash};

/// EIP-712 domain type string. Field order is normative.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Type string of the signed payload: a single field, the wallet the
/// signature authorizes. Changing the payload shape requires a new string,
/// agreed with the off-chain signer.
pub const CLAIM_TYPE: &str = "AccessClaim(address wallet)";

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Typehash of the signed payload (the struct type descriptor).
pub fn claim_typehash() -> Hash {
    keccak256(CLAIM_TYPE.as_bytes())
}

/// Compute the EIP-712 domain separator for one deployment.
///
/// Pure function of its inputs; the gate computes it once at construction
/// and caches it for its lifetime.
pub fn domain_separator(
    name: &str,
    version: &str,
    chain_id: u64,
    verifying_contract: &Address,
) -> Hash {
    let mut preimage = [0u8; 160];
    preimage[..32].copy_from_slice(&keccak256(DOMAIN_TYPE.as_bytes()));
    preimage[32..64].copy_from_slice(&keccak256(name.as_bytes()));
    preimage[64..96].copy_from_slice(&keccak256(version.as_bytes()));
    preimage[96..128].copy_from_slice(&encode_u256(chain_id));
    preimage[128..160].copy_from_slice(&encode_address(verifying_contract));
    keccak256(&preimage)
}

/// Hash of the claim struct for one wallet.
///
/// The wallet is the caller presenting the signature, which is what binds a
/// signature to exactly one account: a different caller produces a different
/// struct hash, hence a different digest, hence a different recovered address.
pub fn struct_hash(wallet: &Address) -> Hash {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(&claim_typehash());
    preimage[32..64].copy_from_slice(&encode_address(wallet));
    keccak256(&preimage)
}

/// Final signing digest: `0x19 0x01 || domain_separator || struct_hash`.
///
/// The two-byte prefix is the EIP-191 "structured data" marker; reordering or
/// omitting it breaks interoperability with standard off-chain signing tools.
pub fn signing_digest(domain_separator: &Hash, struct_hash: &Hash) -> Hash {
    let mut preimage = [0u8; 66];
    preimage[0] = 0x19;
    preimage[1] = 0x01;
    preimage[2..34].copy_from_slice(domain_separator);
    preimage[34..66].copy_from_slice(struct_hash);
    keccak256(&preimage)
}

/// ABI-encode a u64 as a 32-byte big-endian word (uint256).
fn encode_u256(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// ABI-encode an address as a 32-byte word (left-padded with zeros).
fn encode_address(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address);
    word
}
