//! End-to-end tests against the public API: a real k256 signer produces
//! EIP-712 signatures off the record, the gate verifies them.

use k256::ecdsa::SigningKey;
use signer_gate::{
    keccak256, signing_digest, struct_hash, Address, DomainConfig, GateError, SignerGate,
    SignerGateApi, UNSET_KEY,
};

const OWNER: Address = [0x01; 20];
const CONTRACT: Address = [0xC0; 20];
const CHAIN_ID: u64 = 1;

fn new_gate() -> SignerGate {
    SignerGate::new(&DomainConfig::new("SignerGate", "1"), CHAIN_ID, CONTRACT, OWNER)
}

/// An off-chain signer: holds a private key and signs the canonical digest
/// for a wallet under a gate's published domain separator.
struct OffchainSigner {
    key: SigningKey,
}

impl OffchainSigner {
    fn generate() -> Self {
        Self {
            key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    fn address(&self) -> Address {
        let point = self.key.verifying_key().to_encoded_point(false);
        let hash = keccak256(&point.as_bytes()[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }

    fn authorize(&self, gate: &SignerGate, wallet: Address) -> [u8; 65] {
        let digest = signing_digest(&gate.domain_separator(), &struct_hash(&wallet));
        let (sig, recid) = self.key.sign_prehash_recoverable(&digest).expect("sign");

        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&sig.to_bytes());
        out[64] = recid.to_byte() + 27;
        out
    }
}

#[test]
fn valid_signature_authorizes_the_bound_caller() {
    let mut gate = new_gate();
    let signer = OffchainSigner::generate();
    gate.set_signing_key(OWNER, signer.address()).unwrap();

    let wallet: Address = [0x77; 20];
    let signature = signer.authorize(&gate, wallet);

    assert_eq!(gate.is_signed(wallet, &signature), Ok(true));
}

#[test]
fn verification_is_deterministic() {
    let mut gate = new_gate();
    let signer = OffchainSigner::generate();
    gate.set_signing_key(OWNER, signer.address()).unwrap();

    let wallet: Address = [0x77; 20];
    let signature = signer.authorize(&gate, wallet);

    for _ in 0..10 {
        assert_eq!(gate.is_signed(wallet, &signature), Ok(true));
    }
}

#[test]
fn signature_cannot_be_replayed_by_another_caller() {
    let mut gate = new_gate();
    let signer = OffchainSigner::generate();
    gate.set_signing_key(OWNER, signer.address()).unwrap();

    let wallet: Address = [0x77; 20];
    let signature = signer.authorize(&gate, wallet);

    let other_wallet: Address = [0x78; 20];
    assert_eq!(gate.is_signed(other_wallet, &signature), Ok(false));
}

#[test]
fn signature_is_bound_to_one_deployment() {
    let signer = OffchainSigner::generate();
    let wallet: Address = [0x77; 20];

    let mut gate = new_gate();
    gate.set_signing_key(OWNER, signer.address()).unwrap();
    let signature = signer.authorize(&gate, wallet);

    // Same signing key configured, but every domain field variation must
    // reject the signature issued under the original deployment.
    let variants = [
        SignerGate::new(&DomainConfig::new("OtherGate", "1"), CHAIN_ID, CONTRACT, OWNER),
        SignerGate::new(&DomainConfig::new("SignerGate", "2"), CHAIN_ID, CONTRACT, OWNER),
        SignerGate::new(&DomainConfig::new("SignerGate", "1"), 5, CONTRACT, OWNER),
        SignerGate::new(&DomainConfig::new("SignerGate", "1"), CHAIN_ID, [0xC1; 20], OWNER),
    ];

    for mut other in variants {
        other.set_signing_key(OWNER, signer.address()).unwrap();
        assert_eq!(other.is_signed(wallet, &signature), Ok(false));
    }
}

#[test]
fn rotation_invalidates_old_signatures_and_accepts_new() {
    let mut gate = new_gate();
    let old_signer = OffchainSigner::generate();
    let new_signer = OffchainSigner::generate();
    gate.set_signing_key(OWNER, old_signer.address()).unwrap();

    let wallet: Address = [0x77; 20];
    let old_signature = old_signer.authorize(&gate, wallet);
    assert_eq!(gate.is_signed(wallet, &old_signature), Ok(true));

    gate.set_signing_key(OWNER, new_signer.address()).unwrap();

    assert_eq!(gate.is_signed(wallet, &old_signature), Ok(false));
    let new_signature = new_signer.authorize(&gate, wallet);
    assert_eq!(gate.is_signed(wallet, &new_signature), Ok(true));
}

#[test]
fn unset_key_fails_closed_even_for_well_formed_signatures() {
    let gate = new_gate();
    let signer = OffchainSigner::generate();

    let wallet: Address = [0x77; 20];
    let signature = signer.authorize(&gate, wallet);

    assert_eq!(
        gate.is_signed(wallet, &signature),
        Err(GateError::SigningDisabled)
    );
}

#[test]
fn owner_can_disable_by_rotating_to_zero() {
    let mut gate = new_gate();
    let signer = OffchainSigner::generate();
    gate.set_signing_key(OWNER, signer.address()).unwrap();

    let wallet: Address = [0x77; 20];
    let signature = signer.authorize(&gate, wallet);
    assert_eq!(gate.is_signed(wallet, &signature), Ok(true));

    gate.set_signing_key(OWNER, UNSET_KEY).unwrap();
    assert_eq!(
        gate.is_signed(wallet, &signature),
        Err(GateError::SigningDisabled)
    );
}

#[test]
fn non_owner_cannot_rotate() {
    let mut gate = new_gate();
    let signer = OffchainSigner::generate();
    gate.set_signing_key(OWNER, signer.address()).unwrap();

    let intruder: Address = [0xEE; 20];
    assert_eq!(
        gate.set_signing_key(intruder, intruder),
        Err(GateError::Unauthorized { caller: intruder })
    );
    assert_eq!(gate.signing_key(), Some(signer.address()));
}

#[test]
fn flipping_any_signature_bit_rejects() {
    let mut gate = new_gate();
    let signer = OffchainSigner::generate();
    gate.set_signing_key(OWNER, signer.address()).unwrap();

    let wallet: Address = [0x77; 20];
    let signature = signer.authorize(&gate, wallet);

    // Flip one bit in each byte position across r, s and v.
    for byte in 0..signature.len() {
        let mut tampered = signature;
        tampered[byte] ^= 0x01;
        assert_eq!(
            gate.is_signed(wallet, &tampered),
            Ok(false),
            "bit flip at byte {byte} should reject"
        );
    }
}

#[test]
fn garbled_signatures_are_clean_rejects() {
    let mut gate = new_gate();
    let signer = OffchainSigner::generate();
    gate.set_signing_key(OWNER, signer.address()).unwrap();

    let wallet: Address = [0x77; 20];
    assert_eq!(gate.is_signed(wallet, &[]), Ok(false));
    assert_eq!(gate.is_signed(wallet, &[0x00; 65]), Ok(false));
    assert_eq!(gate.is_signed(wallet, &[0xFF; 65]), Ok(false));
    assert_eq!(gate.is_signed(wallet, &[0x5A; 64]), Ok(false));
    assert_eq!(gate.is_signed(wallet, &[0x5A; 66]), Ok(false));
}

#[test]
fn published_constants_match_offchain_derivation() {
    let gate = new_gate();

    assert_eq!(
        gate.domain_separator(),
        signer_gate::domain_separator("SignerGate", "1", CHAIN_ID, &CONTRACT)
    );
    assert_eq!(gate.claim_typehash(), signer_gate::claim_typehash());
}
