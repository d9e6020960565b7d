//! # Domain Entities
//!
//! Core data structures for the signature gate.

use serde::{Deserialize, Serialize};

use super::errors::RecoveryError;

/// A 32-byte hash value (keccak256 output, EIP-712 digests and separators).
pub type Hash = [u8; 32];

/// Ethereum-style address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// The all-zero address, used as the wire-level "unset" sentinel for the
/// signing key. Rotating to this value disables verification.
pub const UNSET_KEY: Address = [0u8; 20];

/// Length of a recoverable signature in wire form: r (32) || s (32) || v (1).
pub const SIGNATURE_LENGTH: usize = 65;

/// Recoverable ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl EcdsaSignature {
    /// Parse a signature from its 65-byte wire form `r || s || v`.
    ///
    /// Only the length is checked here; scalar ranges and the recovery ID
    /// are validated during recovery.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecoveryError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(RecoveryError::InvalidFormat);
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }

    /// Serialize to the 65-byte wire form `r || s || v`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_wire_roundtrip() {
        let sig = EcdsaSignature {
            r: [0x11; 32],
            s: [0x22; 32],
            v: 27,
        };

        let bytes = sig.to_bytes();
        let parsed = EcdsaSignature::from_bytes(&bytes).unwrap();

        assert_eq!(parsed, sig);
    }

    #[test]
    fn test_signature_rejects_wrong_length() {
        assert_eq!(
            EcdsaSignature::from_bytes(&[0u8; 64]),
            Err(RecoveryError::InvalidFormat)
        );
        assert_eq!(
            EcdsaSignature::from_bytes(&[0u8; 66]),
            Err(RecoveryError::InvalidFormat)
        );
        assert_eq!(
            EcdsaSignature::from_bytes(&[]),
            Err(RecoveryError::InvalidFormat)
        );
    }
}
