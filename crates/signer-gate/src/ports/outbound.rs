//! # Outbound Ports (Driven Ports / SPI)
//!
//! Capabilities the gate needs from a cryptographic backend.

use crate::domain::entities::{Address, EcdsaSignature, Hash};
use crate::domain::errors::RecoveryError;

/// Signature recovery capability: given a digest and signature, produce the
/// identity that signed, or a recovery failure.
///
/// Keeping this behind a trait lets the core verification logic be tested
/// with a mock backend and the curve implementation swapped without touching
/// the gate. The default backend is
/// [`Secp256k1Recovery`](crate::domain::ecdsa::Secp256k1Recovery).
pub trait DigestRecovery: Send + Sync {
    /// Recover the address that produced `signature` over `digest`.
    fn recover(&self, digest: &Hash, signature: &EcdsaSignature) -> Result<Address, RecoveryError>;
}
