//! # Inbound Ports (Driving Ports / API)
//!
//! The public operations of the signature gate.

use crate::domain::entities::{Address, Hash};
use crate::domain::errors::GateError;

/// Primary gate API.
///
/// `is_signed` is the reusable authorization predicate: any gated operation
/// in the host asks it "did the trusted signer authorize this caller?" and
/// acts on the boolean. The caller identity is an explicit parameter, sourced
/// from the call context by the embedding boundary layer, which keeps the
/// gate itself pure and unit-testable.
pub trait SignerGateApi: Send + Sync {
    /// Check whether `signature` was produced by the trusted signing key over
    /// the canonical digest for `caller`.
    ///
    /// Side-effect-free. Malformed or mismatching signatures yield
    /// `Ok(false)`; the only error is [`GateError::SigningDisabled`] while no
    /// signing key is configured.
    fn is_signed(&self, caller: Address, signature: &[u8]) -> Result<bool, GateError>;

    /// Rotate the trusted signing key. Owner-only.
    ///
    /// The all-zero address is a legal input and disables verification.
    /// Takes effect immediately: all future calls verify against `new_key`,
    /// completed calls are unaffected.
    ///
    /// # Errors
    /// [`GateError::Unauthorized`] if `caller` does not hold the owner role;
    /// the key is left unchanged.
    fn set_signing_key(&mut self, caller: Address, new_key: Address) -> Result<(), GateError>;

    /// The currently trusted signing key, or `None` while unset.
    fn signing_key(&self) -> Option<Address>;

    /// The owner allowed to rotate the signing key.
    fn owner(&self) -> Address;

    /// The cached EIP-712 domain separator for this deployment.
    ///
    /// Published so off-chain signers can cross-check their derivation
    /// instead of re-deriving it blind.
    fn domain_separator(&self) -> Hash;

    /// The typehash of the signed payload (struct type descriptor).
    fn claim_typehash(&self) -> Hash;
}
