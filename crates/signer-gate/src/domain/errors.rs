//! # Gate Errors
//!
//! Two layers of errors with different propagation policies:
//!
//! - [`GateError`] aborts the call (fail loud): misconfiguration and
//!   authorization failures.
//! - [`RecoveryError`] never reaches API callers as an error: the service
//!   maps every recovery failure to a plain `false` verification result
//!   (fail quiet), since a garbled signature is an expected negative outcome,
//!   not a fault.

use thiserror::Error;

use super::entities::Address;

/// Errors surfaced by the gate's public operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    /// Signing-key rotation attempted by a caller that does not hold the
    /// owner role. The key is left unchanged.
    #[error("caller {} is not the gate owner", hex::encode(.caller))]
    Unauthorized {
        /// The rejected caller
        caller: Address,
    },

    /// Verification attempted while the signing key is unset.
    ///
    /// Deliberately distinct from a plain `false` result so operators can
    /// tell "not configured" apart from "wrong signature".
    #[error("signing key is not configured, verification is disabled")]
    SigningDisabled,
}

/// Errors from signature parsing and address recovery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecoveryError {
    /// Wrong length, or a scalar outside the valid range [1, n-1]
    #[error("invalid signature format")]
    InvalidFormat,

    /// Signature has a high S value (EIP-2 malleability protection)
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// The curve operation failed to produce a public key
    #[error("failed to recover public key")]
    RecoveryFailed,
}
