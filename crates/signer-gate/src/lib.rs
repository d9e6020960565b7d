//! # Signer Gate
//!
//! Off-chain-signed, on-chain-verified caller authorization. A trusted party
//! signs an EIP-712 structured message for one wallet off the record; this
//! crate recomputes the identical digest for an incoming caller, recovers the
//! signer address from the supplied 65-byte recoverable signature, and
//! accepts iff it equals the currently configured signing key.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): digest construction and curve recovery, no I/O
//! - **Ports Layer** (`ports/`): trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): wires domain logic to ports and owns state
//!
//! ## Security Notes
//!
//! - **Caller binding**: the caller's own identity is the signed payload
//!   field, so a signature issued for one wallet is unusable by any other.
//! - **Domain binding**: signatures are bound to one
//!   `(name, version, chain_id, verifying_contract)` tuple; cross-deployment
//!   and cross-chain replay recover a different address and fail.
//! - **Malleability Prevention (EIP-2)**: signatures with high S values are rejected.
//! - **Fail closed**: while the signing key is unset every verification
//!   fails with [`GateError::SigningDisabled`], never a silent pass.

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::DomainConfig;
pub use domain::ecdsa::{address_from_pubkey, Secp256k1Recovery};
pub use domain::eip712::{
    claim_typehash, domain_separator, keccak256, signing_digest, struct_hash, CLAIM_TYPE,
    DOMAIN_TYPE,
};
pub use domain::entities::{Address, EcdsaSignature, Hash, SIGNATURE_LENGTH, UNSET_KEY};
pub use domain::errors::{GateError, RecoveryError};
pub use ports::inbound::SignerGateApi;
pub use ports::outbound::DigestRecovery;
pub use service::SignerGate;
