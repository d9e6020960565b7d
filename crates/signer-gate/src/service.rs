//! # Signer Gate Service
//!
//! Application service that implements the [`SignerGateApi`] inbound port.
//!
//! Holds the three pieces of state the design allows:
//! - the cached EIP-712 domain separator (immutable after construction),
//! - the owner address (immutable),
//! - the signing-key cell (single writer: the owner, via rotation).
//!
//! Verification delegates digest construction to the domain layer and
//! recovery to the [`DigestRecovery`] outbound port.

use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use crate::config::DomainConfig;
use crate::domain::ecdsa::Secp256k1Recovery;
use crate::domain::eip712;
use crate::domain::entities::{Address, EcdsaSignature, Hash, UNSET_KEY};
use crate::domain::errors::GateError;
use crate::ports::inbound::SignerGateApi;
use crate::ports::outbound::DigestRecovery;

/// EIP-712 signature gate.
///
/// Signing-key state machine: `{Unset, Active(key)}`. All transitions go
/// through [`SignerGateApi::set_signing_key`] and are owner-gated. Initial
/// state is `Unset`, in which every verification fails closed with
/// [`GateError::SigningDisabled`].
pub struct SignerGate<R: DigestRecovery = Secp256k1Recovery> {
    owner: Address,
    signing_key: Option<Address>,
    domain_separator: Hash,
    recovery: R,
}

impl SignerGate<Secp256k1Recovery> {
    /// Create a gate with the default k256 recovery backend.
    ///
    /// Computes the domain separator exactly once; it is never recomputed,
    /// so a redeploy with a different `chain_id` or `verifying_contract`
    /// invalidates all previously issued signatures.
    pub fn new(
        config: &DomainConfig,
        chain_id: u64,
        verifying_contract: Address,
        owner: Address,
    ) -> Self {
        Self::with_recovery(
            config,
            chain_id,
            verifying_contract,
            owner,
            Secp256k1Recovery::new(),
        )
    }
}

impl<R: DigestRecovery> SignerGate<R> {
    /// Create a gate with an explicit recovery backend.
    pub fn with_recovery(
        config: &DomainConfig,
        chain_id: u64,
        verifying_contract: Address,
        owner: Address,
        recovery: R,
    ) -> Self {
        let domain_separator =
            eip712::domain_separator(&config.name, &config.version, chain_id, &verifying_contract);

        info!(
            domain = %hex::encode(domain_separator),
            chain_id,
            verifying_contract = %hex::encode(verifying_contract),
            "signer gate initialized with unset signing key"
        );

        Self {
            owner,
            signing_key: None,
            domain_separator,
            recovery,
        }
    }
}

impl<R: DigestRecovery> SignerGateApi for SignerGate<R> {
    fn is_signed(&self, caller: Address, signature: &[u8]) -> Result<bool, GateError> {
        // Unset key is a hard failure, distinct from a bad signature.
        let signing_key = self.signing_key.ok_or(GateError::SigningDisabled)?;

        // A garbled signature is a clean reject, not a fault.
        let signature = match EcdsaSignature::from_bytes(signature) {
            Ok(sig) => sig,
            Err(e) => {
                debug!(caller = %hex::encode(caller), error = %e, "unparseable signature");
                return Ok(false);
            }
        };

        let struct_hash = eip712::struct_hash(&caller);
        let digest = eip712::signing_digest(&self.domain_separator, &struct_hash);

        let recovered = match self.recovery.recover(&digest, &signature) {
            Ok(address) => address,
            Err(e) => {
                debug!(caller = %hex::encode(caller), error = %e, "recovery failed");
                return Ok(false);
            }
        };

        let matches = bool::from(recovered[..].ct_eq(&signing_key[..]));
        debug!(
            caller = %hex::encode(caller),
            recovered = %hex::encode(recovered),
            matches,
            "verification completed"
        );
        Ok(matches)
    }

    fn set_signing_key(&mut self, caller: Address, new_key: Address) -> Result<(), GateError> {
        if caller != self.owner {
            warn!(
                caller = %hex::encode(caller),
                "rejected signing key rotation by non-owner"
            );
            return Err(GateError::Unauthorized { caller });
        }

        // The zero address is the wire-level sentinel for "unset".
        self.signing_key = if new_key == UNSET_KEY {
            None
        } else {
            Some(new_key)
        };

        info!(
            new_key = %hex::encode(new_key),
            disabled = self.signing_key.is_none(),
            "signing key rotated"
        );
        Ok(())
    }

    fn signing_key(&self) -> Option<Address> {
        self.signing_key
    }

    fn owner(&self) -> Address {
        self.owner
    }

    fn domain_separator(&self) -> Hash {
        self.domain_separator
    }

    fn claim_typehash(&self) -> Hash {
        eip712::claim_typehash()
    }
}
