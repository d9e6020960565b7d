//! # Gate Configuration
//!
//! Deployment-time inputs to the domain separator. The name and version must
//! exactly match the strings used by the off-chain signing tooling or every
//! signature fails; they come from deployment config. The chain id and
//! verifying-contract identity are read from the runtime environment by the
//! embedding host and passed to the constructor directly.

use serde::{Deserialize, Serialize};

/// EIP-712 domain name and version for one deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Domain name, e.g. the protocol or token name
    pub name: String,
    /// Domain version string, e.g. "1"
    pub version: String,
}

impl DomainConfig {
    /// Create a config from name and version strings.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}
