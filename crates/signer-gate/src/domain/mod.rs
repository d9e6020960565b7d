//! # Domain Layer
//!
//! Pure digest construction and recovery logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod ecdsa;
pub mod eip712;
pub mod entities;
pub mod errors;
