//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the embedding host calls
//! - **Outbound (Driven)**: capabilities this crate needs from a backend

pub mod inbound;
pub mod outbound;
