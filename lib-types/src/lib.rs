//! Certificate issuance primitives.
//! Stable, protocol-neutral, behavior-free.

pub mod primitives;

pub use primitives::{AccountId, Address, Amount, Did};
