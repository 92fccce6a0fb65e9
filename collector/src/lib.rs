//! Cross-chain validator rewards collector.
//!
//! One-shot batch job: for every chain in the registry, list its validators,
//! fetch each validator's outstanding staking rewards, resolve `ibc/` denom
//! traces to their base denomination where possible, and write a single JSON
//! snapshot keyed by chain name.

pub mod client;
pub mod collector;
pub mod config;
pub mod error;
