//! Fatal error taxonomy for a collection run.
//!
//! Only conditions that abort the whole run live here. Recoverable
//! conditions are handled where they occur: a malformed reward response for
//! one validator is logged and treated as "no rewards", and a failed denom
//! resolution silently falls back to the raw denom.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    /// Chain registry file missing or unreadable.
    #[error("failed to read chain registry {}: {}", path.display(), source)]
    RegistryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Chain registry file is not a valid JSON chain list.
    #[error("chain registry {} is not a valid chain list: {}", path.display(), source)]
    RegistryParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// An HTTP request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    /// The validator listing for a chain did not decode.
    #[error("invalid validator listing from chain {chain}: {source}")]
    ValidatorListing {
        chain: String,
        source: serde_json::Error,
    },

    /// A per-chain collection task panicked or was cancelled.
    #[error("collection task for chain {chain} failed: {source}")]
    ChainTask {
        chain: String,
        source: tokio::task::JoinError,
    },

    #[error("failed to encode snapshot: {source}")]
    SnapshotEncode { source: serde_json::Error },

    #[error("failed to write snapshot {}: {}", path.display(), source)]
    SnapshotWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CollectError {
    /// True for local misconfiguration or output failures, as opposed to
    /// failures talking to a chain.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CollectError::RegistryRead { .. }
                | CollectError::RegistryParse { .. }
                | CollectError::SnapshotEncode { .. }
                | CollectError::SnapshotWrite { .. }
        )
    }
}
