//! Chain registry configuration.
//!
//! The registry is a JSON array of `{ "name": ..., "addr": ... }` records,
//! one per chain, read once at startup and immutable for the rest of the
//! run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CollectError;

/// One chain endpoint from the registry file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    /// Chain name, used as the top-level snapshot key.
    pub name: String,
    /// Base REST API URL, no trailing path.
    pub addr: String,
}

/// Load the chain registry from `path`.
///
/// Misconfiguration is fatal: a missing, unreadable, or malformed registry
/// aborts the run before any network traffic happens.
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<Vec<ChainInfo>, CollectError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| CollectError::RegistryRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CollectError::RegistryParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chains.json");
        fs::write(
            &path,
            r#"[{"name":"chainA","addr":"http://x"},{"name":"chainB","addr":"http://y"}]"#,
        )
        .unwrap();

        let chains = load_registry(&path).unwrap();
        assert_eq!(chains.len(), 2);
        assert_eq!(
            chains[0],
            ChainInfo {
                name: "chainA".to_string(),
                addr: "http://x".to_string(),
            }
        );
        assert_eq!(chains[1].name, "chainB");
    }

    #[test]
    fn test_missing_registry_is_fatal() {
        let err = load_registry("/nonexistent/chains.json").unwrap_err();
        assert!(matches!(err, CollectError::RegistryRead { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_malformed_registry_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chains.json");
        fs::write(&path, r#"{"name":"not-an-array"}"#).unwrap();

        let err = load_registry(&path).unwrap_err();
        assert!(matches!(err, CollectError::RegistryParse { .. }));
        assert!(err.is_configuration());
    }
}
