//! HTTP client for Cosmos-SDK chain REST APIs.
//!
//! Three read-only queries per chain: the staking validator listing, the
//! per-validator outstanding rewards, and the IBC denom-trace lookup.
//! Error tolerance is deliberately uneven: a bad validator listing aborts
//! the run, a bad reward response only skips that validator, and a failed
//! denom resolution is silently ignored.

use log::warn;
use serde::Deserialize;

use crate::error::CollectError;

/// Staking validators listing path under a chain's REST API.
const VALIDATORS_PATH: &str = "/cosmos/staking/v1beta1/validators";

/// Denoms carrying this prefix are IBC-transferred tokens whose base
/// denomination can be looked up on the chain itself.
pub const IBC_DENOM_PREFIX: &str = "ibc/";

/// One reward balance as reported by the distribution module. The amount is
/// a decimal serialized as a string and is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewardCoin {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Deserialize)]
struct ValidatorsResponse {
    #[serde(default)]
    validators: Vec<ValidatorRecord>,
}

#[derive(Debug, Deserialize)]
struct ValidatorRecord {
    operator_address: String,
}

#[derive(Debug, Deserialize)]
struct OutstandingRewardsResponse {
    #[serde(default)]
    rewards: ValidatorOutstandingRewards,
}

#[derive(Debug, Default, Deserialize)]
struct ValidatorOutstandingRewards {
    #[serde(default)]
    rewards: Vec<RewardCoin>,
}

#[derive(Debug, Deserialize)]
struct DenomTraceResponse {
    denom: Option<DenomTrace>,
}

#[derive(Debug, Deserialize)]
struct DenomTrace {
    #[serde(default)]
    base: String,
}

/// Client for one-or-many chain REST endpoints. Cheap to clone; every
/// per-chain task shares the same underlying connection pool.
///
/// No request timeout is configured, so a hanging endpoint blocks its
/// chain's task (and with it the run) indefinitely.
#[derive(Debug, Clone)]
pub struct ChainClient {
    http: reqwest::Client,
}

impl ChainClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// List the operator addresses of all validators known to `addr`.
    ///
    /// Any failure here is fatal for the run. The HTTP status is not
    /// inspected: a non-200 response whose body still decodes (e.g. an
    /// empty object) counts as zero validators.
    pub async fn validators(&self, chain: &str, addr: &str) -> Result<Vec<String>, CollectError> {
        let url = format!("{addr}{VALIDATORS_PATH}");
        let body = self.get_bytes(&url).await?;

        let listing: ValidatorsResponse =
            serde_json::from_slice(&body).map_err(|source| CollectError::ValidatorListing {
                chain: chain.to_string(),
                source,
            })?;

        Ok(listing
            .validators
            .into_iter()
            .map(|v| v.operator_address)
            .collect())
    }

    /// Fetch the outstanding rewards of one validator.
    ///
    /// A network failure is fatal, but a body that fails to decode only
    /// costs this validator its rewards: it is logged and the chain's
    /// collection continues.
    pub async fn outstanding_rewards(
        &self,
        chain: &str,
        addr: &str,
        validator: &str,
    ) -> Result<Vec<RewardCoin>, CollectError> {
        let url =
            format!("{addr}/cosmos/distribution/v1beta1/validators/{validator}/outstanding_rewards");
        let body = self.get_bytes(&url).await?;

        match serde_json::from_slice::<OutstandingRewardsResponse>(&body) {
            Ok(response) => Ok(response.rewards.rewards),
            Err(e) => {
                warn!("failed to query rewards for {validator} on {chain}: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Resolve an `ibc/...` denom to its base denomination.
    ///
    /// Best-effort only: any failure (send, read, decode, missing or empty
    /// `base` field) yields `None` and the caller keeps the raw denom.
    pub async fn resolve_denom(&self, addr: &str, denom: &str) -> Option<String> {
        let url = format!("{addr}/ibc/apps/transfer/v1/denoms/{denom}");

        let response = self.http.get(&url).send().await.ok()?;
        let body = response.bytes().await.ok()?;
        let trace: DenomTraceResponse = serde_json::from_slice(&body).ok()?;

        let base = trace.denom?.base;
        if base.is_empty() {
            None
        } else {
            Some(base)
        }
    }

    async fn get_bytes(&self, url: &str) -> Result<bytes::Bytes, CollectError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| CollectError::Request {
                url: url.to_string(),
                source,
            })?;

        response.bytes().await.map_err(|source| CollectError::Request {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for ChainClient {
    fn default() -> Self {
        Self::new()
    }
}
