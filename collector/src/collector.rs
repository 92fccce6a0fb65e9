//! Per-chain reward collection and aggregation.
//!
//! One tokio task per chain runs the sequential validator loop; the
//! aggregator waits for every task before assembling and writing the
//! snapshot, so a fatal error on any chain means no output file at all.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::client::{ChainClient, IBC_DENOM_PREFIX};
use crate::config::ChainInfo;
use crate::error::CollectError;

/// Resolved denom -> outstanding amount (decimal string) for one chain.
/// Ordered so the snapshot serializes with sorted keys.
pub type ChainRewards = BTreeMap<String, String>;

/// Chain name -> per-chain rewards; the shape written to disk.
pub type Snapshot = BTreeMap<String, ChainRewards>;

/// Collect the outstanding rewards of every validator on one chain.
///
/// Validators are processed strictly sequentially; all parallelism lives at
/// the chain level, which keeps in-flight requests bounded to one per chain.
pub async fn collect_chain(
    client: &ChainClient,
    chain: &ChainInfo,
) -> Result<ChainRewards, CollectError> {
    let mut rewards = ChainRewards::new();

    let validators = client.validators(&chain.name, &chain.addr).await?;
    debug!("{}: {} validators", chain.name, validators.len());

    for validator in &validators {
        let coins = client
            .outstanding_rewards(&chain.name, &chain.addr, validator)
            .await?;

        for coin in coins {
            let mut denom = coin.denom;
            if denom.starts_with(IBC_DENOM_PREFIX) {
                if let Some(base) = client.resolve_denom(&chain.addr, &denom).await {
                    denom = base;
                }
            }
            // When several validators report the same denom, the later one
            // overwrites the earlier; amounts are not summed.
            rewards.insert(denom, coin.amount);
        }
    }

    Ok(rewards)
}

/// Run one collection task per chain and merge the results.
///
/// Every task is awaited before the snapshot is assembled (wait-for-all
/// barrier, no partial-result mode). Chains finish in arbitrary order; a
/// duplicate chain name in the registry ends up last-write-wins.
pub async fn collect_all(
    client: &ChainClient,
    chains: Vec<ChainInfo>,
) -> Result<Snapshot, CollectError> {
    let mut tasks = Vec::with_capacity(chains.len());
    for chain in chains {
        let client = client.clone();
        let name = chain.name.clone();
        let handle = tokio::spawn(async move { collect_chain(&client, &chain).await });
        tasks.push((name, handle));
    }

    let mut snapshot = Snapshot::new();
    for (name, handle) in tasks {
        let rewards = handle.await.map_err(|source| CollectError::ChainTask {
            chain: name.clone(),
            source,
        })??;
        info!("{}: collected {} denom entries", name, rewards.len());
        snapshot.insert(name, rewards);
    }

    Ok(snapshot)
}

/// Serialize the snapshot in one pass and write it, truncating any previous
/// file. Nothing is written until every chain has finished.
pub fn write_snapshot<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<(), CollectError> {
    let path = path.as_ref();

    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|source| CollectError::SnapshotEncode { source })?;

    fs::write(path, json).map_err(|source| CollectError::SnapshotWrite {
        path: path.to_path_buf(),
        source,
    })
}
