use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use super::client::BoardApi;
use crate::store::DataStore;

/// Run the refresh cycle forever: once immediately, then every `interval`.
///
/// Failures are logged and otherwise ignored; the next tick is the recovery.
pub async fn refresh_loop(api: &dyn BoardApi, store: DataStore, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if let Err(e) = refresh(api, &store).await {
            error!("Refresh error: {e:#}");
        }
    }
}

/// Fetch the board once and replace the store's contents.
///
/// Returns the number of posts now held. On error the store is untouched.
///
/// # Errors
///
/// Returns an error if the endpoint cannot be reached or its body decoded.
pub async fn refresh(api: &dyn BoardApi, store: &DataStore) -> Result<usize> {
    let snapshot = api
        .fetch_board()
        .await
        .context("Failed to fetch board")?;

    let posts = snapshot.post.len();
    let comments = snapshot.comment.len();
    let generation = store.replace(snapshot);

    if generation == 1 {
        info!(posts, comments, "Initial board loaded");
    } else {
        debug!(posts, comments, generation, "Board refreshed");
    }

    Ok(posts)
}
