//! Background reload scheduling
//!
//! Drives `HtpasswdFile::reload` on the store's configured check interval.
//! The store never schedules itself; this is the collaborator that does.

use log::{debug, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::store::HtpasswdFile;

/// Spawn a task that reloads the store every `check_interval()`.
///
/// Returns `None` without spawning anything when the interval is zero.
/// A failed reload is logged and retried on the next tick; the store keeps
/// serving its last good snapshot in the meantime.
pub fn spawn_auto_reload(store: Arc<HtpasswdFile>) -> Option<JoinHandle<()>> {
    let period = store.check_interval();
    if period.is_zero() {
        debug!("Check interval not set, auto-reload disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = store.reload() {
                warn!("Reload of {} failed: {}", store.path().display(), e);
            }
        }
    }))
}
