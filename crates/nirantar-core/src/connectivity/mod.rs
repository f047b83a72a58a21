//! Connectivity tracking and local sync reconciliation.
//!
//! The tracker is a two-state machine (`online` / `offline`) driven only by
//! external [`ConnectivitySignal`]s. Reconnecting triggers [`ConnectivityTracker::sync_data`],
//! which marks pending help requests as synced. No network traffic happens
//! here; sync is a local placeholder for a future remote endpoint.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

use crate::error::Result;
use crate::models::{mark_pending_synced, HelpRequest};
use crate::storage::{OfflineStore, HELP_REQUESTS_KEY, LAST_SYNC_KEY};

/// Network reachability event delivered by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivitySignal {
    Online,
    Offline,
}

impl ConnectivitySignal {
    pub const fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Self::Online
        } else {
            Self::Offline
        }
    }
}

/// Snapshot of the tracker's observable state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectivityState {
    pub is_online: bool,
    pub last_sync: Option<DateTime<Utc>>,
}

/// Outcome of one reconciliation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Records that were pending when the pass started
    pub pending: usize,
    /// Records marked synced by this pass
    pub synced: usize,
    pub last_sync: DateTime<Utc>,
}

/// What a signal did to the tracker
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Signal matched the current state
    Unchanged,
    WentOffline,
    /// Came back online; carries the automatic sync outcome
    WentOnline(SyncOutcome),
}

/// Result of the automatic sync, with the error rendered for display
pub type SyncOutcome = std::result::Result<SyncReport, String>;

/// Process-wide connectivity tracker. Cloning shares the same state.
#[derive(Clone)]
pub struct ConnectivityTracker {
    inner: Arc<TrackerInner>,
}

struct TrackerInner {
    store: OfflineStore,
    state: watch::Sender<ConnectivityState>,
}

impl ConnectivityTracker {
    /// Build the tracker from the runtime's current reachability and the
    /// persisted last-sync time.
    pub fn new(store: OfflineStore, initially_online: bool) -> Self {
        let last_sync = load_last_sync(&store);
        let (state, _) = watch::channel(ConnectivityState {
            is_online: initially_online,
            last_sync,
        });
        Self {
            inner: Arc::new(TrackerInner { store, state }),
        }
    }

    pub fn state(&self) -> ConnectivityState {
        *self.inner.state.borrow()
    }

    pub fn is_online(&self) -> bool {
        self.state().is_online
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.state().last_sync
    }

    /// Receive every subsequent state change
    pub fn subscribe(&self) -> watch::Receiver<ConnectivityState> {
        self.inner.state.subscribe()
    }

    /// Feed a runtime connectivity event into the state machine.
    ///
    /// Only `offline -> online` has a side effect beyond the flag: an
    /// automatic [`Self::sync_data`]. Its failure is logged and returned in
    /// the transition, never raised.
    pub async fn apply(&self, signal: ConnectivitySignal) -> Transition {
        let target = matches!(signal, ConnectivitySignal::Online);
        let changed = self.inner.state.send_if_modified(|state| {
            if state.is_online == target {
                false
            } else {
                state.is_online = target;
                true
            }
        });

        if !changed {
            return Transition::Unchanged;
        }

        if target {
            tracing::info!("Connection restored - syncing data...");
            let outcome = self.sync_data().await.map_err(|error| error.to_string());
            Transition::WentOnline(outcome)
        } else {
            tracing::info!("Connection lost - switching to offline mode");
            Transition::WentOffline
        }
    }

    /// Mark every pending help request synced and record the sync time.
    ///
    /// Already-synced records are left untouched, so repeated calls only
    /// advance `last_sync`. `last_sync` is written even when reconciling the
    /// collection failed; the first error is returned after that attempt.
    pub async fn sync_data(&self) -> Result<SyncReport> {
        let now = Utc::now();
        let reconciled = self.reconcile(now);

        self.inner.state.send_modify(|state| state.last_sync = Some(now));
        let persisted = self.inner.store.save_text(LAST_SYNC_KEY, &now.to_rfc3339());

        match (reconciled, persisted) {
            (Ok((pending, synced)), Ok(())) => {
                tracing::info!("Data sync completed successfully ({} records)", synced);
                Ok(SyncReport {
                    pending,
                    synced,
                    last_sync: now,
                })
            }
            (Err(error), _) | (Ok(_), Err(error)) => {
                tracing::error!("Sync failed: {}", error);
                Err(error)
            }
        }
    }

    fn reconcile(&self, now: DateTime<Utc>) -> Result<(usize, usize)> {
        let store = &self.inner.store;
        let mut requests: Vec<HelpRequest> = store.load(HELP_REQUESTS_KEY)?.unwrap_or_default();
        let pending = requests.iter().filter(|request| !request.is_synced()).count();
        if pending == 0 {
            return Ok((0, 0));
        }

        tracing::info!("Syncing {} help requests...", pending);
        let synced = mark_pending_synced(&mut requests, now);
        store.save(HELP_REQUESTS_KEY, &requests)?;
        Ok((pending, synced))
    }
}

fn load_last_sync(store: &OfflineStore) -> Option<DateTime<Utc>> {
    let raw = match store.load_text(LAST_SYNC_KEY) {
        Ok(raw) => raw?,
        Err(error) => {
            tracing::warn!("Failed to read last sync time: {}", error);
            return None;
        }
    };
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(error) => {
            tracing::warn!("Ignoring unparseable last sync time '{}': {}", raw, error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HelpKind, HelpRequestDraft, Urgency};
    use crate::storage::testing::FlakyStore;
    use crate::HelpRequestRepository;
    use pretty_assertions::assert_eq;

    fn setup(online: bool) -> (OfflineStore, ConnectivityTracker, HelpRequestRepository) {
        let store = OfflineStore::in_memory();
        let tracker = ConnectivityTracker::new(store.clone(), online);
        let repo = HelpRequestRepository::new(store.clone(), tracker.clone());
        (store, tracker, repo)
    }

    #[tokio::test]
    async fn test_offline_submission_syncs_after_reconnect() {
        let (_, tracker, repo) = setup(false);
        let stored = repo
            .submit(
                HelpRequestDraft::new(HelpKind::Need, "Sector 5", "Need water")
                    .with_urgency(Urgency::High),
            )
            .unwrap();
        assert!(!stored.is_synced());

        let transition = tracker.apply(ConnectivitySignal::Online).await;
        let Transition::WentOnline(Ok(report)) = &transition else {
            panic!("expected automatic sync, got {transition:?}");
        };
        assert_eq!(report.pending, 1);
        assert_eq!(report.synced, 1);

        let after = repo.get(&stored.id).unwrap().unwrap();
        assert!(after.is_synced());
        assert_eq!(after.synced_at(), Some(report.last_sync));
        assert_eq!(tracker.last_sync(), Some(report.last_sync));
    }

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let (store, tracker, repo) = setup(false);
        repo.submit(HelpRequestDraft::new(HelpKind::Offer, "Ward 2", "Boat"))
            .unwrap();
        repo.submit(HelpRequestDraft::new(HelpKind::Need, "Ward 9", "Food"))
            .unwrap();

        let first = tracker.sync_data().await.unwrap();
        let after_first: Vec<HelpRequest> = store.load(HELP_REQUESTS_KEY).unwrap().unwrap();

        let second = tracker.sync_data().await.unwrap();
        let after_second: Vec<HelpRequest> = store.load(HELP_REQUESTS_KEY).unwrap().unwrap();

        assert_eq!(first.synced, 2);
        assert_eq!(second.pending, 0);
        assert_eq!(second.synced, 0);
        assert_eq!(after_first, after_second);
        assert!(second.last_sync >= first.last_sync);
    }

    #[tokio::test]
    async fn test_sync_leaves_synced_records_untouched() {
        let (_, tracker, repo) = setup(true);
        let online = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "A", "B"))
            .unwrap();
        tracker.apply(ConnectivitySignal::Offline).await;
        let offline = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "C", "D"))
            .unwrap();

        tracker.sync_data().await.unwrap();

        assert_eq!(repo.get(&online.id).unwrap().unwrap(), online);
        assert!(repo.get(&offline.id).unwrap().unwrap().is_synced());
    }

    #[tokio::test]
    async fn test_last_sync_persists_across_trackers() {
        let (store, tracker, _) = setup(true);
        assert_eq!(tracker.last_sync(), None);

        let report = tracker.sync_data().await.unwrap();
        let reloaded = ConnectivityTracker::new(store, false);
        assert_eq!(reloaded.last_sync(), Some(report.last_sync));
        assert!(!reloaded.is_online());
    }

    #[tokio::test]
    async fn test_going_offline_has_no_side_effects() {
        let (store, tracker, _) = setup(true);
        assert_eq!(
            tracker.apply(ConnectivitySignal::Offline).await,
            Transition::WentOffline
        );
        assert!(!tracker.is_online());
        assert_eq!(store.load_text(LAST_SYNC_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_repeated_signal_is_unchanged() {
        let (_, tracker, _) = setup(true);
        assert_eq!(
            tracker.apply(ConnectivitySignal::Online).await,
            Transition::Unchanged
        );
        assert_eq!(tracker.last_sync(), None);
    }

    #[tokio::test]
    async fn test_clones_share_state_and_notify_subscribers() {
        let (_, tracker, _) = setup(false);
        let other = tracker.clone();
        let mut receiver = tracker.subscribe();

        other.apply(ConnectivitySignal::Online).await;

        assert!(tracker.is_online());
        assert!(receiver.has_changed().unwrap());
        assert!(receiver.borrow_and_update().is_online);
    }

    #[tokio::test]
    async fn test_sync_failure_is_reported_without_panicking() {
        let backend = Arc::new(FlakyStore::default());
        let store = OfflineStore::new(backend.clone(), "nirantar");
        let tracker = ConnectivityTracker::new(store.clone(), false);
        let repo = HelpRequestRepository::new(store, tracker.clone());
        repo.submit(HelpRequestDraft::new(HelpKind::Need, "Sector 5", "Need water"))
            .unwrap();

        backend.fail_writes(true);
        let transition = tracker.apply(ConnectivitySignal::Online).await;
        assert!(matches!(transition, Transition::WentOnline(Err(_))));

        // In-memory state still advances; the flag and last sync are set
        assert!(tracker.is_online());
        assert!(tracker.last_sync().is_some());

        backend.fail_writes(false);
        assert!(!repo.all().unwrap()[0].is_synced());
    }

    #[tokio::test]
    async fn test_corrupt_collection_fails_sync_but_records_last_sync() {
        let (store, tracker, _) = setup(true);
        store.save_text(HELP_REQUESTS_KEY, "[{broken").unwrap();

        assert!(tracker.sync_data().await.is_err());
        assert!(store.load_text(LAST_SYNC_KEY).unwrap().is_some());
        assert_eq!(
            store.load_text(HELP_REQUESTS_KEY).unwrap().as_deref(),
            Some("[{broken")
        );
    }

    #[test]
    fn test_unparseable_last_sync_is_ignored() {
        let store = OfflineStore::in_memory();
        store.save_text(LAST_SYNC_KEY, "yesterday").unwrap();
        assert_eq!(ConnectivityTracker::new(store, true).last_sync(), None);
    }
}
