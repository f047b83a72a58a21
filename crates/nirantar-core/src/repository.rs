//! Help request repository over the offline store

use chrono::Utc;

use crate::connectivity::ConnectivityTracker;
use crate::error::Result;
use crate::models::{HelpKind, HelpRequest, HelpRequestDraft, HelpRequestId};
use crate::storage::{OfflineStore, HELP_REQUESTS_KEY};

/// How many recent requests the help screen shows per kind
pub const DISPLAY_WINDOW: usize = 5;

/// Reads and writes the newest-first help request collection.
#[derive(Clone)]
pub struct HelpRequestRepository {
    store: OfflineStore,
    connectivity: ConnectivityTracker,
}

impl HelpRequestRepository {
    pub const fn new(store: OfflineStore, connectivity: ConnectivityTracker) -> Self {
        Self {
            store,
            connectivity,
        }
    }

    /// Validate and store a new request at the head of the collection.
    ///
    /// `synced` reflects connectivity at the moment of submission. Nothing is
    /// written when validation fails.
    pub fn submit(&self, draft: HelpRequestDraft) -> Result<HelpRequest> {
        let draft = draft.validate()?;
        let mut requests = self.all()?;

        let online = self.connectivity.is_online();
        let request = HelpRequest::from_draft(draft, Utc::now(), online);
        requests.insert(0, request.clone());
        self.store.save(HELP_REQUESTS_KEY, &requests)?;

        tracing::info!(
            "Stored {} request {} ({})",
            request.kind(),
            request.id,
            if online { "synced" } else { "pending sync" }
        );
        Ok(request)
    }

    /// Every stored request, newest first.
    ///
    /// An unreadable collection is an error so that a later submit cannot
    /// overwrite it.
    pub fn all(&self) -> Result<Vec<HelpRequest>> {
        Ok(self.store.load(HELP_REQUESTS_KEY)?.unwrap_or_default())
    }

    /// Requests of one kind, newest first, optionally capped to `limit`.
    pub fn list(&self, kind: HelpKind, limit: Option<usize>) -> Result<Vec<HelpRequest>> {
        let matching = self
            .all()?
            .into_iter()
            .filter(|request| request.kind() == kind);
        Ok(match limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    pub fn get(&self, id: &HelpRequestId) -> Result<Option<HelpRequest>> {
        Ok(self.all()?.into_iter().find(|request| request.id == *id))
    }

    /// Number of requests still waiting for sync
    pub fn pending_count(&self) -> Result<usize> {
        Ok(self
            .all()?
            .iter()
            .filter(|request| !request.is_synced())
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::ConnectivitySignal;
    use crate::error::{Error, RequiredField};
    use crate::models::Urgency;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn setup(online: bool) -> (OfflineStore, ConnectivityTracker, HelpRequestRepository) {
        let store = OfflineStore::in_memory();
        let tracker = ConnectivityTracker::new(store.clone(), online);
        let repo = HelpRequestRepository::new(store.clone(), tracker.clone());
        (store, tracker, repo)
    }

    #[test]
    fn test_submit_assigns_fields() {
        let (_, _, repo) = setup(true);
        let before = Utc::now();

        let stored = repo
            .submit(
                HelpRequestDraft::new(HelpKind::Offer, "Ward 2", "Boat with 6 seats")
                    .with_urgency(Urgency::Low)
                    .with_contact("98765 43210"),
            )
            .unwrap();

        assert_eq!(stored.kind(), HelpKind::Offer);
        assert_eq!(stored.urgency, Urgency::Low);
        assert_eq!(stored.contact.as_deref(), Some("98765 43210"));
        assert!(stored.timestamp >= before && stored.timestamp <= Utc::now());
        assert!(stored.is_synced());
        assert_eq!(repo.all().unwrap(), vec![stored]);
    }

    #[test]
    fn test_submit_offline_is_pending() {
        let (_, _, repo) = setup(false);
        let stored = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "Sector 5", "Need water"))
            .unwrap();
        assert!(!stored.is_synced());
        assert_eq!(stored.synced_at(), None);
        assert_eq!(repo.pending_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_synced_follows_connectivity_at_submission() {
        let (_, tracker, repo) = setup(true);
        let first = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "A", "one"))
            .unwrap();
        tracker.apply(ConnectivitySignal::Offline).await;
        let second = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "A", "two"))
            .unwrap();

        assert!(first.is_synced());
        assert!(!second.is_synced());
    }

    #[test]
    fn test_invalid_submission_leaves_collection_unchanged() {
        let (store, _, repo) = setup(true);
        repo.submit(HelpRequestDraft::new(HelpKind::Need, "Sector 5", "Need water"))
            .unwrap();
        let before = store.load_text(HELP_REQUESTS_KEY).unwrap();

        let missing_location = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "   ", "Need water"))
            .unwrap_err();
        let missing_both = repo
            .submit(HelpRequestDraft::new(HelpKind::Offer, "", ""))
            .unwrap_err();

        assert!(matches!(
            &missing_location,
            Error::Validation(error) if error.missing == vec![RequiredField::Location]
        ));
        assert!(matches!(
            &missing_both,
            Error::Validation(error) if error.missing.len() == 2
        ));
        assert_eq!(store.load_text(HELP_REQUESTS_KEY).unwrap(), before);
    }

    #[test]
    fn test_list_is_newest_first() {
        let (_, _, repo) = setup(false);
        let first = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "A", "first"))
            .unwrap();
        let second = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "A", "second"))
            .unwrap();
        let third = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "A", "third"))
            .unwrap();

        let listed = repo.list(HelpKind::Need, None).unwrap();
        assert_eq!(listed, vec![third, second, first]);
    }

    #[test]
    fn test_list_filters_kind_and_caps_window() {
        let (_, _, repo) = setup(true);
        for index in 0..7 {
            repo.submit(HelpRequestDraft::new(
                HelpKind::Need,
                "Camp",
                format!("need {index}"),
            ))
            .unwrap();
        }
        repo.submit(HelpRequestDraft::new(HelpKind::Offer, "Camp", "tents"))
            .unwrap();

        let needs = repo.list(HelpKind::Need, Some(DISPLAY_WINDOW)).unwrap();
        assert_eq!(needs.len(), DISPLAY_WINDOW);
        assert_eq!(needs[0].description, "need 6");
        assert!(needs.iter().all(|request| request.kind() == HelpKind::Need));

        let offers = repo.list(HelpKind::Offer, Some(DISPLAY_WINDOW)).unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(repo.all().unwrap().len(), 8);
    }

    #[test]
    fn test_ids_are_unique() {
        let (_, _, repo) = setup(true);
        for _ in 0..20 {
            repo.submit(HelpRequestDraft::new(HelpKind::Need, "X", "Y"))
                .unwrap();
        }
        let ids: HashSet<_> = repo.all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_corrupt_collection_blocks_submit() {
        let (store, _, repo) = setup(true);
        store.save_text(HELP_REQUESTS_KEY, "not json").unwrap();

        let error = repo
            .submit(HelpRequestDraft::new(HelpKind::Need, "A", "B"))
            .unwrap_err();
        assert!(matches!(error, Error::Serialization(_)));
        assert_eq!(
            store.load_text(HELP_REQUESTS_KEY).unwrap().as_deref(),
            Some("not json")
        );
    }
}
