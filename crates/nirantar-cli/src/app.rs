//! Service wiring: everything a command needs, built once per process.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use nirantar_core::db::SqliteKeyValueStore;
use nirantar_core::storage::KeyValueStore;
use nirantar_core::{ConnectivityTracker, HelpRequestRepository, LanguagePreference, OfflineStore};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::probe::ReachabilityProbe;

pub struct App {
    pub config: CliConfig,
    pub store: OfflineStore,
    pub connectivity: ConnectivityTracker,
    pub requests: HelpRequestRepository,
    pub language: LanguagePreference,
    pub probe: ReachabilityProbe,
}

impl App {
    /// Open the local store. With `probe_connectivity`, connectivity is seeded
    /// from the probe (or the override, when one is given).
    pub async fn open(
        db_path: &Path,
        config: CliConfig,
        connectivity_override: Option<bool>,
        probe_connectivity: bool,
    ) -> Result<Self, CliError> {
        let backend = SqliteKeyValueStore::open(db_path)?;
        Ok(Self::with_backend(
            Arc::new(backend),
            config,
            connectivity_override,
            probe_connectivity,
        )
        .await)
    }

    pub async fn with_backend(
        backend: Arc<dyn KeyValueStore>,
        config: CliConfig,
        connectivity_override: Option<bool>,
        probe_connectivity: bool,
    ) -> Self {
        let store = OfflineStore::new(backend, config.namespace.clone());
        let probe = ReachabilityProbe::new(
            config.probe_address.clone(),
            Duration::from_millis(config.probe_timeout_ms),
        )
        .forced(connectivity_override);

        let online = if probe_connectivity {
            probe.is_reachable().await
        } else {
            tracing::debug!("Skipping reachability probe");
            connectivity_override.unwrap_or(false)
        };
        tracing::debug!("Initial connectivity: {}", if online { "online" } else { "offline" });

        let connectivity = ConnectivityTracker::new(store.clone(), online);
        let requests = HelpRequestRepository::new(store.clone(), connectivity.clone());
        let language = LanguagePreference::load(store.clone());

        Self {
            config,
            store,
            connectivity,
            requests,
            language,
            probe,
        }
    }

    /// Translate in the active language
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.t(key)
    }
}
