//! Best-effort network reachability probe.
//!
//! A successful TCP connect to the configured address counts as online. This
//! says nothing about whether any particular server is reachable.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

#[derive(Debug, Clone)]
pub struct ReachabilityProbe {
    address: String,
    timeout: Duration,
    forced: Option<bool>,
}

impl ReachabilityProbe {
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
            forced: None,
        }
    }

    /// Always report `online` without touching the network
    #[must_use]
    pub const fn forced(mut self, online: Option<bool>) -> Self {
        self.forced = online;
        self
    }

    pub async fn is_reachable(&self) -> bool {
        if let Some(online) = self.forced {
            return online;
        }

        match timeout(self.timeout, TcpStream::connect(self.address.as_str())).await {
            Ok(Ok(_)) => true,
            Ok(Err(error)) => {
                tracing::debug!("Reachability probe to {} failed: {}", self.address, error);
                false
            }
            Err(_) => {
                tracing::debug!(
                    "Reachability probe to {} timed out after {:?}",
                    self.address,
                    self.timeout
                );
                false
            }
        }
    }
}
