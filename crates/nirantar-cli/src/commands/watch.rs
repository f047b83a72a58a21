use std::time::Duration;

use nirantar_core::{ConnectivitySignal, Transition};
use tokio::time::{interval, MissedTickBehavior};

use crate::app::App;
use crate::commands::common::print_lines;
use crate::error::CliError;
use crate::views::{format_timestamp, render_status};

/// Probe reachability on an interval and feed the results to the tracker
/// until Ctrl+C.
pub async fn run_watch(app: &App, interval_secs: Option<u64>) -> Result<(), CliError> {
    let secs = interval_secs
        .filter(|secs| *secs > 0)
        .unwrap_or(app.config.watch_interval_secs);
    let mut ticker = interval(Duration::from_secs(secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    print_lines(&render_status(
        app.language.current(),
        &app.connectivity.state(),
        app.requests.pending_count()?,
    ));
    tracing::info!("Watching connectivity every {secs}s (Ctrl+C to stop)");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let reachable = app.probe.is_reachable().await;
                let transition = app
                    .connectivity
                    .apply(ConnectivitySignal::from_reachable(reachable))
                    .await;
                if let Some(line) = describe_transition(app, &transition) {
                    println!("{line}");
                }
            }
            result = tokio::signal::ctrl_c() => {
                result?;
                tracing::debug!("Stopping watch");
                return Ok(());
            }
        }
    }
}

pub fn describe_transition(app: &App, transition: &Transition) -> Option<String> {
    match transition {
        Transition::Unchanged => None,
        Transition::WentOffline => Some(format!("○ {}", app.t("offline"))),
        Transition::WentOnline(Ok(report)) => Some(format!(
            "● {} - {} ({} / {}) {}",
            app.t("online"),
            app.t("syncCompleted"),
            report.synced,
            report.pending,
            format_timestamp(report.last_sync)
        )),
        Transition::WentOnline(Err(error)) => Some(format!(
            "● {} - {}: {error}",
            app.t("online"),
            app.t("syncFailed")
        )),
    }
}
