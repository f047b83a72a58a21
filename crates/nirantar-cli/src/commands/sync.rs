use nirantar_core::SyncReport;

use crate::app::App;
use crate::error::CliError;
use crate::views::format_timestamp;

/// "Sync Now": only offered while online.
pub async fn run_sync(app: &App) -> Result<SyncReport, CliError> {
    if !app.connectivity.is_online() {
        return Err(CliError::Offline(app.t("syncUnavailableOffline").to_string()));
    }

    let report = app
        .connectivity
        .sync_data()
        .await
        .map_err(|error| CliError::SyncFailed(error.to_string()))?;

    println!(
        "{} ({} / {}) - {}",
        app.t("syncCompleted"),
        report.synced,
        report.pending,
        format_timestamp(report.last_sync)
    );
    Ok(report)
}
