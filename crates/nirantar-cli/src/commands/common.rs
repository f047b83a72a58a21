use std::io;
use std::path::Path;

use crate::app::App;
use crate::config::{connectivity_override, CliConfig};
use crate::error::CliError;

/// Connectivity flags as given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectivityFlags {
    pub offline: bool,
    pub online: bool,
}

/// Load config and open the app. Only commands that read connectivity pay
/// for the reachability probe.
pub async fn open_app(
    db_path: &Path,
    flags: ConnectivityFlags,
    probe_connectivity: bool,
) -> Result<App, CliError> {
    let config = CliConfig::load().map_err(CliError::Config)?;
    let forced = connectivity_override(flags.offline, flags.online);
    App::open(db_path, config, forced, probe_connectivity).await
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn is_not_found(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::NotFound
}
