use crate::cli::ConfigCommands;
use crate::commands::common::print_json;
use crate::config::{resolve_config_path, CliConfig};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => run_config_show(),
        ConfigCommands::Init {
            namespace,
            probe_address,
            probe_timeout_ms,
            display_limit,
            watch_interval_secs,
        } => {
            let config =
                CliConfig::load_from_path(&resolve_config_path()).map_err(CliError::Config)?;
            let updated = apply_config_updates(
                config,
                ConfigUpdates {
                    namespace,
                    probe_address,
                    probe_timeout_ms,
                    display_limit,
                    watch_interval_secs,
                },
            );
            let path = updated.save().map_err(CliError::Config)?;
            println!("Saved CLI config to {}", path.display());
            Ok(())
        }
    }
}

fn run_config_show() -> Result<(), CliError> {
    let config = CliConfig::load().map_err(CliError::Config)?;
    println!("# {}", resolve_config_path().display());
    print_json(&config)
}

/// Values given to `config init`; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct ConfigUpdates {
    pub namespace: Option<String>,
    pub probe_address: Option<String>,
    pub probe_timeout_ms: Option<u64>,
    pub display_limit: Option<usize>,
    pub watch_interval_secs: Option<u64>,
}

pub fn apply_config_updates(mut config: CliConfig, updates: ConfigUpdates) -> CliConfig {
    if let Some(namespace) = updates.namespace {
        config.namespace = namespace;
    }
    if let Some(address) = updates.probe_address {
        config.probe_address = address;
    }
    if let Some(timeout) = updates.probe_timeout_ms {
        config.probe_timeout_ms = timeout;
    }
    if let Some(limit) = updates.display_limit {
        config.display_limit = limit;
    }
    if let Some(secs) = updates.watch_interval_secs {
        config.watch_interval_secs = secs;
    }
    config
}
