//! Nirantar CLI - disaster communication hub for the terminal
//!
//! Emergency contacts, safety tips and community help requests that keep
//! working without a network connection.

mod app;
mod cli;
mod commands;
mod config;
mod error;
mod probe;
mod views;


use clap::{CommandFactory, Parser};
use nirantar_core::HelpKind;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::{open_app, print_lines, ConnectivityFlags};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::contacts::run_contacts;
use crate::commands::info::run_info;
use crate::commands::language::run_language;
use crate::commands::requests::{run_requests, RequestWindow};
use crate::commands::status::run_status;
use crate::commands::submit::run_submit;
use crate::commands::sync::run_sync;
use crate::commands::tips::run_tips;
use crate::commands::watch::run_watch;
use crate::config::resolve_db_path;
use crate::error::CliError;
use crate::views::{render_header, render_status};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nirantar=info,nirantar_core=info")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path);
    let flags = ConnectivityFlags {
        offline: cli.offline,
        online: cli.online,
    };

    let Some(command) = cli.command else {
        let app = open_app(&db_path, flags, true).await?;
        print_lines(&render_header(app.language.current()));
        print_lines(&render_status(
            app.language.current(),
            &app.connectivity.state(),
            app.requests.pending_count()?,
        ));
        println!();
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Config { command } => return run_config(command),
        Commands::Completions { shell, output } => {
            return run_completions(shell, output.as_deref());
        }
        _ => {}
    }

    let mut app = open_app(&db_path, flags, command.reads_connectivity()).await?;
    match command {
        Commands::Contacts { call } => run_contacts(&app, call.as_deref())?,
        Commands::Tips { topic } => run_tips(&app, topic)?,
        Commands::Need(form) => {
            run_submit(&app, HelpKind::Need, form)?;
        }
        Commands::Offer(form) => {
            run_submit(&app, HelpKind::Offer, form)?;
        }
        Commands::Requests {
            kind,
            limit,
            all,
            json,
        } => {
            let window = if all {
                RequestWindow::All
            } else {
                RequestWindow::Limit(limit.unwrap_or(app.config.display_limit))
            };
            run_requests(&app, kind.map(Into::into), window, json)?;
        }
        Commands::Status { json } => run_status(&app, json)?,
        Commands::Sync => {
            run_sync(&app).await?;
        }
        Commands::Watch { interval } => run_watch(&app, interval).await?,
        Commands::Language { language } => run_language(&mut app, language.map(Into::into))?,
        Commands::Info => run_info(&app),
        Commands::Config { .. } | Commands::Completions { .. } => {}
    }

    Ok(())
}
