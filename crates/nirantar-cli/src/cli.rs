use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use nirantar_core::{HelpKind, Language, Urgency};

#[derive(Parser)]
#[command(name = "nirantar")]
#[command(about = "Disaster communication hub: emergency contacts, safety tips and help requests")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Treat the network as unreachable regardless of the probe
    #[arg(long, global = true, conflicts_with = "online")]
    pub offline: bool,

    /// Treat the network as reachable regardless of the probe
    #[arg(long, global = true)]
    pub online: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show emergency helpline numbers
    Contacts {
        /// Hand a contact (number or name) to the phone dialer
        #[arg(long, value_name = "CONTACT")]
        call: Option<String>,
    },
    /// Show safety tips
    Tips {
        /// Only show one topic
        #[arg(long, value_enum)]
        topic: Option<TipTopic>,
    },
    /// Ask for help
    Need(HelpFormArgs),
    /// Offer help
    Offer(HelpFormArgs),
    /// List stored help requests, newest first
    Requests {
        /// Only show needs or offers
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
        /// Number of requests to show per type
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show every stored request
        #[arg(long, conflicts_with = "limit")]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show connection status and last sync time
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark pending requests as synced
    Sync,
    /// Follow connectivity changes and sync automatically on reconnect
    Watch {
        /// Seconds between reachability probes
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },
    /// Show or change the interface language
    Language {
        /// New language
        #[arg(value_enum)]
        language: Option<LanguageArg>,
    },
    /// About Nirantar
    Info,
    /// Show or update CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Whether the command's output depends on the current connectivity
    pub const fn reads_connectivity(&self) -> bool {
        matches!(
            self,
            Self::Need(_) | Self::Offer(_) | Self::Status { .. } | Self::Sync | Self::Watch { .. }
        )
    }
}

#[derive(Args, Debug, Clone)]
pub struct HelpFormArgs {
    /// Area, landmark, or address
    #[arg(long, default_value = "")]
    pub location: String,
    /// What is needed or offered
    #[arg(long, default_value = "")]
    pub description: String,
    /// Urgency level
    #[arg(long, value_enum, default_value_t = UrgencyArg::Medium)]
    pub urgency: UrgencyArg,
    /// Phone number or other contact info
    #[arg(long)]
    pub contact: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write configuration values
    Init {
        /// Storage key namespace
        #[arg(long, value_name = "NAME")]
        namespace: Option<String>,
        /// Address probed for reachability (host:port)
        #[arg(long, value_name = "ADDR")]
        probe_address: Option<String>,
        /// Probe timeout in milliseconds
        #[arg(long, value_name = "MS")]
        probe_timeout_ms: Option<u64>,
        /// Requests shown per type by default
        #[arg(long, value_name = "N")]
        display_limit: Option<usize>,
        /// Default `watch` interval in seconds
        #[arg(long, value_name = "SECS")]
        watch_interval_secs: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TipTopic {
    Flood,
    Earthquake,
    Fire,
    General,
}

impl TipTopic {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Earthquake => "earthquake",
            Self::Fire => "fire",
            Self::General => "general",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    Need,
    Offer,
}

impl From<KindArg> for HelpKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Need => Self::Need,
            KindArg::Offer => Self::Offer,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum UrgencyArg {
    High,
    Medium,
    Low,
}

impl From<UrgencyArg> for Urgency {
    fn from(value: UrgencyArg) -> Self {
        match value {
            UrgencyArg::High => Self::High,
            UrgencyArg::Medium => Self::Medium,
            UrgencyArg::Low => Self::Low,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LanguageArg {
    En,
    Hi,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::En => Self::En,
            LanguageArg::Hi => Self::Hi,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
