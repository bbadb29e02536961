use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeledger
/// CLI application to track attendance sessions, breaks and net working time
#[derive(Parser)]
#[command(
    name = "timeledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track clock-in / break / clock-out sessions and net working time using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Staff member the command acts on (default: owner_id from config)
    #[arg(global = true, long = "owner")]
    pub owner: Option<String>,

    /// IANA time zone used for all clock math and rendering (default: config)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum BreakAction {
    /// Start a break on the open session
    Start {
        #[arg(long = "at", help = "Instant (RFC 3339 or 'YYYY-MM-DD HH:MM' local); default: now")]
        at: Option<String>,
    },

    /// End the open break
    End {
        #[arg(long = "at", help = "Instant (RFC 3339 or 'YYYY-MM-DD HH:MM' local); default: now")]
        at: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate, edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Clock in: open a new session
    In {
        #[arg(long = "at", help = "Instant (RFC 3339 or 'YYYY-MM-DD HH:MM' local); default: now")]
        at: Option<String>,
    },

    /// Start or end a break
    Break {
        #[command(subcommand)]
        action: BreakAction,
    },

    /// Clock out: close the open session
    Out {
        #[arg(long = "at", help = "Instant (RFC 3339 or 'YYYY-MM-DD HH:MM' local); default: now")]
        at: Option<String>,
    },

    /// Show the status and net working time of the open session
    Status {
        #[arg(long = "watch", short = 'w', help = "Refresh the status line continuously")]
        watch: bool,

        #[arg(long = "ticks", requires = "watch", help = "Stop watching after N refreshes")]
        ticks: Option<u64>,

        #[arg(long = "at", conflicts_with = "watch", help = "Evaluate at this instant instead of now")]
        at: Option<String>,
    },

    /// List sessions with their net working time
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (A:B)")]
        period: Option<String>,

        #[arg(long = "all-owners", help = "List sessions of every owner")]
        all_owners: bool,

        #[arg(long = "at", help = "Evaluate open sessions at this instant instead of now")]
        at: Option<String>,
    },

    /// Delete a session by ID
    Del {
        /// Session id (see `list`)
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Summarize a Logs API JSON dump ({data: {result, meta}})
    Report {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "at", help = "Evaluate open sessions at this instant instead of now")]
        at: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export session summaries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long = "all-owners", help = "Export sessions of every owner")]
        all_owners: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
