use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for kpitracker
/// CLI dashboard to track project KPIs against their targets
#[derive(Parser)]
#[command(
    name = "kpitracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small KPI dashboard: record progress per project, classify status against targets, render terminal charts",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a custom location)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and data directory
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a new KPI observation
    Add {
        /// Project the observation belongs to
        #[arg(long)]
        project: String,

        /// KPI name (identifies the metric within the project)
        #[arg(long)]
        kpi: String,

        /// Work package label
        #[arg(long = "wp")]
        work_package: String,

        /// Target value for the KPI
        #[arg(long)]
        target: f64,

        /// Current achieved value
        #[arg(long = "current")]
        current_value: f64,

        /// Achievement date (YYYY-MM-DD, default: today)
        #[arg(long = "achieved")]
        achievement_date: Option<String>,

        /// Male count (gender breakdown, use together with --female)
        #[arg(long)]
        male: Option<u32>,

        /// Female count (gender breakdown, use together with --male)
        #[arg(long)]
        female: Option<u32>,

        /// Free-text comments
        #[arg(long)]
        comments: Option<String>,

        /// KPI window start date (YYYY-MM-DD)
        #[arg(long = "start")]
        start_date: String,

        /// KPI window end date (YYYY-MM-DD)
        #[arg(long = "end")]
        end_date: String,

        /// Project password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Update fields on an existing record (refreshes its timestamp)
    Edit {
        /// Project the record belongs to
        #[arg(long)]
        project: String,

        /// Record identifier as shown by `list`
        #[arg(long)]
        id: i64,

        #[arg(long = "wp", help = "New work package label")]
        work_package: Option<String>,

        #[arg(long, help = "New target value")]
        target: Option<f64>,

        #[arg(long = "current", help = "New current achieved value")]
        current_value: Option<f64>,

        #[arg(long = "achieved", help = "New achievement date (YYYY-MM-DD)")]
        achievement_date: Option<String>,

        #[arg(long, help = "New male count")]
        male: Option<u32>,

        #[arg(long, help = "New female count")]
        female: Option<u32>,

        #[arg(long, help = "New comments")]
        comments: Option<String>,

        #[arg(long = "start", help = "New window start date (YYYY-MM-DD)")]
        start_date: Option<String>,

        #[arg(long = "end", help = "New window end date (YYYY-MM-DD)")]
        end_date: Option<String>,

        /// Project password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// List a project's records with their identifiers
    List {
        #[arg(long)]
        project: String,
    },

    /// Render the KPI dashboard for a project
    Dashboard {
        #[arg(long)]
        project: String,

        /// Drill into one KPI instead of the project overview
        #[arg(long)]
        kpi: Option<String>,

        /// Classify as of this date instead of today (YYYY-MM-DD)
        #[arg(long = "as-of", hide = true)]
        as_of: Option<String>,
    },

    /// List the projects known to the store
    Projects,

    /// Create a backup copy of the data directory
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export KPI records
    Export {
        /// Restrict the export to one project (default: all projects)
        #[arg(long)]
        project: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the audit log
    Log {
        #[arg(long = "print", help = "Print the audit log entries")]
        print: bool,
    },
}
