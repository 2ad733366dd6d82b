use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for habitlog
#[derive(Parser)]
#[command(
    name = "habitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small habit tracker: mark habits done every day and keep streaks in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of `default_user` from the config file
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
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

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
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

    /// Add a new habit
    Add {
        /// Habit description, e.g. "Drink water 8 cups"
        #[arg(required = true, num_args = 1..)]
        label: Vec<String>,
    },

    /// List your habits with their streaks
    List,

    /// Show a single habit
    Show {
        /// Habit id (see `list`)
        id: i64,
    },

    /// Mark a habit as completed
    Done {
        /// Habit id (see `list`)
        id: i64,

        /// Completion date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Delete a habit
    Del {
        /// Habit id (see `list`)
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export your habits
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the file if it exists")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
