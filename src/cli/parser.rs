use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCalGrab
/// CLI application to turn OCR / PDF / pasted text into calendar events
#[derive(Parser)]
#[command(
    name = "rcalgrab",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract calendar events (flights, hotel stays, dinners…) from OCR, PDF or pasted text",
    long_about = None
)]
pub struct Cli {
    /// Override audit database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the audit database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Extract events from text files (or stdin)
    Extract {
        /// Input text files; reads stdin when omitted or "-"
        files: Vec<String>,

        /// Output format (default: `default_format` from the config file)
        #[arg(long, short = 'F', value_enum)]
        format: Option<ExportFormat>,

        /// Write the output to FILE instead of stdout (required for xlsx)
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Print an "add to calendar" link for each event (table format)
        #[arg(long)]
        links: bool,

        /// Reference date for dates written without a year (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
