use crate::export::ExportFormat;
use crate::models::View;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rJournalView
/// CLI application to browse a static journal export
#[derive(Parser)]
#[command(
    name = "rjournalview",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse a static journal export from the terminal: timeline, calendar, media and map views",
    long_about = None
)]
pub struct Cli {
    /// Override the journal export path (journal.json or an embeddable data.js)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Override the media base path prepended to attachment filenames
    #[arg(global = true, long = "media", value_name = "PATH")]
    pub media: Option<String>,

    /// Use the narrow surface (details open as an overlay instead of a panel)
    #[arg(global = true, long = "narrow")]
    pub narrow: bool,

    /// Output width in columns
    #[arg(global = true, long = "width", value_name = "COLS")]
    pub width: Option<usize>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Entries grouped by month, newest first
    Timeline {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2024")
        /// - YYYY-MM              → entire month (e.g. "2024-08")
        /// - YYYY-MM-DD           → specific day (e.g. "2024-08-31")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Only entries carrying this tag")]
        tag: Option<String>,

        #[arg(long, help = "Only entries of this journal (by name)")]
        journal: Option<String>,

        #[arg(long, help = "Only starred entries")]
        starred: bool,
    },

    /// Month grids from the newest to the oldest entry
    Calendar {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Media gallery
    Media {
        #[arg(
            long,
            short,
            default_value = "all",
            help = "Attachment type to show (all, photo, video, ...)"
        )]
        filter: String,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Entries with a location, clustered on a fitted viewport
    Map {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Show one entry in detail
    Show {
        /// Entry uuid; on a wide surface the newest entry is shown when omitted
        uuid: Option<String>,
    },

    /// Summary of the loaded export
    Stats,

    /// Export a view model
    Export {
        #[arg(long, value_enum, default_value = "timeline")]
        view: View,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
