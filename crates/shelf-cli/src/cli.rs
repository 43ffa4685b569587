//! CLI argument definitions for the Bookshelf terminal browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use shelf_model::{FilterOption, SortOption};

#[derive(Parser)]
#[command(
    name = "shelf",
    version,
    about = "Bookshelf - browse a bundled book catalog",
    long_about = "Browse a bundled book catalog from the terminal.\n\n\
                  Lists, searches, and shows details for books loaded from a\n\
                  Google-Books-style volumes payload."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the volumes payload.
    #[arg(
        long = "payload",
        value_name = "PATH",
        default_value = "assets/volumes.json",
        global = true
    )]
    pub payload: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the full catalog.
    List(ListArgs),

    /// List books whose title or author matches the given text.
    Search(SearchArgs),

    /// Show the details of one book by id.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Filter selection to display (not yet applied to the list).
    #[arg(long = "filter", value_enum, default_value = "all")]
    pub filter: FilterArg,

    /// Sort selection to display (not yet applied to the list).
    #[arg(long = "sort", value_enum, default_value = "title-asc")]
    pub sort: SortArg,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Search text, matched case-insensitively against titles and authors.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Filter selection to display (not yet applied to the list).
    #[arg(long = "filter", value_enum, default_value = "all")]
    pub filter: FilterArg,

    /// Sort selection to display (not yet applied to the list).
    #[arg(long = "sort", value_enum, default_value = "title-asc")]
    pub sort: SortArg,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Book id from the payload.
    #[arg(value_name = "ID")]
    pub id: String,
}

/// CLI filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Fiction,
    NonFiction,
    Art,
    Science,
}

impl From<FilterArg> for FilterOption {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => Self::All,
            FilterArg::Fiction => Self::Fiction,
            FilterArg::NonFiction => Self::NonFiction,
            FilterArg::Art => Self::Art,
            FilterArg::Science => Self::Science,
        }
    }
}

/// CLI sort choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    TitleAsc,
    TitleDesc,
    AuthorAsc,
    RatingDesc,
    PublishedDesc,
}

impl From<SortArg> for SortOption {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::TitleAsc => Self::TitleAsc,
            SortArg::TitleDesc => Self::TitleDesc,
            SortArg::AuthorAsc => Self::AuthorAsc,
            SortArg::RatingDesc => Self::RatingDesc,
            SortArg::PublishedDesc => Self::PublishedDateDesc,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
