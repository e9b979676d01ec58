//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use openjudge_core::{Code, ValidationError};

#[derive(Parser)]
#[command(
    name = "openjudge",
    version,
    about = "IPC / BNS 2023 statute lookup and keyword-based case analysis",
    long_about = "Look up Indian Penal Code and Bharatiya Nyaya Sanhita sections, map IPC \
                  sections to their BNS replacements, and scan case descriptions for \
                  offence keywords.\n\n\
                  This tool does NOT provide legal advice."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format.
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "OPENJUDGE_OUTPUT",
        global = true
    )]
    pub output: OutputFormat,

    /// Log level (falls back to RUST_LOG, then warn).
    #[arg(long = "log-level", value_enum, env = "OPENJUDGE_LOG", global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one section of a code.
    Lookup {
        /// IPC, BNS, CrPC, BNSS, "IT Act" or POCSO (any casing).
        #[arg(value_parser = parse_code)]
        code: Code,
        /// Section number, e.g. 302, 498A, "3(5)".
        section: String,
    },

    /// Map IPC sections to their BNS 2023 replacements.
    Map {
        #[arg(required = true, value_name = "IPC_SECTION")]
        sections: Vec<String>,
    },

    /// List every section of a code.
    Sections {
        #[arg(value_parser = parse_code)]
        code: Code,
        /// Sort by section number instead of table order.
        #[arg(long)]
        sorted: bool,
    },

    /// Scan a case description for offence keywords.
    Analyze {
        /// Case description; several words are joined with spaces, "-" reads stdin.
        #[arg(required = true, num_args = 1.., value_name = "TEXT")]
        text: Vec<String>,
        /// Date of the offence, to pick the code it is charged under.
        #[arg(long, value_name = "YYYY-MM-DD")]
        offence_date: Option<NaiveDate>,
    },

    /// Report table statistics and verify every transition resolves.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_code(s: &str) -> Result<Code, ValidationError> {
    Code::parse_ignore_case(s)
}
