use clap::{Args, Parser, Subcommand};

use crate::core::constants::DEFAULT_HEIGHT;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "lcd",
    version,
    about = "Seven-segment LCD style digits for the terminal",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Emit timing diagnostics (same as `--log-level debug`)
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// `lcd [-s SIZE] DIGITS`
#[derive(Args, Debug)]
pub struct DisplayArgs {
    /// Digits to display (0-9 only)
    #[arg(value_name = "DIGITS", required = true, allow_negative_numbers = true)]
    pub digits: Option<String>,

    /// Size: bar length and upright height, a positive integer
    #[arg(
        short,
        long,
        value_name = "SIZE",
        default_value_t = DEFAULT_HEIGHT.to_string(),
        allow_negative_numbers = true
    )]
    pub size: String,

    /// Color (name or `#RRGGBB`)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Wrap long numbers to the terminal width
    #[arg(short, long)]
    pub wrap: bool,

    /// Wrap to this many columns instead of the terminal width
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,
}
