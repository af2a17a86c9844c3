mod handlers;
pub mod parse;

use clap::Parser;
use log::LevelFilter;
pub use parse::Cli;

use crate::core::error::LcdError;

pub fn run() -> Result<(), LcdError> {
    let cli = parse::Cli::parse();
    init_logging(&cli);
    match cli.cmd {
        Some(parse::Command::Colors) => {
            handlers::colors();
            Ok(())
        }
        Some(parse::Command::Examples) => {
            handlers::examples();
            Ok(())
        }
        None => handlers::display(&cli.display),
    }
}

/// `--log-level`, overridden by `--debug`, overridden by `RUST_LOG`.
fn init_logging(cli: &Cli) {
    let parsed = cli.log_level.parse::<LevelFilter>();
    let level = match (cli.debug, &parsed) {
        (true, _) => LevelFilter::Debug,
        (false, Ok(l)) => *l,
        (false, Err(_)) => LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    if parsed.is_err() {
        log::warn!("unknown log level '{}', using warn", cli.log_level);
    }
}
