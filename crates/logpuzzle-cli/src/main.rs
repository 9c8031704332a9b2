use logpuzzle_core::config::{self, LogpuzzleConfig};
use logpuzzle_core::logging;

mod cli;

fn main() {
    // argparse-style: a bare invocation prints usage and fails with status 1.
    if std::env::args_os().len() <= 1 {
        cli::print_usage();
        std::process::exit(1);
    }

    let (cfg, cfg_err) = match config::load() {
        Ok(cfg) => (cfg, None),
        Err(err) => (LogpuzzleConfig::default(), Some(err)),
    };
    logging::init(&cfg);
    if let Some(err) = cfg_err {
        tracing::warn!("ignoring unreadable config: {:#}", err);
    }

    if let Err(err) = cli::run_from_args(&cfg) {
        eprintln!("logpuzzle error: {:#}", err);
        std::process::exit(1);
    }
}
