//! Binary entry point.

use clap::Parser;

use dune_config::{CliArgs, Config, default_config_dir};

fn main() {
    let args = CliArgs::parse();
    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(default_config_dir);

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            // Logging is not up yet, so this goes straight to stderr.
            eprintln!("config error ({err}), continuing with defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    dune_log::init_logging(Some(&config));

    if let Err(err) = dune_app::run(config) {
        tracing::error!(%err, "event loop failed");
        std::process::exit(1);
    }
}
