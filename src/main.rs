// src/main.rs
use clap::Parser;
use range_match::{app, args::Args, config::Config, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{}", e.to_string().trim_end());
            return ExitCode::from(app::EXIT_FAILURE);
        }
    };

    let result = Config::try_from(args)
        .map_err(anyhow::Error::from)
        .and_then(|config| {
            logging::init(config.verbosity);
            app::run_stdio(&config).map_err(anyhow::Error::from)
        });

    match result {
        Ok(verdict) => app::exit_code(verdict),
        Err(e) => {
            tracing::debug!(error = %e, "check aborted");
            eprintln!("Application Error: {e}");
            ExitCode::from(app::EXIT_FAILURE)
        }
    }
}
