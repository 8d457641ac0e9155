// src/main.rs
use clap::Parser;
use count_words::cli::Args;
use count_words::config::Config;
use count_words::registry::CounterRegistry;
use count_words::{engine, presentation, watch};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    let registry = CounterRegistry::with_builtins();

    if config.watch {
        if let Err(e) = watch::watch_loop(&config, &registry) {
            eprintln!("Watch Error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    match engine::run(&config, &registry) {
        Ok(result) => {
            for (path, err) in &result.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }
            if let Err(e) = presentation::print_results(&result.reports, &config) {
                eprintln!("Application Error: {e}");
                return ExitCode::FAILURE;
            }
            if result.reports.is_empty() && !result.errors.is_empty() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
