//! hivemon - beehive telemetry alert tool
//!
//! A command-line tool for evaluating beehive sensor telemetry against
//! the colony-health alert rule catalog.

use clap::Parser;
use hivemon::cli::args::{generate_completions, Cli, Commands};
use hivemon::commands::{run_evaluate, run_rules, run_watch};
use hivemon::error::AppError;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Rules => run_rules(cli.format),

        Commands::Evaluate(args) => run_evaluate(args, cli.format),

        Commands::Watch(args) => run_watch(args, cli.config.as_deref()),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Ingest(hivemon::error::IngestError::UnreadableInput(_)) => {
            eprintln!();
            eprintln!("Hint: Pass a readings export with --readings <file.json>.");
            eprintln!("      The file must be a JSON array of raw sensor records.");
        }
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Hint: Check the configuration file or pass --config <path>.");
        }
        _ => {}
    }
}
