use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use xbeangen::cli::{Cli, Commands};
use xbeangen::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG applies unless -v/-q say otherwise
    let filter = match cli.log_level() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    debug!("Parsed command line: {:?}", cli);

    let result = match &cli.command {
        None => commands::generate::run(&cli, &Default::default()),
        Some(Commands::Generate(args)) => commands::generate::run(&cli, args),
        Some(Commands::Validate(args)) => commands::validate::run(&cli, args),
        Some(Commands::Info(args)) => commands::info::run(&cli, args),
        Some(Commands::Init(args)) => commands::init::run(&cli, args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
