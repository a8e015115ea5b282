//! hostwatch - host monitoring checks with state-transition alerting
//!
//! Runs one check per invocation and reports the result through the exit
//! code: 0 OK, 1 WARNING, 2 CRITICAL or failure.

use clap::Parser;
use hostwatch::cli::args::{generate_completions, Cli, Commands};
use hostwatch::commands::{run_cpu, run_disk, run_memory, run_reset, run_status};
use hostwatch::config::ConfigBuilder;
use hostwatch::error::{AppError, ConfigError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("{}", e);
            print_hint(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<i32, AppError> {
    if let Commands::Completions { shell } = &cli.command {
        generate_completions(*shell);
        return Ok(0);
    }

    let builder = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_state_dir(cli.state_dir.clone())
        .with_lock_state(cli.lock_state)
        .with_notifications_enabled(cli.notifications)
        .with_webhook(cli.webhook.clone());

    match &cli.command {
        Commands::Cpu(t) => {
            let config = builder.with_cpu_thresholds(t.warning, t.critical).build();
            run_cpu(&config, cli.format)
        }

        Commands::Memory(t) => {
            let config = builder
                .with_memory_thresholds(t.warning, t.critical)
                .build();
            run_memory(&config, cli.format)
        }

        Commands::Disk(args) => {
            let config = builder
                .with_disk(
                    args.thresholds.warning,
                    args.thresholds.critical,
                    args.path.clone(),
                )
                .build();
            run_disk(&config, cli.format)
        }

        Commands::Status { checks } => {
            run_status(&builder.build(), checks, cli.format)?;
            Ok(0)
        }

        Commands::Reset { checks } => {
            run_reset(&builder.build(), checks, cli.format)?;
            Ok(0)
        }

        Commands::Completions { .. } => Ok(0),
    }
}

fn print_hint(err: &AppError) {
    if let AppError::Config(ConfigError::InvalidThresholds { .. }) = err {
        eprintln!();
        eprintln!("Hint: CPU and memory thresholds are 'higher is better' percentages,");
        eprintln!("      so WARNING must be greater than CRITICAL. Disk is the reverse.");
    }
}
