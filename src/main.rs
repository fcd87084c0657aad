use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::Write;
use std::path::PathBuf;

use fittrack::config::AppConfig;
use fittrack::error::ErrorSeverity;
use fittrack::export::{write_report, OutputFormat};
use fittrack::import::ImportManager;
use fittrack::logging::{init_logging, LogFormat, LogLevel};
use fittrack::{summarize_packages, WorkoutPackage, WorkoutSummary};

/// fittrack - Fitness tracker workout calculator
///
/// Turns raw tracker packages (workout code plus sensor readings) into
/// distance, mean speed and calorie summaries.
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(version)]
#[command(about = "Fitness tracker workout calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log level, overriding the config file (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Log format, overriding the config file (pretty, json, compact)
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Output format (text, json, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the packages listed in the configuration
    Demo,

    /// Summarize a single package
    Calc {
        /// Workout code (SWM, RUN, WLK)
        code: String,

        /// Readings in positional order
        #[arg(allow_negative_numbers = true)]
        args: Vec<f64>,
    },

    /// Summarize every package in a CSV or TOML file
    Import {
        /// Package file path
        #[arg(short = 'i', long)]
        file: PathBuf,
    },

    /// Show or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        list: bool,

        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);
    // --init replaces the file, so a missing or broken one must not stop it
    let init = matches!(cli.command, Commands::Config { init: true, .. });
    let config = if init {
        AppConfig::init_file(&config_path)?
    } else {
        match &cli.config {
            Some(path) => AppConfig::load_from_file(path)?,
            None => AppConfig::load_or_default()?,
        }
    };

    let mut log_config = config.logging.clone();
    if let Some(level) = cli.log_level {
        log_config.level = level;
    }
    if let Some(log_format) = cli.log_format {
        log_config.format = log_format;
    }
    log_config.level = LogLevel::from_verbosity(log_config.level, cli.verbose);
    init_logging(&log_config)?;

    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Commands::Demo => run_packages(&config.packages, format),

        Commands::Calc { code, args } => {
            run_packages(&[WorkoutPackage::new(code, args)], format)
        }

        Commands::Import { file } => {
            let packages = ImportManager::new()
                .import_file(&file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            run_packages(&packages, format)
        }

        Commands::Config { list, init } => {
            if init {
                println!(
                    "{}",
                    format!("✓ Wrote default configuration to {}", config_path.display()).green()
                );
            }
            if list || !init {
                let content = toml::to_string_pretty(&config)
                    .context("Failed to serialize configuration")?;
                println!("{}", format!("# {}", config_path.display()).dimmed());
                print!("{}", content);
            }
            Ok(())
        }
    }
}

/// Summarize packages, report rejects on stderr and summaries on stdout
fn run_packages(packages: &[WorkoutPackage], format: OutputFormat) -> Result<()> {
    let mut summaries: Vec<WorkoutSummary> = Vec::new();
    let mut rejected = 0usize;

    for (package, result) in packages.iter().zip(summarize_packages(packages)) {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                rejected += 1;
                let marker = match e.severity() {
                    ErrorSeverity::Error => "✗".red(),
                    ErrorSeverity::Warning => "✗".yellow(),
                };
                eprintln!(
                    "{} {} {:?}: {}",
                    marker,
                    package.code.bold(),
                    package.data,
                    e.user_message()
                );
            }
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(format, &summaries, &mut out)?;
    out.flush()?;

    if rejected > 0 {
        anyhow::bail!("{} of {} packages were rejected", rejected, packages.len());
    }
    Ok(())
}
