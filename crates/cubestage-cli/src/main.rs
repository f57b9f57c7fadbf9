//! `cubestage`: inspect, check, normalize, and deploy stage files.

mod commands;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

/// Stage file tool
#[derive(Parser, Debug)]
#[command(name = "cubestage", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbosity: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbosity")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print extents, metadata and variant counts
    Info {
        /// Stage JSON file
        #[arg(value_name = "STAGE")]
        stage: PathBuf,
    },

    /// Report holes carrying variants; exits non-zero if any are found
    Check {
        /// Stage JSON file
        #[arg(value_name = "STAGE")]
        stage: PathBuf,
    },

    /// Decode, validate and re-encode a stage
    Normalize {
        /// Stage JSON file
        #[arg(value_name = "STAGE")]
        stage: PathBuf,

        /// Write here instead of overwriting STAGE
        #[arg(short = 'o', long = "output", value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Copy every configured stage into the deploy directory
    Sync {
        /// params.json with an `app` section
        #[arg(short = 'c', long = "config", value_name = "PARAMS")]
        config: PathBuf,

        /// Directory stage paths resolve against (default: the config's directory)
        #[arg(short = 'r', long = "root", value_name = "DIR")]
        root: Option<PathBuf>,
    },
}

fn init_logger(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Info { stage } => commands::info(&stage, &mut out).map(|()| true),
        Commands::Check { stage } => commands::check(&stage, &mut out),
        Commands::Normalize { stage, output } => {
            commands::normalize(&stage, output.as_deref()).map(|_| true)
        }
        Commands::Sync { config, root } => {
            commands::sync(&config, root.as_deref(), &mut out).map(|_| true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(&cli);
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
