use buglab_lib::{load_settings, run, RunOptions};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Bug tracker dashboard backend speaking JSON lines on stdin/stdout.
#[derive(Debug, Parser)]
#[command(name = "buglab", version, about)]
struct Cli {
    /// Directory holding `.buglab/settings.json`.
    #[arg(long, env = "BUGLAB_WORKSPACE", default_value = ".")]
    workspace: PathBuf,

    /// Start with an empty bug list instead of the mock data.
    #[arg(long)]
    no_seed: bool,

    /// Log filter (overrides the `logFilter` setting), e.g. `debug`.
    #[arg(long, env = "BUGLAB_LOG")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(&cli.workspace) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = cli
        .log_level
        .clone()
        .unwrap_or_else(|| settings.log_filter.clone());
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    let options = RunOptions {
        workspace: cli.workspace,
        seed: !cli.no_seed,
    };

    match run(options, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
