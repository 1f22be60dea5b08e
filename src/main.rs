use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sound_extractor::{ExtractorLayout, RunOptions, SearchEnvironment, run};

/// Copy music and record tracks out of the local Minecraft asset cache.
#[derive(Parser)]
#[command(name = "sound_extractor", version)]
struct Cli {
    /// Asset cache to use before searching the default locations.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Folder receiving `data/sounds/`. Defaults to the folder holding this executable.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Index file name inside `indexes/` to load instead of the newest one.
    #[arg(long)]
    index: Option<String>,

    /// Increase log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output_root = match resolve_output_root(cli.output.as_deref()) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let options = RunOptions {
        layout: ExtractorLayout::default(),
        environment: SearchEnvironment::capture(cli.assets),
        output_root,
        index_name: cli.index,
    };

    let mut stdout = std::io::stdout().lock();
    match run(&options, &mut stdout) {
        Ok(summary) => {
            if summary.failed() > 0 {
                eprintln!("error: {} sound file(s) could not be copied", summary.failed());
            }
            ExitCode::from(summary.exit_code())
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_output_root(requested: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = requested {
        return Ok(path.to_path_buf());
    }

    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", exe.display()))?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no parent directory", exe.display()))
}
