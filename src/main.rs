//! Command-line front end for the ranking engine.
//!
//! Reads a list of alternatives from a JSON or YAML file, submits them to a
//! decision session built from the loaded configuration, and prints the
//! ranking report as pretty JSON on stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};

use mcda_ranker::application::{DecisionSession, SessionError, SubmitAlternativeCommand};
use mcda_ranker::config::{AppConfig, ConfigError};
use mcda_ranker::domain::analysis::RankingMethod;

/// Rank alternatives with SAW or TOPSIS.
#[derive(Parser, Debug)]
#[command(name = "mcda-ranker", version, about)]
struct Cli {
    /// JSON or YAML file with a list of `{label, levels}` or `{label, values}` entries.
    matrix_file: PathBuf,

    /// Ranking method; defaults to the configured method.
    #[arg(long)]
    method: Option<RankingMethod>,

    /// Configuration file; overrides `MCDA_RANKER_CONFIG`.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Ranking failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    app_config.logging.init_tracing();
    app_config.validate().map_err(ConfigError::from)?;

    let entries = read_entries(&cli.matrix_file)?;
    info!(
        file = %cli.matrix_file.display(),
        entries = entries.len(),
        "Loaded alternatives"
    );

    let mut session = DecisionSession::new(&app_config.engine)?;
    for entry in entries {
        session.submit(entry)?;
    }

    let report = session.process(cli.method)?;
    if let Some(winner) = report.winner() {
        info!(
            method = %report.method,
            winner = %winner.label,
            score = winner.score,
            "Ranking complete"
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn read_entries(path: &Path) -> Result<Vec<SubmitAlternativeCommand>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );

    let parsed = if is_yaml {
        serde_yaml::from_str(&raw).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&raw).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| CliError::Parse {
        path: path.to_path_buf(),
        message,
    })
}
