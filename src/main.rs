mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use tio::config::OciConfig;
use tio::error::{EX_USAGE, TioError};
use tio::generate::{generate, read_lines};
use tio::identity::IdentityClient;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Exactly one list path; checked before any file or network I/O.
    let [path] = cli.paths.as_slice() else {
        println!("need a path to the resource/ocid list!");
        return Ok(ExitCode::from(EX_USAGE));
    };

    match run(&cli, path).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            println!("{}", err);
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

async fn run(cli: &Cli, path: &Path) -> Result<(), TioError> {
    let config = match &cli.config_file {
        Some(file) => OciConfig::from_file(file, &cli.profile)?,
        None => OciConfig::from_default_file(&cli.profile)?,
    };
    tracing::info!(region = %config.region, profile = %cli.profile, "config loaded");

    let client = IdentityClient::new(&config)?;

    let lines = read_lines(path)?;
    tracing::info!(count = lines.len(), path = %path.display(), "list read");

    let mut out = std::io::stdout().lock();
    generate(&lines, &client, &config.tenancy, &mut out).await
}
