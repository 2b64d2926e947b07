mod cli;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use finddata::{commands, parse_runs, CatalogConfig, CatalogService, Error, RunNumber};
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.loglevel.into());

  match run(cli).await {
    Ok(code) => code,
    Err(error) => {
      eprintln!("Error: {error}");
      ExitCode::FAILURE
    }
  }
}

fn init_logging(level: LevelFilter) {
  let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
  info!("Finddata v{} asking {}", env!("CARGO_PKG_VERSION"), cli.url);

  let service = CatalogService::new(CatalogConfig {
    base_url: cli.url,
    facility: cli.facility,
    timeout: Duration::from_secs(cli.timeout),
  })?;
  let mut out = io::stdout();

  if let Some(filename) = cli.filename {
    let found = commands::print_filename(&service, &filename, &mut out).await?;
    return Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE });
  }

  let Some(instrument) = cli.instrument else {
    Cli::command().error(ErrorKind::MissingRequiredArgument, "Must supply an instrument").exit()
  };
  let instrument = service.checked_instrument(&instrument).await?;

  if let Some(proposal) = cli.listruns {
    commands::print_runs_in_proposal(&service, &instrument, &proposal, &mut out).await?;
    return Ok(ExitCode::SUCCESS);
  }

  let runs: Vec<RunNumber> = cli.runs.iter().flat_map(|expression| parse_runs(expression)).collect();
  if runs.is_empty() {
    Cli::command().error(ErrorKind::MissingRequiredArgument, "Failed to specify runs").exit()
  }

  if cli.getproposal {
    commands::print_proposals(&service, &instrument, &runs, &mut out).await?;
  } else {
    commands::print_files(&service, &instrument, &runs, &mut out).await?;
  }

  Ok(ExitCode::SUCCESS)
}
