use clap::{Parser, ValueEnum};
use finddata::service::{DEFAULT_FACILITY, ONCAT_URL};
use tracing::level_filters::LevelFilter;

/// Find data files, proposals and runs of SNS instruments through the ONCat catalog.
#[derive(Parser)]
#[command(version)]
pub(crate) struct Cli {
  /// Instrument name, upper or lower case (e.g. `ARCS` or `arcs`). Checked against the
  /// instruments the catalog knows for the facility.
  pub(crate) instrument: Option<String>,
  /// Run numbers as `123`, `1,3,5`, `10-12` or any comma separated mix of those. Several
  /// expressions are processed in the order given.
  pub(crate) runs: Vec<String>,
  /// Look up the location of a single file name (e.g. `ARCS_12345.nxs.h5`) instead of runs.
  /// Exits with 1 when the file cannot be found.
  #[arg(long, short)]
  pub(crate) filename: Option<String>,
  /// Print the proposal each run belongs to instead of its file.
  #[arg(long)]
  pub(crate) getproposal: bool,
  /// Print the runs that belong to the given proposal (e.g. `IPTS-1234`).
  #[arg(long, value_name = "PROPOSAL")]
  pub(crate) listruns: Option<String>,
  /// Log level of the diagnostics written to stderr.
  #[arg(long, short, value_enum, ignore_case = true, default_value_t = LogLevel::Warning)]
  pub(crate) loglevel: LogLevel,
  /// Base URL of the catalog service.
  #[arg(long, env = "FINDDATA_URL", default_value = ONCAT_URL)]
  pub(crate) url: String,
  /// Facility whose instruments are searched.
  #[arg(long, env = "FINDDATA_FACILITY", default_value = DEFAULT_FACILITY)]
  pub(crate) facility: String,
  /// Timeout of a single catalog request in seconds.
  #[arg(long, env = "FINDDATA_TIMEOUT", default_value_t = 30)]
  pub(crate) timeout: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum LogLevel {
  Debug,
  Info,
  Warning,
  Error,
}

impl From<LogLevel> for LevelFilter {
  fn from(level: LogLevel) -> Self {
    match level {
      LogLevel::Debug => LevelFilter::DEBUG,
      LogLevel::Info => LevelFilter::INFO,
      LogLevel::Warning => LevelFilter::WARN,
      LogLevel::Error => LevelFilter::ERROR,
    }
  }
}
