//! The three lookup modes of the command line, writing their results to any output.

use std::io::Write;

use tracing::debug;

use crate::error::Error;
use crate::resolver::DataFinder;
use crate::runs::RunNumber;
use crate::service::CatalogService;

/// Prints the location of a single file name. Gives `false` when the file was not found.
pub async fn print_filename<F, W>(finder: &F, filename: &str, out: &mut W) -> Result<bool, Error>
where
    F: DataFinder + ?Sized,
    W: Write + Send,
{
    match finder.locate(filename).await? {
        Some(location) => {
            writeln!(out, "{}", location.display())?;
            Ok(true)
        }
        None => {
            writeln!(out, "Failed to find file {filename}")?;
            Ok(false)
        }
    }
}

/// Prints one line per run: its file, or why it could not be found. A failing run never stops
/// the remaining ones.
pub async fn print_files<F, W>(
    finder: &F,
    instrument: &str,
    runs: &[RunNumber],
    out: &mut W,
) -> Result<(), Error>
where
    F: DataFinder + ?Sized,
    W: Write + Send,
{
    debug!("Runs to process: {runs:?}");
    for &run in runs {
        match finder.find_file(instrument, run).await {
            Ok(location) => writeln!(out, "{}", location.display())?,
            Err(error) => writeln!(out, "{error}")?,
        }
    }
    Ok(())
}

/// Prints the proposal of each run, prefixed with the run when there is more than one.
pub async fn print_proposals<W: Write + Send>(
    service: &CatalogService,
    instrument: &str,
    runs: &[RunNumber],
    out: &mut W,
) -> Result<(), Error> {
    let several = runs.len() > 1;
    for &run in runs {
        let proposal = service.get_proposal(instrument, run).await?;
        if several {
            writeln!(out, "{run}: {proposal}")?;
        } else {
            writeln!(out, "{proposal}")?;
        }
    }
    Ok(())
}

pub async fn print_runs_in_proposal<W: Write + Send>(
    service: &CatalogService,
    instrument: &str,
    proposal: &str,
    out: &mut W,
) -> Result<(), Error> {
    let ranges = service.get_runs_in_proposal(instrument, proposal).await?;
    writeln!(out, "{ranges}")?;
    Ok(())
}
