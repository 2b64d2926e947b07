use std::sync::LazyLock;

use regex::Regex;

use crate::runs::RunNumber;

static DATA_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<inst>.+?)_(?P<run>\d+).*$").unwrap());

/// Splits a data file name like `ARCS_12345_event.nxs` into instrument and run number.
///
/// The instrument is the shortest prefix followed by `_` and a run of digits, so
/// `BL_SEQ_42.nxs.h5` yields `("BL_SEQ", 42)`. Anything else is `None`.
pub fn decompose(filename: &str) -> Option<(&str, RunNumber)> {
    let captures = DATA_FILE_RE.captures(filename)?;
    let instrument = captures.name("inst")?.as_str();
    let run = captures.name("run")?.as_str().parse().ok()?;
    Some((instrument, run))
}

/// Historical file naming conventions, in the order they are probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNaming {
    /// Before ADARA: `<inst>_<run>_event.nxs`
    PreAdara,
    /// ADARA: `<inst>_<run>.nxs.h5`
    Adara,
}

impl FileNaming {
    pub const PROBE_ORDER: [FileNaming; 2] = [FileNaming::PreAdara, FileNaming::Adara];

    pub fn filename(self, instrument: &str, run: RunNumber) -> String {
        match self {
            FileNaming::PreAdara => format!("{instrument}_{run}_event.nxs"),
            FileNaming::Adara => format!("{instrument}_{run}.nxs.h5"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileNaming::PreAdara => "pre-ADARA",
            FileNaming::Adara => "ADARA",
        }
    }
}
