use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct Instrument {
    pub id: String,
}

/// A datafile record as returned by `api/datafiles`, reduced to the projected fields.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Datafile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Experiment {
    pub indexed: Indexed,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Indexed {
    pub run_number: RunNumberIndex,
}

/// Run numbers of an experiment, kept in the catalog's own `ranges` shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunNumberIndex {
    pub ranges: Value,
}

/// Projections understood by `api/datafiles`.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    Location,
    Experiment,
}

impl Projection {
    pub fn as_str(self) -> &'static str {
        match self {
            Projection::Location => "location",
            Projection::Experiment => "experiment",
        }
    }
}
