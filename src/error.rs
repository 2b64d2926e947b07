use thiserror::Error;

use crate::runs::RunNumber;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The catalog answered with something other than `200 OK`, or with nothing usable.
    #[error("{0}")]
    Catalog(String),
    #[error("Failed to find file for instrument {instrument} and run {run}")]
    NotFound { instrument: String, run: RunNumber },
    #[error("Unknown instrument `{instrument}`. Valid instruments: {valid}")]
    UnknownInstrument { instrument: String, valid: String },
    #[error("Catalog record from {url} is missing `{field}`")]
    MissingField { url: String, field: &'static str },
}
