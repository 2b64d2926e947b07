use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::Error;
use crate::filename::decompose;
use crate::model::{Datafile, Experiment, Instrument, Projection};
use crate::resolver::DataFinder;
use crate::runs::RunNumber;

pub const ONCAT_URL: &str = "https://oncat.ornl.gov";
pub const DEFAULT_FACILITY: &str = "SNS";
pub const USER_AGENT: &str = concat!("Finddata/", env!("CARGO_PKG_VERSION"));

/// Returned by [`CatalogService::get_proposal`] in place of an error when no datafile matches.
pub const PROPOSAL_NOT_FOUND: &str = "Failed to find proposal";

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub facility: String,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: ONCAT_URL.to_string(),
            facility: DEFAULT_FACILITY.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

pub struct CatalogService {
    client: Client,
    base_url: String,
    facility: String,
}

impl CatalogService {
    pub fn new(config: CatalogConfig) -> Result<Self, Error> {
        let client = Client::builder().user_agent(USER_AGENT).timeout(config.timeout).build()?;
        Ok(CatalogService {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            facility: config.facility,
        })
    }

    /// Lists the facility's instruments, optionally followed by their lowercase spellings.
    pub async fn list_instruments(&self, with_lowercase: bool) -> Result<Vec<String>, Error> {
        let instruments = self
            .get_json::<Vec<Instrument>>("api/instruments", &[("facility", self.facility.as_str())])
            .await?;

        if instruments.is_empty() {
            return Err(Error::Catalog(format!(
                "Failed to find instruments from {url}/api/instruments?facility={facility}",
                url = self.base_url,
                facility = self.facility
            )));
        }

        let mut ids: Vec<String> = instruments.into_iter().map(|i| i.id).collect();
        debug!("Instruments at {facility}: {ids:?}", facility = self.facility);
        if with_lowercase {
            let lowercase: Vec<String> = ids.iter().map(|id| id.to_lowercase()).collect();
            ids.extend(lowercase);
        }
        Ok(ids)
    }

    /// Matches an instrument given in upper or lower case against the catalog and gives the
    /// catalog's id for it. Mixed case spellings are not accepted.
    pub async fn checked_instrument(&self, instrument: &str) -> Result<String, Error> {
        let ids = self.list_instruments(false).await?;

        match ids.iter().find(|id| *id == instrument || id.to_lowercase() == instrument) {
            Some(id) => Ok(id.clone()),
            None => Err(Error::UnknownInstrument {
                instrument: instrument.to_string(),
                valid: ids.join(", "),
            }),
        }
    }

    /// Proposal owning the most recently ingested datafile of the run.
    pub async fn get_proposal(&self, instrument: &str, run: RunNumber) -> Result<String, Error> {
        let datafiles = self.datafiles(instrument, run, Projection::Experiment).await?;

        match datafiles.into_iter().next() {
            None => Ok(PROPOSAL_NOT_FOUND.to_string()),
            Some(Datafile { experiment: Some(experiment), .. }) => Ok(experiment),
            Some(_) => Err(Error::MissingField {
                url: format!("{url}/api/datafiles", url = self.base_url),
                field: "experiment",
            }),
        }
    }

    pub async fn get_runs_in_proposal(
        &self,
        instrument: &str,
        proposal: &str,
    ) -> Result<serde_json::Value, Error> {
        let experiment = self
            .get_json::<Experiment>(
                &format!("api/experiments/{proposal}"),
                &[
                    ("facility", self.facility.as_str()),
                    ("instrument", instrument),
                    ("projection", "indexed"),
                ],
            )
            .await?;

        Ok(experiment.indexed.run_number.ranges)
    }

    async fn datafiles(
        &self,
        instrument: &str,
        run: RunNumber,
        projection: Projection,
    ) -> Result<Vec<Datafile>, Error> {
        let ranges_q = format!("indexed.run_number:{run}");
        self.get_json(
            "api/datafiles",
            &[
                ("facility", self.facility.as_str()),
                ("instrument", instrument),
                ("ranges_q", ranges_q.as_str()),
                ("sort_by", "ingested"),
                ("sort_by_direction", "DESCENDING"),
                ("projection", projection.as_str()),
            ],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let request = self
            .client
            .get(format!("{url}/{endpoint}", url = self.base_url))
            .query(query)
            .build()?;
        let url = request.url().to_string();
        debug!("GET {url}");

        let response = self.client.execute(request).await?;

        match response.status() {
            StatusCode::OK => {
                let response_body = response.text().await?;
                Ok(serde_json::from_str::<T>(&response_body)?)
            }
            status => Err(Error::Catalog(format!(
                "Failed to get {url}. Status code: {status}"
            ))),
        }
    }
}

#[async_trait]
impl DataFinder for CatalogService {
    async fn locate(&self, filename: &str) -> Result<Option<PathBuf>, Error> {
        let Some((instrument, run)) = decompose(filename) else {
            debug!("`{filename}` does not look like <instrument>_<run>, not asking the catalog");
            return Ok(None);
        };

        let locations: Vec<PathBuf> = self
            .datafiles(instrument, run, Projection::Location)
            .await?
            .into_iter()
            .filter_map(|datafile| datafile.location)
            .map(PathBuf::from)
            .filter(|location| location.exists() && basename_starts_with(location, filename))
            .collect();

        info!("Found {count} locations: {locations:?}", count = locations.len());
        Ok(locations.into_iter().next())
    }
}

fn basename_starts_with(location: &Path, filename: &str) -> bool {
    location
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(filename))
}
