//! Client for the ONCat data catalog: finds data files of instrument runs on the shared
//! filesystem, the proposal a run belongs to, and the runs of a proposal.

pub mod commands;
pub mod error;
pub mod filename;
pub mod model;
pub mod resolver;
pub mod runs;
pub mod service;

pub use error::Error;
pub use resolver::DataFinder;
pub use runs::{parse_runs, RunNumber};
pub use service::{CatalogConfig, CatalogService};
