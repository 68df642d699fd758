//! Network description file.
//!
//! A JSON document listing the roads to load before answering a query:
//!
//! ```json
//! { "roads": [ { "from": "Depot", "to": "Clinic", "distance": 10, "time": 10, "risk": 1 } ] }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use eroute_core::{InputError, RoadEntry, RoadRequest};

const DEFAULT_NETWORK_FILE: &str = "./network.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read network file [{}]", .0.display())]
    FileRead(PathBuf, #[source] io::Error),

    #[error("Network file must be a valid JSON document")]
    BadFile(#[from] serde_json::Error),

    #[error("Bad road #{index} in network file")]
    BadRoad { index: usize, source: InputError },
}

/// Roads to preload into the planner.
#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub roads: Vec<RoadSpec>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct RoadSpec {
    pub from: String,
    pub to: String,

    /// Kilometers.
    pub distance: f64,

    /// Minutes.
    pub time: f64,

    pub risk: f64,
}

impl RoadSpec {
    /// Same request a user would type in, so file roads get the same validation.
    fn to_request(&self) -> RoadRequest {
        RoadRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            distance: self.distance.to_string(),
            time: self.time.to_string(),
            risk: self.risk.to_string(),
        }
    }
}

impl Network {
    /// Load the network from `path`, or from the default location if `None`.
    /// A missing default file means an empty network; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read_file(path),
            None => Self::read_optional_file(Path::new(DEFAULT_NETWORK_FILE)),
        }
    }

    fn parse(json: &[u8]) -> Result<Self, ConfigError> {
        let network: Network = serde_json::from_slice(json)?;
        Ok(network)
    }

    fn read_file(file_path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read(file_path).map_err(|e| ConfigError::FileRead(file_path.to_path_buf(), e))?;
        let network = Self::parse(&json)?;
        debug!("loaded {} roads from [{}]", network.roads.len(), file_path.display());
        Ok(network)
    }

    fn read_optional_file(file_path: &Path) -> Result<Self, ConfigError> {
        match Self::read_file(file_path) {
            Ok(network) => Ok(network),
            Err(ConfigError::FileRead(_, err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no network file at [{}], starting empty", file_path.display());
                Ok(Network::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Validated roads, in file order.
    pub fn entries(&self) -> Result<Vec<RoadEntry>, ConfigError> {
        self.roads
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.to_request().validate().map_err(|source| ConfigError::BadRoad { index: i + 1, source }))
            .collect()
    }
}
