#![cfg_attr(feature = "strict", deny(warnings))]

use std::net::IpAddr;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
pub mod router;
pub mod serialize;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
}

impl ServerConfig {
    /// Merges the given YAML files in order, then `FRA_*` environment
    /// variables (e.g. `FRA_serverPort`) on top. Missing files contribute
    /// nothing.
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, figment::Error> {
        let mut figment = Figment::new();
        for file in files {
            figment = figment.merge(Yaml::file(file));
        }

        figment
            .merge(Env::prefixed("FRA_").split("__").lowercase(false))
            .extract()
    }
}
