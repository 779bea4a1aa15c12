//! Partial configuration updates
//!
//! Keys are accepted in camelCase (`clientId`) as well as snake_case.
//! JSON patches keep sound names exactly as written; the `config` loader
//! used for TOML and YAML folds every key to lowercase.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::app_config::ConfigError;

/// Partial configuration; every section and field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigPatch {
    #[serde(default)]
    pub discord: Option<DiscordPatch>,
    #[serde(default)]
    pub website: Option<WebsitePatch>,
    #[serde(default)]
    pub meta: Option<MetaPatch>,
    #[serde(default)]
    pub sounds: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub database: Option<DatabasePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordPatch {
    #[serde(default, alias = "clientId", alias = "clientid")]
    pub client_id: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebsitePatch {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaPatch {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, alias = "supportServer", alias = "supportserver")]
    pub support_server: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabasePatch {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl ConfigPatch {
    /// Read a patch from a JSON, TOML or YAML file (format from the extension)
    ///
    /// # Errors
    /// Returns an error if the file is missing or malformed
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            return Self::from_json_str(&fs::read_to_string(path)?);
        }

        let patch = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;
        Ok(patch)
    }

    /// Parse a patch from an in-memory JSON document
    ///
    /// # Errors
    /// Returns an error if the document is malformed
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
