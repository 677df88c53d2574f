use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

/// A list of images to pack, in the order they should be placed.
///
/// ```yaml
/// sprites:
///   - name: ship
///     path: ships/ship.png
///   - name: bullet
///     path: bullet.png
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpriteManifest {
    pub sprites: Vec<ManifestEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub name: String,
    pub path: PathBuf,
}

impl SpriteManifest {
    pub fn decode_yaml(yaml: &str) -> Result<SpriteManifest> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn decode_json(json: &str) -> Result<SpriteManifest> {
        Ok(serde_json::from_str(json)?)
    }
}
