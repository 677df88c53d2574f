use std::path::{Path, PathBuf};

use anyhow::Result;
use rgb::RGBA8;
use serde::Deserialize;
use smart_default::SmartDefault;

#[derive(SmartDefault, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AtlasSettings {
    /// Directory relative sprite paths are resolved against
    #[default(_code = "PathBuf::from(\".\")")]
    pub root: PathBuf,

    /// RGBA colour of atlas pixels not covered by any sprite
    #[default([0, 0, 0, 0])]
    pub fill: [u8; 4],
}

impl AtlasSettings {
    pub fn decode_yaml(yaml: &str) -> Result<AtlasSettings> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_owned()
        } else {
            self.root.join(path)
        }
    }

    pub fn fill_color(&self) -> RGBA8 {
        let [r, g, b, a] = self.fill;
        RGBA8::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AtlasSettings::default();

        assert_eq!(settings.root, PathBuf::from("."));
        assert_eq!(settings.fill_color(), RGBA8::new(0, 0, 0, 0));
    }

    #[test]
    fn test_decode_partial_yaml() {
        let settings = AtlasSettings::decode_yaml("fill: [255, 0, 255, 255]\n").unwrap();

        assert_eq!(settings.root, PathBuf::from("."));
        assert_eq!(settings.fill, [255, 0, 255, 255]);
    }

    #[test]
    fn test_resolve() {
        let settings = AtlasSettings {
            root: PathBuf::from("assets"),
            ..Default::default()
        };

        assert_eq!(
            settings.resolve(Path::new("ship.png")),
            PathBuf::from("assets/ship.png")
        );
    }
}
