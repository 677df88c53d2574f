use indexmap::IndexMap;
use sheetpack_geometry::Rect;

use super::Sprite;
use crate::AtlasError;

/// Maps sprite names to their location on the atlas.
#[derive(Debug, Clone, Default)]
pub struct SpriteRegistry {
    sprites: IndexMap<String, Sprite>,
}

impl SpriteRegistry {
    /// Registers a sprite. A sprite registered earlier under the same name is replaced
    /// and returned.
    pub fn register(&mut self, name: impl Into<String>, bounds: Rect<u32>) -> Option<Sprite> {
        let name = name.into();
        self.sprites
            .insert(name.clone(), Sprite::new(name, bounds))
    }

    pub fn lookup(&self, name: &str) -> Result<&Sprite, AtlasError> {
        self.sprites
            .get(name)
            .ok_or_else(|| AtlasError::SpriteNotFound(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Iterates over all registered sprites. The order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> + '_ {
        self.sprites.values()
    }
}

impl<'a> IntoIterator for &'a SpriteRegistry {
    type Item = &'a Sprite;
    type IntoIter = indexmap::map::Values<'a, String, Sprite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sprites.values()
    }
}
