//! Incrementally packs individually loaded images into a single sprite atlas.
//!
//! ```no_run
//! use sheetpack::{graphics_soft::Soft, SpriteAtlas};
//!
//! let mut atlas = SpriteAtlas::new(Soft::new());
//! atlas.load_sprite("ship", "assets/ship.png")?;
//! atlas.load_sprite("bullet", "assets/bullet.png")?;
//!
//! let ship = atlas.sprite_view("ship")?;
//! println!("ship occupies {} of the atlas", ship.region);
//! # Ok::<(), sheetpack::SpriteError>(())
//! ```

pub use sheetpack_assets as assets;
pub use sheetpack_geometry as geometry;
pub use sheetpack_graphics_hal as graphics_hal;
pub use sheetpack_graphics_soft as graphics_soft;
pub use sheetpack_sprites as sprites;

pub use sheetpack_assets::{atlas::Sprite, AtlasError, DecodeError, Image};
pub use sheetpack_geometry::{Point, Rect, Size};
pub use sheetpack_sprites::{AtlasSettings, SpriteAtlas, SpriteError};
