use std::{path::Path, rc::Rc};

use log::{debug, info, trace, warn};
use sheetpack_assets::{
    atlas::{AtlasBuilder, Sprite, SpriteRegistry},
    manifest::SpriteManifest,
    png::{decode_png, load_png},
    AtlasError, Image,
};
use sheetpack_graphics_hal::{
    sub_texture::SubTexture, texture::PixelFormat, Graphics, Rect, Size,
};

pub use error::SpriteError;
pub use settings::AtlasSettings;

mod error;
mod settings;

/// Owns everything needed to build a sprite atlas and draw sprites out of it.
///
/// Images are loaded one by one and stacked into a single canvas, each sprite
/// remembers the rectangle its image ended up in. The texture for the whole canvas
/// is created on first use and recreated after the canvas changes.
pub struct SpriteAtlas<G: Graphics> {
    graphics: G,
    settings: AtlasSettings,
    builder: AtlasBuilder,
    registry: SpriteRegistry,
    texture: Option<Rc<G::Texture>>,
}

impl<G: Graphics> SpriteAtlas<G> {
    pub fn new(graphics: G) -> Self {
        Self::new_with_settings(graphics, AtlasSettings::default())
    }

    pub fn new_with_settings(graphics: G, settings: AtlasSettings) -> Self {
        Self {
            graphics,
            builder: AtlasBuilder::new(settings.fill_color()),
            settings,
            registry: SpriteRegistry::default(),
            texture: None,
        }
    }

    pub fn settings(&self) -> &AtlasSettings {
        &self.settings
    }

    /// Loads a png and adds it to the atlas under `name`.
    ///
    /// Relative paths are resolved against [`AtlasSettings::root`]. If the file can't be
    /// read or decoded, the atlas is left untouched.
    pub fn load_sprite(
        &mut self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Rect<u32>, SpriteError> {
        let name = name.into();
        let path = self.settings.resolve(path.as_ref());

        let image = load_png(&path).inspect_err(|e| {
            warn!("Unable to load sprite [{}] from {}: {}", name, path.display(), e)
        })?;

        Ok(self.insert_image(name, image))
    }

    /// Same as [`load_sprite`](Self::load_sprite), but decodes png bytes already in memory.
    pub fn load_sprite_bytes(
        &mut self,
        name: impl Into<String>,
        png: &[u8],
    ) -> Result<Rect<u32>, SpriteError> {
        let name = name.into();
        let image = decode_png(png)
            .inspect_err(|e| warn!("Unable to decode sprite [{}]: {}", name, e))?;

        Ok(self.insert_image(name, image))
    }

    /// Places an already decoded image into the atlas and registers it under `name`.
    /// A sprite previously registered under the same name is replaced, its pixels stay
    /// on the atlas.
    pub fn insert_image(&mut self, name: impl Into<String>, image: Image) -> Rect<u32> {
        let name = name.into();
        let bounds = self.builder.push(image);
        self.invalidate_texture();

        let size = self.builder.size();
        info!(
            "Added [{}] bounds {}, new atlas dimensions W: {} H: {}",
            name, bounds, size.w, size.h
        );

        if let Some(previous) = self.registry.register(name, bounds) {
            warn!(
                "Sprite [{}] was already registered at {}, replaced",
                previous.name, previous.bounds
            );
        }

        bounds
    }

    /// Loads every manifest entry in order and returns the number of loaded sprites.
    /// Stops at the first failure, sprites loaded before it stay in the atlas.
    pub fn load_manifest(&mut self, manifest: &SpriteManifest) -> Result<usize, SpriteError> {
        for entry in &manifest.sprites {
            self.load_sprite(entry.name.as_str(), &entry.path)?;
        }

        Ok(manifest.sprites.len())
    }

    /// Texture of the whole atlas, or `None` if nothing has been loaded yet.
    pub fn texture(&mut self) -> Option<Rc<G::Texture>> {
        let canvas = self.builder.canvas()?;
        let texture = self.texture.get_or_insert_with(|| {
            trace!("Creating atlas texture {}x{}", canvas.width(), canvas.height());
            Rc::new(self.graphics.new_texture(
                PixelFormat::Rgba,
                canvas.size(),
                Some(canvas.as_bytes()),
            ))
        });

        Some(texture.clone())
    }

    /// A view of the atlas texture covering a single sprite.
    pub fn sprite_view(&mut self, name: &str) -> Result<SubTexture<G>, SpriteError> {
        let bounds = self.registry.lookup(name)?.bounds;
        // A registered sprite implies a canvas
        let texture = self.texture().ok_or(AtlasError::NotBootstrapped)?;

        Ok(SubTexture::new(texture, bounds))
    }

    pub fn sprite(&self, name: &str) -> Result<&Sprite, SpriteError> {
        Ok(self.registry.lookup(name)?)
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> + '_ {
        self.registry.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The atlas pixels, `None` before the first sprite.
    pub fn canvas(&self) -> Option<&Image> {
        self.builder.canvas()
    }

    pub fn size(&self) -> Size<u32> {
        self.builder.size()
    }

    /// Dumps every sprite and its bounds to the debug log.
    pub fn log_sprites(&self) {
        for sprite in self.registry.iter() {
            debug!("{} -> {}", sprite.name, sprite.bounds);
        }
    }

    fn invalidate_texture(&mut self) {
        if self.texture.take().is_some() {
            trace!("Atlas texture invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};
    use rgb::RGBA8;
    use sheetpack_assets::{png::encode_png, DecodeError};
    use sheetpack_graphics_hal::texture::Texture;
    use sheetpack_graphics_soft::Soft;

    use super::*;

    struct CapturingLogger(Mutex<Vec<String>>);

    impl Log for CapturingLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger(Mutex::new(Vec::new()));

    fn solid(w: u32, h: u32, color: RGBA8) -> Image {
        Image::new(Size::new(w, h), color)
    }

    #[test]
    fn test_empty_atlas() {
        let mut atlas = SpriteAtlas::new(Soft::new());

        assert!(atlas.is_empty());
        assert!(atlas.texture().is_none());
        assert_eq!(atlas.size(), Size::new(0, 0));
    }

    #[test]
    fn test_texture_is_cached() {
        let soft = Soft::new();
        let mut atlas = SpriteAtlas::new(soft.clone());
        atlas.insert_image("a", solid(2, 2, RGBA8::new(1, 1, 1, 1)));

        let first = atlas.texture().unwrap();
        let second = atlas.texture().unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(soft.textures_created(), 1);
    }

    #[test]
    fn test_texture_invalidated_on_insert() {
        let soft = Soft::new();
        let mut atlas = SpriteAtlas::new(soft.clone());
        atlas.insert_image("a", solid(2, 2, RGBA8::new(1, 1, 1, 1)));
        let before = atlas.texture().unwrap();

        atlas.insert_image("b", solid(3, 1, RGBA8::new(2, 2, 2, 2)));
        let after = atlas.texture().unwrap();

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(before.size(), Size::new(2, 2));
        assert_eq!(after.size(), Size::new(3, 3));
        assert_eq!(after.pixel(0, 2), Some(vec![2, 2, 2, 2]));
        assert_eq!(soft.textures_created(), 2);
    }

    #[test]
    fn test_sprite_view() {
        let mut atlas = SpriteAtlas::new(Soft::new());
        atlas.insert_image("a", solid(10, 20, RGBA8::new(1, 1, 1, 1)));
        atlas.insert_image("b", solid(16, 5, RGBA8::new(2, 2, 2, 2)));

        let view = atlas.sprite_view("b").unwrap();

        assert_eq!(view.region, Rect::from((0, 20, 16, 25)));
        assert_eq!(view.size(), Size::new(16, 5));
        assert_eq!(view.texture.size(), Size::new(16, 25));
    }

    #[test]
    fn test_sprite_view_missing() {
        let mut atlas = SpriteAtlas::new(Soft::new());
        atlas.insert_image("a", solid(1, 1, RGBA8::default()));

        let err = atlas.sprite_view("missing").unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_failed_decode_leaves_atlas_untouched() {
        let soft = Soft::new();
        let mut atlas = SpriteAtlas::new(soft.clone());
        atlas.insert_image("a", solid(4, 4, RGBA8::new(5, 5, 5, 5)));
        let texture = atlas.texture().unwrap();

        let err = atlas.load_sprite_bytes("broken", b"not a png").unwrap_err();

        assert!(matches!(err, SpriteError::Decode(DecodeError::Png(_))));
        assert!(!atlas.contains("broken"));
        assert_eq!(atlas.len(), 1);
        assert_eq!(atlas.size(), Size::new(4, 4));
        assert!(Rc::ptr_eq(&texture, &atlas.texture().unwrap()));
    }

    #[test]
    fn test_load_sprite_bytes() {
        let mut atlas = SpriteAtlas::new(Soft::new());
        let image = solid(3, 2, RGBA8::new(10, 20, 30, 255));

        let bounds = atlas
            .load_sprite_bytes("dot", &encode_png(&image).unwrap())
            .unwrap();

        assert_eq!(bounds, Rect::from((0, 0, 3, 2)));
        assert_eq!(atlas.sprite("dot").unwrap().bounds, bounds);
        assert_eq!(atlas.canvas(), Some(&image));
    }

    #[test]
    fn test_fill_from_settings() {
        let settings = AtlasSettings {
            fill: [255, 0, 255, 255],
            ..Default::default()
        };
        let mut atlas = SpriteAtlas::new_with_settings(Soft::new(), settings);
        atlas.insert_image("narrow", solid(1, 1, RGBA8::default()));
        atlas.insert_image("wide", solid(3, 1, RGBA8::default()));

        let canvas = atlas.canvas().unwrap();
        assert_eq!(canvas.get(2, 0), Some(RGBA8::new(255, 0, 255, 255)));
    }

    #[test]
    fn test_log_sprites() {
        // Tests share the process wide logger, only this test installs it
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Debug);

        let mut atlas = SpriteAtlas::new(Soft::new());
        atlas.insert_image("lantern", solid(2, 3, RGBA8::default()));
        atlas.insert_image("torch", solid(4, 1, RGBA8::default()));

        atlas.log_sprites();

        let lines = LOGGER.0.lock().unwrap();
        assert!(lines.iter().any(|l| l == "lantern -> (0, 0)-(2, 3)"));
        assert!(lines.iter().any(|l| l == "torch -> (0, 3)-(4, 4)"));
    }
}
