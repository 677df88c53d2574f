use std::{fs, path::Path};

use sheetpack_geometry::Size;

use crate::{DecodeError, Image};

/// Decodes a png of any colour type into RGBA pixels.
pub fn decode_png(png: &[u8]) -> Result<Image, DecodeError> {
    let image = lodepng::decode32(png)?;
    let size = Size::new(image.width as u32, image.height as u32);

    Image::from_pixels(size, image.buffer)
}

pub fn load_png(path: impl AsRef<Path>) -> Result<Image, DecodeError> {
    let path = path.as_ref();
    let png = fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_owned(),
        source,
    })?;

    decode_png(&png)
}

pub fn encode_png(image: &Image) -> Result<Vec<u8>, DecodeError> {
    Ok(lodepng::encode32(
        image.pixels(),
        image.width() as usize,
        image.height() as usize,
    )?)
}
