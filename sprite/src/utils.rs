use std::{ffi::OsStr, path::Path};

use image::{Rgba, RgbaImage};

use crate::{
    convert::BYTES_PER_PIXEL, error::SpriteError, AlphaFormat, PixelFormat, SpriteAttributes,
    SpriteField, SpritePreview, SpriteRecord,
};

/// Nominal resolution of a sprite preview bitmap
pub const PREVIEW_DPI: (f64, f64) = (96., 96.);

impl SpritePreview {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// BGRA sample at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = y as usize * self.stride() + x as usize * BYTES_PER_PIXEL;
        let bgra = &self.pixels[offset..offset + BYTES_PER_PIXEL];

        Some([bgra[0], bgra[1], bgra[2], bgra[3]])
    }

    pub fn format(&self) -> PixelFormat {
        PixelFormat::Bgra8888
    }

    pub fn alpha(&self) -> AlphaFormat {
        AlphaFormat::Premultiplied
    }

    pub fn dpi(&self) -> (f64, f64) {
        PREVIEW_DPI
    }

    /// Straight alpha RGBA copy of the preview.
    pub fn to_rgba8(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);

        image
            .pixels_mut()
            .zip(self.pixels.chunks_exact(BYTES_PER_PIXEL))
            .for_each(|(pixel, bgra)| {
                *pixel = Rgba(unpremultiply([bgra[2], bgra[1], bgra[0], bgra[3]]));
            });

        image
    }

    pub fn save_png(&self, path: impl AsRef<OsStr> + AsRef<Path>) -> Result<(), SpriteError> {
        let path: &Path = path.as_ref();

        self.to_rgba8()
            .save_with_format(path, image::ImageFormat::Png)?;

        Ok(())
    }
}

fn unpremultiply(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;

    match a {
        0 => [0, 0, 0, 0],
        255 => rgba,
        a => {
            let a32 = a as u32;
            let scale = |c: u8| ((c as u32 * 255 + a32 / 2) / a32).min(255) as u8;

            [scale(r), scale(g), scale(b), a]
        }
    }
}

impl SpriteRecord {
    pub fn attributes(&self) -> &SpriteAttributes {
        &self.attributes
    }

    pub fn index(&self) -> u32 {
        self.attributes.index
    }

    pub fn x(&self) -> i32 {
        self.attributes.x
    }

    pub fn y(&self) -> i32 {
        self.attributes.y
    }

    pub fn width(&self) -> u32 {
        self.attributes.width
    }

    pub fn height(&self) -> u32 {
        self.attributes.height
    }

    pub fn tile_index(&self) -> i32 {
        self.attributes.tile_index
    }

    pub fn priority(&self) -> i32 {
        self.attributes.priority
    }

    pub fn palette(&self) -> i32 {
        self.attributes.palette
    }

    pub fn visible(&self) -> bool {
        self.attributes.visible
    }

    pub fn horizontal_mirror(&self) -> bool {
        self.attributes.horizontal_mirror
    }

    pub fn vertical_mirror(&self) -> bool {
        self.attributes.vertical_mirror
    }

    pub fn use_second_table(&self) -> bool {
        self.attributes.use_second_table
    }

    /// `"<width>x<height>"`
    pub fn size(&self) -> &str {
        self.size.as_str()
    }

    pub fn preview(&self) -> Option<&SpritePreview> {
        self.preview.as_ref()
    }

    /// `None` when the sprite has no size at all
    pub fn zoom(&self) -> Option<f64> {
        self.zoom
    }

    /// Zero width or zero height. There is no preview to draw.
    pub fn is_degenerate(&self) -> bool {
        self.attributes.width == 0 || self.attributes.height == 0
    }

    /// Short flag string: `H` horizontal mirror, `V` vertical mirror, `N` second name table.
    pub fn flags(&self) -> String {
        let mut res = String::new();

        if self.attributes.horizontal_mirror {
            res.push('H');
        }

        if self.attributes.vertical_mirror {
            res.push('V');
        }

        if self.attributes.use_second_table {
            res.push('N');
        }

        res
    }

    /// Properties whose value differs between `self` and `other`.
    pub fn changed_fields(&self, other: &SpriteRecord) -> Vec<SpriteField> {
        let (a, b) = (&self.attributes, &other.attributes);

        [
            (SpriteField::Index, a.index != b.index),
            (SpriteField::X, a.x != b.x),
            (SpriteField::Y, a.y != b.y),
            (SpriteField::Width, a.width != b.width),
            (SpriteField::Height, a.height != b.height),
            (SpriteField::TileIndex, a.tile_index != b.tile_index),
            (SpriteField::Priority, a.priority != b.priority),
            (SpriteField::Palette, a.palette != b.palette),
            (SpriteField::Visible, a.visible != b.visible),
            (SpriteField::Size, self.size != other.size),
            (
                SpriteField::HorizontalMirror,
                a.horizontal_mirror != b.horizontal_mirror,
            ),
            (
                SpriteField::VerticalMirror,
                a.vertical_mirror != b.vertical_mirror,
            ),
            (
                SpriteField::UseSecondTable,
                a.use_second_table != b.use_second_table,
            ),
            (SpriteField::Preview, self.preview != other.preview),
            (SpriteField::Zoom, self.zoom != other.zoom),
        ]
        .into_iter()
        .filter_map(|(field, changed)| changed.then_some(field))
        .collect()
    }
}
