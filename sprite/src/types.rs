/// Scalar attributes of one hardware sprite as reported by the debugger backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteAttributes {
    pub index: u32,
    // can be negative or past the screen edge
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub tile_index: i32,
    pub priority: i32,
    pub palette: i32,
    pub visible: bool,
    pub horizontal_mirror: bool,
    pub vertical_mirror: bool,
    /// SNES OAM name select bit
    pub use_second_table: bool,
}

/// One sprite as captured from emulated memory.
///
/// `pixels` borrows the backend buffer and is only valid for as long as the snapshot is.
/// It holds `width * height` samples, 4 bytes each, in B,G,R,A order with premultiplied alpha.
#[derive(Debug, Clone, Copy)]
pub struct RawSpriteSnapshot<'a> {
    pub attributes: SpriteAttributes,
    pub pixels: &'a [u8],
}

impl<'a> RawSpriteSnapshot<'a> {
    pub fn new(attributes: SpriteAttributes, pixels: &'a [u8]) -> Self {
        Self { attributes, pixels }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Bgra8888,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaFormat {
    Premultiplied,
}

/// Renderable sprite image. Owns its pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct SpritePreview {
    pub(crate) width: u32,
    pub(crate) height: u32,
    // [[u8; 4]; width * height], no row padding
    pub(crate) pixels: Vec<u8>,
}

/// Sprite attributes plus the derived values the viewer displays.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRecord {
    pub(crate) attributes: SpriteAttributes,
    pub(crate) size: String,
    pub(crate) preview: Option<SpritePreview>,
    pub(crate) zoom: Option<f64>,
}

/// Observable properties of a [`SpriteRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteField {
    Index,
    X,
    Y,
    Width,
    Height,
    TileIndex,
    Priority,
    Palette,
    Visible,
    Size,
    HorizontalMirror,
    VerticalMirror,
    UseSecondTable,
    Preview,
    Zoom,
}
