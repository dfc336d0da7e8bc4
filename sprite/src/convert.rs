use log::trace;

use crate::{
    error::SpriteError, RawSpriteSnapshot, SpriteAttributes, SpritePreview, SpriteRecord,
};

/// Side length that the bigger side of a sprite preview is scaled to.
pub const PREVIEW_CELL_SIZE: u32 = 32;

pub const BYTES_PER_PIXEL: usize = 4;

/// Display scale for a sprite preview so that the bigger side fills [`PREVIEW_CELL_SIZE`].
///
/// Sprites up to the cell size get a whole number upscale, `32 / max(width, height)` rounded down.
/// Bigger sprites get a fractional downscale so the factor never reaches zero.
///
/// Returns `None` when both sides are zero.
pub fn zoom_factor(width: u32, height: u32) -> Option<f64> {
    let bigger_side = width.max(height);

    if bigger_side == 0 {
        return None;
    }

    let zoom = if bigger_side <= PREVIEW_CELL_SIZE {
        (PREVIEW_CELL_SIZE / bigger_side) as f64
    } else {
        PREVIEW_CELL_SIZE as f64 / bigger_side as f64
    };

    Some(zoom)
}

impl SpritePreview {
    /// Copies `width * height` BGRA samples out of `pixels`.
    ///
    /// Extra trailing bytes are ignored. A short buffer means the snapshot is corrupted.
    pub(crate) fn copy_from_bgra8888(
        index: u32,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<Self, SpriteError> {
        let expect = (width as usize)
            .checked_mul(height as usize)
            .and_then(|count| count.checked_mul(BYTES_PER_PIXEL))
            .ok_or(SpriteError::DimensionsOverflow {
                index,
                width,
                height,
            })?;

        if pixels.len() < expect {
            return Err(SpriteError::PixelBufferTooShort {
                index,
                expect,
                have: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels: pixels[..expect].to_vec(),
        })
    }
}

impl SpriteRecord {
    /// Converts a backend snapshot into a record that no longer borrows the backend buffer.
    pub fn from_raw(snapshot: RawSpriteSnapshot<'_>) -> Result<Self, SpriteError> {
        let RawSpriteSnapshot { attributes, pixels } = snapshot;
        let SpriteAttributes {
            index,
            width,
            height,
            ..
        } = attributes;

        // zero sized sprite slots have nothing to draw
        let preview = if width == 0 || height == 0 {
            None
        } else {
            Some(SpritePreview::copy_from_bgra8888(
                index, width, height, pixels,
            )?)
        };

        let zoom = zoom_factor(width, height);

        trace!("sprite {index}: {width}x{height}, zoom {zoom:?}");

        Ok(Self {
            attributes,
            size: format!("{}x{}", width, height),
            preview,
            zoom,
        })
    }
}
