//! Debugger sprite snapshots converted into owned, renderable records.
pub mod error;
mod convert;
mod types;
mod utils;

pub use convert::{zoom_factor, BYTES_PER_PIXEL, PREVIEW_CELL_SIZE};
pub use types::*;
pub use utils::PREVIEW_DPI;

#[cfg(test)]
mod test {
    use crate::{
        error::SpriteError, zoom_factor, RawSpriteSnapshot, SpriteAttributes, SpriteField,
        SpriteRecord,
    };

    fn attributes(index: u32, width: u32, height: u32) -> SpriteAttributes {
        SpriteAttributes {
            index,
            x: -4,
            y: 200,
            width,
            height,
            tile_index: 0x1a,
            priority: 2,
            palette: 5,
            visible: true,
            horizontal_mirror: true,
            vertical_mirror: false,
            use_second_table: true,
        }
    }

    fn bgra_buffer(width: u32, height: u32) -> Vec<u8> {
        (0..width * height * 4).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn scalar_fields_round_trip() {
        let attributes = attributes(7, 16, 8);
        let pixels = bgra_buffer(16, 8);

        let record = SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes, &pixels)).unwrap();

        assert_eq!(record.attributes(), &attributes);
        assert_eq!(record.index(), 7);
        assert_eq!(record.x(), -4);
        assert_eq!(record.y(), 200);
        assert_eq!(record.width(), 16);
        assert_eq!(record.height(), 8);
        assert_eq!(record.tile_index(), 0x1a);
        assert_eq!(record.priority(), 2);
        assert_eq!(record.palette(), 5);
        assert!(record.visible());
        assert!(record.horizontal_mirror());
        assert!(!record.vertical_mirror());
        assert!(record.use_second_table());
    }

    #[test]
    fn size_and_preview_dimensions() {
        for (width, height) in [(8, 8), (16, 32), (64, 64), (32, 8)] {
            let pixels = bgra_buffer(width, height);
            let record =
                SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(0, width, height), &pixels))
                    .unwrap();

            assert_eq!(record.size(), format!("{width}x{height}"));

            let preview = record.preview().unwrap();

            assert_eq!(preview.dimensions(), (width, height));
            assert_eq!(preview.pixel_count(), (width * height) as usize);
            assert_eq!(preview.stride(), width as usize * 4);
            assert_eq!(preview.dpi(), (96., 96.));
        }
    }

    #[test]
    fn preview_owns_its_pixels() {
        let mut pixels = bgra_buffer(8, 8);
        let expect = pixels.clone();

        let record =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(1, 8, 8), &pixels)).unwrap();

        pixels.iter_mut().for_each(|byte| *byte = 0xff);
        drop(pixels);

        assert_eq!(record.preview().unwrap().pixels(), expect.as_slice());
    }

    #[test]
    fn longer_buffer_is_cut_to_dimensions() {
        let mut pixels = bgra_buffer(8, 8);
        pixels.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);

        let record =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(1, 8, 8), &pixels)).unwrap();

        assert_eq!(record.preview().unwrap().pixels().len(), 8 * 8 * 4);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let pixels = bgra_buffer(8, 7);

        let res = SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(3, 8, 8), &pixels));

        assert!(matches!(
            res,
            Err(SpriteError::PixelBufferTooShort {
                index: 3,
                expect: 256,
                have: 224
            })
        ));
    }

    #[test]
    fn zero_sized_sprite() {
        let record =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(9, 0, 0), &[])).unwrap();

        assert!(record.preview().is_none());
        assert!(record.zoom().is_none());
        assert!(record.is_degenerate());
        assert_eq!(record.size(), "0x0");

        // one side still gives a zoom, but nothing to draw
        let record =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(9, 0, 8), &[])).unwrap();

        assert!(record.preview().is_none());
        assert_eq!(record.zoom(), Some(4.));
    }

    #[test]
    fn zoom_values() {
        assert_eq!(zoom_factor(32, 32), Some(1.));
        assert_eq!(zoom_factor(8, 8), Some(4.));
        assert_eq!(zoom_factor(16, 8), Some(2.));
        assert_eq!(zoom_factor(8, 16), Some(2.));
        assert_eq!(zoom_factor(24, 24), Some(1.));
        assert_eq!(zoom_factor(64, 64), Some(0.5));
        assert_eq!(zoom_factor(64, 32), Some(0.5));
        assert_eq!(zoom_factor(128, 128), Some(0.25));
        assert_eq!(zoom_factor(0, 0), None);
    }

    #[test]
    fn zoom_does_not_grow_with_size() {
        let zooms = (1..=256)
            .map(|side| zoom_factor(side, side).unwrap())
            .collect::<Vec<f64>>();

        assert!(zooms.iter().all(|zoom| *zoom > 0. && zoom.is_finite()));
        assert!(zooms.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let pixels = bgra_buffer(4, 2);
        let record =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(0, 4, 2), &pixels)).unwrap();
        let preview = record.preview().unwrap();

        // second row, third column
        let offset = (4 + 2) * 4;

        assert_eq!(
            preview.pixel(2, 1),
            Some([
                pixels[offset],
                pixels[offset + 1],
                pixels[offset + 2],
                pixels[offset + 3]
            ])
        );
        assert_eq!(preview.pixel(4, 0), None);
        assert_eq!(preview.pixel(0, 2), None);
    }

    #[test]
    fn rgba_export_swizzles_and_unpremultiplies() {
        let pixels: [u8; 16] = [10, 20, 30, 255, 0, 0, 64, 128, 50, 50, 50, 0, 0, 0, 0, 0];
        let record =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(0, 2, 2), &pixels)).unwrap();

        let image = record.preview().unwrap().to_rgba8();

        assert_eq!(image.get_pixel(0, 0).0, [30, 20, 10, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [128, 0, 0, 128]);
        assert_eq!(image.get_pixel(0, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn flags_string() {
        let record =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(0, 0, 0), &[])).unwrap();

        assert_eq!(record.flags(), "HN");

        let mut plain = attributes(0, 0, 0);
        plain.horizontal_mirror = false;
        plain.use_second_table = false;

        let record = SpriteRecord::from_raw(RawSpriteSnapshot::new(plain, &[])).unwrap();

        assert_eq!(record.flags(), "");
    }

    #[test]
    fn changed_fields_between_refreshes() {
        let pixels = bgra_buffer(8, 8);
        let before =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(2, 8, 8), &pixels)).unwrap();

        assert!(before.changed_fields(&before.clone()).is_empty());

        let mut moved = attributes(2, 8, 8);
        moved.x += 1;
        moved.palette = 0;

        let after = SpriteRecord::from_raw(RawSpriteSnapshot::new(moved, &pixels)).unwrap();

        assert_eq!(
            before.changed_fields(&after),
            vec![SpriteField::X, SpriteField::Palette]
        );

        let bigger = bgra_buffer(16, 16);
        let after =
            SpriteRecord::from_raw(RawSpriteSnapshot::new(attributes(2, 16, 16), &bigger)).unwrap();

        assert_eq!(
            before.changed_fields(&after),
            vec![
                SpriteField::Width,
                SpriteField::Height,
                SpriteField::Size,
                SpriteField::Preview,
                SpriteField::Zoom
            ]
        );
    }
}
