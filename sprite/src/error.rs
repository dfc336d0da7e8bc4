#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error(
        "Pixel buffer of sprite {index} is too short. Expect ({expect}) bytes. Have ({have})"
    )]
    PixelBufferTooShort {
        index: u32,
        expect: usize,
        have: usize,
    },
    #[error("Dimensions of sprite {index} overflow: {width}x{height}")]
    DimensionsOverflow { index: u32, width: u32, height: u32 },
    #[error("Error encoding sprite preview: {source}")]
    Image {
        #[from]
        source: image::ImageError,
    },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
