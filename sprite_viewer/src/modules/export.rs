use std::path::{Path, PathBuf};

use eyre::eyre;
use log::debug;
use rayon::prelude::*;
use sprite::SpriteRecord;

use crate::utils::constants::{EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX};

/// `sprite_007_16x16.png`
pub fn export_file_name(record: &SpriteRecord) -> String {
    format!(
        "{}_{:03}_{}.{}",
        EXPORT_FILE_PREFIX,
        record.index(),
        record.size(),
        EXPORT_FILE_EXTENSION
    )
}

/// Writes the sprite preview as PNG into `folder`.
///
/// Returns `None` for sprites without a preview.
pub fn export_sprite(
    record: &SpriteRecord,
    folder: impl AsRef<Path>,
) -> eyre::Result<Option<PathBuf>> {
    let Some(preview) = record.preview() else {
        debug!("Sprite {} has no preview to export", record.index());
        return Ok(None);
    };

    let path = folder.as_ref().join(export_file_name(record));

    preview
        .save_png(&path)
        .map_err(|op| eyre!("Cannot export sprite {}: {}", record.index(), op))?;

    Ok(Some(path))
}

/// Exports every sprite that has a preview. Creates `folder` if needed.
pub fn export_sprites(records: &[SpriteRecord], folder: &Path) -> eyre::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(folder)?;

    records
        .par_iter()
        .filter_map(|record| export_sprite(record, folder).transpose())
        .collect::<eyre::Result<Vec<PathBuf>>>()
}
