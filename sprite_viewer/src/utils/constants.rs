pub static CONFIG_FILE_NAME: &str = "sprite_viewer.toml";

pub const EXPORT_FILE_PREFIX: &str = "sprite";
pub const EXPORT_FILE_EXTENSION: &str = "png";
