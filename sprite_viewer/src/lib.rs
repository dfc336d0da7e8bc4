//! Sprite viewer for the emulator debugger: the sprite list, the selected sprite and how both reach the UI.
pub mod config;
pub mod modules;
pub mod types;
pub mod utils;

pub use config::ViewerConfig;
pub use modules::{
    collection::{ModelState, SpriteCollectionModel},
    frame::{frame_channel, FrameReceiver, FrameSender, SpriteFrame},
    viewer::{ListenerId, SpriteViewer, ViewerEvent},
};
pub use types::{ConsoleType, CpuType};
