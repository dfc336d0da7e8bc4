//! Whole frames of sprite data handed from the emulation thread to the viewer.
use std::{
    ops::Range,
    sync::mpsc::{self, Receiver, SendError, Sender},
};

use sprite::{RawSpriteSnapshot, SpriteAttributes};

/// Every sprite of one video frame. The pixels of all sprites live in one buffer.
#[derive(Debug, Clone, Default)]
pub struct SpriteFrame {
    frame_number: u64,
    entries: Vec<(SpriteAttributes, Range<usize>)>,
    pixels: Vec<u8>,
}

impl SpriteFrame {
    pub fn new(frame_number: u64) -> Self {
        Self {
            frame_number,
            ..Default::default()
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Appends one sprite. `pixels` is copied so the caller can reuse its buffer right away.
    pub fn push(&mut self, attributes: SpriteAttributes, pixels: &[u8]) {
        let start = self.pixels.len();

        self.pixels.extend_from_slice(pixels);
        self.entries
            .push((attributes, start..self.pixels.len()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots borrowing this frame, in the order they were pushed
    pub fn snapshots(&self) -> impl Iterator<Item = RawSpriteSnapshot<'_>> {
        self.entries.iter().map(|(attributes, range)| {
            RawSpriteSnapshot::new(*attributes, &self.pixels[range.clone()])
        })
    }
}

/// Emulation side of the frame channel
#[derive(Debug, Clone)]
pub struct FrameSender(Sender<SpriteFrame>);

/// UI side of the frame channel
#[derive(Debug)]
pub struct FrameReceiver(Receiver<SpriteFrame>);

pub fn frame_channel() -> (FrameSender, FrameReceiver) {
    let (sender, receiver) = mpsc::channel();

    (FrameSender(sender), FrameReceiver(receiver))
}

impl FrameSender {
    /// Fails only when the receiver is gone.
    pub fn send(&self, frame: SpriteFrame) -> Result<(), SendError<SpriteFrame>> {
        self.0.send(frame)
    }
}

impl FrameReceiver {
    /// Newest queued frame. Older queued frames are dropped.
    pub fn latest(&self) -> Option<SpriteFrame> {
        self.0.try_iter().last()
    }
}
