//! Sprite viewer state for the debugger UI.
//!
//! The UI does not poll for changes. It subscribes and gets a [`ViewerEvent`] whenever the list or the
//! selected sprite changes.
use std::path::PathBuf;

use eyre::eyre;
use log::{debug, warn};
use sprite::{RawSpriteSnapshot, SpriteField, SpriteRecord};

use crate::{
    config::ViewerConfig,
    modules::{
        collection::SpriteCollectionModel,
        export::{export_sprite, export_sprites},
        frame::SpriteFrame,
    },
    types::{ConsoleType, CpuType},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// The list was replaced
    Refreshed {
        frame_number: Option<u64>,
        count: usize,
    },
    SelectionChanged {
        previous: Option<u32>,
        current: Option<u32>,
    },
    /// Same sprite is still selected after a refresh but some of its properties changed
    SelectedSpriteUpdated {
        index: u32,
        fields: Vec<SpriteField>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&ViewerEvent)>;

pub struct SpriteViewer {
    cpu_type: CpuType,
    console_type: ConsoleType,
    config: ViewerConfig,
    model: SpriteCollectionModel,
    last_frame_number: Option<u64>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: usize,
}

impl SpriteViewer {
    pub fn new(cpu_type: CpuType, console_type: ConsoleType, config: ViewerConfig) -> Self {
        Self {
            cpu_type,
            console_type,
            config,
            model: SpriteCollectionModel::new(),
            last_frame_number: None,
            listeners: vec![],
            next_listener_id: 0,
        }
    }

    pub fn cpu_type(&self) -> CpuType {
        self.cpu_type
    }

    pub fn console_type(&self) -> ConsoleType {
        self.console_type
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn model(&self) -> &SpriteCollectionModel {
        &self.model
    }

    pub fn selected(&self) -> Option<&SpriteRecord> {
        self.model.selected()
    }

    pub fn last_frame_number(&self) -> Option<u64> {
        self.last_frame_number
    }

    /// Records shown in the sprite list
    pub fn listed_records(&self) -> impl Iterator<Item = &SpriteRecord> {
        let show_hidden = self.config.show_hidden_sprites;

        self.model
            .iter()
            .filter(move |record| show_hidden || record.visible())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ViewerEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);

        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));

        id
    }

    /// Returns `false` if there is no such listener
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let count = self.listeners.len();

        self.listeners.retain(|(listener_id, _)| *listener_id != id);

        self.listeners.len() != count
    }

    pub fn refresh<'a>(
        &mut self,
        snapshots: impl IntoIterator<Item = RawSpriteSnapshot<'a>>,
    ) -> eyre::Result<()> {
        self.apply_refresh(None, snapshots)
    }

    /// Refreshes from a whole frame.
    ///
    /// Frames older than the last applied one are ignored and `Ok(false)` is returned.
    pub fn refresh_frame(&mut self, frame: &SpriteFrame) -> eyre::Result<bool> {
        let frame_number = frame.frame_number();

        if let Some(last) = self.last_frame_number {
            if frame_number < last {
                warn!("Ignoring sprite frame {frame_number}, already showing frame {last}");
                return Ok(false);
            }
        }

        self.apply_refresh(Some(frame_number), frame.snapshots())?;
        self.last_frame_number = Some(frame_number);

        Ok(true)
    }

    fn apply_refresh<'a>(
        &mut self,
        frame_number: Option<u64>,
        snapshots: impl IntoIterator<Item = RawSpriteSnapshot<'a>>,
    ) -> eyre::Result<()> {
        let previous = self.model.selected().cloned();

        self.model
            .refresh(snapshots)
            .map_err(|op| eyre!("Cannot refresh sprites: {}", op))?;

        let count = self.model.len();

        if count > self.console_type.max_sprite_count() {
            warn!(
                "{count} sprites in one refresh, {:?} only has {}",
                self.console_type,
                self.console_type.max_sprite_count()
            );
        }

        if !self.config.keep_selection_on_refresh {
            self.model.clear_selection();
        }

        let current = self.model.selected_index();
        let fields = match (&previous, self.model.selected()) {
            (Some(previous), Some(current)) => previous.changed_fields(current),
            _ => vec![],
        };
        let previous = previous.as_ref().map(SpriteRecord::index);

        self.emit(ViewerEvent::Refreshed {
            frame_number,
            count,
        });

        if previous != current {
            self.emit(ViewerEvent::SelectionChanged { previous, current });
        } else if let (Some(index), false) = (current, fields.is_empty()) {
            self.emit(ViewerEvent::SelectedSpriteUpdated { index, fields });
        }

        Ok(())
    }

    /// Selects the sprite with `index`, or clears the selection if there is none.
    pub fn select(&mut self, index: u32) -> Option<&SpriteRecord> {
        let previous = self.model.selected_index();
        let current = self.model.select(index).map(SpriteRecord::index);

        if current.is_none() {
            debug!("No sprite {index} to select");
        }

        if previous != current {
            self.emit(ViewerEvent::SelectionChanged { previous, current });
        }

        self.model.selected()
    }

    pub fn clear_selection(&mut self) {
        let previous = self.model.selected_index();

        self.model.clear_selection();

        if previous.is_some() {
            self.emit(ViewerEvent::SelectionChanged {
                previous,
                current: None,
            });
        }
    }

    fn emit(&mut self, event: ViewerEvent) {
        self.listeners
            .iter_mut()
            .for_each(|(_, listener)| listener(&event));
    }

    fn export_folder(&self) -> eyre::Result<&PathBuf> {
        self.config
            .export_folder
            .as_ref()
            .ok_or_else(|| eyre!("No export folder is configured"))
    }

    /// Exports the selected sprite into the configured export folder
    pub fn export_selected(&self) -> eyre::Result<Option<PathBuf>> {
        let Some(record) = self.model.selected() else {
            return Err(eyre!("No sprite is selected"));
        };

        let folder = self.export_folder()?;

        std::fs::create_dir_all(folder)?;

        export_sprite(record, folder)
    }

    /// Exports every sprite of the current frame into the configured export folder
    pub fn export_all(&self) -> eyre::Result<Vec<PathBuf>> {
        export_sprites(self.model.records(), self.export_folder()?)
    }

    /// Returns the sprite list as text
    pub fn dump_info(&self) -> String {
        let mut res = String::new();

        res += format!("CPU: {:?}\n", self.cpu_type).as_str();
        res += format!("Number of sprites: {}\n\n", self.model.len()).as_str();

        let selected = self.model.selected_index();

        self.listed_records().for_each(|record| {
            let marker = if selected == Some(record.index()) {
                '>'
            } else {
                ' '
            };

            res += format!(
                "{marker}{:<4}: {:>4},{:<4} {:<5} tile {:<4} pal {:<2} prio {} {:<3}{}\n",
                record.index(),
                record.x(),
                record.y(),
                record.size(),
                record.tile_index(),
                record.palette(),
                record.priority(),
                record.flags(),
                if record.visible() { "" } else { " hidden" }
            )
            .as_str();
        });

        res
    }
}
