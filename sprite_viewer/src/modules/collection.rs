use log::{debug, warn};
use sprite::{error::SpriteError, RawSpriteSnapshot, SpriteRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Empty,
    Populated,
}

/// Sprites of one frame in backend order, plus the one selected for the detail view.
#[derive(Debug, Default, Clone)]
pub struct SpriteCollectionModel {
    records: Vec<SpriteRecord>,
    // position in `records`, not the sprite index
    selected: Option<usize>,
}

impl SpriteCollectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every record with the converted `snapshots`.
    ///
    /// The selection follows the selected sprite index into the new list, or is cleared when that index is gone.
    /// If any snapshot fails to convert, nothing changes.
    pub fn refresh<'a>(
        &mut self,
        snapshots: impl IntoIterator<Item = RawSpriteSnapshot<'a>>,
    ) -> Result<(), SpriteError> {
        let records = match snapshots
            .into_iter()
            .map(SpriteRecord::from_raw)
            .collect::<Result<Vec<SpriteRecord>, SpriteError>>()
        {
            Ok(records) => records,
            Err(err) => {
                warn!("Discarding sprite batch: {err}");
                return Err(err);
            }
        };

        let previous = self.selected_index();

        self.records = records;
        self.selected = previous.and_then(|index| self.position_of(index));

        debug!(
            "Refreshed {} sprites, selection {:?} -> {:?}",
            self.records.len(),
            previous,
            self.selected_index()
        );

        Ok(())
    }

    /// Selects the sprite with `index`. Unknown indices clear the selection.
    pub fn select(&mut self, index: u32) -> Option<&SpriteRecord> {
        self.selected = self.position_of(index);

        self.selected()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SpriteRecord> {
        self.selected.and_then(|position| self.records.get(position))
    }

    /// Sprite index of the selected record
    pub fn selected_index(&self) -> Option<u32> {
        self.selected().map(SpriteRecord::index)
    }

    /// Record by sprite index
    pub fn get(&self, index: u32) -> Option<&SpriteRecord> {
        self.position_of(index)
            .and_then(|position| self.records.get(position))
    }

    pub fn records(&self) -> &[SpriteRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpriteRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn state(&self) -> ModelState {
        if self.records.is_empty() {
            ModelState::Empty
        } else {
            ModelState::Populated
        }
    }

    fn position_of(&self, index: u32) -> Option<usize> {
        self.records.iter().position(|record| record.index() == index)
    }
}

impl<'a> IntoIterator for &'a SpriteCollectionModel {
    type Item = &'a SpriteRecord;
    type IntoIter = std::slice::Iter<'a, SpriteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
