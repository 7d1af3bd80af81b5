//! Row layout of the lot

use super::slot::{Slot, SlotCategory, SlotId};
use tracing::debug;

/// Fixed arrangement of slots in rows
///
/// Rows and positions are numbered from 1 in construction order. No slot is
/// added or removed after construction; only occupants change.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rows: Vec<Vec<Slot>>,
}

impl Layout {
    /// Build a layout from a category matrix
    ///
    /// Every input is accepted. Empty rows and an empty matrix simply give
    /// zero capacity.
    pub fn new<R, I>(config: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = SlotCategory>,
    {
        let rows: Vec<Vec<Slot>> = config
            .into_iter()
            .zip(1u32..)
            .map(|(row, row_num)| {
                row.into_iter()
                    .zip(1u32..)
                    .map(|(category, pos)| Slot::new(SlotId::new(row_num, pos), category))
                    .collect()
            })
            .collect();

        debug!(rows = rows.len(), "Built layout");
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// All slots in scan order (row-major, then position)
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.rows.iter().flatten()
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        let (row, pos) = id.indices()?;
        self.rows.get(row)?.get(pos)
    }

    pub(crate) fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot> {
        let (row, pos) = id.indices()?;
        self.rows.get_mut(row)?.get_mut(pos)
    }

    /// Total number of slots
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
