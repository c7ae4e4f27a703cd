//! Fixed semantic label table for bridge scenes.

use std::collections::BTreeMap;

/// Mapping from integer label id to semantic name.
///
/// Ids are contiguous from zero and id 0 is always `unlabeled`, the only label
/// flagged as ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSchema {
    names: &'static [&'static str],
    ignored: &'static [i32],
}

impl LabelSchema {
    /// Label table of the bridge LiDAR dataset.
    pub const BRIDGE: LabelSchema = LabelSchema {
        names: &["unlabeled", "ground", "deck", "pier"],
        ignored: &[0],
    };

    /// Label id to name, ordered by id.
    pub fn label_to_names(&self) -> BTreeMap<i32, &'static str> {
        self.names
            .iter()
            .enumerate()
            .map(|(id, name)| (id as i32, *name))
            .collect()
    }

    /// Name of a label id, if the id is part of the table.
    pub fn name_of(&self, id: i32) -> Option<&'static str> {
        usize::try_from(id).ok().and_then(|i| self.names.get(i).copied())
    }

    pub fn num_classes(&self) -> usize {
        self.names.len()
    }

    /// Sorted label ids.
    pub fn label_values(&self) -> Vec<i32> {
        (0..self.names.len() as i32).collect()
    }

    /// Label id to dense class index.
    pub fn label_to_idx(&self) -> BTreeMap<i32, usize> {
        self.label_values()
            .into_iter()
            .enumerate()
            .map(|(idx, label)| (label, idx))
            .collect()
    }

    pub fn ignored_labels(&self) -> &'static [i32] {
        self.ignored
    }

    pub fn is_ignored(&self, id: i32) -> bool {
        self.ignored.contains(&id)
    }
}

impl Default for LabelSchema {
    fn default() -> Self {
        Self::BRIDGE
    }
}
