//! Core record types returned by split views.

use crate::array::SCENE_SUFFIX;
use crate::split::Split;
use glam::Vec3;
use serde::Serialize;
use std::path::PathBuf;

/// Loaded payload of one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRecord {
    /// Point coordinates in single precision.
    pub point: Vec<Vec3>,
    /// Per-point label ids, shifted by +1 from the stored ids.
    pub label: Vec<i32>,
    /// Auxiliary per-point features. Bridge scenes carry none.
    pub feat: Option<Vec<f32>>,
}

impl SceneRecord {
    pub fn len(&self) -> usize {
        self.point.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Axis-aligned bounds of the points, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        if self.point.is_empty() {
            return None;
        }

        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for pos in &self.point {
            min = min.min(*pos);
            max = max.max(*pos);
        }
        Some((min, max))
    }

    /// Count of points per label id in `0..num_labels`.
    ///
    /// Ids outside that range are not counted.
    pub fn label_histogram(&self, num_labels: usize) -> Vec<usize> {
        let mut counts = vec![0; num_labels];
        for &label in &self.label {
            if let Some(slot) = usize::try_from(label).ok().and_then(|i| counts.get_mut(i)) {
                *slot += 1;
            }
        }
        counts
    }
}

/// Metadata identifying a scene within a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneAttr {
    /// Position of the scene within its split.
    pub index: usize,
    /// File name of the scene, minus any `.txt` token.
    pub name: String,
    pub path: PathBuf,
    pub split: Split,
}

impl SceneAttr {
    /// Name without its trailing `.npy`, used to key stored results.
    pub fn stem(&self) -> &str {
        self.name
            .strip_suffix(SCENE_SUFFIX)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(&self.name)
    }
}
