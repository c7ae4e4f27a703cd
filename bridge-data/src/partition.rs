//! Scene discovery and the three-way split partition.
//!
//! Scenes are assigned by filename fragments: a scene whose path contains any
//! validation fragment is a validation scene, otherwise one containing any test
//! fragment is a test scene, and everything else is training data. Validation is
//! checked first, so a path matching fragments of both lists lands in validation.
//! Callers should keep the two fragment lists disjoint.

use crate::array::SCENE_SUFFIX;
use crate::split::Split;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// List the scene arrays stored directly under `dir`.
///
/// A missing or unreadable directory yields no scenes. Entries are returned in
/// directory order.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn discover_scene_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list dataset directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == SCENE_SUFFIX))
        .collect();

    if files.is_empty() {
        warn!("No .{} scenes found in {}", SCENE_SUFFIX, dir.display());
    } else {
        info!("Discovered {} scenes in {}", files.len(), dir.display());
    }
    files
}

/// Disjoint, exhaustive partition of scene files into training, validation and
/// test subsets, each ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitAssignment {
    train: Vec<PathBuf>,
    validation: Vec<PathBuf>,
    test: Vec<PathBuf>,
}

impl SplitAssignment {
    /// Assign every file to exactly one subset.
    pub fn partition<S: AsRef<str>>(
        files: &[PathBuf],
        val_fragments: &[S],
        test_fragments: &[S],
    ) -> Self {
        let mut assignment = Self::default();

        for file in files {
            let path = file.to_string_lossy();
            let matches = |fragments: &[S]| fragments.iter().any(|f| path.contains(f.as_ref()));

            let subset = if matches(val_fragments) {
                &mut assignment.validation
            } else if matches(test_fragments) {
                &mut assignment.test
            } else {
                &mut assignment.train
            };
            subset.push(file.clone());
        }

        for subset in [
            &mut assignment.train,
            &mut assignment.validation,
            &mut assignment.test,
        ] {
            subset.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        }

        debug!(
            "Partitioned {} scenes: {} training, {} validation, {} test",
            files.len(),
            assignment.train.len(),
            assignment.validation.len(),
            assignment.test.len()
        );
        assignment
    }

    pub fn train(&self) -> &[PathBuf] {
        &self.train
    }

    pub fn validation(&self) -> &[PathBuf] {
        &self.validation
    }

    pub fn test(&self) -> &[PathBuf] {
        &self.test
    }

    /// Validation, then training, then test scenes.
    pub fn all(&self) -> Vec<&Path> {
        self.validation
            .iter()
            .chain(&self.train)
            .chain(&self.test)
            .map(PathBuf::as_path)
            .collect()
    }

    /// Ordered scene paths of one split.
    pub fn paths(&self, split: Split) -> Vec<&Path> {
        let subset = match split {
            Split::Train => &self.train,
            Split::Validation => &self.validation,
            Split::Test => &self.test,
            Split::All => return self.all(),
        };
        subset.iter().map(PathBuf::as_path).collect()
    }

    /// Total number of scenes across all subsets.
    pub fn len(&self) -> usize {
        self.train.len() + self.validation.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from(format!("/data/{n}"))).collect()
    }

    fn names(list: &[PathBuf]) -> Vec<String> {
        list.iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_fragment_assignment() {
        let files = paths(&["b_20.npy", "b_11.npy", "b_10.npy"]);
        let assignment = SplitAssignment::partition(&files, &["b_10"], &["b_20"]);

        assert_eq!(names(assignment.validation()), vec!["b_10.npy"]);
        assert_eq!(names(assignment.test()), vec!["b_20.npy"]);
        assert_eq!(names(assignment.train()), vec!["b_11.npy"]);
    }

    #[test]
    fn test_subsets_are_sorted() {
        let files = paths(&["c.npy", "a.npy", "b_10_2.npy", "b.npy", "b_10_1.npy"]);
        let assignment = SplitAssignment::partition(&files, &["b_10"], &[] as &[&str]);

        assert_eq!(names(assignment.train()), vec!["a.npy", "b.npy", "c.npy"]);
        assert_eq!(names(assignment.validation()), vec!["b_10_1.npy", "b_10_2.npy"]);
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let files = paths(&[
            "b_10.npy", "b_11.npy", "b_12.npy", "b_20.npy", "b_21.npy", "b_30.npy", "x.npy",
        ]);
        let cases: Vec<(Vec<&str>, Vec<&str>)> = vec![
            (vec![], vec![]),
            (vec!["b_1"], vec!["b_2"]),
            (vec!["b_10", "b_30"], vec!["b_2", "x"]),
            (vec!["b_1"], vec!["b_1"]),
            (vec!["zzz"], vec!["npy"]),
        ];

        for (val, test) in cases {
            let assignment = SplitAssignment::partition(&files, &val, &test);
            assert_eq!(assignment.len(), files.len());

            let train: HashSet<_> = assignment.train().iter().collect();
            let validation: HashSet<_> = assignment.validation().iter().collect();
            let test_set: HashSet<_> = assignment.test().iter().collect();
            assert!(train.is_disjoint(&validation));
            assert!(train.is_disjoint(&test_set));
            assert!(validation.is_disjoint(&test_set));

            let union: HashSet<_> = train.union(&validation).chain(test_set.iter()).copied().collect();
            let pool: HashSet<_> = files.iter().collect();
            assert_eq!(union, pool);
        }
    }

    #[test]
    fn test_validation_wins_overlapping_fragments() {
        let files = paths(&["b_10.npy"]);
        let assignment = SplitAssignment::partition(&files, &["b_1"], &["b_10"]);
        assert_eq!(assignment.validation().len(), 1);
        assert!(assignment.test().is_empty());
        assert!(assignment.train().is_empty());
    }

    #[test]
    fn test_all_concatenates_validation_train_test() {
        let files = paths(&["t.npy", "a.npy", "v.npy", "b.npy"]);
        let assignment = SplitAssignment::partition(&files, &["v"], &["t.npy"]);

        let all: Vec<_> = assignment
            .all()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(all, vec!["v.npy", "a.npy", "b.npy", "t.npy"]);
        assert_eq!(assignment.paths(Split::All), assignment.all());
    }

    #[test]
    fn test_partition_is_deterministic_under_input_order() {
        let files = paths(&["b_11.npy", "b_10.npy", "b_12.npy", "b_20.npy"]);
        let mut reversed = files.clone();
        reversed.reverse();

        let a = SplitAssignment::partition(&files, &["b_10"], &["b_20"]);
        let b = SplitAssignment::partition(&reversed, &["b_10"], &["b_20"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_discover_filters_suffix_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b_10.npy"), b"").unwrap();
        std::fs::write(dir.path().join("b_11.npy"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        std::fs::write(dir.path().join("b_12.npz"), b"").unwrap();
        std::fs::create_dir(dir.path().join("nested.npy")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("b_13.npy"), b"").unwrap();

        let mut found = discover_scene_files(dir.path());
        found.sort();
        assert_eq!(names(&found), vec!["b_10.npy", "b_11.npy"]);
    }

    #[test]
    fn test_discover_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_scene_files(&dir.path().join("absent")).is_empty());
    }
}
