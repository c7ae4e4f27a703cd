//! Named dataset splits.

use crate::error::DatasetError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A named subset of the dataset's scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    #[serde(rename = "training")]
    Train,
    Validation,
    Test,
    /// Validation, then training, then test scenes.
    All,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "training"),
            Split::Validation => write!(f, "validation"),
            Split::Test => write!(f, "test"),
            Split::All => write!(f, "all"),
        }
    }
}

impl FromStr for Split {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" | "training" => Ok(Split::Train),
            "val" | "validation" => Ok(Split::Validation),
            "test" | "testing" => Ok(Split::Test),
            "all" => Ok(Split::All),
            other => Err(DatasetError::InvalidSplit(other.to_string())),
        }
    }
}

impl Split {
    pub fn all() -> &'static [Split] {
        &[Split::Train, Split::Validation, Split::Test, Split::All]
    }
}
