use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::TypeTag;

/// A single schema change between two documents.
///
/// Identity is the path: a comparison yields at most one change per path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// A field present in the old document is gone from the new one.
    Removed { path: String, old: TypeTag },
    /// A field absent from the old document appears in the new one.
    Added { path: String, new: TypeTag },
    /// A field present in both documents changed its structural type.
    TypeChanged {
        path: String,
        old: TypeTag,
        new: TypeTag,
    },
}

impl Change {
    /// The path this change is anchored at.
    pub fn path(&self) -> &str {
        match self {
            Self::Removed { path, .. } | Self::Added { path, .. } | Self::TypeChanged { path, .. } => path,
        }
    }

    /// Removals and type changes can break consumers of the old schema;
    /// additions cannot.
    pub fn is_risky(&self) -> bool {
        !matches!(self, Self::Added { .. })
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed { path, old } => write!(f, "- {path} ({old})"),
            Self::Added { path, new } => write!(f, "+ {path} ({new})"),
            Self::TypeChanged { path, old, new } => write!(f, "~ {path} ({old} -> {new})"),
        }
    }
}
