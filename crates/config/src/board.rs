//! Board behaviour configuration.

use serde::{Deserialize, Serialize};

/// What a completed drag changes.
///
/// # Examples
///
/// ```
/// use tasklane_config::DropPolicy;
///
/// assert_eq!(DropPolicy::default(), DropPolicy::WriteThrough);
/// assert!(DropPolicy::WriteThrough.commits_to_store());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPolicy {
    /// Update the on-screen columns and commit the arrangement to the store,
    /// so it survives later store changes.
    #[default]
    WriteThrough,
    /// Update only the on-screen columns. The next store change (a reload or
    /// a status toggle) replaces them and the arrangement is lost.
    MirrorOnly,
}

impl DropPolicy {
    /// Returns `true` if drops are committed to the task store.
    #[must_use]
    pub const fn commits_to_store(self) -> bool {
        matches!(self, Self::WriteThrough)
    }

    /// Returns a short label for the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WriteThrough => "write-through",
            Self::MirrorOnly => "mirror only",
        }
    }
}

/// Board configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// What a completed drag changes.
    #[serde(default)]
    pub drop_policy: DropPolicy,
}
