// palettelite-core/src/saved.rs

use crate::palette::copy_line;
use serde::{Deserialize, Serialize};

/// A palette persisted under one identity. Lock state is not stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    /// Assigned by the store on creation
    pub id: String,
    /// Non-empty user label
    pub name: String,
    /// Canonical `#RRGGBB` strings in display order
    pub colors: Vec<String>,
    /// Store-assigned creation time in milliseconds; listings sort on it, newest first
    pub created_at: i64,
}

impl SavedPalette {
    /// `RRGGBB-RRGGBB-...` without `#`.
    pub fn copy_line(&self) -> String {
        copy_line(self.colors.iter().map(String::as_str))
    }

    /// The first `n` colors, for compact previews.
    pub fn preview(&self, n: usize) -> &[String] {
        &self.colors[..self.colors.len().min(n)]
    }

    /// Case-insensitive substring match on the name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.name.to_lowercase().contains(&query)
    }
}

/// Saved palettes whose name contains `query` (trimmed, case-insensitive).
/// An empty query keeps everything. Order is preserved.
pub fn filter_saved<'a>(saved: &'a [SavedPalette], query: &str) -> Vec<&'a SavedPalette> {
    saved.iter().filter(|p| p.matches(query)).collect()
}
