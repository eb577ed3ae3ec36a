//! Per-identity palette persistence.
//!
//! [`PaletteStore`] is the contract the UI talks to. [`StoreDocument`] holds
//! the shared semantics (id assignment, ordering, canonical colors) so every
//! backend behaves the same; [`MemoryPaletteStore`] wraps it in memory.

use crate::color_space::normalize_hex;
use crate::error::StoreError;
use crate::saved::SavedPalette;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Save, list and delete palettes owned by one identity.
pub trait PaletteStore {
    /// Persist `colors` under `name`. The store assigns id and timestamp.
    fn save(&self, owner_id: &str, name: &str, colors: &[String]) -> Result<SavedPalette, StoreError>;

    /// Everything `owner_id` saved, newest first.
    fn list(&self, owner_id: &str) -> Result<Vec<SavedPalette>, StoreError>;

    /// Remove one palette. Unknown ids are not an error.
    fn delete(&self, owner_id: &str, palette_id: &str) -> Result<(), StoreError>;
}

/// All saved palettes keyed by owner, plus id/timestamp counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    owners: BTreeMap<String, Vec<SavedPalette>>,
    next_id: u64,
    last_created_at: i64,
}

impl StoreDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a palette. `now` is the caller's clock in
    /// milliseconds; timestamps are forced strictly increasing.
    pub fn insert(
        &mut self,
        owner_id: &str,
        name: &str,
        colors: &[String],
        now: i64,
    ) -> Result<SavedPalette, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let colors = colors
            .iter()
            .map(|c| normalize_hex(c))
            .collect::<Result<Vec<_>, _>>()?;

        self.next_id += 1;
        self.last_created_at = now.max(self.last_created_at + 1);

        let saved = SavedPalette {
            id: format!("p{}", self.next_id),
            name: name.to_string(),
            colors,
            created_at: self.last_created_at,
        };
        self.owners
            .entry(owner_id.to_string())
            .or_default()
            .push(saved.clone());
        Ok(saved)
    }

    /// Owner's palettes sorted by creation time, newest first.
    pub fn list(&self, owner_id: &str) -> Vec<SavedPalette> {
        let mut list: Vec<SavedPalette> = self
            .owners
            .get(owner_id)
            .map(|v| v.iter().rev().cloned().collect())
            .unwrap_or_default();
        // Stable: ties keep newest-inserted first
        list.sort_by_key(|p| Reverse(p.created_at));
        list
    }

    /// Remove a palette; returns whether anything was removed.
    pub fn remove(&mut self, owner_id: &str, palette_id: &str) -> bool {
        let Some(palettes) = self.owners.get_mut(owner_id) else {
            return false;
        };
        let before = palettes.len();
        palettes.retain(|p| p.id != palette_id);
        let removed = palettes.len() != before;
        if palettes.is_empty() {
            self.owners.remove(owner_id);
        }
        removed
    }

    /// Total palettes across all owners.
    pub fn total(&self) -> usize {
        self.owners.values().map(Vec::len).sum()
    }
}

/// In-memory store with a logical clock.
#[derive(Debug, Default)]
pub struct MemoryPaletteStore {
    document: RefCell<StoreDocument>,
    clock: RefCell<i64>,
}

impl MemoryPaletteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&self) -> i64 {
        let mut clock = self.clock.borrow_mut();
        *clock += 1;
        *clock
    }
}

impl PaletteStore for MemoryPaletteStore {
    fn save(&self, owner_id: &str, name: &str, colors: &[String]) -> Result<SavedPalette, StoreError> {
        let now = self.tick();
        let saved = self.document.borrow_mut().insert(owner_id, name, colors, now)?;
        log::debug!("Saved palette {} for {}", saved.id, owner_id);
        Ok(saved)
    }

    fn list(&self, owner_id: &str) -> Result<Vec<SavedPalette>, StoreError> {
        Ok(self.document.borrow().list(owner_id))
    }

    fn delete(&self, owner_id: &str, palette_id: &str) -> Result<(), StoreError> {
        if !self.document.borrow_mut().remove(owner_id, palette_id) {
            log::debug!("Delete of unknown palette {} for {}", palette_id, owner_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    fn colors(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn insert_assigns_ids_and_increasing_timestamps() {
        let mut doc = StoreDocument::new();
        let a = doc.insert("u1", "A", &colors(&["#000000"]), 100).unwrap();
        let b = doc.insert("u1", "B", &colors(&["#000000"]), 100).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, 100);
        assert_eq!(b.created_at, 101);
    }

    #[test]
    fn insert_trims_name_and_canonicalizes_colors() {
        let mut doc = StoreDocument::new();
        let saved = doc.insert("u1", "  Dusk ", &colors(&["abcdef", "#0f0f0f"]), 1).unwrap();
        assert_eq!(saved.name, "Dusk");
        assert_eq!(saved.colors, colors(&["#ABCDEF", "#0F0F0F"]));
    }

    #[test]
    fn insert_rejects_blank_name_and_bad_colors() {
        let mut doc = StoreDocument::new();
        assert_eq!(doc.insert("u1", "   ", &[], 1), Err(StoreError::EmptyName));
        assert_eq!(
            doc.insert("u1", "X", &colors(&["#12"]), 1),
            Err(StoreError::InvalidColor(ColorError::InvalidHex("#12".to_string())))
        );
        assert_eq!(doc.total(), 0);
    }

    #[test]
    fn list_is_newest_first_and_scoped_to_owner() {
        let mut doc = StoreDocument::new();
        doc.insert("u1", "first", &[], 10).unwrap();
        doc.insert("u2", "other", &[], 20).unwrap();
        doc.insert("u1", "second", &[], 30).unwrap();

        let names: Vec<_> = doc.list("u1").into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["second", "first"]);
        assert_eq!(doc.list("u2").len(), 1);
        assert!(doc.list("nobody").is_empty());
    }

    #[test]
    fn remove_only_touches_owner() {
        let mut doc = StoreDocument::new();
        let a = doc.insert("u1", "a", &[], 1).unwrap();
        assert!(!doc.remove("u2", &a.id));
        assert!(doc.remove("u1", &a.id));
        assert!(!doc.remove("u1", &a.id));
        assert_eq!(doc.total(), 0);
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryPaletteStore::new();
        let saved = store.save("u1", "Warm", &colors(&["#ff0000"])).unwrap();
        assert_eq!(store.list("u1").unwrap(), vec![saved.clone()]);
        store.delete("u1", &saved.id).unwrap();
        store.delete("u1", "missing").unwrap();
        assert!(store.list("u1").unwrap().is_empty());
    }

    #[test]
    fn document_survives_json() {
        let mut doc = StoreDocument::new();
        doc.insert("u1", "a", &colors(&["#010203"]), 5).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        let back: StoreDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
