// palettelite-ui/src/services/storage.rs
//!
//! Browser persistence for saved palettes.
//! All owners share one versioned JSON document in localStorage; the
//! document itself enforces ordering, ids and canonical colors.

use crate::config::APP_CONFIG;
use palettelite_core::{PaletteStore, SavedPalette, StoreDocument, StoreError};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

thread_local! {
    /// localStorage handle, resolved once. None = no window or storage disabled.
    static LOCAL_STORAGE: OnceCell<Option<web_sys::Storage>> = const { OnceCell::new() };
}

/// The page's localStorage, if reachable.
pub fn local_storage() -> Option<web_sys::Storage> {
    LOCAL_STORAGE.with(|cell| cell.get_or_init(resolve_local_storage).clone())
}

fn resolve_local_storage() -> Option<web_sys::Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        log::info!("localStorage available");
        Some(storage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Milliseconds since the epoch.
pub fn now_ms() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Stored envelope around the palette document.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedPalettes {
    /// Schema version for future migrations
    version: u32,
    document: StoreDocument,
}

impl PersistedPalettes {
    fn new(document: StoreDocument) -> Self {
        Self {
            version: APP_CONFIG.storage_version,
            document,
        }
    }
}

/// Decode a stored envelope. Unknown versions and corrupt JSON are errors so
/// callers never write an empty document over data they could not read.
fn decode_document(json: &str) -> Result<StoreDocument, StoreError> {
    match serde_json::from_str::<PersistedPalettes>(json) {
        Ok(stored) if stored.version == APP_CONFIG.storage_version => Ok(stored.document),
        Ok(stored) => {
            log::warn!(
                "Stored palettes have version {} (current: {})",
                stored.version,
                APP_CONFIG.storage_version
            );
            Err(StoreError::Unreadable(format!(
                "unsupported version {}",
                stored.version
            )))
        }
        Err(e) => {
            log::warn!("Failed to parse stored palettes: {}", e);
            Err(StoreError::Unreadable(e.to_string()))
        }
    }
}

fn encode_document(document: &StoreDocument) -> Result<String, StoreError> {
    serde_json::to_string(&PersistedPalettes::new(document.clone()))
        .map_err(|e| StoreError::Backend(format!("serialize: {e}")))
}

/// [`PaletteStore`] backed by localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPaletteStore;

impl LocalPaletteStore {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        local_storage().ok_or_else(|| StoreError::Unavailable("localStorage is not reachable".into()))
    }

    fn load(&self, storage: &web_sys::Storage) -> Result<StoreDocument, StoreError> {
        let json = storage
            .get_item(APP_CONFIG.palettes_storage_key)
            .map_err(|e| StoreError::Backend(format!("read: {e:?}")))?;
        match json {
            Some(json) => decode_document(&json),
            None => Ok(StoreDocument::default()),
        }
    }

    fn write(&self, storage: &web_sys::Storage, document: &StoreDocument) -> Result<(), StoreError> {
        let json = encode_document(document)?;
        storage
            .set_item(APP_CONFIG.palettes_storage_key, &json)
            .map_err(|e| {
                log::warn!("Failed to write palettes to localStorage: {:?}", e);
                StoreError::Backend("could not write to localStorage (quota exceeded?)".into())
            })
    }
}

impl PaletteStore for LocalPaletteStore {
    fn save(&self, owner_id: &str, name: &str, colors: &[String]) -> Result<SavedPalette, StoreError> {
        let storage = self.storage()?;
        let mut document = self.load(&storage)?;
        let saved = document.insert(owner_id, name, colors, now_ms())?;
        self.write(&storage, &document)?;
        log::info!("Saved palette {} ({} colors)", saved.id, saved.colors.len());
        Ok(saved)
    }

    fn list(&self, owner_id: &str) -> Result<Vec<SavedPalette>, StoreError> {
        let storage = self.storage()?;
        Ok(self.load(&storage)?.list(owner_id))
    }

    fn delete(&self, owner_id: &str, palette_id: &str) -> Result<(), StoreError> {
        let storage = self.storage()?;
        let mut document = self.load(&storage)?;
        if document.remove(owner_id, palette_id) {
            self.write(&storage, &document)?;
            log::info!("Deleted palette {}", palette_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_roundtrip() {
        let mut document = StoreDocument::new();
        document
            .insert("u1", "Dawn", &["#FFAA00".to_string()], 10)
            .unwrap();
        let json = encode_document(&document).unwrap();
        assert_eq!(decode_document(&json), Ok(document));
    }

    #[test]
    fn wrong_version_is_unreadable() {
        let json = format!(
            r#"{{"version":{},"document":{{"owners":{{}},"next_id":0,"last_created_at":0}}}}"#,
            APP_CONFIG.storage_version + 1
        );
        assert_eq!(
            decode_document(&json),
            Err(StoreError::Unreadable(format!(
                "unsupported version {}",
                APP_CONFIG.storage_version + 1
            )))
        );
    }

    #[test]
    fn corrupt_json_is_unreadable() {
        assert!(matches!(
            decode_document("{not json"),
            Err(StoreError::Unreadable(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn store_is_unavailable_outside_browser() {
        let store = LocalPaletteStore;
        assert!(matches!(store.list("u1"), Err(StoreError::Unavailable(_))));
        assert!(matches!(
            store.save("u1", "x", &[]),
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(store.delete("u1", "p1"), Err(StoreError::Unavailable(_))));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn save_list_delete_in_local_storage() {
        let storage = local_storage().expect("browser test needs localStorage");
        let _ = storage.remove_item(APP_CONFIG.palettes_storage_key);

        let store = LocalPaletteStore;
        let first = store
            .save("owner", "First", &["#010101".to_string()])
            .unwrap();
        let second = store
            .save("owner", "Second", &["#020202".to_string()])
            .unwrap();

        let listed = store.list("owner").unwrap();
        assert_eq!(listed, vec![second.clone(), first.clone()]);

        store.delete("owner", &second.id).unwrap();
        assert_eq!(store.list("owner").unwrap(), vec![first]);

        let _ = storage.remove_item(APP_CONFIG.palettes_storage_key);
    }

    #[wasm_bindgen_test]
    fn unreadable_document_is_left_untouched() {
        let storage = local_storage().expect("browser test needs localStorage");
        storage
            .set_item(APP_CONFIG.palettes_storage_key, "{not json")
            .unwrap();

        let store = LocalPaletteStore;
        assert!(matches!(store.list("owner"), Err(StoreError::Unreadable(_))));
        assert!(matches!(
            store.save("owner", "New", &["#010101".to_string()]),
            Err(StoreError::Unreadable(_))
        ));
        assert!(matches!(store.delete("owner", "p1"), Err(StoreError::Unreadable(_))));
        assert_eq!(
            storage.get_item(APP_CONFIG.palettes_storage_key).unwrap(),
            Some("{not json".to_string())
        );

        let _ = storage.remove_item(APP_CONFIG.palettes_storage_key);
    }
}
