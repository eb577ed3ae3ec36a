//! Browser-local identity provider.
//!
//! Signing in asks for a display name. Each name maps to one uid for good,
//! kept in an account book in localStorage, so a returning user reaches the
//! palettes saved under it. The signed-in record is kept too, so a reload
//! stays signed in.

use super::storage::{local_storage, now_ms};
use crate::config::APP_CONFIG;
use palettelite_core::{
    Identity, IdentityError, IdentityListener, IdentityProvider, Listeners, Subscription,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Build a uid from the current time and a random salt.
fn mint_uid(salt: f64) -> String {
    format!(
        "local-{:x}-{:08x}",
        now_ms(),
        (salt.clamp(0.0, 1.0) * u32::MAX as f64) as u32
    )
}

fn random_salt() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}

/// Ask the user for a display name. None = dismissed or blank.
fn prompt_display_name() -> Result<Option<String>, IdentityError> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()
            .ok_or_else(|| IdentityError::Unavailable("no browser window".into()))?;
        let answer = window
            .prompt_with_message_and_default("Display name", "")
            .map_err(|e| IdentityError::Backend(format!("{e:?}")))?;
        Ok(answer
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(IdentityError::Unavailable("no browser window".into()))
    }
}

/// Display name to uid. Names compare trimmed and case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct AccountBook {
    uids: BTreeMap<String, String>,
}

impl AccountBook {
    fn key(display_name: &str) -> String {
        display_name.trim().to_lowercase()
    }

    /// The uid registered for `display_name`, minting one on first use.
    fn uid_for(&mut self, display_name: &str, mint: impl FnOnce() -> String) -> String {
        self.uids
            .entry(Self::key(display_name))
            .or_insert_with(mint)
            .clone()
    }
}

fn decode_accounts(json: &str) -> Result<AccountBook, IdentityError> {
    serde_json::from_str(json).map_err(|e| {
        log::warn!("Failed to parse account book: {}", e);
        IdentityError::Backend(format!("account book is unreadable: {e}"))
    })
}

/// Resolve `display_name` to its uid, registering it if new.
fn resolve_uid(display_name: &str) -> Result<String, IdentityError> {
    let storage = local_storage()
        .ok_or_else(|| IdentityError::Unavailable("localStorage is not reachable".into()))?;
    let stored = storage
        .get_item(APP_CONFIG.accounts_storage_key)
        .map_err(|e| IdentityError::Backend(format!("{e:?}")))?;
    // An unreadable book is an error, never silently replaced
    let mut book = match stored {
        Some(json) => decode_accounts(&json)?,
        None => AccountBook::default(),
    };

    let before = book.uids.len();
    let uid = book.uid_for(display_name, || mint_uid(random_salt()));
    if book.uids.len() != before {
        let json = serde_json::to_string(&book)
            .map_err(|e| IdentityError::Backend(e.to_string()))?;
        storage
            .set_item(APP_CONFIG.accounts_storage_key, &json)
            .map_err(|e| IdentityError::Backend(format!("{e:?}")))?;
        log::info!("Registered account {}", uid);
    }
    Ok(uid)
}

fn load_identity() -> Option<Identity> {
    let storage = local_storage()?;
    let json = storage.get_item(APP_CONFIG.identity_storage_key).ok()??;
    match serde_json::from_str::<Identity>(&json) {
        Ok(identity) => Some(identity),
        Err(e) => {
            log::warn!("Failed to parse stored identity: {}", e);
            None
        }
    }
}

fn store_identity(identity: Option<&Identity>) -> Result<(), IdentityError> {
    let storage = local_storage()
        .ok_or_else(|| IdentityError::Unavailable("localStorage is not reachable".into()))?;
    let result = match identity {
        Some(identity) => {
            let json = serde_json::to_string(identity)
                .map_err(|e| IdentityError::Backend(e.to_string()))?;
            storage.set_item(APP_CONFIG.identity_storage_key, &json)
        }
        None => storage.remove_item(APP_CONFIG.identity_storage_key),
    };
    result.map_err(|e| IdentityError::Backend(format!("{e:?}")))
}

/// Identity provider living entirely in the browser.
pub struct LocalIdentityProvider {
    current: RefCell<Option<Identity>>,
    listeners: Listeners,
}

impl LocalIdentityProvider {
    /// Restore whoever was signed in last time, if anyone.
    pub fn restore() -> Self {
        let current = load_identity();
        if let Some(identity) = &current {
            log::info!("Restored identity {}", identity.uid);
        }
        Self {
            current: RefCell::new(current),
            listeners: Listeners::new(),
        }
    }

    /// Sign in under `display_name` without prompting.
    pub fn sign_in_as(&self, display_name: &str) -> Result<Identity, IdentityError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(IdentityError::Cancelled);
        }
        let identity = Identity {
            uid: resolve_uid(display_name)?,
            display_name: display_name.to_string(),
        };
        store_identity(Some(&identity))?;
        log::info!("Signed in as {} ({})", identity.display_name, identity.uid);
        self.set_current(Some(identity.clone()));
        Ok(identity)
    }

    fn set_current(&self, identity: Option<Identity>) {
        *self.current.borrow_mut() = identity.clone();
        self.listeners.notify(identity.as_ref());
    }
}

impl IdentityProvider for LocalIdentityProvider {
    fn current(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    fn sign_in(&self) -> Result<Identity, IdentityError> {
        let display_name = prompt_display_name()?.ok_or(IdentityError::Cancelled)?;
        self.sign_in_as(&display_name)
    }

    fn sign_out(&self) -> Result<(), IdentityError> {
        if self.current.borrow().is_none() {
            return Ok(());
        }
        store_identity(None)?;
        log::info!("Signed out");
        self.set_current(None);
        Ok(())
    }

    fn subscribe(&self, listener: IdentityListener) -> Subscription {
        listener(self.current().as_ref());
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.listeners.remove(subscription);
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::services::LocalPaletteStore;
    use palettelite_core::{session, Palette, SequenceSource};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear(storage: &web_sys::Storage) {
        for key in [
            APP_CONFIG.accounts_storage_key,
            APP_CONFIG.identity_storage_key,
            APP_CONFIG.palettes_storage_key,
        ] {
            let _ = storage.remove_item(key);
        }
    }

    #[wasm_bindgen_test]
    fn saved_palettes_survive_sign_out_and_back_in() {
        let storage = local_storage().expect("browser test needs localStorage");
        clear(&storage);

        let provider = LocalIdentityProvider::restore();
        let store = LocalPaletteStore;
        let palette = Palette::generate(3, &mut SequenceSource::new([]));

        let ada = provider.sign_in_as("Ada").unwrap();
        session::save_current(&store, Some(&ada), "Spring", &palette).unwrap();
        provider.sign_out().unwrap();
        assert!(provider.current().is_none());

        let ada_again = provider.sign_in_as("ada").unwrap();
        assert_eq!(ada_again.uid, ada.uid);
        let listing = session::refresh(&store, Some(&ada_again)).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "Spring");

        clear(&storage);
    }
}
