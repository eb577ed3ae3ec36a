//! Guards around the store calls made from UI event handlers.
//!
//! Every operation checks for a signed-in identity first, so the store is
//! never called without an owner.

use crate::config::PaletteLimits;
use crate::error::SessionError;
use crate::identity::Identity;
use crate::palette::Palette;
use crate::random::RandomSource;
use crate::saved::SavedPalette;
use crate::store::PaletteStore;

fn require(identity: Option<&Identity>) -> Result<&Identity, SessionError> {
    identity.ok_or(SessionError::NotSignedIn)
}

/// Save the current palette under `name` and return the refreshed listing.
pub fn save_current<S: PaletteStore + ?Sized>(
    store: &S,
    identity: Option<&Identity>,
    name: &str,
    palette: &Palette,
) -> Result<Vec<SavedPalette>, SessionError> {
    let identity = require(identity)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(SessionError::EmptyName);
    }
    store.save(&identity.uid, name, &palette.hexes())?;
    Ok(store.list(&identity.uid)?)
}

/// Delete one saved palette and return the refreshed listing.
pub fn delete_saved<S: PaletteStore + ?Sized>(
    store: &S,
    identity: Option<&Identity>,
    palette_id: &str,
) -> Result<Vec<SavedPalette>, SessionError> {
    let identity = require(identity)?;
    store.delete(&identity.uid, palette_id)?;
    Ok(store.list(&identity.uid)?)
}

/// The identity's saved palettes; empty when signed out.
pub fn refresh<S: PaletteStore + ?Sized>(
    store: &S,
    identity: Option<&Identity>,
) -> Result<Vec<SavedPalette>, SessionError> {
    match identity {
        Some(identity) => Ok(store.list(&identity.uid)?),
        None => Ok(Vec::new()),
    }
}

/// Turn a saved palette back into an unlocked in-memory palette.
pub fn load_saved(
    saved: &SavedPalette,
    limits: &PaletteLimits,
    rng: &mut impl RandomSource,
) -> Palette {
    Palette::from_saved_colors(&saved.colors, limits, rng)
}
