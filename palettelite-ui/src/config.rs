//! Application configuration.
//!
//! Palette size policy comes from the core crate; everything here is
//! presentation and storage wiring.

use palettelite_core::{PaletteLimits, DEFAULT_LIMITS};

/// UI-level settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    /// Human-readable name shown in the top bar and the document title
    pub display_name: &'static str,
    /// Palette size policy
    pub limits: PaletteLimits,
    /// How long a toast stays on screen
    pub toast_duration_ms: u64,
    /// Swatch luminance above which labels switch to dark text
    pub text_contrast_threshold: f64,
    /// Colors shown in a saved-palette preview strip
    pub saved_preview_colors: usize,
    /// localStorage key holding every saved palette
    pub palettes_storage_key: &'static str,
    /// localStorage key holding the signed-in identity
    pub identity_storage_key: &'static str,
    /// localStorage key holding the display name to uid map
    pub accounts_storage_key: &'static str,
    /// Schema version of the stored documents
    pub storage_version: u32,
}

/// The app's configuration.
pub static APP_CONFIG: AppConfig = AppConfig {
    display_name: "Palette Lite",
    limits: DEFAULT_LIMITS,
    toast_duration_ms: 1400,
    text_contrast_threshold: 0.62,
    saved_preview_colors: 5,
    palettes_storage_key: "palettelite_palettes",
    identity_storage_key: "palettelite_identity",
    accounts_storage_key: "palettelite_accounts",
    storage_version: 1,
};
