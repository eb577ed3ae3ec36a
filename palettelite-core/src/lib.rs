pub mod color_space;
pub mod config;
pub mod contrast;
pub mod error;
pub mod identity;
pub mod naming;
pub mod palette;
pub mod random;
pub mod saved;
pub mod session;
pub mod store;

pub use color_space::{
    hex_to_rgb, hex_without_hash, hsl_to_hex, hsl_to_rgb, normalize_hex, rgb_to_hex, rgb_to_hsl,
};
pub use config::{PaletteLimits, DEFAULT_LIMITS};
pub use contrast::{luminance, pick_text_color, pick_text_color_with, TextTone};
pub use error::{ColorError, IdentityError, SessionError, StoreError};
pub use identity::{
    Identity, IdentityListener, IdentityProvider, Listeners, MemoryIdentityProvider, Subscription,
};
pub use naming::{guess_color_name, UNKNOWN_COLOR};
pub use palette::{copy_line, GeneratorRanges, Palette, PaletteSlot, SlotId};
pub use random::{RandomSource, SequenceSource};
pub use saved::{filter_saved, SavedPalette};
pub use store::{MemoryPaletteStore, PaletteStore, StoreDocument};
