pub mod clipboard;
pub mod identity;
pub mod storage;

pub use clipboard::copy_text;
pub use identity::LocalIdentityProvider;
pub use storage::{now_ms, LocalPaletteStore};
