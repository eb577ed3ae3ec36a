mod identity;
mod keyboard;
mod scroll_lock;
mod toast;

pub use identity::use_identity;
pub use keyboard::{shortcut_for, use_shortcuts, Shortcut};
pub use scroll_lock::use_body_scroll_lock;
pub use toast::{use_toast, Toaster};
