mod confirm_dialog;
mod palette_column;
mod saved_drawer;
mod slot_buttons;
mod toast;
mod top_bar;

pub use confirm_dialog::ConfirmDialog;
pub use palette_column::{PaletteColumn, PaletteColumnProps};
pub use saved_drawer::SavedDrawer;
pub use slot_buttons::SlotButtons;
pub use toast::Toast;
pub use top_bar::TopBar;
