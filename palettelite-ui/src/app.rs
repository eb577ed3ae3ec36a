// palettelite-ui/src/app.rs
use crate::components::{PaletteColumn, PaletteColumnProps, SavedDrawer, Toast, TopBar};
use crate::config::APP_CONFIG;
use crate::hooks::{use_body_scroll_lock, use_identity, use_shortcuts, use_toast, Shortcut, Toaster};
use crate::services::{copy_text, now_ms, LocalIdentityProvider, LocalPaletteStore};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use palettelite_core::{
    session, IdentityError, IdentityProvider, Palette, SavedPalette, SlotId,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::rc::Rc;

fn rng_seed() -> u64 {
    let salt = (js_sys::Math::random() * u32::MAX as f64) as u64;
    ((now_ms() as u64) << 16) ^ salt
}

/// Copy `text` and report the outcome in a toast.
fn copy_with_toast(toaster: Toaster, text: String, success: String) {
    spawn_local(async move {
        if copy_text(&text).await {
            toaster.show(success);
        } else {
            toaster.show("Copy failed");
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let limits = APP_CONFIG.limits;
    let toaster = use_toast(APP_CONFIG.toast_duration_ms);

    // ========== Palette state ==========

    let mut seeded = SmallRng::seed_from_u64(rng_seed());
    let (palette, set_palette) = create_signal(Palette::generate(limits.default_size, &mut seeded));
    let rng = store_value(seeded);

    let copy_line = Signal::derive(move || palette.with(Palette::copy_line));
    let count = Signal::derive(move || palette.with(Palette::len));
    let can_remove = Signal::derive(move || palette.with(|p| p.len() > limits.min_size));

    // Apply `f` to the current palette with the shared generator.
    let transform = move |f: fn(&Palette, &mut SmallRng) -> Palette| {
        let current = palette.get_untracked();
        if let Some(next) = rng.try_update_value(|rng| f(&current, rng)) {
            set_palette.set(next);
        }
    };

    let on_generate = Callback::new(move |_| {
        transform(|p, rng| p.regenerate_unlocked(rng));
        log::debug!(
            "Regenerated {} unlocked colors",
            palette.with_untracked(|p| p.slots().iter().filter(|s| !s.locked).count())
        );
    });

    let on_add = Callback::new(move |_| {
        if !palette.with_untracked(|p| p.can_add(&limits)) {
            toaster.show(format!("Up to {} colors", limits.max_size));
            return;
        }
        transform(|p, rng| p.with_added_color(rng));
    });

    let on_remove = Callback::new(move |_| {
        set_palette.update(|p| *p = p.without_last_color());
    });

    let on_toggle_lock = Callback::new(move |id: SlotId| {
        set_palette.update(|p| *p = p.toggle_lock(id));
    });

    let on_copy = Callback::new(move |text: String| {
        let success = format!("Copied {text}");
        copy_with_toast(toaster, text, success);
    });

    let on_copy_line = Callback::new(move |_| {
        copy_with_toast(toaster, palette.with_untracked(Palette::copy_line), "Copied palette".into());
    });

    // ========== Identity and saved palettes ==========

    let provider = Rc::new(LocalIdentityProvider::restore());
    let identity = use_identity(Rc::clone(&provider));
    let provider = store_value(provider);

    let store = LocalPaletteStore;
    let (saved, set_saved) = create_signal(Vec::<SavedPalette>::new());
    let (drawer_open, set_drawer_open) = create_signal(false);
    let signed_in = Signal::derive(move || identity.with(Option::is_some));

    let reload_saved = move || {
        match session::refresh(&store, identity.get_untracked().as_ref()) {
            Ok(list) => set_saved.set(list),
            Err(e) => {
                log::warn!("Failed to list saved palettes: {}", e);
                toaster.show(e.to_string());
            }
        }
    };

    // Follow sign-in state
    create_effect(move |_| {
        let signed_in = signed_in.get();
        reload_saved();
        if !signed_in {
            set_drawer_open.set(false);
        }
    });

    let on_sign_in = Callback::new(move |_| {
        match provider.with_value(|p| p.sign_in()) {
            Ok(user) => toaster.show(format!("Signed in as {}", user.display_name)),
            Err(IdentityError::Cancelled) => {}
            Err(e) => {
                log::warn!("Sign-in failed: {}", e);
                toaster.show(e.to_string());
            }
        }
    });

    let on_sign_out = Callback::new(move |_| match provider.with_value(|p| p.sign_out()) {
        Ok(()) => toaster.show("Signed out"),
        Err(e) => {
            log::warn!("Sign-out failed: {}", e);
            toaster.show(e.to_string());
        }
    });

    let on_toggle_drawer = Callback::new(move |_| {
        if !signed_in.get_untracked() {
            toaster.show("Sign in first");
            return;
        }
        if !drawer_open.get_untracked() {
            reload_saved();
        }
        set_drawer_open.update(|open| *open = !*open);
    });

    let on_close_drawer = Callback::new(move |_| set_drawer_open.set(false));

    let on_save = Callback::new(move |name: String| {
        let result = palette.with_untracked(|p| {
            session::save_current(&store, identity.get_untracked().as_ref(), &name, p)
        });
        match result {
            Ok(list) => {
                set_saved.set(list);
                toaster.show("Saved!");
                true
            }
            Err(e) => {
                toaster.show(e.to_string());
                false
            }
        }
    });

    let on_delete = Callback::new(move |palette_id: String| {
        match session::delete_saved(&store, identity.get_untracked().as_ref(), &palette_id) {
            Ok(list) => {
                set_saved.set(list);
                toaster.show("Deleted");
            }
            Err(e) => toaster.show(e.to_string()),
        }
    });

    let on_load = Callback::new(move |saved: SavedPalette| {
        if let Some(next) = rng.try_update_value(|rng| session::load_saved(&saved, &limits, rng)) {
            set_palette.set(next);
        }
        set_drawer_open.set(false);
        log::info!("Loaded palette {}", saved.id);
        toaster.show(format!("Loaded {}", saved.name));
    });

    let on_copy_saved = Callback::new(move |line: String| {
        copy_with_toast(toaster, line, "Copied saved palette".into());
    });

    // ========== Page behavior ==========

    use_shortcuts(Callback::new(move |shortcut| match shortcut {
        Shortcut::Generate => on_generate.call(()),
        Shortcut::CloseDrawer => set_drawer_open.set(false),
    }));

    use_body_scroll_lock(drawer_open.into());

    view! {
        <Title text=APP_CONFIG.display_name />
        <div class="h-screen flex flex-col bg-white">
            <TopBar
                title=APP_CONFIG.display_name
                copy_line=copy_line
                count=count
                max_colors=limits.max_size
                can_remove=can_remove
                identity=identity
                drawer_open=drawer_open
                on_generate=on_generate
                on_add=on_add
                on_remove=on_remove
                on_copy_line=on_copy_line
                on_toggle_drawer=on_toggle_drawer
                on_sign_in=on_sign_in
                on_sign_out=on_sign_out
            />
            <main class="flex-1 flex min-h-0">
                <For
                    each=move || palette.get().slots().to_vec()
                    key=|slot| (slot.id, slot.hex.clone(), slot.locked)
                    children=move |slot| PaletteColumn(
                        PaletteColumnProps::builder()
                            .slot(slot)
                            .on_toggle_lock(on_toggle_lock)
                            .on_copy(on_copy)
                            .build(),
                    )
                />
            </main>
        </div>
        <SavedDrawer
            open=drawer_open
            saved=saved
            current_len=count
            can_save=signed_in
            max_colors=limits.max_size
            preview_len=APP_CONFIG.saved_preview_colors
            on_close=on_close_drawer
            on_load=on_load
            on_copy=on_copy_saved
            on_delete=on_delete
            on_save=on_save
        />
        <Toast message=toaster.message() />
    }
}
