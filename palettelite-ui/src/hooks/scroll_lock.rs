use leptos::*;

/// Hide body overflow while `locked` is true; restore the previous value after.
pub fn use_body_scroll_lock(locked: Signal<bool>) {
    let previous = store_value(None::<String>);

    create_effect(move |_| {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();

        if locked.get() {
            if previous.get_value().is_none() {
                let current = style.get_property_value("overflow").unwrap_or_default();
                previous.set_value(Some(current));
            }
            let _ = style.set_property("overflow", "hidden");
        } else if let Some(prev) = previous.get_value() {
            let _ = style.set_property("overflow", &prev);
            previous.set_value(None);
        }
    });
}
