use leptos::*;
use std::time::Duration;

/// Transient notification state. Copy so it can move into any handler.
#[derive(Clone, Copy)]
pub struct Toaster {
    message: RwSignal<Option<String>>,
    /// Bumped on every show so stale timers don't hide a newer message
    generation: StoredValue<u64>,
    duration: Duration,
}

impl Toaster {
    /// Current message (None = hidden).
    pub fn message(&self) -> Signal<Option<String>> {
        self.message.into()
    }

    /// Show `msg`, restarting the hide timer.
    pub fn show(&self, msg: impl Into<String>) {
        let message = self.message;
        let generation = self.generation;

        generation.update_value(|g| *g += 1);
        let shown = generation.get_value();
        message.set(Some(msg.into()));

        set_timeout(
            move || {
                if generation.get_value() == shown {
                    message.set(None);
                }
            },
            self.duration,
        );
    }
}

/// Create a toaster whose messages disappear after `duration_ms`.
pub fn use_toast(duration_ms: u64) -> Toaster {
    Toaster {
        message: create_rw_signal(None),
        generation: store_value(0),
        duration: Duration::from_millis(duration_ms),
    }
}
