use leptos::*;
use palettelite_core::{Identity, IdentityProvider};
use std::rc::Rc;

/// Track the provider's identity reactively.
///
/// Subscribes on creation and unsubscribes when the owning scope is
/// cleaned up.
pub fn use_identity<P>(provider: Rc<P>) -> ReadSignal<Option<Identity>>
where
    P: IdentityProvider + 'static,
{
    let (identity, set_identity) = create_signal(None::<Identity>);

    let subscription = provider.subscribe(Rc::new(move |current: Option<&Identity>| {
        set_identity.set(current.cloned());
    }));

    on_cleanup(move || provider.unsubscribe(subscription));

    identity
}
