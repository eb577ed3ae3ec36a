//! Signed-in identity and the provider contract.

use crate::error::IdentityError;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable unique id; scopes every saved palette
    pub uid: String,
    pub display_name: String,
}

/// Handle returned by [`IdentityProvider::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Callback receiving the current identity (None when signed out).
pub type IdentityListener = Rc<dyn Fn(Option<&Identity>)>;

/// Sign-in/sign-out and change notification.
pub trait IdentityProvider {
    fn current(&self) -> Option<Identity>;

    fn sign_in(&self) -> Result<Identity, IdentityError>;

    fn sign_out(&self) -> Result<(), IdentityError>;

    /// Register a listener. It is called once right away with the current
    /// identity, then on every change.
    fn subscribe(&self, listener: IdentityListener) -> Subscription;

    fn unsubscribe(&self, subscription: Subscription);
}

/// Listener registry shared by provider implementations.
#[derive(Default)]
pub struct Listeners {
    next: Cell<u64>,
    entries: RefCell<Vec<(Subscription, IdentityListener)>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: IdentityListener) -> Subscription {
        let id = Subscription(self.next.get());
        self.next.set(self.next.get() + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    pub fn remove(&self, subscription: Subscription) {
        self.entries.borrow_mut().retain(|(id, _)| *id != subscription);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Call every listener. Listeners may subscribe or unsubscribe while
    /// being notified.
    pub fn notify(&self, identity: Option<&Identity>) {
        let snapshot: Vec<IdentityListener> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(identity);
        }
    }
}

/// Provider that signs in a fixed identity without any UI.
pub struct MemoryIdentityProvider {
    issue: Option<Identity>,
    current: RefCell<Option<Identity>>,
    listeners: Listeners,
}

impl MemoryIdentityProvider {
    /// `sign_in` will succeed with `identity`.
    pub fn new(identity: Identity) -> Self {
        Self {
            issue: Some(identity),
            current: RefCell::new(None),
            listeners: Listeners::new(),
        }
    }

    /// `sign_in` will report a cancelled attempt.
    pub fn cancelling() -> Self {
        Self {
            issue: None,
            current: RefCell::new(None),
            listeners: Listeners::new(),
        }
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    fn current(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    fn sign_in(&self) -> Result<Identity, IdentityError> {
        let identity = self.issue.clone().ok_or(IdentityError::Cancelled)?;
        *self.current.borrow_mut() = Some(identity.clone());
        self.listeners.notify(Some(&identity));
        Ok(identity)
    }

    fn sign_out(&self) -> Result<(), IdentityError> {
        if self.current.borrow_mut().take().is_some() {
            self.listeners.notify(None);
        }
        Ok(())
    }

    fn subscribe(&self, listener: IdentityListener) -> Subscription {
        listener(self.current().as_ref());
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.listeners.remove(subscription);
    }
}
