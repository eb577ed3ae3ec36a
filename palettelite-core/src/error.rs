//! Error types shared by the engine, the store contracts and the session rules.

use thiserror::Error;

/// Malformed color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Failures of a [`PaletteStore`](crate::store::PaletteStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Palette store unavailable: {0}")]
    Unavailable(String),

    #[error("Palette name must not be empty")]
    EmptyName,

    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    /// Stored data exists but cannot be decoded; it must not be overwritten.
    #[error("Saved palettes could not be read: {0}")]
    Unreadable(String),

    #[error("Palette store failure: {0}")]
    Backend(String),
}

/// Failures of an [`IdentityProvider`](crate::identity::IdentityProvider).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("Sign-in was cancelled")]
    Cancelled,

    #[error("Identity provider failure: {0}")]
    Backend(String),
}

/// Failures of the save/delete/list rules in [`session`](crate::session).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Sign in first")]
    NotSignedIn,

    #[error("Enter a name")]
    EmptyName,

    #[error(transparent)]
    Store(#[from] StoreError),
}
