//! Palette size limits.

/// Size policy for an in-memory palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteLimits {
    /// Slots generated for a fresh session
    pub default_size: usize,
    /// Smallest palette allowed (palettes are never empty)
    pub min_size: usize,
    /// Largest palette allowed; adding beyond this is refused by the caller
    pub max_size: usize,
}

impl PaletteLimits {
    /// Clamp a requested size into `min_size..=max_size`.
    pub fn clamp_size(&self, size: usize) -> usize {
        size.clamp(self.min_size, self.max_size)
    }
}

impl Default for PaletteLimits {
    fn default() -> Self {
        DEFAULT_LIMITS
    }
}

/// Limits used by the app.
pub const DEFAULT_LIMITS: PaletteLimits = PaletteLimits {
    default_size: 5,
    min_size: 1,
    max_size: 10,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_values() {
        let limits = PaletteLimits::default();
        assert_eq!(limits.default_size, 5);
        assert_eq!(limits.min_size, 1);
        assert_eq!(limits.max_size, 10);
    }

    #[test]
    fn clamp_size_bounds() {
        assert_eq!(DEFAULT_LIMITS.clamp_size(0), 1);
        assert_eq!(DEFAULT_LIMITS.clamp_size(7), 7);
        assert_eq!(DEFAULT_LIMITS.clamp_size(42), 10);
    }
}
