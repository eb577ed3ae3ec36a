//! Palette generation and lock-aware regeneration.
//!
//! A palette is anchored to one base HSL color. Hues are spread around the
//! base hue in fixed steps (an analogous scheme) and every channel gets a
//! bounded jitter, so each call looks different while staying coherent.

use crate::color_space::{hex_without_hash, hsl_to_hex, normalize_hex};
use crate::config::PaletteLimits;
use crate::random::RandomSource;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SLOT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque per-slot identity, used only for UI reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

impl SlotId {
    /// Allocate an id never handed out before in this process.
    pub fn fresh() -> Self {
        Self(NEXT_SLOT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{:x}", self.0)
    }
}

/// One position in a palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteSlot {
    pub id: SlotId,
    /// Canonical `#RRGGBB`
    pub hex: String,
    /// Locked slots survive regeneration untouched
    pub locked: bool,
}

impl PaletteSlot {
    /// New unlocked slot with a fresh id.
    pub fn new(hex: String) -> Self {
        Self {
            id: SlotId::fresh(),
            hex,
            locked: false,
        }
    }
}

/// Sampling ranges for palette generation. All bounds are inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorRanges {
    /// Base saturation (percent)
    pub base_saturation: RangeInclusive<i32>,
    /// Base lightness (percent)
    pub base_lightness: RangeInclusive<i32>,
    /// Hue spacing between adjacent slots (degrees)
    pub hue_step: RangeInclusive<i32>,
    /// Per-slot hue jitter (degrees)
    pub hue_jitter: i32,
    /// Per-slot saturation jitter, then clamped to `saturation_bounds`
    pub saturation_jitter: i32,
    pub saturation_bounds: RangeInclusive<i32>,
    /// Per-slot lightness jitter, then clamped to `lightness_bounds`
    pub lightness_jitter: i32,
    pub lightness_bounds: RangeInclusive<i32>,
}

impl GeneratorRanges {
    pub const DEFAULT: GeneratorRanges = GeneratorRanges {
        base_saturation: 55..=92,
        base_lightness: 35..=72,
        hue_step: 18..=34,
        hue_jitter: 10,
        saturation_jitter: 18,
        saturation_bounds: 45..=95,
        lightness_jitter: 20,
        lightness_bounds: 25..=80,
    };
}

impl Default for GeneratorRanges {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn draw(rng: &mut impl RandomSource, range: &RangeInclusive<i32>) -> i32 {
    rng.int_inclusive(*range.start(), *range.end())
}

fn jitter(rng: &mut impl RandomSource, amount: i32) -> i32 {
    rng.int_inclusive(-amount, amount)
}

/// Ordered, never-empty sequence of slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    slots: Vec<PaletteSlot>,
}

impl Palette {
    /// Generate `count` unlocked slots with the default ranges.
    /// A count of zero is treated as one.
    pub fn generate(count: usize, rng: &mut impl RandomSource) -> Self {
        Self::generate_with(count, &GeneratorRanges::DEFAULT, rng)
    }

    /// Generate `count` unlocked slots with explicit ranges.
    pub fn generate_with(count: usize, ranges: &GeneratorRanges, rng: &mut impl RandomSource) -> Self {
        let count = count.max(1);

        let base_h = rng.int_inclusive(0, 359);
        let base_s = draw(rng, &ranges.base_saturation);
        let base_l = draw(rng, &ranges.base_lightness);
        let step = draw(rng, &ranges.hue_step);

        // Keep the base hue near the middle of the row
        let start = base_h - step * (count / 2) as i32;

        let slots = (0..count)
            .map(|i| {
                let h = start + i as i32 * step + jitter(rng, ranges.hue_jitter);
                let s = (base_s + jitter(rng, ranges.saturation_jitter)).clamp(
                    *ranges.saturation_bounds.start(),
                    *ranges.saturation_bounds.end(),
                );
                let l = (base_l + jitter(rng, ranges.lightness_jitter)).clamp(
                    *ranges.lightness_bounds.start(),
                    *ranges.lightness_bounds.end(),
                );
                PaletteSlot::new(hsl_to_hex(h, s, l))
            })
            .collect();

        Self { slots }
    }

    /// Build a palette from existing slots. Returns None for an empty list.
    pub fn from_slots(slots: Vec<PaletteSlot>) -> Option<Self> {
        if slots.is_empty() {
            None
        } else {
            Some(Self { slots })
        }
    }

    /// Rebuild an in-memory palette from saved hex strings.
    ///
    /// At most `limits.max_size` colors are taken, each canonicalized and
    /// unlocked with a fresh id. Entries that are not valid hex and a
    /// shortfall below `limits.min_size` are filled with generated colors.
    pub fn from_saved_colors<S: AsRef<str>>(
        colors: &[S],
        limits: &PaletteLimits,
        rng: &mut impl RandomSource,
    ) -> Self {
        let want = limits.clamp_size(colors.len());

        let slots = (0..want)
            .map(|i| {
                colors
                    .get(i)
                    .and_then(|hex| normalize_hex(hex.as_ref()).ok())
                    .map(PaletteSlot::new)
                    .unwrap_or_else(|| Self::single_slot(rng))
            })
            .collect();

        Self { slots }
    }

    fn single_slot(rng: &mut impl RandomSource) -> PaletteSlot {
        let mut fresh = Self::generate(1, rng);
        fresh.slots.remove(0)
    }

    /// Replace every unlocked slot with a freshly generated color.
    ///
    /// A full-size palette is generated and its slots are consumed in
    /// order, one per unlocked slot. Locked slots keep their id and hex.
    pub fn regenerate_unlocked(&self, rng: &mut impl RandomSource) -> Self {
        let mut fresh = Self::generate(self.slots.len(), rng).slots.into_iter();

        let slots = self
            .slots
            .iter()
            .map(|slot| {
                if slot.locked {
                    return slot.clone();
                }
                match fresh.next() {
                    Some(mut replacement) => {
                        replacement.locked = false;
                        replacement
                    }
                    // Unreachable: fresh has one entry per slot
                    None => slot.clone(),
                }
            })
            .collect();

        Self { slots }
    }

    /// Append one generated, unlocked slot. Size policy is the caller's job.
    pub fn with_added_color(&self, rng: &mut impl RandomSource) -> Self {
        let mut slots = self.slots.clone();
        slots.push(Self::single_slot(rng));
        Self { slots }
    }

    /// Drop the last slot. A single-slot palette is returned unchanged.
    pub fn without_last_color(&self) -> Self {
        if self.slots.len() <= 1 {
            return self.clone();
        }
        Self {
            slots: self.slots[..self.slots.len() - 1].to_vec(),
        }
    }

    /// Flip the lock of the slot with `id`. Unknown ids change nothing.
    pub fn toggle_lock(&self, id: SlotId) -> Self {
        let slots = self
            .slots
            .iter()
            .map(|slot| {
                if slot.id == id {
                    PaletteSlot {
                        locked: !slot.locked,
                        ..slot.clone()
                    }
                } else {
                    slot.clone()
                }
            })
            .collect();
        Self { slots }
    }

    /// Whether one more slot fits under `limits.max_size`.
    pub fn can_add(&self, limits: &PaletteLimits) -> bool {
        self.slots.len() < limits.max_size
    }

    pub fn slots(&self) -> &[PaletteSlot] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&PaletteSlot> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; palettes are never empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Hex strings in display order.
    pub fn hexes(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.hex.clone()).collect()
    }

    /// `RRGGBB-RRGGBB-...` without `#`, as copied by the Copy button.
    pub fn copy_line(&self) -> String {
        copy_line(self.slots.iter().map(|s| s.hex.as_str()))
    }
}

/// Join hex colors with `-` and drop every `#`.
pub fn copy_line<'a>(hexes: impl IntoIterator<Item = &'a str>) -> String {
    hexes
        .into_iter()
        .map(hex_without_hash)
        .collect::<Vec<_>>()
        .join("-")
}
