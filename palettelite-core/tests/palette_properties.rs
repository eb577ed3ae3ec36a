use palettelite_core::{Palette, PaletteLimits, SequenceSource};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn is_canonical_hex(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

#[test]
fn generate_returns_exactly_n_unlocked_slots() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for n in 1..=10 {
        let palette = Palette::generate(n, &mut rng);
        assert_eq!(palette.len(), n);
        assert!(palette.slots().iter().all(|s| !s.locked));
        assert!(palette.slots().iter().all(|s| is_canonical_hex(&s.hex)));
    }
}

#[test]
fn regenerate_preserves_length_order_and_locks() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut palette = Palette::generate(7, &mut rng);
    let locked_ids: Vec<_> = [0, 3, 6].iter().map(|&i| palette.slots()[i].id).collect();
    for id in &locked_ids {
        palette = palette.toggle_lock(*id);
    }

    let next = palette.regenerate_unlocked(&mut rng);
    assert_eq!(next.len(), palette.len());

    let mut changed = 0;
    for (before, after) in palette.slots().iter().zip(next.slots()) {
        if before.locked {
            assert_eq!(before, after);
        } else {
            assert!(!after.locked);
            assert_ne!(before.id, after.id);
            if before.hex != after.hex {
                changed += 1;
            }
        }
    }
    // Rare collisions are allowed, wholesale sameness is not
    assert!(changed >= 3, "only {changed} of 4 unlocked slots changed");
}

#[test]
fn locked_slot_survives_ten_regenerations() {
    let mut rng = SmallRng::seed_from_u64(5);
    let palette = Palette::generate(5, &mut rng);
    let target = palette.slots()[2].clone();
    let mut palette = palette.toggle_lock(target.id);

    for _ in 0..10 {
        palette = palette.regenerate_unlocked(&mut rng);
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.slots()[2].hex, target.hex);
        assert_eq!(palette.slots()[2].id, target.id);
        assert!(palette.slots()[2].locked);
    }
}

#[test]
fn add_then_remove_restores_original() {
    let mut rng = SmallRng::seed_from_u64(8);
    let palette = Palette::generate(4, &mut rng);
    let grown = palette.with_added_color(&mut rng);
    assert_eq!(grown.len(), 5);
    assert_eq!(grown.without_last_color(), palette);
}

#[test]
fn grow_to_limit_then_refuse() {
    let limits = PaletteLimits::default();
    let mut rng = SmallRng::seed_from_u64(9);
    let mut palette = Palette::generate(limits.default_size, &mut rng);
    while palette.can_add(&limits) {
        palette = palette.with_added_color(&mut rng);
    }
    assert_eq!(palette.len(), limits.max_size);
}

#[test]
fn scripted_generation_is_reproducible() {
    let script = [200, 60, 50, 25, 3, -4, 7, -2, 5, 0, 9, 1, -6];
    let a = Palette::generate(3, &mut SequenceSource::new(script));
    let b = Palette::generate(3, &mut SequenceSource::new(script));
    assert_eq!(a.hexes(), b.hexes());
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = Palette::generate(6, &mut SmallRng::seed_from_u64(42));
    let b = Palette::generate(6, &mut SmallRng::seed_from_u64(42));
    assert_eq!(a.hexes(), b.hexes());
}
