//! Seeded random stages.

use cubestage_core::{Coord3, Direction, Rgb, Variant, MAX_HEIGHT, MIN_HEIGHT};
use cubestage_grid::StageDocument;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn below(rng: &mut ChaCha8Rng, n: u32) -> u32 {
    rng.next_u32() % n
}

fn signed(rng: &mut ChaCha8Rng, lo: i32, hi: i32) -> i32 {
    lo + below(rng, (hi - lo + 1) as u32) as i32
}

/// Hundredths in `0.0..=max`, mostly not exact in binary.
fn fraction(rng: &mut ChaCha8Rng, max: u32) -> f64 {
    f64::from(below(rng, max * 100 + 1)) / 100.0
}

fn random_rgb(rng: &mut ChaCha8Rng) -> Rgb {
    Rgb::new(fraction(rng, 1), fraction(rng, 1), fraction(rng, 1))
}

fn random_variant(rng: &mut ChaCha8Rng, width: usize, length: usize) -> Variant {
    match below(rng, 10) {
        0 => Variant::Item,
        1 => Variant::Mover {
            pattern: (0..below(rng, 5)).map(|_| signed(rng, -3, 3)).collect(),
        },
        2 => Variant::Switch {
            targets: (0..=below(rng, 3))
                .map(|_| {
                    Coord3::new(
                        below(rng, width as u32) as i32,
                        signed(rng, MIN_HEIGHT, MAX_HEIGHT),
                        below(rng, length as u32) as i32,
                    )
                })
                .collect(),
        },
        3 => Variant::Faller {
            interval: fraction(rng, 5),
            delay: fraction(rng, 5),
        },
        4 => Variant::OneWay {
            direction: match below(rng, 4) {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            },
            power: signed(rng, 0, 5),
        },
        _ => Variant::None,
    }
}

/// A `width x length` document with random heights, variants and metadata.
///
/// The same seed always yields the same document. Holes may carry
/// variants, so callers exercising `validate` get something to strip.
///
/// # Panics
///
/// If `width` or `length` is zero.
pub fn random_document(seed: u64, width: usize, length: usize) -> StageDocument {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut doc = StageDocument::new(width, length).expect("non-zero extents");
    for z in 0..length as i32 {
        for x in 0..width as i32 {
            let height = signed(&mut rng, MIN_HEIGHT, MAX_HEIGHT);
            let variant = random_variant(&mut rng, width, length);
            if let Some(col) = doc.grid.get_mut(x, z) {
                col.height = height;
                col.variant = variant;
            }
        }
    }
    let meta = &mut doc.meta;
    meta.appearance.color = random_rgb(&mut rng);
    meta.appearance.bg_color = random_rgb(&mut rng);
    meta.x_offset = signed(&mut rng, -4, 4);
    meta.pickable = below(&mut rng, 10);
    meta.tunables.build_speed = fraction(&mut rng, 2);
    meta.tunables.collapse_speed = fraction(&mut rng, 2);
    meta.tunables.auto_collapse = fraction(&mut rng, 2);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_document() {
        assert_eq!(random_document(7, 6, 5), random_document(7, 6, 5));
        assert_ne!(random_document(7, 6, 5), random_document(8, 6, 5));
    }

    #[test]
    fn heights_stay_in_range() {
        let doc = random_document(42, 8, 8);
        assert!(doc
            .grid
            .iter()
            .all(|(_, c)| (MIN_HEIGHT..=MAX_HEIGHT).contains(&c.height)));
    }

    #[test]
    fn switches_have_targets() {
        let doc = random_document(3, 10, 10);
        for (_, col) in doc.grid.iter() {
            if let Some(targets) = col.targets() {
                assert!(!targets.is_empty());
            }
        }
    }
}
