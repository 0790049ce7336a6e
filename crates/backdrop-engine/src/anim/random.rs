use fastrand::Rng;

use crate::coords::Region;
use crate::paint::{Color, GradientState, GradientStop, STOP_COUNT};

/// Draws a fresh composition.
///
/// Each stop picks its color uniformly from `palette` (with replacement, so
/// duplicates are allowed) and its center uniformly from the region at the
/// same index. `palette` must be non-empty.
pub fn generate_random_gradient(
    rng: &mut Rng,
    palette: &[Color],
    regions: &[Region; STOP_COUNT],
) -> GradientState {
    debug_assert!(!palette.is_empty());
    GradientState::new(core::array::from_fn(|i| {
        let color = palette[rng.usize(..palette.len())];
        let center = regions[i].sample(rng.f32(), rng.f32());
        GradientStop::new(color, center)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DEFAULT_PALETTE, default_regions};

    #[test]
    fn stops_come_from_palette_and_regions() {
        let mut rng = Rng::with_seed(7);
        let regions = default_regions();
        for _ in 0..500 {
            let g = generate_random_gradient(&mut rng, &DEFAULT_PALETTE, &regions);
            assert_eq!(g.stops.len(), STOP_COUNT);
            for (stop, region) in g.stops.iter().zip(regions.iter()) {
                assert!(DEFAULT_PALETTE.contains(&stop.color));
                assert!(region.contains(stop.center), "{:?} outside {:?}", stop.center, region);
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let regions = default_regions();
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        for _ in 0..10 {
            assert_eq!(
                generate_random_gradient(&mut a, &DEFAULT_PALETTE, &regions),
                generate_random_gradient(&mut b, &DEFAULT_PALETTE, &regions),
            );
        }
    }

    #[test]
    fn every_palette_entry_is_reachable() {
        let mut rng = Rng::with_seed(3);
        let regions = default_regions();
        let mut seen = [false; 4];
        for _ in 0..200 {
            let g = generate_random_gradient(&mut rng, &DEFAULT_PALETTE, &regions);
            for s in g.stops {
                let i = DEFAULT_PALETTE.iter().position(|c| *c == s.color).unwrap();
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn single_color_palette() {
        let mut rng = Rng::with_seed(1);
        let only = Color::rgba(1, 2, 3, 0.5);
        let g = generate_random_gradient(&mut rng, &[only], &default_regions());
        assert!(g.stops.iter().all(|s| s.color == only));
    }
}
