use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform without-replacement placement driven by a seeded [`SmallRng`].
///
/// The seed comes from the caller, so equal seeds reproduce equal boards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

/// True when `coords` is `safe` itself or one of its king-move neighbors.
fn in_safe_zone(coords: Coord2, safe: Coord2) -> bool {
    coords.0.abs_diff(safe.0) <= 1 && coords.1.abs_diff(safe.1) <= 1
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig, safe: Coord2) -> MineMap {
        let (cols, rows) = config.size();

        let mut pool: Vec<Coord2> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (col, row)))
            .filter(|&coords| !in_safe_zone(coords, safe))
            .collect();

        // Validated configs never exceed the pool; unchecked ones degrade
        // with a warning instead of panicking.
        let requested = config.mines() as usize;
        let drawn = requested.min(pool.len());
        if drawn < requested {
            log::warn!(
                "requested {} mines but only {} cells lie outside the safe zone, placing {}",
                requested,
                pool.len(),
                drawn
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (picked, _) = pool.partial_shuffle(&mut rng, drawn);

        let mut mask: Array2<bool> = Array2::default((cols, rows).to_nd_index());
        for &coords in picked.iter() {
            mask[coords.to_nd_index()] = true;
        }

        log::debug!(
            "placed {} mines on a {}x{} board, safe zone around {:?}",
            drawn,
            cols,
            rows,
            safe
        );
        MineMap::from_mine_mask(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expert() -> BoardConfig {
        BoardConfig::new((30, 16), 99).unwrap()
    }

    #[test]
    fn places_the_exact_mine_count() {
        let map = RandomMineGenerator::new(1).generate(expert(), (15, 8));
        assert_eq!(map.mine_count(), 99);
        assert_eq!(map.size(), (30, 16));
    }

    #[test]
    fn safe_zone_stays_clear_for_center_and_corner_clicks() {
        for &safe in &[(15, 8), (0, 0), (29, 15)] {
            let map = RandomMineGenerator::new(42).generate(expert(), safe);
            assert!(!map.contains_mine(safe));
            for pos in neighbors(safe, (30, 16)) {
                assert!(!map.contains_mine(pos), "mine next to first click at {pos:?}");
            }
        }
    }

    #[test]
    fn equal_seeds_reproduce_equal_layouts() {
        let a = RandomMineGenerator::new(7).generate(expert(), (15, 8));
        let b = RandomMineGenerator::new(7).generate(expert(), (15, 8));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = RandomMineGenerator::new(7).generate(expert(), (15, 8));
        let b = RandomMineGenerator::new(8).generate(expert(), (15, 8));
        assert_ne!(a, b);
    }

    #[test]
    fn unchecked_overfull_config_degrades_to_the_pool_size() {
        // every cell of a 3x3 board is inside the safe zone of a center click
        let config = BoardConfig::new_unchecked((3, 3), 5);
        let map = RandomMineGenerator::new(0).generate(config, (1, 1));
        assert_eq!(map.mine_count(), 0);
    }
}
