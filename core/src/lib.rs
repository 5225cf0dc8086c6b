#![no_std]

extern crate alloc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Immutable shape of a game: board dimensions and how many mines it holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Coord2,
    mines: CellCount,
}

impl BoardConfig {
    /// Builds a config, rejecting shapes that cannot honor the first-click
    /// guarantee. The clicked cell and its in-bounds neighbors must stay
    /// mine-free, and a central click forbids a full 3x3 window (clipped on
    /// boards narrower than three cells), so that window is reserved up
    /// front.
    pub fn new((cols, rows): Coord2, mines: CellCount) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(GameError::EmptyBoard);
        }
        let reserved = area(cols.min(3), rows.min(3));
        if mines > area(cols, rows) - reserved {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked((cols, rows), mines))
    }

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn cols(&self) -> Coord {
        self.size.0
    }

    pub const fn rows(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Where the mines are, plus the adjacency count of every cell.
///
/// Counts are computed once when the map is built and never recomputed.
/// Every cell gets one, mines included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineMap {
    mask: Array2<bool>,
    adjacent: Array2<u8>,
    mine_count: CellCount,
}

impl MineMap {
    pub fn from_mine_mask(mask: Array2<bool>) -> Self {
        let dim = mask.dim();
        let bounds: Coord2 = (
            dim.0.try_into().unwrap(),
            dim.1.try_into().unwrap(),
        );

        let mine_count = mask.iter().filter(|&&mine| mine).count().try_into().unwrap();

        let mut adjacent = Array2::from_elem(dim, 0u8);
        for col in 0..bounds.0 {
            for row in 0..bounds.1 {
                let count = neighbors((col, row), bounds)
                    .filter(|&pos| mask[pos.to_nd_index()])
                    .count();
                adjacent[(col, row).to_nd_index()] = count.try_into().unwrap();
            }
        }

        Self {
            mask,
            adjacent,
            mine_count,
        }
    }

    /// Map with mines at exactly the given coordinates. Used for tests and
    /// replays; rejects coordinates outside `size`.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mask[coords.to_nd_index()] = true;
        }
        Ok(Self::from_mine_mask(mask))
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mask.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mask[coords.to_nd_index()]
    }

    pub fn adjacent_count(&self, coords: Coord2) -> u8 {
        self.adjacent[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_boards() {
        assert_eq!(BoardConfig::new((0, 5), 0), Err(GameError::EmptyBoard));
        assert_eq!(BoardConfig::new((5, 0), 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_reserves_the_first_click_window() {
        // 4x4 keeps 16 - 9 = 7 cells for mines
        assert!(BoardConfig::new((4, 4), 7).is_ok());
        assert_eq!(BoardConfig::new((4, 4), 8), Err(GameError::TooManyMines));

        // boards smaller than 3x3 reserve every cell they have
        assert!(BoardConfig::new((2, 2), 0).is_ok());
        assert_eq!(BoardConfig::new((2, 2), 1), Err(GameError::TooManyMines));
        assert!(BoardConfig::new((1, 1), 0).is_ok());

        // a narrow board clips the window to 3x1
        assert!(BoardConfig::new((10, 1), 7).is_ok());
        assert_eq!(BoardConfig::new((10, 1), 8), Err(GameError::TooManyMines));
    }

    #[test]
    fn mine_map_counts_adjacency_once_for_every_cell() {
        let map = MineMap::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(map.mine_count(), 1);
        assert_eq!(map.safe_cell_count(), 8);
        assert!(map.contains_mine((1, 1)));
        assert_eq!(map.adjacent_count((1, 1)), 0);
        for pos in neighbors((1, 1), (3, 3)) {
            assert_eq!(map.adjacent_count(pos), 1);
        }
    }

    #[test]
    fn mine_map_counts_stacked_neighbors() {
        let map = MineMap::from_mine_coords((3, 3), &[(0, 0), (2, 0), (0, 2)]).unwrap();

        assert_eq!(map.adjacent_count((1, 1)), 3);
        assert_eq!(map.adjacent_count((1, 0)), 2);
        assert_eq!(map.adjacent_count((2, 2)), 0);
        // mines count their own neighbors too
        assert_eq!(map.adjacent_count((0, 0)), 0);
    }

    #[test]
    fn mine_map_rejects_out_of_range_coords() {
        assert_eq!(
            MineMap::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }
}
