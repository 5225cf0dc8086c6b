/// Single coordinate axis, used for board width, height, and positions.
pub type Coord = u8;

/// Count type for mines, revealed cells, and board areas.
pub type CellCount = u16;

/// Board position as `(col, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Board area as a cell count, saturating so oversized inputs cannot wrap.
pub const fn area(cols: Coord, rows: Coord) -> CellCount {
    (cols as CellCount).saturating_mul(rows as CellCount)
}

/// The eight king-move displacements. Every neighbor traversal in this crate
/// enumerates them in this order, so traversal order is reproducible.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn offset(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let col = coords.0.checked_add_signed(delta.0)?;
    let row = coords.1.checked_add_signed(delta.1)?;
    (col < bounds.0 && row < bounds.1).then_some((col, row))
}

/// In-bounds king-move neighbors of `coords`: at most eight, in a stable
/// order, never including `coords` itself.
pub fn neighbors(coords: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .iter()
        .filter_map(move |&delta| offset(coords, delta, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_of_center_cell() {
        let got: Vec<Coord2> = neighbors((1, 1), (3, 3)).collect();
        assert_eq!(
            got,
            [
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
    }

    #[test]
    fn neighbors_are_clipped_at_corners_and_edges() {
        assert_eq!(neighbors((0, 0), (3, 3)).count(), 3);
        assert_eq!(neighbors((1, 0), (3, 3)).count(), 5);
        assert_eq!(neighbors((2, 2), (3, 3)).count(), 3);
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn neighbors_never_include_self() {
        assert!(neighbors((1, 1), (3, 3)).all(|pos| pos != (1, 1)));
    }

    #[test]
    fn area_of_small_boards() {
        assert_eq!(area(3, 3), 9);
        assert_eq!(area(30, 16), 480);
        assert_eq!(area(255, 255), 65025);
    }
}
