use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// Marks only exist on unrevealed cells, so "a flagged or question-marked
/// cell is always unrevealed" holds by construction, and revealing a cell
/// erases its mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Flagged,
    Questioned,
    /// Revealed, carrying the adjacent-mine count shown to the player.
    Revealed(u8),
}

impl Cell {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_questioned(self) -> bool {
        matches!(self, Self::Questioned)
    }

    pub const fn is_unrevealed(self) -> bool {
        !self.is_revealed()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
