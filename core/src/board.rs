use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a board: `Ready` until the first successful reveal, then
/// `Active` until the game ends in `Won` or `Lost`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a call to [`Board::reveal`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing changed: out of bounds, flagged, already revealed, or the
    /// game was already over.
    NoChange,
    Opened,
    Exploded,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// What a call to [`Board::toggle_flag`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Cycled,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Cycled)
    }
}

/// A single game of minesweeper: the grid and the rules that mutate it.
///
/// Mines are placed lazily by the first reveal, so that reveal can never hit
/// a mine or even land next to one. A finished board is inert; a new game
/// means a new `Board`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    mines: Option<MineMap>,
    grid: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
    seed: u64,
}

impl Board {
    /// New unplaced board; `seed` drives mine placement on the first reveal.
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self {
            config,
            mines: None,
            grid: Array2::default(config.size().to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::default(),
            triggered_mine: None,
            seed,
        }
    }

    /// Board over a fixed, already-placed layout. The first-click guarantee
    /// is the caller's problem here; meant for tests and replays.
    pub fn from_mine_map(mines: MineMap) -> Self {
        let config = mines.board_config();
        Self {
            mines: Some(mines),
            ..Self::new(config, 0)
        }
    }

    pub const fn config(&self) -> BoardConfig {
        self.config
    }

    pub const fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub const fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub const fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub const fn num_mines(&self) -> CellCount {
        self.config.mines()
    }

    pub const fn state(&self) -> GameState {
        self.state
    }

    pub const fn game_over(&self) -> bool {
        matches!(self.state, GameState::Lost)
    }

    pub const fn win(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub const fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub const fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags; negative when the player over-flags. Display code
    /// clamps as it sees fit.
    pub const fn mines_left(&self) -> i32 {
        self.config.mines() as i32 - self.flagged_count as i32
    }

    pub const fn is_inbounds(&self, coords: Coord2) -> bool {
        coords.0 < self.config.cols() && coords.1 < self.config.rows()
    }

    /// Cell state at `coords`; out-of-bounds coordinates read as hidden.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        if self.is_inbounds(coords) {
            self.grid[coords.to_nd_index()]
        } else {
            Cell::Hidden
        }
    }

    /// Whether a mine sits at `coords`. False until mines are placed; only
    /// meaningful for display once the cell is revealed or the game is over.
    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.is_inbounds(coords) && self.mines.as_ref().is_some_and(|m| m.contains_mine(coords))
    }

    /// Adjacent-mine count at `coords`; zero until mines are placed.
    pub fn adjacent_at(&self, coords: Coord2) -> u8 {
        if !self.is_inbounds(coords) {
            return 0;
        }
        self.mines.as_ref().map_or(0, |m| m.adjacent_count(coords))
    }

    /// The mine that ended a lost game.
    pub const fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Placed layout, `None` until the first reveal.
    pub const fn mine_map(&self) -> Option<&MineMap> {
        self.mines.as_ref()
    }

    /// Reveals `coords`, flood-filling zero-adjacency regions.
    ///
    /// The first reveal places the mines with `coords` as the safe point.
    /// Out-of-bounds coordinates, flagged cells, already-revealed cells, and
    /// finished boards are silent no-ops. A question mark does not block
    /// reveal; a flag must be cycled off first.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.is_inbounds(coords) || self.state.is_finished() {
            return RevealOutcome::NoChange;
        }

        if self.mines.is_none() {
            self.mines = Some(RandomMineGenerator::new(self.seed).generate(self.config, coords));
        }

        match self.grid[coords.to_nd_index()] {
            Cell::Revealed(_) | Cell::Flagged => RevealOutcome::NoChange,
            Cell::Hidden | Cell::Questioned => self.reveal_unmarked(coords),
        }
    }

    /// Cycles the mark on a hidden cell: none -> flag -> question -> none.
    ///
    /// No-op when out of bounds, on revealed cells, and once the game is
    /// finished. Marking works before the first reveal.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if !self.is_inbounds(coords) || self.state.is_finished() {
            return FlagOutcome::NoChange;
        }

        let slot = &mut self.grid[coords.to_nd_index()];
        match *slot {
            Cell::Hidden => {
                *slot = Cell::Flagged;
                self.flagged_count += 1;
            }
            Cell::Flagged => {
                *slot = Cell::Questioned;
                self.flagged_count -= 1;
            }
            Cell::Questioned => *slot = Cell::Hidden,
            Cell::Revealed(_) => return FlagOutcome::NoChange,
        }
        FlagOutcome::Cycled
    }

    fn reveal_unmarked(&mut self, coords: Coord2) -> RevealOutcome {
        if self.has_mine_at(coords) {
            self.state = GameState::Lost;
            self.triggered_mine = Some(coords);
            self.reveal_all_mines();
            log::debug!("mine hit at {coords:?}");
            return RevealOutcome::Exploded;
        }

        self.reveal_cell(coords);
        if self.adjacent_at(coords) == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_count == self.config.safe_cell_count() {
            self.finish_won();
            RevealOutcome::Won
        } else {
            if self.state.is_ready() {
                self.state = GameState::Active;
            }
            RevealOutcome::Opened
        }
    }

    /// Marks `coords` revealed and keeps `revealed_count` in step. A mark
    /// on the cell is erased; an erased flag also leaves `flagged_count`.
    fn reveal_cell(&mut self, coords: Coord2) {
        let count = self.adjacent_at(coords);
        let slot = &mut self.grid[coords.to_nd_index()];
        if slot.is_flagged() {
            self.flagged_count -= 1;
        }
        *slot = Cell::Revealed(count);
        self.revealed_count += 1;
    }

    /// Expands a zero-adjacency region: every reachable hidden or
    /// question-marked cell is revealed, flagged cells are skipped. Runs on
    /// an explicit worklist so deep regions cannot exhaust the call stack.
    fn flood_fill(&mut self, origin: Coord2) {
        let size = self.size();
        let mut visited = BTreeSet::from([origin]);
        let mut pending: VecDeque<Coord2> = neighbors(origin, size).collect();

        while let Some(coords) = pending.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            if matches!(
                self.grid[coords.to_nd_index()],
                Cell::Revealed(_) | Cell::Flagged
            ) {
                continue;
            }

            self.reveal_cell(coords);
            log::trace!("flood fill opened {coords:?}");

            if self.adjacent_at(coords) == 0 {
                pending.extend(neighbors(coords, size).filter(|pos| !visited.contains(pos)));
            }
        }
    }

    /// Shows every mine for the end-of-loss display. A flag sitting on a
    /// mine is replaced by the revealed cell underneath.
    fn reveal_all_mines(&mut self) {
        let (cols, rows) = self.size();
        for col in 0..cols {
            for row in 0..rows {
                let coords = (col, row);
                if self.has_mine_at(coords) && !self.cell_at(coords).is_revealed() {
                    self.reveal_cell(coords);
                }
            }
        }
    }

    /// Terminal win bookkeeping: any safe cell still unrevealed is shown
    /// revealed so the final board reads as complete.
    fn finish_won(&mut self) {
        self.state = GameState::Won;
        let (cols, rows) = self.size();
        for col in 0..cols {
            for row in 0..rows {
                let coords = (col, row);
                if !self.has_mine_at(coords) && !self.cell_at(coords).is_revealed() {
                    self.reveal_cell(coords);
                }
            }
        }
        log::debug!("board cleared with {} cells revealed", self.revealed_count);
    }
}
