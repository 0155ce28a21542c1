//! Rolls of paper on a grid, and which of them forklifts can reach.
//!
//! A roll is accessible if fewer than [THRESHOLD] of its eight neighbors are
//! rolls. Removing accessible rolls can make more rolls accessible, so the
//! floor is repeatedly cleared in rounds until it's stable.

#[cfg(test)]
mod tests;

use core::fmt;

use lib::prelude::*;
use thiserror::Error;

/// Byte marking a roll of paper.
pub const ROLL: u8 = b'@';

/// Byte marking an empty cell.
pub const EMPTY: u8 = b'.';

/// A roll is accessible if it has fewer than this many neighboring rolls.
pub const THRESHOLD: usize = 4;

/// Error raised when parsing a [Floor].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorError {
    #[error("row {row} has {actual} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unexpected cell {cell:?} at row {row}, column {col}")]
    UnexpectedCell { row: usize, col: usize, cell: char },
    #[error("floor with {cells} cells is too large")]
    TooLarge { cells: usize },
}

/// A position on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular floor where each cell either holds a roll or is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Floor {
    cells: Vec<bool>,
    columns: usize,
}

impl Floor {
    /// Parse a floor out of input, skipping blank lines.
    pub fn parse(mut input: IStr) -> Result<Self> {
        let mut rows = Vec::new();

        while let Some(line) = input.try_line::<&[u8]>()? {
            if !line.iter().all(u8::is_ascii_whitespace) {
                rows.push(line);
            }
        }

        Ok(Self::from_rows(rows)?)
    }

    /// Build a floor out of rows of [ROLL] and [EMPTY] bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2025::d04::{Floor, FloorError};
    ///
    /// let floor = Floor::from_rows(["@.@", ".@."]).unwrap();
    /// assert_eq!((floor.rows_len(), floor.columns_len()), (2, 3));
    /// assert_eq!(floor.occupied(), 3);
    ///
    /// let error = Floor::from_rows(["@@", "@"]).unwrap_err();
    /// assert_eq!(error, FloorError::Jagged { row: 1, expected: 2, actual: 1 });
    /// ```
    pub fn from_rows<I>(rows: I) -> Result<Self, FloorError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut floor = Self::default();

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();

            if row == 0 {
                floor.columns = line.len();
            } else if line.len() != floor.columns {
                return Err(FloorError::Jagged {
                    row,
                    expected: floor.columns,
                    actual: line.len(),
                });
            }

            for (col, &byte) in line.iter().enumerate() {
                let cell = match byte {
                    ROLL => true,
                    EMPTY => false,
                    byte => {
                        return Err(FloorError::UnexpectedCell {
                            row,
                            col,
                            cell: char::from(byte),
                        })
                    }
                };

                floor.cells.push(cell);
            }
        }

        cell_bit(floor.cells.len())?;
        Ok(floor)
    }

    /// Number of rows on the floor.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.grid().rows_len()
    }

    /// Number of columns on the floor.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Test if the given position holds a roll. Out of bounds positions are
    /// empty.
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.grid().try_get(pos.row, pos.col).copied().unwrap_or(false)
    }

    /// Count the number of rolls on the floor.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Count the rolls among the up to eight cells surrounding `(row, col)`.
    pub fn count_occupied_neighbors(&self, row: usize, col: usize) -> usize {
        let grid = self.grid();

        grid.neighbors(row, col)
            .filter(|&(r, c)| *grid.get(r, c))
            .count()
    }

    /// Find every roll which is currently accessible, in row-major order.
    pub fn find_accessible(&self) -> Vec<Pos> {
        let grid = self.grid();
        let mut accessible = Vec::new();

        for (row, cells) in grid.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell && self.count_occupied_neighbors(row, col) < THRESHOLD {
                    accessible.push(Pos::new(row, col));
                }
            }
        }

        accessible
    }

    /// Count the rolls which are accessible without removing anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2025::d04::Floor;
    ///
    /// let floor = Floor::from_rows(["@@@", "@@@", "@@@"]).unwrap();
    /// assert_eq!(floor.count_accessible_once(), 4);
    /// ```
    pub fn count_accessible_once(&self) -> usize {
        self.find_accessible().len()
    }

    /// Repeatedly remove all accessible rolls until the floor is stable,
    /// returning the number of rolls removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2025::d04::Floor;
    ///
    /// let mut floor = Floor::from_rows(["@@@", "@@@", "@@@"]).unwrap();
    /// assert_eq!(floor.stabilize(), 9);
    /// assert_eq!(floor.occupied(), 0);
    /// ```
    pub fn stabilize(&mut self) -> usize {
        self.stabilize_with(|_: &Round<'_>| {})
    }

    /// Stabilize the floor while reporting every round to `observer`.
    ///
    /// The observer is called before the removal of a round is applied.
    pub fn stabilize_with<O>(&mut self, mut observer: O) -> usize
    where
        O: Observer,
    {
        let mut total = 0;
        let mut number = 0;

        loop {
            // Every position is computed against the floor as it was at the
            // start of the round.
            let accessible = self.find_accessible();

            if accessible.is_empty() {
                return total;
            }

            number += 1;
            total += accessible.len();

            observer.round(&Round {
                number,
                floor: self,
                removed: &accessible,
                total,
            });

            let mut grid = self.grid_mut();

            for pos in &accessible {
                *grid.get_mut(pos.row, pos.col) = false;
            }
        }
    }

    /// Stabilize the floor, only re-examining neighbors of rolls removed in
    /// the previous round.
    ///
    /// Gives the same result as [Floor::stabilize].
    pub fn stabilize_frontier(&mut self) -> usize {
        let columns = self.columns;
        let mut total = 0;
        let mut frontier = self.find_accessible();
        let mut queued = vec![0u64; self.cells.len().div_ceil(u64::BITS as usize)];
        let mut next = Vec::new();

        while !frontier.is_empty() {
            total += frontier.len();

            let mut grid = self.grid_mut();

            for pos in &frontier {
                *grid.get_mut(pos.row, pos.col) = false;
            }

            queued.clear_bits();

            for pos in &frontier {
                for (row, col) in grid.neighbors(pos.row, pos.col) {
                    let Ok(index) = cell_bit(row * columns + col) else {
                        continue;
                    };

                    if *grid.get(row, col) && !queued.test_bit(index) {
                        queued.set_bit(index);
                        next.push(Pos::new(row, col));
                    }
                }
            }

            // Candidates are evaluated against the floor after the whole
            // previous round was removed.
            next.retain(|pos| self.count_occupied_neighbors(pos.row, pos.col) < THRESHOLD);
            frontier.clear();
            frontier.append(&mut next);
        }

        total
    }

    #[inline]
    fn grid(&self) -> lib::grid::slice::SliceGrid<'_, bool> {
        self.cells.as_grid(self.columns)
    }

    #[inline]
    fn grid_mut(&mut self) -> lib::grid::slice::SliceGridMut<'_, bool> {
        self.cells.as_grid_mut(self.columns)
    }
}

/// Index of a cell in the bitset of queued cells. Floors with more cells than
/// this are rejected when built.
fn cell_bit(index: usize) -> Result<u32, FloorError> {
    u32::try_from(index).map_err(|_| FloorError::TooLarge { cells: index })
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid().rows() {
            for &cell in row {
                write!(f, "{}", char::from(if cell { ROLL } else { EMPTY }))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// A single round of stabilization.
#[derive(Debug)]
pub struct Round<'a> {
    /// The number of the round, starting at 1.
    pub number: usize,
    /// The floor at the start of the round.
    pub floor: &'a Floor,
    /// Rolls which are removed in this round.
    pub removed: &'a [Pos],
    /// Total number of rolls removed once this round is complete.
    pub total: usize,
}

/// Renders the floor with rolls about to be removed marked as `x`.
impl fmt::Display for Round<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.floor.grid().rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let c = if self.removed.binary_search(&Pos::new(row, col)).is_ok() {
                    'x'
                } else {
                    char::from(if cell { ROLL } else { EMPTY })
                };

                write!(f, "{c}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// Observes the rounds of [Floor::stabilize_with].
pub trait Observer {
    /// Called once per round.
    fn round(&mut self, round: &Round<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&Round<'_>),
{
    #[inline]
    fn round(&mut self, round: &Round<'_>) {
        self(round)
    }
}

/// Count the immediately accessible rolls, and the rolls removed by
/// stabilizing the floor.
pub fn solve(input: IStr) -> Result<(usize, usize)> {
    let mut floor = Floor::parse(input)?;
    let once = floor.count_accessible_once();

    let total = floor.stabilize_with(|round: &Round<'_>| {
        log::debug!(
            "round {}: removing {} rolls ({} total)",
            round.number,
            round.removed.len(),
            round.total
        );
        log::trace!("\n{round}");
    });

    log::debug!("{} rolls remain", floor.occupied());
    Ok((once, total))
}
