//! A worksheet of arithmetic problems laid out side by side.
//!
//! Problems are separated by columns which are blank in every line, and the
//! last line of the worksheet holds the operator of each problem.

#[cfg(test)]
mod tests;

use core::ops;

use lib::prelude::*;
use thiserror::Error;

/// Error raised when evaluating a [Worksheet].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorksheetError {
    #[error("problem in columns {start}..{end} is missing an operator")]
    MissingOperator { start: usize, end: usize },
    #[error("unexpected operator {op:?} in column {column}")]
    UnexpectedOperator { column: usize, op: char },
    #[error("unexpected cell {cell:?} at row {row}, column {column}")]
    UnexpectedCell { row: usize, column: usize, cell: char },
    #[error("problem in columns {start}..{end} overflows")]
    Overflow { start: usize, end: usize },
    #[error("worksheet is {width} columns wide")]
    TooWide { width: usize },
}

/// The operation of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    /// Apply the operation over `numbers`, returning `None` on overflow.
    fn apply(self, numbers: &[u64]) -> Option<u64> {
        let mut it = numbers.iter().copied();

        match self {
            Op::Add => it.try_fold(0u64, u64::checked_add),
            Op::Mul => it.try_fold(1u64, u64::checked_mul),
        }
    }
}

/// A worksheet, with every line padded with spaces to the same width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    cells: Vec<u8>,
    width: usize,
    rows: usize,
}

impl Worksheet {
    /// Parse a worksheet, skipping blank lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    /// use y2025::d06::Worksheet;
    ///
    /// let worksheet = Worksheet::parse(IStr::new(b"1 23\n4  5\n+ * \n")).unwrap();
    /// assert_eq!(worksheet.problems(), [0..1, 2..4]);
    /// ```
    pub fn parse(mut input: IStr) -> Result<Self> {
        let mut lines = Vec::new();

        while let Some(line) = input.try_line::<&[u8]>()? {
            if !line.iter().all(u8::is_ascii_whitespace) {
                lines.push(line);
            }
        }

        let width = lines.iter().map(|line| line.len()).max().unwrap_or_default();
        column_bit(width)?;

        let mut cells = Vec::with_capacity(width * lines.len());

        for line in &lines {
            cells.extend_from_slice(line);
            cells.resize(cells.len() + width - line.len(), b' ');
        }

        Ok(Self {
            cells,
            width,
            rows: lines.len(),
        })
    }

    /// Column spans of every problem, left to right.
    pub fn problems(&self) -> Vec<ops::Range<usize>> {
        let mut used = vec![0u64; self.width.div_ceil(u64::BITS as usize)];

        for row in self.grid().rows() {
            for (column, b) in row.iter().enumerate() {
                if b.is_ascii_whitespace() {
                    continue;
                }

                if let Ok(bit) = column_bit(column) {
                    used.set_bit(bit);
                }
            }
        }

        let mut problems = Vec::new();
        let mut start = None;

        for column in 0..self.width {
            let is_used = column_bit(column).is_ok_and(|bit| used.test_bit(bit));

            match (start, is_used) {
                (None, true) => {
                    start = Some(column);
                }
                (Some(s), false) => {
                    problems.push(s..column);
                    start = None;
                }
                _ => {}
            }
        }

        if let Some(s) = start {
            problems.push(s..self.width);
        }

        problems
    }

    /// Solve every problem reading its numbers row by row, returning the grand
    /// total.
    pub fn by_rows(&self) -> Result<u64, WorksheetError> {
        let grid = self.grid();

        self.total(|span| {
            let mut numbers = Vec::new();

            for row in 0..self.numbers() {
                let cells = span.clone().map(|column| (row, column, *grid.get(row, column)));

                if let Some(n) = number(cells)? {
                    numbers.push(n);
                }
            }

            Ok(numbers)
        })
    }

    /// Solve every problem reading each column as a number top to bottom,
    /// returning the grand total.
    ///
    /// Problems are read right to left, which doesn't affect the total.
    pub fn by_columns(&self) -> Result<u64, WorksheetError> {
        let grid = self.grid();

        self.total(|span| {
            let mut numbers = Vec::new();

            for column in span.rev() {
                let Some(cells) = grid.column(column) else {
                    continue;
                };

                let cells = cells
                    .take(self.numbers())
                    .enumerate()
                    .map(|(row, &cell)| (row, column, cell));

                if let Some(n) = number(cells)? {
                    numbers.push(n);
                }
            }

            Ok(numbers)
        })
    }

    fn total<T>(&self, mut numbers: T) -> Result<u64, WorksheetError>
    where
        T: FnMut(ops::Range<usize>) -> Result<Vec<u64>, WorksheetError>,
    {
        let mut total = 0u64;

        for span in self.problems().into_iter().rev() {
            let op = self.operator(span.clone())?;
            let numbers = numbers(span.clone())?;

            if numbers.is_empty() {
                continue;
            }

            let overflow = || WorksheetError::Overflow {
                start: span.start,
                end: span.end,
            };

            let value = op.apply(&numbers).ok_or_else(overflow)?;
            log::trace!("{op:?} {numbers:?} = {value}");
            total = total.checked_add(value).ok_or_else(overflow)?;
        }

        Ok(total)
    }

    /// Find the operator of the problem spanning the given columns.
    fn operator(&self, span: ops::Range<usize>) -> Result<Op, WorksheetError> {
        let missing = WorksheetError::MissingOperator {
            start: span.start,
            end: span.end,
        };

        let Some(row) = self.rows.checked_sub(1) else {
            return Err(missing);
        };

        let grid = self.grid();

        let Some(line) = grid.row(row) else {
            return Err(missing);
        };

        for column in span {
            match line.get(column).copied() {
                Some(b'+') => return Ok(Op::Add),
                Some(b'*') => return Ok(Op::Mul),
                Some(b) if b.is_ascii_whitespace() => {}
                Some(b) => {
                    return Err(WorksheetError::UnexpectedOperator {
                        column,
                        op: char::from(b),
                    })
                }
                None => break,
            }
        }

        Err(missing)
    }

    /// Number of rows holding numbers.
    #[inline]
    fn numbers(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    #[inline]
    fn grid(&self) -> lib::grid::slice::SliceGrid<'_, u8> {
        self.cells.as_grid(self.width)
    }
}

/// Index of `column` in the bitset of used columns. Worksheets wider than
/// this are rejected when parsed.
fn column_bit(column: usize) -> Result<u32, WorksheetError> {
    u32::try_from(column).map_err(|_| WorksheetError::TooWide { width: column })
}

/// Read the digits out of `cells` as a number, ignoring whitespace.
fn number<I>(cells: I) -> Result<Option<u64>, WorksheetError>
where
    I: IntoIterator<Item = (usize, usize, u8)>,
{
    let mut value = None::<u64>;

    for (row, column, cell) in cells {
        match cell {
            b'0'..=b'9' => {
                let n = value
                    .unwrap_or_default()
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(u64::from(cell - b'0')))
                    .ok_or(WorksheetError::Overflow {
                        start: column,
                        end: column + 1,
                    })?;

                value = Some(n);
            }
            cell if cell.is_ascii_whitespace() => {}
            cell => {
                return Err(WorksheetError::UnexpectedCell {
                    row,
                    column,
                    cell: char::from(cell),
                })
            }
        }
    }

    Ok(value)
}

/// Grand totals of the worksheet read by rows, and read by columns.
pub fn solve(input: IStr) -> Result<(u64, u64)> {
    let worksheet = Worksheet::parse(input)?;
    log::debug!("{} problems", worksheet.problems().len());
    Ok((worksheet.by_rows()?, worksheet.by_columns()?))
}
