/// Offsets to the eight cells surrounding a cell, in row-major order.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterator over the in-bounds neighbors of a cell.
///
/// See [Grid::neighbors][crate::grid::Grid::neighbors].
#[derive(Debug, Clone)]
pub struct Neighbors {
    rows: usize,
    columns: usize,
    row: usize,
    column: usize,
    index: usize,
}

impl Neighbors {
    #[inline]
    pub(crate) fn new(rows: usize, columns: usize, row: usize, column: usize) -> Self {
        Self {
            rows,
            columns,
            row,
            column,
            index: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dr, dc)) = OFFSETS.get(self.index) {
            self.index += 1;

            let (Some(row), Some(column)) = (
                self.row.checked_add_signed(dr),
                self.column.checked_add_signed(dc),
            ) else {
                continue;
            };

            if row < self.rows && column < self.columns {
                return Some((row, column));
            }
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len().saturating_sub(self.index)))
    }
}
