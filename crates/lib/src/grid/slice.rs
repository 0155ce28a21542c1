use core::iter::FusedIterator;

use crate::grid::{Grid, GridExt, GridMut};

#[derive(Debug, Clone, Copy)]
struct Dims {
    rows: usize,
    columns: usize,
    stride: usize,
}

impl Dims {
    /// Calculate dimensions for a slice of the given length.
    fn new(len: usize, columns: usize, stride: usize) -> Self {
        let stride = columns.saturating_add(stride);

        // The last row doesn't need a trailing separator.
        let rows = match len.checked_sub(columns) {
            Some(rest) if columns != 0 => rest / stride + 1,
            _ => 0,
        };

        Self {
            rows,
            columns,
            stride,
        }
    }

    #[inline]
    fn row_range(&self, row: usize) -> Option<core::ops::Range<usize>> {
        if row >= self.rows {
            return None;
        }

        let start = row * self.stride;
        Some(start..start + self.columns)
    }
}

/// Immutable slice grid.
#[derive(Debug)]
pub struct SliceGrid<'a, T> {
    data: &'a [T],
    dims: Dims,
}

impl<T> Clone for SliceGrid<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceGrid<'_, T> {}

impl<T> Grid<T> for SliceGrid<'_, T> {
    #[inline]
    fn rows(&self) -> Rows<'_, T> {
        Rows::new(self.data, self.dims)
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        self.data.get(self.dims.row_range(row)?)
    }

    #[inline]
    fn column(&self, column: usize) -> Option<Column<'_, T>> {
        if column >= self.dims.columns {
            return None;
        }

        Some(Column::new(self.data, self.dims, column))
    }

    #[inline]
    fn rows_len(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.dims.columns
    }
}

/// Mutable slice grid.
#[derive(Debug)]
pub struct SliceGridMut<'a, T> {
    data: &'a mut [T],
    dims: Dims,
}

impl<T> Grid<T> for SliceGridMut<'_, T> {
    #[inline]
    fn rows(&self) -> Rows<'_, T> {
        Rows::new(self.data, self.dims)
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        self.data.get(self.dims.row_range(row)?)
    }

    #[inline]
    fn column(&self, column: usize) -> Option<Column<'_, T>> {
        if column >= self.dims.columns {
            return None;
        }

        Some(Column::new(self.data, self.dims, column))
    }

    #[inline]
    fn rows_len(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.dims.columns
    }
}

impl<T> GridMut<T> for SliceGridMut<'_, T> {
    #[inline]
    fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        let range = self.dims.row_range(row)?;
        self.data.get_mut(range)
    }
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T> {
        SliceGrid {
            data: self,
            dims: Dims::new(self.len(), columns, stride),
        }
    }

    #[inline]
    fn as_grid_mut_with_stride(&mut self, columns: usize, stride: usize) -> SliceGridMut<'_, T> {
        let dims = Dims::new(self.len(), columns, stride);
        SliceGridMut { data: self, dims }
    }
}

/// Iterator over rows in a grid.
pub struct Rows<'a, T> {
    data: &'a [T],
    dims: Dims,
    range: core::ops::Range<usize>,
}

impl<'a, T> Rows<'a, T> {
    #[inline]
    fn new(data: &'a [T], dims: Dims) -> Self {
        Self {
            data,
            dims,
            range: 0..dims.rows,
        }
    }
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.range.next()?;
        self.data.get(self.dims.row_range(row)?)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let row = self.range.next_back()?;
        self.data.get(self.dims.row_range(row)?)
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}
impl<T> FusedIterator for Rows<'_, T> {}

/// Iterator over the cells of one column, top to bottom.
pub struct Column<'a, T> {
    data: &'a [T],
    dims: Dims,
    column: usize,
    range: core::ops::Range<usize>,
}

impl<'a, T> Column<'a, T> {
    #[inline]
    fn new(data: &'a [T], dims: Dims, column: usize) -> Self {
        Self {
            data,
            dims,
            column,
            range: 0..dims.rows,
        }
    }

    #[inline]
    fn at(&self, row: usize) -> Option<&'a T> {
        self.data.get(row * self.dims.stride + self.column)
    }
}

impl<'a, T> Iterator for Column<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.range.next()?;
        self.at(row)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for Column<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let row = self.range.next_back()?;
        self.at(row)
    }
}

impl<T> ExactSizeIterator for Column<'_, T> {}
impl<T> FusedIterator for Column<'_, T> {}
