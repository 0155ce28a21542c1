//! Two-dimensional views over flat slices.

mod neighbors;
pub mod slice;


pub use self::neighbors::Neighbors;

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

use self::sealed::Sealed;
use self::slice::{Column, Rows, SliceGrid, SliceGridMut};

pub trait GridExt<T>: Sealed {
    /// Convert type into grid with a stride of `0`.
    ///
    /// See [GridExt::as_grid_with_stride].
    #[inline]
    fn as_grid(&self, columns: usize) -> SliceGrid<'_, T> {
        self.as_grid_with_stride(columns, 0)
    }

    /// Convert type into a grid with the given topology.
    ///
    /// The `columns` is the width of a row while `stride` is the number of
    /// elements between each row.
    ///
    /// This allows for treating raw input such as `b"ab\ncd\n"` as a grid by
    /// specifying a stride of `1` to skip over the newlines. The trailing
    /// separator of the last row is optional.
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T>;

    /// Convert type into a mutable grid with a stride of `0`.
    ///
    /// See [GridExt::as_grid_mut_with_stride].
    #[inline]
    fn as_grid_mut(&mut self, columns: usize) -> SliceGridMut<'_, T> {
        self.as_grid_mut_with_stride(columns, 0)
    }

    /// Convert type into a mutable grid with the given topology.
    fn as_grid_mut_with_stride(&mut self, columns: usize, stride: usize) -> SliceGridMut<'_, T>;
}

pub trait Grid<T> {
    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    ///
    /// assert!(grid.rows().flatten().copied().eq([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]));
    /// ```
    fn rows(&self) -> Rows<'_, T>;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[T]>;

    /// Access the specified column in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = b"abc\ndef\n";
    /// let grid = data.as_grid_with_stride(3, 1);
    ///
    /// assert!(grid.column(1).unwrap().copied().eq(*b"be"));
    /// assert!(grid.column(3).is_none());
    /// ```
    fn column(&self, column: usize) -> Option<Column<'_, T>>;

    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Get number of columns in the grid.
    fn columns_len(&self) -> usize;

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    fn get(&self, row: usize, column: usize) -> &T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = data.as_grid(4);
    ///
    /// assert_eq!(grid.try_get(0, 1), Some(&2));
    /// assert_eq!(grid.try_get(2, 0), Some(&9));
    /// assert_eq!(grid.try_get(3, 0), None);
    /// ```
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.get(column)
    }

    /// Iterate over the in-bounds coordinates of the up to eight cells
    /// surrounding `(row, column)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [0u8; 9];
    /// let grid = data.as_grid(3);
    ///
    /// assert_eq!(grid.neighbors(0, 0).count(), 3);
    /// assert_eq!(grid.neighbors(0, 1).count(), 5);
    /// assert_eq!(grid.neighbors(1, 1).count(), 8);
    /// ```
    #[inline]
    fn neighbors(&self, row: usize, column: usize) -> Neighbors {
        Neighbors::new(self.rows_len(), self.columns_len(), row, column)
    }
}

impl<G, T> Grid<T> for &G
where
    G: ?Sized + Grid<T>,
{
    #[inline]
    fn rows(&self) -> Rows<'_, T> {
        (**self).rows()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        (**self).row(row)
    }

    #[inline]
    fn column(&self, column: usize) -> Option<Column<'_, T>> {
        (**self).column(column)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }

    #[inline]
    fn columns_len(&self) -> usize {
        (**self).columns_len()
    }
}

pub trait GridMut<T>: Grid<T> {
    /// Access the specified row in the grid mutably.
    fn row_mut(&mut self, row: usize) -> Option<&mut [T]>;

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut values = [0u8; 6];
    /// let mut grid = values.as_grid_mut(3);
    /// *grid.get_mut(1, 2) = 7;
    ///
    /// assert_eq!(values, [0, 0, 0, 0, 0, 7]);
    /// ```
    #[inline]
    #[track_caller]
    fn get_mut(&mut self, row: usize, column: usize) -> &mut T {
        match self.try_get_mut(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    #[inline]
    fn try_get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.row_mut(row)?.get_mut(column)
    }
}
