use std::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError};

/// Iterator over an [IStr], parsing one `T` at a time.
pub struct Iter<'a, T> {
    input: &'a mut IStr,
    _marker: PhantomData<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_next().transpose()
    }
}

/// Iterator over inputs.
pub trait InputIterator {
    /// Current index of the input iterator.
    fn index(&self) -> usize;

    /// Get the next chunk.
    fn next(&mut self) -> Option<IStr>;
}

impl<I> InputIterator for &mut I
where
    I: InputIterator,
{
    #[inline]
    fn index(&self) -> usize {
        (**self).index()
    }

    #[inline]
    fn next(&mut self) -> Option<IStr> {
        (**self).next()
    }
}
