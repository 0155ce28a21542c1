use core::fmt;
use std::borrow::Cow;
use std::ops::Range;

use crate::input::{IStr, IStrError};

/// Used in the entry point to associate the location in the input with an
/// error.
#[doc(hidden)]
pub fn error_context<E>(path: Cow<'static, str>, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let pos = find_range(&error).and_then(|span| crate::env::pos_from(data.as_data(), span));
    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, start: usize) -> Self {
        Self { line, start }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.start)
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Option<Range<usize>> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(IStrError::span)
}

#[derive(Debug)]
struct ErrorContext {
    path: Cow<'static, str>,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}", path = self.path),
            None => fmt::Display::fmt(&self.path, f),
        }
    }
}
