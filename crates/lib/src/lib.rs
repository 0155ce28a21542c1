pub mod cli;
pub mod env;
pub mod grid;
pub mod input;
mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::{anyhow, Error};
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridExt, GridMut};
    pub use crate::input::{Delimited, IStr, Range, Split, B};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bittle::{Bits, BitsMut};
    pub use bstr::{BStr, ByteSlice};
    pub use num::Integer;
}
