//! Loading of puzzle inputs.

use core::ops::Range;
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::cli::error::LineCol;
use crate::cli::Opts;
use crate::input::{IStr, NL};

/// Get the line and column of the start of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<usize>) -> Option<LineCol> {
    let d = data.get(..span.start)?;

    let (line, start) = match memchr::memrchr(NL, d) {
        Some(n) => (memchr::memchr_iter(NL, d).count(), span.start - n - 1),
        None => (0, span.start),
    };

    Some(LineCol::new(line, start))
}

/// Read the input at the given path.
///
/// The buffer is leaked, since parsed values borrow from it for the remainder
/// of the process.
pub fn read(path: &Path) -> Result<IStr> {
    let mut file = File::open(path)?;
    let mut buf = Vec::with_capacity(4096);
    file.read_to_end(&mut buf)?;
    Ok(IStr::new(Vec::leak(buf)))
}

/// Open the input for a day, either the default one or the one overriden
/// through `--input`.
pub fn open(
    opts: &Opts,
    path: &'static str,
    read_path: &'static str,
) -> Result<(IStr, Cow<'static, str>)> {
    let (path, read_path) = match opts.input() {
        Some(custom) => (
            Cow::Owned(custom.display().to_string()),
            custom,
        ),
        None => (Cow::Borrowed(path), Path::new(read_path)),
    };

    log::debug!("reading input from {}", read_path.display());
    let input = read(read_path).with_context(|| anyhow!("{path}"))?;
    Ok((input, path))
}

/// Prepare an input processor.
///
/// Reads `inputs/<path>` relative to the calling crate unless the options
/// specify another file.
#[macro_export]
macro_rules! input {
    ($path:literal, $opts:expr) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        $crate::env::open($opts, path, read_path)?
    }};
}
