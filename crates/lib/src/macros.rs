/// Helper macro to build an input processor.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// struct Turn(u8, u32);
///
/// lib::from_input! {
///     |value: (B, u32)| -> Turn {
///         let (B(d), n) = value;
///         ensure!(matches!(d, b'L' | b'R'), "bad direction");
///         Ok(Turn(d, n))
///     }
/// }
///
/// let mut input = IStr::new(b"L42\n");
/// let Turn(d, n) = input.line::<Turn>().unwrap();
/// assert_eq!((d, n), (b'L', 42));
///
/// assert!(IStr::new(b"X1\n").line::<Turn>().is_err());
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = $crate::input::FromInput::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => Err($crate::input::IStrError::new(
                        original.index()..p.index(),
                        $crate::input::ErrorKind::Boxed(e),
                    )),
                }
            }
        }
    };
}

/// Declare the `main` function of a day.
///
/// The solution is called with the input of the day, and its answer is
/// printed. With `--bench` the solution is benchmarked instead. If `expect` is
/// specified the answer is checked against it.
///
/// A day binary is usually a single line, such as
/// `lib::entry!(input = "d04.txt", y2025::d04::solve);`.
///
/// ```no_run
/// use lib::prelude::*;
///
/// fn solve(mut input: IStr) -> Result<(u32, u32)> {
///     let (a, b) = input.line::<(u32, u32)>()?;
///     Ok((a + b, a * b))
/// }
///
/// lib::entry!(input = "d00.txt", solve, expect = (5u32, 6u32));
/// ```
#[macro_export]
macro_rules! entry {
    (input = $path:literal, $solve:path $(,)?) => {
        $crate::entry!(@main $path, $solve, None::<$crate::cli::Unchecked>);
    };

    (input = $path:literal, $solve:path, expect = $expect:expr $(,)?) => {
        $crate::entry!(@main $path, $solve, Some($expect));
    };

    (@main $path:literal, $solve:path, $expected:expr) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            let (input, path) = $crate::input!($path, &opts);

            match opts.mode {
                $crate::cli::Mode::Default => {
                    let value = match $solve(input) {
                        Ok(value) => value,
                        Err(error) => return Err($crate::cli::error_context(path, input, error)),
                    };

                    if let Some(expected) = $expected {
                        if !$crate::cli::OutputEq::output_eq(&value, &expected) {
                            return Err($crate::macro_support::anyhow!(
                                "{value:?} (value) != {expected:?} (expected)"
                            ));
                        }
                    }

                    $crate::cli::answer(&opts, &value)?;
                }
                $crate::cli::Mode::Bench => {
                    let mut b = $crate::cli::Bencher::new();
                    b.iter(&opts, $expected, || $solve(input))?;
                }
            }

            Ok(())
        }
    };
}
