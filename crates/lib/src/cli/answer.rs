use core::fmt;

/// The answer to a puzzle, made up of one or more parts.
///
/// # Examples
///
/// ```
/// use lib::cli::Answer;
///
/// assert_eq!((13usize, 43usize).parts(), ["13", "43"]);
/// assert_eq!(7u64.parts(), ["7"]);
/// ```
pub trait Answer: fmt::Debug {
    /// Render each part of the answer.
    fn parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        self.push_parts(&mut parts);
        parts
    }

    /// Push each rendered part of the answer to `parts`.
    fn push_parts(&self, parts: &mut Vec<String>);
}

impl<A, B> Answer for (A, B)
where
    A: Answer,
    B: Answer,
{
    #[inline]
    fn push_parts(&self, parts: &mut Vec<String>) {
        self.0.push_parts(parts);
        self.1.push_parts(parts);
    }
}

macro_rules! display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Answer for $ty {
                #[inline]
                fn push_parts(&self, parts: &mut Vec<String>) {
                    parts.push(self.to_string());
                }
            }
        )*
    };
}

display!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, String, &str);
