//! A safe dial with positions `0` through `99`, turned left and right.


use lib::prelude::*;

/// The position the dial starts at.
pub const START: i64 = 50;

/// Number of positions on the dial.
pub const POSITIONS: i64 = 100;

/// A single rotation of the dial, in clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u32),
    Right(u32),
}

lib::from_input! {
    |value: (B, u32)| -> Rotation {
        let (B(d), n) = value;

        Ok(match d {
            b'L' => Rotation::Left(n),
            b'R' => Rotation::Right(n),
            d => bail!("bad direction `{}`", char::from(d)),
        })
    }
}

/// The dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: i64,
}

impl Dial {
    /// Construct a dial pointing at [START].
    #[inline]
    pub const fn new() -> Self {
        Self { position: START }
    }

    /// The position the dial is currently pointing at.
    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Rotate the dial, returning the number of clicks which leaves it
    /// pointing at `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2025::d01::{Dial, Rotation};
    ///
    /// let mut dial = Dial::new();
    /// assert_eq!(dial.rotate(Rotation::Right(1000)), 10);
    /// assert_eq!(dial.position(), 50);
    ///
    /// assert_eq!(dial.rotate(Rotation::Left(50)), 1);
    /// assert_eq!(dial.rotate(Rotation::Left(5)), 0);
    /// assert_eq!(dial.position(), 95);
    /// ```
    pub fn rotate(&mut self, rotation: Rotation) -> u64 {
        let (zeros, end) = match rotation {
            Rotation::Right(n) => {
                let end = self.position + i64::from(n);
                (Integer::div_floor(&end, &POSITIONS), end)
            }
            Rotation::Left(n) => {
                let end = self.position - i64::from(n);

                // Multiples of the dial size in `end..position`, which excludes
                // the position we're starting from.
                let zeros = Integer::div_floor(&(self.position - 1), &POSITIONS)
                    - Integer::div_floor(&(end - 1), &POSITIONS);

                (zeros, end)
            }
        };

        self.position = Integer::mod_floor(&end, &POSITIONS);
        zeros.unsigned_abs()
    }
}

impl Default for Dial {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Count the rotations which end at `0`, and the clicks which pass `0`.
pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut dial = Dial::new();
    let mut rests = 0;
    let mut clicks = 0;

    while let Some(mut line) = input.try_line::<IStr>()? {
        if line.as_data().iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let rotation = line.next::<Rotation>()?;
        clicks += dial.rotate(rotation);

        if dial.position() == 0 {
            rests += 1;
        }

        log::trace!("{rotation:?}: {}", dial.position());
    }

    Ok((rests, clicks))
}
