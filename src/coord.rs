//! Board coordinates and their `A1` text notation.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

/// Zero-based board position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move `steps` cells along `(dx, dy)`, or `None` on overflow.
    pub fn offset(self, (dx, dy): (usize, usize), steps: usize) -> Option<Self> {
        Some(Coordinate {
            x: self.x.checked_add(dx.checked_mul(steps)?)?,
            y: self.y.checked_add(dy.checked_mul(steps)?)?,
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Coordinate { x, y }
    }
}

/// Column `x` as spreadsheet letters (A..Z, AA..AZ, ...), built in `buf`.
pub(crate) fn column_letters(x: usize, buf: &mut [u8; 16]) -> &str {
    let mut n = x;
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'A' + (n % 26) as u8;
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    core::str::from_utf8(&buf[i..]).unwrap_or_default()
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 16];
        write!(
            f,
            "{}{}",
            column_letters(self.x, &mut buf),
            self.y as u128 + 1
        )
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    /// Parse `B3`-style notation (case-insensitive, rows 1-based).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or(BoardError::InvalidCoordinate)?;
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() {
            return Err(BoardError::InvalidCoordinate);
        }
        let mut col: usize = 0;
        for b in letters.bytes() {
            let v = (b.to_ascii_uppercase() - b'A') as usize + 1;
            col = col
                .checked_mul(26)
                .and_then(|c| c.checked_add(v))
                .ok_or(BoardError::InvalidCoordinate)?;
        }
        let row: usize = digits.parse().map_err(|_| BoardError::InvalidCoordinate)?;
        if row == 0 {
            return Err(BoardError::InvalidCoordinate);
        }
        Ok(Coordinate {
            x: col - 1,
            y: row - 1,
        })
    }
}
