//! Text rendering of board grids.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::board::Cell;
use crate::coord::column_letters;

/// One line per row, one glyph per cell, cells separated by a space.
pub fn render_grid(grid: &[Vec<Cell>]) -> String {
    let mut out = String::new();
    for row in grid {
        let mut first = true;
        for cell in row {
            if !first {
                out.push(' ');
            }
            out.push(cell.cell_type().glyph());
            first = false;
        }
        out.push('\n');
    }
    out
}

/// Like [`render_grid`], with column letters on top and 1-based row numbers
/// down the left side.
pub fn render_labeled(grid: &[Vec<Cell>]) -> String {
    Labeled(grid).to_string()
}

struct Labeled<'a>(&'a [Vec<Cell>]);

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.first().map_or(0, |r| r.len());
        f.write_str("   ")?;
        let mut buf = [0u8; 16];
        for x in 0..width {
            write!(f, " {:>2}", column_letters(x, &mut buf))?;
        }
        writeln!(f)?;
        for (y, row) in self.0.iter().enumerate() {
            write!(f, "{:3}", y + 1)?;
            for cell in row {
                write!(f, "  {}", cell.cell_type().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
