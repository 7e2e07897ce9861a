//! Plain-text class tables.
//!
//! ```text
//! Class Prototype Count  Fraction      Totals
//!    1        0      2    0.500        2    0.500
//!    2        2      2    0.500        4    1.000
//! ```
//!
//! The last two columns are running totals of count and fraction. Long
//! tables keep their first and last `max_lines / 2` rows and replace the
//! rest with a single `...` line; running totals still include hidden rows.

use crate::partition::ClassEntry;
use core::fmt;

/// Default row limit for [`ClassTable`].
pub const DEFAULT_MAX_LINES: usize = 1000;

/// A class index rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct ClassTable<'a> {
    entries: &'a [ClassEntry],
    max_lines: usize,
}

impl<'a> ClassTable<'a> {
    /// Create a table over `entries`, showing at most `max_lines` rows.
    pub fn new(entries: &'a [ClassEntry], max_lines: usize) -> Self {
        Self { entries, max_lines }
    }
}

impl fmt::Display for ClassTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Class Prototype Count  Fraction      Totals")?;

        let n = self.entries.len();
        let (head, tail) = if n > self.max_lines {
            let half = self.max_lines / 2;
            (half, n - half)
        } else {
            (n, n)
        };

        let mut ncum = 0usize;
        let mut fcum = 0.0f64;
        let mut elided = false;
        for (i, c) in self.entries.iter().enumerate() {
            ncum += c.count;
            fcum += c.fraction;
            if i < head || i >= tail {
                writeln!(
                    f,
                    "{:4} {:8} {:6} {:8.3}   {:6} {:8.3}",
                    c.class, c.prototype, c.count, c.fraction, ncum, fcum
                )?;
            } else if !elided {
                writeln!(f, "...")?;
                elided = true;
            }
        }
        Ok(())
    }
}
