use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::emit::{print_fibonacci, write_fibonacci};
use crate::error::{FibError, Result};

/// Upper limit read from the command line.
///
/// Terms are always exact `u128` integers whatever the bound's kind; only the
/// comparison against the bound depends on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Integer(i128),
    /// Integers above `i128::MAX`.
    Wide(u128),
    Real(f64),
}

impl Bound {
    pub const DEFAULT: Bound = Bound::Integer(100);

    /// Exclusive `u128` limit admitting the same terms as this bound.
    ///
    /// For an integer term `t` and real `n`, `t < n` iff `t < ceil(n)`. The
    /// float cast saturates at `u128::MAX`, which is above every term.
    pub fn limit(self) -> u128 {
        match self {
            Bound::Integer(n) => u128::try_from(n).unwrap_or(0),
            Bound::Wide(n) => n,
            Bound::Real(n) if n > 0.0 => n.ceil() as u128,
            Bound::Real(_) => 0,
        }
    }

    pub fn write_sequence<W: Write>(self, out: &mut W) -> Result<()> {
        write_fibonacci(out, self.limit())?;
        Ok(())
    }

    /// Prints the sequence below this bound to standard output.
    pub fn print(self) -> Result<()> {
        print_fibonacci(self.limit())?;
        Ok(())
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Bound {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i128>() {
            return Ok(Bound::Integer(n));
        }
        if let Ok(n) = trimmed.parse::<u128>() {
            return Ok(Bound::Wide(n));
        }
        let invalid = |reason| FibError::InvalidBound {
            input: s.to_string(),
            reason,
        };
        let n = trimmed
            .parse::<f64>()
            .map_err(|_| invalid("not a number"))?;
        if n.is_nan() {
            return Err(invalid("NaN is not ordered"));
        }
        Ok(Bound::Real(n))
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Integer(n) => write!(f, "{n}"),
            Bound::Wide(n) => write!(f, "{n}"),
            Bound::Real(n) => write!(f, "{n}"),
        }
    }
}
