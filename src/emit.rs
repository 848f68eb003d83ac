use std::io::{self, BufWriter, Write};

use log::debug;

use crate::sequence::{fibonacci_below, Term};

/// Writes every term below `bound` separated by single spaces, then a newline.
///
/// The newline is written even when no term qualifies.
pub fn write_fibonacci<W: Write, T: Term>(out: &mut W, bound: T) -> io::Result<()> {
    let mut emitted = 0usize;
    for term in fibonacci_below(bound) {
        if emitted > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{term}")?;
        emitted += 1;
    }
    writeln!(out)?;
    debug!("Emitted {emitted} terms below {bound}");
    Ok(())
}

pub fn render_fibonacci<T: Term>(bound: T) -> String {
    let mut buf = Vec::new();
    write_fibonacci(&mut buf, bound).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("terms render as ASCII digits")
}

/// Prints the sequence below `bound` to standard output.
pub fn print_fibonacci<T: Term>(bound: T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_fibonacci(&mut out, bound)?;
    out.flush()
}
