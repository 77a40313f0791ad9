//! Reads commands and polynomial literals from standard input, one line
//! at a time, until EOF, writing results to standard output and
//! diagnostics to standard error.

use std::io::{self, Write};

use polycalc::repl;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let mut out = stdout.lock();
    let mut err = stderr.lock();

    repl::run(stdin.lock(), &mut out, &mut err)?;
    out.flush()?;
    err.flush()
}
