use std::io::{self, BufRead, Write};

use polycalc_core::{parse_poly, Poly};

use crate::command::{parse_command, Command};
use crate::diagnostic::Diagnostic;
use crate::stack::Stack;

/// Runs the calculator to completion against `input`, writing results to
/// `out` and diagnostics to `err`. Returns on EOF; the caller decides the
/// process exit code (always `0` for a clean EOF — a non-zero
/// exit is only reachable through the allocator aborting the process,
/// which this function never does on purpose).
pub fn run(mut input: impl BufRead, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    let mut stack = Stack::new();
    let mut line_no: u64 = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line_no += 1;
        process_line(&buf, line_no, &mut stack, out, err)?;
    }
}

fn process_line(
    line: &[u8],
    line_no: u64,
    stack: &mut Stack,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match line.first() {
        None | Some(b'#') | Some(b'\n') => Ok(()),
        Some(&b) if b.is_ascii_alphabetic() => match parse_command(line) {
            Ok(cmd) => execute(cmd, stack, line_no, out, err),
            Err(diag) => diag.report(line_no, err),
        },
        _ => match parse_poly(line) {
            Ok(p) => {
                stack.push(p);
                Ok(())
            }
            Err(_) => Diagnostic::WrongPoly.report(line_no, err),
        },
    }
}

fn execute(
    cmd: Command,
    stack: &mut Stack,
    line_no: u64,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match cmd {
        Command::Zero => {
            stack.push(Poly::zero());
            Ok(())
        }

        Command::IsCoeff => peek_and_print(stack, line_no, out, err, |p| p.is_coefficient()),
        Command::IsZero => peek_and_print(stack, line_no, out, err, |p| p.is_zero()),
        Command::Deg => peek_and_print_int(stack, line_no, out, err, |p| p.deg()),
        Command::DegBy(idx) => {
            peek_and_print_int(stack, line_no, out, err, |p| p.deg_by(as_usize(idx)))
        }
        Command::Print => match stack.peek(0) {
            Some(p) => writeln!(out, "{p}"),
            None => Diagnostic::StackUnderflow.report(line_no, err),
        },

        Command::Clone => match stack.peek(0).cloned() {
            Some(p) => {
                stack.push(p);
                Ok(())
            }
            None => Diagnostic::StackUnderflow.report(line_no, err),
        },

        Command::IsEq => {
            if stack.len() < 2 {
                return Diagnostic::StackUnderflow.report(line_no, err);
            }
            let equal = stack.peek(0).unwrap().equals(stack.peek(1).unwrap());
            writeln!(out, "{}", equal as u8)
        }

        Command::Add => binary_op(stack, line_no, err, |top, below| top + below),
        Command::Mul => binary_op(stack, line_no, err, |top, below| top * below),
        Command::Sub => binary_op(stack, line_no, err, |top, below| top - below),

        Command::Neg => {
            if stack.is_empty() {
                return Diagnostic::StackUnderflow.report(line_no, err);
            }
            let p = stack.pop().unwrap();
            stack.push(-&p);
            Ok(())
        }

        Command::Pop => {
            if stack.pop().is_none() {
                Diagnostic::StackUnderflow.report(line_no, err)
            } else {
                Ok(())
            }
        }

        Command::At(x) => {
            if stack.is_empty() {
                return Diagnostic::StackUnderflow.report(line_no, err);
            }
            let p = stack.pop().unwrap();
            stack.push(p.at(x));
            Ok(())
        }

        Command::Compose(k) => {
            let k = as_usize(k);
            if k >= stack.len() {
                return Diagnostic::StackUnderflow.report(line_no, err);
            }
            let p = stack.pop().unwrap();
            let mut q: Vec<Poly> = (0..k).map(|_| stack.pop().unwrap()).collect();
            q.reverse();
            stack.push(p.compose(&q));
            Ok(())
        }
    }
}

fn peek_and_print(
    stack: &Stack,
    line_no: u64,
    out: &mut impl Write,
    err: &mut impl Write,
    f: impl FnOnce(&Poly) -> bool,
) -> io::Result<()> {
    match stack.peek(0) {
        Some(p) => writeln!(out, "{}", f(p) as u8),
        None => Diagnostic::StackUnderflow.report(line_no, err),
    }
}

fn peek_and_print_int(
    stack: &Stack,
    line_no: u64,
    out: &mut impl Write,
    err: &mut impl Write,
    f: impl FnOnce(&Poly) -> i32,
) -> io::Result<()> {
    match stack.peek(0) {
        Some(p) => writeln!(out, "{}", f(p)),
        None => Diagnostic::StackUnderflow.report(line_no, err),
    }
}

fn binary_op(
    stack: &mut Stack,
    line_no: u64,
    err: &mut impl Write,
    f: impl FnOnce(&Poly, &Poly) -> Poly,
) -> io::Result<()> {
    if stack.len() < 2 {
        return Diagnostic::StackUnderflow.report(line_no, err);
    }
    let top = stack.pop().unwrap();
    let below = stack.pop().unwrap();
    stack.push(f(&top, &below));
    Ok(())
}

/// Saturates rather than wraps, so an absurdly large `DEG_BY`/`COMPOSE`
/// argument on a 32-bit target reads as "obviously too large" instead of
/// silently truncating to something small and plausible.
fn as_usize(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}
