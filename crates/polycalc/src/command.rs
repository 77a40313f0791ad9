use polycalc_core::parser::{cursor, read_coefficient, read_unsigned, Cursor, ReaderError};

use crate::diagnostic::Diagnostic;

/// A fully-parsed command line, ready for [`crate::repl`] to execute
/// against the stack. Parsing and execution are kept separate so that
/// every way parsing can fail maps to exactly one [`Diagnostic`], decided
/// here, before any stack arity is even looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    DegBy(u64),
    At(i64),
    Print,
    Pop,
    Compose(u64),
}

/// Parses a command line (the token plus an optional argument), applying
/// the exact diagnostic precedence of the original dispatcher: a known
/// command name with a malformed or missing argument reports that
/// command's own diagnostic, never `WRONG COMMAND`; only an unrecognized
/// token, or a no-argument command followed by trailing content, reports
/// `WRONG COMMAND`.
pub fn parse_command(line: &[u8]) -> Result<Command, Diagnostic> {
    let mut chars = cursor(line);
    let name = read_name(&mut chars)?;

    let terminator = chars.peek().copied();
    let end_of_line = matches!(terminator, None | Some(b'\n'));

    match name.as_slice() {
        b"DEG_BY" => parse_arg(
            &mut chars,
            terminator,
            Diagnostic::DegByWrongVariable,
            read_unsigned,
        )
        .map(Command::DegBy),
        b"AT" => {
            parse_arg(&mut chars, terminator, Diagnostic::AtWrongValue, read_coefficient)
                .map(Command::At)
        }
        b"COMPOSE" => parse_arg(
            &mut chars,
            terminator,
            Diagnostic::ComposeWrongParameter,
            read_unsigned,
        )
        .map(Command::Compose),
        b"ZERO" if end_of_line => Ok(Command::Zero),
        b"IS_COEFF" if end_of_line => Ok(Command::IsCoeff),
        b"IS_ZERO" if end_of_line => Ok(Command::IsZero),
        b"CLONE" if end_of_line => Ok(Command::Clone),
        b"ADD" if end_of_line => Ok(Command::Add),
        b"MUL" if end_of_line => Ok(Command::Mul),
        b"NEG" if end_of_line => Ok(Command::Neg),
        b"SUB" if end_of_line => Ok(Command::Sub),
        b"IS_EQ" if end_of_line => Ok(Command::IsEq),
        b"DEG" if end_of_line => Ok(Command::Deg),
        b"PRINT" if end_of_line => Ok(Command::Print),
        b"POP" if end_of_line => Ok(Command::Pop),
        _ => Err(Diagnostic::WrongCommand),
    }
}

/// Reads the command token: letters and underscores up to the first
/// whitespace byte, newline, or EOF. Any other byte encountered while
/// scanning is an immediate `WRONG COMMAND`.
fn read_name(chars: &mut Cursor<'_>) -> Result<Vec<u8>, Diagnostic> {
    let mut name = Vec::new();
    loop {
        match chars.peek() {
            None | Some(&b'\n') => return Ok(name),
            Some(&b) if b.is_ascii_whitespace() => return Ok(name),
            Some(&b) if b.is_ascii_alphabetic() || b == b'_' => {
                name.push(b);
                chars.next();
            }
            _ => return Err(Diagnostic::WrongCommand),
        }
    }
}

/// Reads a command argument that must be introduced by exactly one space
/// and terminated by newline or EOF, reporting `diag` for any deviation
/// (missing space, malformed value, or trailing characters).
fn parse_arg<T>(
    chars: &mut Cursor<'_>,
    terminator: Option<u8>,
    diag: Diagnostic,
    read: impl FnOnce(&mut Cursor<'_>) -> Result<T, ReaderError>,
) -> Result<T, Diagnostic> {
    if terminator != Some(b' ') {
        return Err(diag);
    }
    chars.next();
    let value = read(chars).map_err(|_| diag)?;
    match chars.peek() {
        None | Some(&b'\n') => Ok(value),
        _ => Err(diag),
    }
}
