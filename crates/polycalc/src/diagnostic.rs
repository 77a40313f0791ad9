use std::io::{self, Write};

/// Every way an input line can fail, each knowing how to render its own
/// `ERROR <line> ...` line to standard error.
///
/// These are not propagated as Rust errors through `?` — the REPL driver
/// never unwinds on a malformed line, it reports and moves on to the
/// next one: nothing is retried, nothing is suppressed by a later
/// success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    WrongCommand,
    WrongPoly,
    StackUnderflow,
    DegByWrongVariable,
    AtWrongValue,
    ComposeWrongParameter,
}

impl Diagnostic {
    fn message(self) -> &'static str {
        match self {
            Diagnostic::WrongCommand => "WRONG COMMAND",
            Diagnostic::WrongPoly => "WRONG POLY",
            Diagnostic::StackUnderflow => "STACK UNDERFLOW",
            Diagnostic::DegByWrongVariable => "DEG BY WRONG VARIABLE",
            Diagnostic::AtWrongValue => "AT WRONG VALUE",
            Diagnostic::ComposeWrongParameter => "COMPOSE WRONG PARAMETER",
        }
    }

    pub fn report(self, line: u64, err: &mut impl Write) -> io::Result<()> {
        writeln!(err, "ERROR {line} {}", self.message())
    }
}
