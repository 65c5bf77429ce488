use std::ffi::{OsStr, OsString};
use std::fmt;

/// An external command ready to run: argv plus optional redirection targets.
///
/// Built fresh for every input line and dropped once the child has been reaped.
/// Words are kept as raw bytes so non-UTF-8 names reach the program unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Program name first, then its arguments, with redirections removed.
    pub argv: Vec<OsString>,
    /// `< path`
    pub stdin: Option<OsString>,
    /// `> path`, created or truncated
    pub stdout: Option<OsString>,
}

impl ParsedCommand {
    pub fn new(argv: Vec<OsString>) -> Self {
        ParsedCommand {
            argv,
            stdin: None,
            stdout: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    In,
    Out,
}

impl RedirectKind {
    pub fn from_token(token: &OsStr) -> Option<Self> {
        match token.as_encoded_bytes() {
            b"<" => Some(RedirectKind::In),
            b">" => Some(RedirectKind::Out),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RedirectKind::In => "<",
            RedirectKind::Out => ">",
        }
    }
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
