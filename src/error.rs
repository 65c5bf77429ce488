use std::fmt;

use nix::errno::Errno;
use thiserror::Error;

use crate::builtins::BuiltinError;
use crate::executor::ExecError;
use crate::parser::{ParseError, RedirectError};

/// Prints an errno the way `strerror` callers do: `Error 2 (No such file or directory)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsError(pub Errno);

impl OsError {
    pub fn code(&self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {} ({})", self.code(), self.0.desc())
    }
}

impl From<Errno> for OsError {
    fn from(errno: Errno) -> Self {
        OsError(errno)
    }
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Redirect(#[from] RedirectError),
    #[error(transparent)]
    Builtin(#[from] BuiltinError),
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl ShellError {
    /// Only a failed fork takes the whole shell down.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Exec(ExecError::Fork(_)))
    }
}
