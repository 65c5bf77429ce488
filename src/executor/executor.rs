use std::ffi::OsString;

use thiserror::Error;

use crate::ast::ParsedCommand;
use crate::error::OsError;

/// Exit status of the child when a `<`/`>` target cannot be opened.
pub const REDIRECT_FAILED: i32 = 4;
/// Exit status of the child when the program cannot be executed.
pub const EXEC_FAILED: i32 = 127;
/// Exit status of the shell itself when it cannot fork.
pub const FORK_FAILED: i32 = 3;

/// The child's exit code, or `128 + signo` if it was killed.
pub type ExecStatus = Result<i32, ExecError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecError {
    #[error("{0}")]
    Fork(OsError),
    #[error("{0}")]
    Wait(OsError),
    #[error("argument contains a NUL byte: {0:?}")]
    InvalidArgument(OsString),
    /// `Interpreter` never builds an empty argv; this guards direct `Executor` callers.
    #[error("no command to run")]
    EmptyCommand,
}

/// Runs one external command to completion.
pub trait Executor {
    fn exec(&mut self, cmd: &ParsedCommand) -> ExecStatus;
}
