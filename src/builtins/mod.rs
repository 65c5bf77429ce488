mod commands;

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

use crate::error::OsError;

pub use commands::{CdCommand, ExitCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinStatus {
    Continue,
    Exit(i32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("{0}")]
    Os(OsError),
}

pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    /// `args` excludes the command name itself.
    fn run(&self, args: &[OsString]) -> Result<BuiltinStatus, BuiltinError>;
}

/// Commands that run inside the shell process instead of a child.
pub struct BuiltinManager {
    commands: HashMap<&'static str, Box<dyn BuiltinCommand>>,
}

impl BuiltinManager {
    pub fn new() -> Self {
        let mut mgr = BuiltinManager {
            commands: HashMap::new(),
        };
        mgr.register(Box::new(CdCommand));
        mgr.register(Box::new(ExitCommand));
        mgr
    }

    fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name(), cmd);
    }

    /// Builtin names are ASCII, so a non-UTF-8 word is never one.
    pub fn get(&self, name: &OsStr) -> Option<&dyn BuiltinCommand> {
        let name = name.to_str()?;
        self.commands.get(name).map(|cmd| cmd.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nop;

    impl BuiltinCommand for Nop {
        fn name(&self) -> &'static str {
            "nop"
        }
        fn run(&self, _args: &[OsString]) -> Result<BuiltinStatus, BuiltinError> {
            Ok(BuiltinStatus::Continue)
        }
    }

    #[test]
    fn test_default_builtins() {
        let mgr = BuiltinManager::new();
        assert!(mgr.get(OsStr::new("cd")).is_some());
        assert!(mgr.get(OsStr::new("exit")).is_some());
        assert!(mgr.get(OsStr::new("help")).is_none());
        assert!(mgr.get(OsStr::new("ls")).is_none());
    }

    #[test]
    fn test_non_utf8_name_is_not_builtin() {
        use std::os::unix::ffi::OsStrExt;
        let mgr = BuiltinManager::new();
        assert!(mgr.get(OsStr::from_bytes(b"c\xffd")).is_none());
    }

    #[test]
    fn test_register_custom() {
        let mut mgr = BuiltinManager::new();
        mgr.register(Box::new(Nop));
        let nop = mgr.get(OsStr::new("nop")).unwrap();
        assert_eq!(nop.run(&[]), Ok(BuiltinStatus::Continue));
    }
}
