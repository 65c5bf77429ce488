use std::ffi::OsString;

use log::debug;
use nix::unistd::chdir;

use super::{BuiltinCommand, BuiltinError, BuiltinStatus};
use crate::error::OsError;

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    // Only the first argument is looked at; anything after it, redirections
    // included, is ignored.
    fn run(&self, args: &[OsString]) -> Result<BuiltinStatus, BuiltinError> {
        let target = args.first().ok_or(BuiltinError::Usage("cd <path>"))?;
        chdir(target.as_os_str()).map_err(|errno| BuiltinError::Os(OsError(errno)))?;
        debug!("cd: now in {:?}", target);
        Ok(BuiltinStatus::Continue)
    }
}

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn run(&self, _args: &[OsString]) -> Result<BuiltinStatus, BuiltinError> {
        Ok(BuiltinStatus::Exit(0))
    }
}
