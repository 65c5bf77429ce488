use std::ffi::{CString, OsStr, OsString};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::io::RawFd;
use std::process;

use log::{debug, trace};
use nix::errno::Errno;
use nix::fcntl::{OFlag, open};
use nix::sys::stat::Mode;
use nix::sys::wait::{WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, close, dup2, execvp, fork};

use super::executor::{EXEC_FAILED, ExecError, ExecStatus, Executor, REDIRECT_FAILED};
use crate::ast::ParsedCommand;
use crate::error::OsError;

/// fork, set up redirections in the child, execvp, and block on waitpid.
pub struct ForkExecutor;

impl Executor for ForkExecutor {
    fn exec(&mut self, cmd: &ParsedCommand) -> ExecStatus {
        let argv = to_cstrings(&cmd.argv)?;
        if argv.is_empty() {
            return Err(ExecError::EmptyCommand);
        }

        // Anything still buffered would be written twice after the fork.
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();

        // SAFETY: the shell is single-threaded, and the child only opens,
        // dups and execs before exiting.
        match unsafe { fork() } {
            Ok(ForkResult::Parent { child }) => {
                debug!("spawned {:?} as pid {}", cmd.argv, child);
                wait_for(child)
            }
            Ok(ForkResult::Child) => run_child(cmd, &argv),
            Err(errno) => Err(ExecError::Fork(OsError(errno))),
        }
    }
}

fn to_cstrings(args: &[OsString]) -> Result<Vec<CString>, ExecError> {
    args.iter()
        .map(|arg| {
            CString::new(arg.as_bytes()).map_err(|_| ExecError::InvalidArgument(arg.clone()))
        })
        .collect()
}

// Diagnostics are prefixed with the file or program that failed.
fn run_child(cmd: &ParsedCommand, argv: &[CString]) -> ! {
    if let Some(path) = &cmd.stdin {
        if let Err(err) = redirect(path, OFlag::O_RDONLY, Mode::empty(), libc::STDIN_FILENO) {
            eprintln!("{}: {}", path.to_string_lossy(), err);
            process::exit(REDIRECT_FAILED);
        }
    }
    if let Some(path) = &cmd.stdout {
        let flags = OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC;
        let mode = Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IROTH;
        if let Err(err) = redirect(path, flags, mode, libc::STDOUT_FILENO) {
            eprintln!("{}: {}", path.to_string_lossy(), err);
            process::exit(REDIRECT_FAILED);
        }
    }

    match execvp(&argv[0], argv) {
        Ok(never) => match never {},
        Err(errno) => {
            eprintln!("{}: {}", argv[0].to_string_lossy(), OsError(errno));
            process::exit(EXEC_FAILED);
        }
    }
}

fn redirect(path: &OsStr, flags: OFlag, mode: Mode, target: RawFd) -> Result<(), OsError> {
    let fd = open(path, flags, mode)?;
    if fd == target {
        return Ok(());
    }
    let dup_result = dup2(fd, target);
    let _ = close(fd);
    dup_result?;
    Ok(())
}

fn wait_for(pid: Pid) -> ExecStatus {
    loop {
        match waitpid(pid, None) {
            Ok(WaitStatus::Exited(_, code)) => {
                debug!("pid {} exited with {}", pid, code);
                return Ok(code);
            }
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                debug!("pid {} killed by {:?}", pid, signal);
                return Ok(128 + signal as i32);
            }
            Ok(other) => trace!("pid {}: {:?}", pid, other),
            Err(Errno::EINTR) => continue,
            Err(errno) => return Err(ExecError::Wait(OsError(errno))),
        }
    }
}
