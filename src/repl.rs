use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::executor::{Executor, FORK_FAILED};
use crate::interpreter::{Interpreter, Outcome};
use crate::prompt::ShellPrompt;

/// Prompt, read, evaluate until `exit` or end of input.
///
/// Returns the status the shell process should exit with.
pub fn run<E, R, W>(interp: &mut Interpreter<E>, input: &mut R, out: &mut W) -> i32
where
    E: Executor,
    R: BufRead,
    W: Write,
{
    let prompt = ShellPrompt::new(&interp.config().prompt_suffix);

    loop {
        if let Err(err) = prompt.show_prompt(out) {
            eprintln!("Error writing prompt: {}", err);
            return 1;
        }

        let line = match prompt.read_line(input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                // EOF (e.g. Ctrl-D)
                let _ = writeln!(out);
                debug!("end of input");
                return 0;
            }
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                return 1;
            }
        };

        match interp.eval(&line) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit(code)) => return code,
            Err(err) if err.is_fatal() => {
                eprintln!("{}", err);
                warn!("giving up: {}", err);
                return FORK_FAILED;
            }
            Err(err) => eprintln!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParsedCommand;
    use crate::config::Config;
    use crate::error::OsError;
    use crate::executor::{ExecError, ExecStatus};
    use nix::errno::Errno;
    use serial_test::serial;
    use std::io::Cursor;

    struct CountingExecutor {
        calls: usize,
        fail_fork: bool,
    }

    impl Executor for CountingExecutor {
        fn exec(&mut self, _cmd: &ParsedCommand) -> ExecStatus {
            self.calls += 1;
            if self.fail_fork {
                Err(ExecError::Fork(OsError(Errno::ENOMEM)))
            } else {
                Ok(0)
            }
        }
    }

    fn shell(fail_fork: bool) -> Interpreter<CountingExecutor> {
        Interpreter::new(
            Config::default(),
            CountingExecutor {
                calls: 0,
                fail_fork,
            },
        )
    }

    #[test]
    #[serial]
    fn test_exit_stops_loop() {
        let mut sh = shell(false);
        let mut input = Cursor::new("\necho a\nexit now\necho b\n");
        let mut out = Vec::new();
        assert_eq!(run(&mut sh, &mut input, &mut out), 0);
        assert_eq!(sh.executor().calls, 1);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("$ ").count(), 3);
    }

    #[test]
    #[serial]
    fn test_errors_do_not_stop_loop() {
        let mut sh = shell(false);
        let mut input = Cursor::new("echo \"x\n< in\ncmd >\necho ok\n");
        let mut out = Vec::new();
        assert_eq!(run(&mut sh, &mut input, &mut out), 0);
        assert_eq!(sh.executor().calls, 1);
    }

    #[test]
    #[serial]
    fn test_eof_exits_cleanly() {
        let mut sh = shell(false);
        let mut out = Vec::new();
        assert_eq!(run(&mut sh, &mut Cursor::new(""), &mut out), 0);
        assert!(String::from_utf8(out).unwrap().ends_with("$ \n"));
    }

    #[test]
    #[serial]
    fn test_fork_failure_ends_shell() {
        let mut sh = shell(true);
        let mut input = Cursor::new("true\nexit\n");
        let mut out = Vec::new();
        assert_eq!(run(&mut sh, &mut input, &mut out), FORK_FAILED);
        assert_eq!(sh.executor().calls, 1);
    }
}
