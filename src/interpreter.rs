use log::debug;

use crate::builtins::{BuiltinManager, BuiltinStatus};
use crate::config::Config;
use crate::error::ShellError;
use crate::executor::Executor;
use crate::parser::{extract_redirects, parse_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

/// Turns one input line into a builtin call or a spawned program.
pub struct Interpreter<E: Executor> {
    config: Config,
    builtins: BuiltinManager,
    executor: E,
}

impl<E: Executor> Interpreter<E> {
    pub fn new(config: Config, executor: E) -> Self {
        Interpreter {
            config,
            builtins: BuiltinManager::new(),
            executor,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn executor(&self) -> &E {
        &self.executor
    }

    /// `line` is raw bytes without its newline; it need not be UTF-8.
    pub fn eval<L: AsRef<[u8]>>(&mut self, line: L) -> Result<Outcome, ShellError> {
        let tokens = parse_line(line.as_ref(), self.config.max_args)?;
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Outcome::Continue);
        };

        if let Some(builtin) = self.builtins.get(name) {
            debug!("builtin {:?} {:?}", name, args);
            return match builtin.run(args)? {
                BuiltinStatus::Continue => Ok(Outcome::Continue),
                BuiltinStatus::Exit(code) => Ok(Outcome::Exit(code)),
            };
        }

        let cmd = extract_redirects(&tokens)?;
        let status = self.executor.exec(&cmd)?;
        debug!("{:?} finished with status {}", name, status);
        Ok(Outcome::Continue)
    }
}
