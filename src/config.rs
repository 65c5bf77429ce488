use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Largest token count accepted on one line.
pub const DEFAULT_MAX_ARGS: usize = 31;
pub const DEFAULT_PROMPT_SUFFIX: &str = "$ ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_args: usize,
    /// Printed right after the working directory.
    pub prompt_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        ConfigLoader::default_config()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config: {0}")]
    Io(#[from] io::Error),
    #[error("config line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn default_config() -> Config {
        Config {
            max_args: DEFAULT_MAX_ARGS,
            prompt_suffix: DEFAULT_PROMPT_SUFFIX.to_string(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let src = fs::read_to_string(path)?;
        Self::load_from_str(&src)
    }

    /// `key=value` per line; blank lines and `#` comments are skipped.
    /// The value is taken verbatim after `=` so a prompt can end in a space.
    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Self::default_config();

        for (idx, line) in src.lines().enumerate() {
            let lineno = idx + 1;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(parse_error(lineno, format!("no '=' found: {}", line)));
            };

            match key.trim() {
                "max_args" => {
                    let n = value.trim().parse::<usize>().map_err(|_| {
                        parse_error(lineno, format!("invalid max_args: {}", value.trim()))
                    })?;
                    if n == 0 {
                        return Err(parse_error(lineno, "max_args must be at least 1".into()));
                    }
                    config.max_args = n;
                }
                "prompt_suffix" => config.prompt_suffix = value.to_string(),
                other => return Err(parse_error(lineno, format!("unknown key: {}", other))),
            }
        }

        Ok(config)
    }
}

fn parse_error(line: usize, msg: String) -> ConfigError {
    ConfigError::Parse { line, msg }
}
