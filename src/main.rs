use std::io;
use std::path::PathBuf;
use std::process;

use argh::FromArgs;
use env_logger::Env;
use log::debug;

use tech_shell_rs::config::{Config, ConfigLoader};
use tech_shell_rs::executor::ForkExecutor;
use tech_shell_rs::interpreter::Interpreter;
use tech_shell_rs::repl;

/// A small interactive shell: quoting, `cd`, `exit` and `<`/`>` redirection.
#[derive(FromArgs)]
struct Args {
    /// read settings from a key=value file
    #[argh(option)]
    config: Option<PathBuf>,

    /// maximum number of words accepted on one line
    #[argh(option)]
    max_args: Option<usize>,
}

fn load_config(args: &Args) -> Result<Config, String> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path).map_err(|e| e.to_string())?,
        None => ConfigLoader::default_config(),
    };
    if let Some(n) = args.max_args {
        if n == 0 {
            return Err("--max-args must be at least 1".to_string());
        }
        config.max_args = n;
    }
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args: Args = argh::from_env();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("tech-shell: {}", msg);
            process::exit(2);
        }
    };
    debug!("starting with {:?}", config);

    let mut interp = Interpreter::new(config, ForkExecutor);
    let stdin = io::stdin();
    let code = repl::run(&mut interp, &mut stdin.lock(), &mut io::stdout());
    process::exit(code);
}
