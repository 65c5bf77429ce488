use std::ffi::OsString;

use log::debug;
use nix::errno::Errno;
use thiserror::Error;

use crate::ast::{ParsedCommand, RedirectKind};
use crate::error::OsError;

/// Misplaced `<` or `>`. Reported like an OS error with `EINVAL`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RedirectError {
    #[error("{}: redirect with no preceding command ('{op}')", OsError(Errno::EINVAL))]
    NoCommand { op: RedirectKind },
    #[error("{}: redirect with no target ('{op}')", OsError(Errno::EINVAL))]
    NoTarget { op: RedirectKind },
}

/// Splits `<`/`>` pairs out of a token list in one left-to-right pass.
///
/// A repeated operator overwrites the earlier target. Whatever is left, in
/// order, becomes argv.
pub fn extract_redirects(tokens: &[OsString]) -> Result<ParsedCommand, RedirectError> {
    let mut cmd = ParsedCommand::new(Vec::with_capacity(tokens.len()));
    let mut i = 0;

    while i < tokens.len() {
        let Some(op) = RedirectKind::from_token(&tokens[i]) else {
            cmd.argv.push(tokens[i].clone());
            i += 1;
            continue;
        };
        if i == 0 {
            return Err(RedirectError::NoCommand { op });
        }
        let Some(target) = tokens.get(i + 1) else {
            return Err(RedirectError::NoTarget { op });
        };
        debug!("redirect {} -> {:?}", op, target);
        match op {
            RedirectKind::In => cmd.stdin = Some(target.clone()),
            RedirectKind::Out => cmd.stdout = Some(target.clone()),
        }
        i += 2;
    }

    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn toks(line: &str) -> Vec<OsString> {
        line.split_whitespace().map(OsString::from).collect()
    }

    #[test]
    fn test_no_redirects() {
        let cmd = extract_redirects(&toks("ls -la")).unwrap();
        assert_eq!(cmd, ParsedCommand::new(toks("ls -la")));
    }

    #[test]
    fn test_output_redirect() {
        let cmd = extract_redirects(&toks("ls -la > out.txt")).unwrap();
        assert_eq!(cmd.argv, toks("ls -la"));
        assert_eq!(cmd.stdin, None);
        assert_eq!(cmd.stdout.as_deref(), Some(OsStr::new("out.txt")));
    }

    #[test]
    fn test_both_redirects_anywhere() {
        let cmd = extract_redirects(&toks("sort < in.txt -r > out.txt -u")).unwrap();
        assert_eq!(cmd.argv, toks("sort -r -u"));
        assert_eq!(cmd.stdin.as_deref(), Some(OsStr::new("in.txt")));
        assert_eq!(cmd.stdout.as_deref(), Some(OsStr::new("out.txt")));
    }

    #[test]
    fn test_last_redirect_wins() {
        let cmd = extract_redirects(&toks("cat < a < b > c > d")).unwrap();
        assert_eq!(cmd.argv, toks("cat"));
        assert_eq!(cmd.stdin.as_deref(), Some(OsStr::new("b")));
        assert_eq!(cmd.stdout.as_deref(), Some(OsStr::new("d")));
    }

    #[test]
    fn test_operator_as_target() {
        let cmd = extract_redirects(&toks("echo > >")).unwrap();
        assert_eq!(cmd.argv, toks("echo"));
        assert_eq!(cmd.stdout.as_deref(), Some(OsStr::new(">")));
    }

    #[test]
    fn test_redirect_first_is_error() {
        assert_eq!(
            extract_redirects(&toks("< in.txt")),
            Err(RedirectError::NoCommand { op: RedirectKind::In })
        );
        assert_eq!(
            extract_redirects(&toks("> out.txt ls")),
            Err(RedirectError::NoCommand { op: RedirectKind::Out })
        );
    }

    #[test]
    fn test_redirect_without_target_is_error() {
        assert_eq!(
            extract_redirects(&toks("cmd >")),
            Err(RedirectError::NoTarget { op: RedirectKind::Out })
        );
        assert_eq!(
            extract_redirects(&toks("cmd > out <")),
            Err(RedirectError::NoTarget { op: RedirectKind::In })
        );
    }

    #[test]
    fn test_error_is_os_style() {
        let err = extract_redirects(&toks("cmd >")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error 22 (Invalid argument): redirect with no target ('>')"
        );
    }
}
