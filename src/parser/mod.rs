pub mod redirect;

use std::ffi::OsString;

use log::debug;
use thiserror::Error;

use crate::lexer::{LexError, Lexer};

pub use redirect::{RedirectError, extract_redirects};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("Error: too many arguments")]
    TooManyArguments { limit: usize },
}

/// Tokenizes a whole line, refusing more than `max_args` words.
///
/// On any error every word produced so far is dropped.
pub fn parse_line(line: &[u8], max_args: usize) -> Result<Vec<OsString>, ParseError> {
    let mut lexer = Lexer::new(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        if tokens.len() == max_args {
            return Err(ParseError::TooManyArguments { limit: max_args });
        }
        tokens.push(token);
    }

    debug!("parsed {} token(s): {:?}", tokens.len(), tokens);
    Ok(tokens)
}
