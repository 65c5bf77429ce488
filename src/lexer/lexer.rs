use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

use log::trace;
use thiserror::Error;

const SPACE: u8 = b' ';
const QUOTE: u8 = b'"';
const ESCAPE: u8 = b'\\';

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LexError {
    /// An odd number of `"` in one token. `pos` is the byte offset of the last opening quote.
    #[error("failed to close quotation")]
    UnterminatedQuote { pos: usize },
    #[error("line continuation not supported")]
    TrailingBackslash { pos: usize },
}

/// Splits one input line into words.
///
/// Works on raw bytes so words need not be UTF-8. Only the ASCII space
/// separates words. A `"` toggles quoting without being kept, so
/// `"ab"cd"ef"` is the single word `abcdef`. A backslash keeps the next byte
/// literally, quoted or not.
pub struct Lexer {
    bytes: Vec<u8>,
    pos: usize,
}

impl Lexer {
    pub fn new<B: AsRef<[u8]> + ?Sized>(input: &B) -> Self {
        Lexer {
            bytes: input.as_ref().to_vec(),
            pos: 0,
        }
    }

    /// Byte offset of the cursor shared across `next_token` calls.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the next word, or `None` once the line is exhausted.
    pub fn next_token(&mut self) -> Result<Option<OsString>, LexError> {
        while self.peek() == Some(SPACE) {
            self.pos += 1;
        }
        if self.peek().is_none() {
            return Ok(None);
        }

        let mut buf = Vec::new();
        let mut in_quotes = false;
        let mut quote_pos = self.pos;

        while let Some(byte) = self.peek() {
            match byte {
                QUOTE => {
                    in_quotes = !in_quotes;
                    if in_quotes {
                        quote_pos = self.pos;
                    }
                    self.pos += 1;
                }
                ESCAPE => match self.bytes.get(self.pos + 1) {
                    Some(&escaped) => {
                        buf.push(escaped);
                        self.pos += 2;
                    }
                    None => return Err(LexError::TrailingBackslash { pos: self.pos }),
                },
                SPACE if !in_quotes => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    buf.push(byte);
                    self.pos += 1;
                }
            }
        }

        if in_quotes {
            return Err(LexError::UnterminatedQuote { pos: quote_pos });
        }
        let word = OsString::from_vec(buf);
        trace!("lexed word {:?}, cursor at {}", word, self.pos);
        Ok(Some(word))
    }

    /// Drains the rest of the line.
    pub fn tokenize(&mut self) -> Result<Vec<OsString>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }
}
