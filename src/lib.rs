pub mod ast;
pub mod builtins;
pub mod config;
pub mod error;
pub mod executor;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod prompt;
pub mod repl;
