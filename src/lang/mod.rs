/*!
# Rust Language Module

This Rust module provides lexical analysis of SmileBASIC listings
for syntax highlighting.

*/

mod classify;
mod cursor;
mod dialect;
mod lex;
mod token;

pub mod keyword;

pub use classify::classify_word;
pub use cursor::Cursor;
pub use dialect::Dialect;
pub use lex::lex;
pub use lex::BasicLexer;
pub use token::{Category, ScanContext, Token};

#[cfg(test)]
mod tests;
