//! # SmileBASIC Highlighter
//!
//! Syntax highlighting for SmileBASIC listings, as posted on forums and
//! program pages.
//!
//! The scanner in [`lang`] splits a listing into tokens and gives each a
//! display [`Category`](lang::Category). It never fails: anything it cannot
//! make sense of comes out uncategorized, and the tokens always add up to
//! the original text.
//! ```
//! use sbhl::lang::{lex, Category, Dialect};
//! let tokens = lex("PRINT \"HI\"", Dialect::Unspecified);
//! assert_eq!(tokens[0].category, Category::ArgKeyword);
//! let text: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(text, "PRINT \"HI\"");
//! ```
//!
//! The renderers in [`render`] turn tokens into HTML or terminal colours.
//! The `sbhl` binary highlights files from the command line.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod render;
pub mod term;
