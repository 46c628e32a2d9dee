//! # Clyp highlighting
//!
//! Syntax highlighting for the Clyp programming language.
//!
//! - [`lexing`] is a small, general lexer driven by an ordered table of regex rules, where the
//!   first rule to match wins and one match may be split into several differently-classified
//!   tokens.
//! - [`clyp`] holds Clyp's word lists and rule table.
//! - [`rendering`] turns tokens into HTML or terminal output, falling back to plain text for
//!   languages it doesn't know.
//!
//! ```
//! use clyp_highlight::{clyp, Category};
//!
//! let tokens = clyp::tokenize("class Counter {");
//! assert_eq!(tokens[0].category, Category::Keyword);
//! assert_eq!(tokens[2].text, "Counter");
//! assert_eq!(tokens[2].category, Category::ClassDecl);
//! ```

pub mod clyp;
pub mod lexing;
pub mod rendering;

pub use lexing::{Category, Lexer, LexerBuilder, LexerBuilderError, Span, Token};
pub use rendering::{RenderConfig, Renderer};
