//! A lexer driven by an ordered table of regex rules.
//!
//! At each position in the source, the rules are tried top to bottom and the _first_ one that
//! matches wins, even if a later rule would match a longer span. A rule either classifies its
//! whole match as one [`Category`], or splits it along its capture groups into several tokens of
//! different categories. Characters that no rule matches become single-character tokens of the
//! lexer's fallback category, so lexing never fails and never stalls.

mod category;
mod lexer;
mod lexer_builder;
mod pattern;

pub use category::Category;
pub use lexer::{Lex, Lexer};
pub use lexer_builder::{LexerBuilder, LexerBuilderError};
pub use pattern::{Emit, Pattern};

/// A byte range `(start, end)` into the source text.
pub type Span = (usize, usize);

/// One classified piece of the source. Tokens are never empty, and the tokens produced for a
/// source, concatenated in order, are exactly that source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'s> {
    pub text: &'s str,
    pub category: Category,
    pub span: Span,
}
