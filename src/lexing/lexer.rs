use super::pattern::{Emit, Matched, Pattern};
use super::{Category, Token};
use std::collections::VecDeque;

/// An ordered-rule lexer. Construct one with [`LexerBuilder`](super::LexerBuilder).
///
/// A `Lexer` is immutable once built, and holds no state between calls, so a single instance can
/// be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Lexer {
    pub(super) patterns: Vec<Pattern>,
    pub(super) fallback: Category,
}

/// A lazy stream of tokens. Produced by [`Lexer::lex`].
#[derive(Debug, Clone)]
pub struct Lex<'l, 's> {
    lexer: &'l Lexer,
    source: &'s str,
    index: usize,
    // Tokens from a multi-group match that haven't been returned yet.
    pending: VecDeque<Token<'s>>,
}

impl Lexer {
    /// Lex `source` lazily, one rule match per step.
    pub fn lex<'l, 's>(&'l self, source: &'s str) -> Lex<'l, 's> {
        Lex {
            lexer: self,
            source,
            index: 0,
            pending: VecDeque::new(),
        }
    }

    /// Lex all of `source`.
    pub fn tokenize<'s>(&self, source: &'s str) -> Vec<Token<'s>> {
        let tokens = self.lex(source).collect::<Vec<_>>();
        tracing::trace!(bytes = source.len(), tokens = tokens.len(), "Tokenized");
        tokens
    }

    /// The rules, in priority order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn fallback(&self) -> Category {
        self.fallback
    }
}

impl<'l, 's> Iterator for Lex<'l, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        let ch = self.remaining().chars().next()?;
        let lexer = self.lexer;
        for pattern in &lexer.patterns {
            if let Some(matched) = pattern.match_at(self.source, self.index) {
                return self.consume_match(pattern.emit(), matched);
            }
        }
        // No rule matched. Give up on exactly one character.
        Some(self.consume_token(lexer.fallback, self.index + ch.len_utf8()))
    }
}

impl<'l, 's> Lex<'l, 's> {
    fn remaining(&self) -> &'s str {
        &self.source[self.index..]
    }

    fn consume_token(&mut self, category: Category, end: usize) -> Token<'s> {
        let span = (self.index, end);
        self.index = end;
        Token {
            text: &self.source[span.0..span.1],
            category,
            span,
        }
    }

    fn consume_match(&mut self, emit: &Emit, matched: Matched) -> Option<Token<'s>> {
        match emit {
            Emit::Single(category) => Some(self.consume_token(*category, matched.end)),
            Emit::Groups(categories) => {
                let fallback = self.lexer.fallback;
                for (group, category) in matched.groups.iter().zip(categories) {
                    let (start, end) = match *group {
                        Some(span) => span,
                        None => continue,
                    };
                    // A group nested inside an earlier one has already been emitted.
                    if end <= self.index {
                        continue;
                    }
                    if start > self.index {
                        let gap = self.consume_token(fallback, start);
                        self.pending.push_back(gap);
                    }
                    let token = self.consume_token(*category, end);
                    self.pending.push_back(token);
                }
                if self.index < matched.end {
                    let rest = self.consume_token(fallback, matched.end);
                    self.pending.push_back(rest);
                }
                self.pending.pop_front()
            }
        }
    }
}
