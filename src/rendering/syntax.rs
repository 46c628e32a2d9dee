//! Highlighting for languages other than Clyp, using the syntax definitions bundled with
//! `syntect`.

use super::{Highlighted, Highlighter, Style};
use std::sync::OnceLock;
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Highlights any language `syntect` has a bundled syntax for, looked up by name or file
/// extension (`python`, `rs`, `JSON`, ...). Each run's class is its innermost scope with the dots
/// replaced by dashes, like `constant-numeric-integer-decimal-python`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntectHighlighter;

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

impl SyntectHighlighter {
    /// The bundled syntax for `language`, if there is one.
    pub fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
        syntax_set().find_syntax_by_token(language)
    }
}

impl Highlighter for SyntectHighlighter {
    fn name(&self) -> &str {
        "syntect"
    }

    fn highlight(&self, language: &str, code: &str) -> Option<Vec<Highlighted>> {
        let syntaxes = syntax_set();
        let syntax = SyntectHighlighter::find_syntax(language)?;
        let mut state = ParseState::new(syntax);
        let mut stack = ScopeStack::new();
        let mut runs = Runs::default();

        for line in LinesWithEndings::from(code) {
            let ops = match state.parse_line(line, syntaxes) {
                Ok(ops) => ops,
                Err(err) => {
                    tracing::debug!(language, %err, "Syntax definition failed to parse line");
                    return None;
                }
            };
            let mut start = 0;
            for (index, op) in ops {
                if index > start {
                    runs.push(&line[start..index], &stack);
                    start = index;
                }
                if let Err(err) = stack.apply(&op) {
                    tracing::debug!(language, ?err, "Bad scope operation");
                    return None;
                }
            }
            runs.push(&line[start..], &stack);
        }
        Some(runs.0)
    }
}

// Adjacent text with the same style is merged into one run.
#[derive(Debug, Default)]
struct Runs(Vec<Highlighted>);

impl Runs {
    fn push(&mut self, text: &str, stack: &ScopeStack) {
        if text.is_empty() {
            return;
        }
        // The outermost scope is the whole file, like `source.python`.
        let scopes = stack.as_slice();
        let style = match scopes.last() {
            Some(scope) if scopes.len() > 1 => Style::Class(scope.build_string().replace('.', "-")),
            _ => Style::Plain,
        };
        match self.0.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.0.push(Highlighted {
                text: text.to_owned(),
                style,
            }),
        }
    }
}
