//! Turning source text into highlighted markup.
//!
//! A [`Renderer`] holds an ordered list of [`Highlighter`]s. For each code block it asks them in
//! turn, and the first one that recognizes the block's language does the highlighting. Clyp is
//! always first, then `syntect`'s bundled syntaxes, then anything registered with
//! [`Renderer::with_highlighter`]. Plain text is always last, so rendering never fails: the worst
//! case is text with no highlighting at all.

pub mod ansi;
mod html;
mod syntax;

use crate::clyp;
use crate::lexing::Category;
use std::fmt;

pub use html::{escape_html, stylesheet, RenderConfig};
pub use syntax::SyntectHighlighter;

/// The language assumed for code blocks that don't declare one.
pub const DEFAULT_LANGUAGE: &str = "clyp";

/// How a piece of highlighted text should be presented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Style {
    /// Classified by the Clyp lexer.
    Category(Category),
    /// Classified by some other highlighter, using its own CSS class.
    Class(String),
    /// Not highlighted.
    Plain,
}

/// A run of text and its style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Highlighted {
    pub text: String,
    pub style: Style,
}

/// Something that can highlight code in some set of languages.
pub trait Highlighter: Send + Sync {
    fn name(&self) -> &str;

    /// Highlight `code`, or return `None` if `language` isn't one this highlighter knows. The
    /// returned runs must concatenate to `code`.
    fn highlight(&self, language: &str, code: &str) -> Option<Vec<Highlighted>>;
}

/// Highlights Clyp with the Clyp lexer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClypHighlighter;

/// Accepts every language and highlights nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextHighlighter;

impl Highlighter for ClypHighlighter {
    fn name(&self) -> &str {
        "clyp"
    }

    fn highlight(&self, language: &str, code: &str) -> Option<Vec<Highlighted>> {
        if !language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) {
            return None;
        }
        let runs = clyp::tokenize(code)
            .into_iter()
            .map(|token| Highlighted {
                text: token.text.to_owned(),
                style: Style::Category(token.category),
            })
            .collect();
        Some(runs)
    }
}

impl PlainTextHighlighter {
    pub fn plain(code: &str) -> Vec<Highlighted> {
        if code.is_empty() {
            return vec![];
        }
        vec![Highlighted {
            text: code.to_owned(),
            style: Style::Plain,
        }]
    }
}

impl Highlighter for PlainTextHighlighter {
    fn name(&self) -> &str {
        "text"
    }

    fn highlight(&self, _language: &str, code: &str) -> Option<Vec<Highlighted>> {
        Some(PlainTextHighlighter::plain(code))
    }
}

/// Renders code blocks, falling back from more specific highlighters to less specific ones.
pub struct Renderer {
    config: RenderConfig,
    // Tried in order. Plain text comes after all of these.
    highlighters: Vec<Box<dyn Highlighter>>,
}

impl Renderer {
    /// A renderer that highlights Clyp with the Clyp lexer, other known languages with
    /// `syntect`, and shows everything else as plain text.
    pub fn new(config: RenderConfig) -> Renderer {
        Renderer {
            config,
            highlighters: vec![Box::new(ClypHighlighter), Box::new(SyntectHighlighter)],
        }
    }

    /// Add a highlighter to try after the ones already added, and before plain text.
    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Renderer {
        self.highlighters.push(Box::new(highlighter));
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The names of the highlighters, in the order they are tried.
    pub fn highlighter_names(&self) -> Vec<&str> {
        let mut names = self
            .highlighters
            .iter()
            .map(|h| h.name())
            .collect::<Vec<_>>();
        names.push(PlainTextHighlighter.name());
        names
    }

    /// Highlight `code` with the first highlighter that knows `language`.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> Vec<Highlighted> {
        let language = normalize_language(language);
        for highlighter in &self.highlighters {
            if let Some(runs) = highlighter.highlight(language, code) {
                return runs;
            }
            tracing::debug!(
                language,
                highlighter = highlighter.name(),
                "Highlighter does not know language, falling back"
            );
        }
        PlainTextHighlighter::plain(code)
    }

    /// Render `code` as an HTML fragment. Never fails.
    pub fn render_html(&self, code: &str, language: Option<&str>) -> String {
        let runs = self.highlight(code, language);
        html::render(&self.config, normalize_language(language), &runs)
    }

    /// Render `code` with ANSI terminal colors. Never fails.
    pub fn render_ansi(&self, code: &str, language: Option<&str>) -> String {
        ansi::render(&self.highlight(code, language))
    }
}

impl Default for Renderer {
    fn default() -> Renderer {
        Renderer::new(RenderConfig::default())
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("highlighters", &self.highlighter_names())
            .finish()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Style::Category(category) => write!(f, "{}", category),
            Style::Class(class) => write!(f, ".{}", class),
            Style::Plain => write!(f, "Text"),
        }
    }
}

fn normalize_language(language: Option<&str>) -> &str {
    match language.map(str::trim) {
        Some(language) if !language.is_empty() => language,
        _ => DEFAULT_LANGUAGE,
    }
}
