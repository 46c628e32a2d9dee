use super::lexer::Lexer;
use super::pattern::{Emit, Pattern};
use super::Category;
use regex::{escape, Error as RegexError};
use std::mem;
use thiserror::Error;

/// Construct a lexer. Rules are tried in the order they are added.
#[derive(Debug, Clone)]
pub struct LexerBuilder {
    rules: Vec<Rule>,
    fallback: Category,
}

#[derive(Debug, Clone)]
enum Rule {
    Regex(String, Emit),
    Words(Vec<String>, Category),
}

/// Error while constructing a lexer.
#[derive(Debug, Clone, Error)]
pub enum LexerBuilderError {
    #[error(transparent)]
    InvalidRegex(#[from] RegexError),
    #[error("Rule /{pattern}/ has {groups} capture groups, but {categories} categories were given for them.")]
    GroupMismatch {
        pattern: String,
        groups: usize,
        categories: usize,
    },
    #[error("The word list for {0} is empty.")]
    EmptyWordList(Category),
    #[error("Word '{word}' for {category} must start and end with a letter, digit, or underscore.")]
    NotAWord { word: String, category: Category },
}

impl Default for LexerBuilder {
    fn default() -> LexerBuilder {
        LexerBuilder::new()
    }
}

impl LexerBuilder {
    /// Start building a [`Lexer`] with no rules, whose fallback category is
    /// [`Category::PlainText`].
    pub fn new() -> LexerBuilder {
        LexerBuilder {
            rules: vec![],
            fallback: Category::PlainText,
        }
    }

    /// Add a rule that classifies its entire match as `category`. The regex syntax is that of the
    /// `regex` crate.
    pub fn regex(&mut self, regex: &str, category: Category) -> &mut LexerBuilder {
        self.rules
            .push(Rule::Regex(regex.to_owned(), Emit::Single(category)));
        self
    }

    /// Add a rule whose match is split into one token per capture group. There must be exactly one
    /// category per capture group. Any part of the match not covered by a group is emitted with
    /// the fallback category.
    pub fn groups(&mut self, regex: &str, categories: &[Category]) -> &mut LexerBuilder {
        self.rules.push(Rule::Regex(
            regex.to_owned(),
            Emit::Groups(categories.to_vec()),
        ));
        self
    }

    /// Add a rule that matches any of `words` exactly, as a whole word. The words are matched
    /// literally; you do not have to escape anything. Each word must start and end with a word
    /// character (letter, digit, or underscore), since it is matched between word boundaries.
    pub fn words<S: AsRef<str>>(&mut self, words: &[S], category: Category) -> &mut LexerBuilder {
        let words = words.iter().map(|w| w.as_ref().to_owned()).collect();
        self.rules.push(Rule::Words(words, category));
        self
    }

    /// Set the category given to characters that no rule matches.
    pub fn fallback(&mut self, category: Category) -> &mut LexerBuilder {
        self.fallback = category;
        self
    }

    /// Finish the builder pattern, and construct the Lexer.
    pub fn build(&mut self) -> Result<Lexer, LexerBuilderError> {
        let mut patterns = vec![];
        for rule in mem::take(&mut self.rules) {
            let pattern = match rule {
                Rule::Regex(regex, emit) => Pattern::new(&regex, emit)?,
                Rule::Words(words, category) => {
                    if words.is_empty() {
                        return Err(LexerBuilderError::EmptyWordList(category));
                    }
                    if let Some(word) = words.iter().find(|w| !is_bounded_word(w)) {
                        return Err(LexerBuilderError::NotAWord {
                            word: word.clone(),
                            category,
                        });
                    }
                    Pattern::new(&words_regex(words), Emit::Single(category))?
                }
            };
            if let Emit::Groups(categories) = pattern.emit() {
                if categories.len() != pattern.group_count() {
                    return Err(LexerBuilderError::GroupMismatch {
                        pattern: pattern.regex_pattern().to_owned(),
                        groups: pattern.group_count(),
                        categories: categories.len(),
                    });
                }
            }
            patterns.push(pattern);
        }
        tracing::debug!(
            rules = patterns.len(),
            fallback = %self.fallback,
            "Built lexer"
        );
        Ok(Lexer {
            patterns,
            fallback: self.fallback,
        })
    }
}

fn is_bounded_word(word: &str) -> bool {
    let is_word_char = |ch: char| ch.is_alphanumeric() || ch == '_';
    match (word.chars().next(), word.chars().next_back()) {
        (Some(first), Some(last)) => is_word_char(first) && is_word_char(last),
        _ => false,
    }
}

fn words_regex(mut words: Vec<String>) -> String {
    // In case one word is a prefix of another
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    let alternatives = words.iter().map(|w| escape(w)).collect::<Vec<_>>();
    format!("\\b(?:{})\\b", alternatives.join("|"))
}
