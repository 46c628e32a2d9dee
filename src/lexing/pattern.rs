use super::Category;
use regex::{Error as RegexError, Regex};
use std::fmt;

/// What a rule produces when it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit {
    /// The whole match is a single token.
    Single(Category),
    /// The match is split into one token per capture group, in order. The i'th category applies
    /// to the i'th capture group. Groups that matched nothing produce no token.
    Groups(Vec<Category>),
}

/// A compiled lexer rule: a regex that must match exactly at the scan position, and what to emit
/// when it does.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    // Used at the very start of the text.
    at_start: Regex,
    // Used everywhere else, on a haystack that begins one character before the scan position. The
    // leading character is consumed by `(?s:.)` and only serves as context, so that assertions
    // like `\b` see the same thing they would when scanning the whole text.
    after_char: Regex,
    emit: Emit,
}

/// Where a pattern matched, in byte offsets into the whole source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Matched {
    pub(super) end: usize,
    /// One entry per capture group. Only filled in for `Emit::Groups` rules.
    pub(super) groups: Vec<Option<(usize, usize)>>,
}

impl Pattern {
    pub fn new(regex_pattern: &str, emit: Emit) -> Result<Pattern, RegexError> {
        Ok(Pattern {
            source: regex_pattern.to_owned(),
            at_start: Regex::new(&format!("^(?:{})", regex_pattern))?,
            after_char: Regex::new(&format!("^(?s:.)(?:{})", regex_pattern))?,
            emit,
        })
    }

    pub fn regex_pattern(&self) -> &str {
        &self.source
    }

    pub fn emit(&self) -> &Emit {
        &self.emit
    }

    /// The number of capture groups in the regex, not counting the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.at_start.captures_len() - 1
    }

    /// Try to match this pattern starting exactly at byte offset `index` of `source`. Zero-length
    /// matches are reported as no match.
    pub(super) fn match_at(&self, source: &str, index: usize) -> Option<Matched> {
        let (regex, offset) = match source[..index].chars().next_back() {
            None => (&self.at_start, index),
            Some(ch) => (&self.after_char, index - ch.len_utf8()),
        };
        let haystack = &source[offset..];
        let matched = match &self.emit {
            Emit::Single(_) => {
                let found = regex.find(haystack)?;
                Matched {
                    end: offset + found.end(),
                    groups: vec![],
                }
            }
            Emit::Groups(_) => {
                let captures = regex.captures(haystack)?;
                let end = offset + captures.get(0)?.end();
                let groups = captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|g| (offset + g.start(), offset + g.end())))
                    .collect();
                Matched { end, groups }
            }
        };
        if matched.end > index {
            Some(matched)
        } else {
            None
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/", self.source.escape_default())?;
        match &self.emit {
            Emit::Single(category) => write!(f, " -> {}", category),
            Emit::Groups(categories) => {
                write!(f, " -> (")?;
                for (i, category) in categories.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", category)?;
                }
                write!(f, ")")
            }
        }
    }
}
