//! The Clyp language: its word lists, and the rule table that classifies Clyp source.
//!
//! The order of the rules matters. Declarations (`function f`, `class C`, `int x =`) are tried
//! before call sites (`f(`), which are tried before plain keyword, builtin, and identifier
//! matching. So in `function greet(`, `greet` is a declared function name, while a later
//! `greet("you")` is a call.

use crate::lexing::{Category, Lexer, LexerBuilder, LexerBuilderError, Token};
use std::sync::OnceLock;

pub const KEYWORDS: &[&str] = &[
    "function", "returns", "class", "if", "else", "elif", "while", "for", "repeat", "times",
    "return", "let", "self", "null", "true", "false", "import", "from", "as", "in", "not", "and",
    "or", "break", "continue",
];

pub const TYPE_KEYWORDS: &[&str] = &["int", "str", "bool", "float", "list", "dict", "any", "void"];

pub const BUILTINS: &[&str] = &[
    "print",
    "len",
    "range",
    "toString",
    "toInt",
    "toFloat",
    "toBool",
    "chunk",
    "flatten",
    "map",
    "filter",
    "reduce",
    "sort",
    "reverse",
    "read_file",
    "write_file",
    "slugify",
    "uppercase",
    "lowercase",
    "http_get",
    "http_post",
    "json_parse",
    "json_stringify",
];

const IDENTIFIER: &str = "[a-zA-Z_][a-zA-Z0-9_]*";

/// The words the Clyp lexer recognizes by name. Changing these changes which identifiers are
/// highlighted as keywords, types, or builtins, and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    pub keywords: Vec<String>,
    pub type_keywords: Vec<String>,
    pub builtins: Vec<String>,
}

impl Default for WordLists {
    fn default() -> WordLists {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| (*w).to_owned()).collect()
        }

        WordLists {
            keywords: owned(KEYWORDS),
            type_keywords: owned(TYPE_KEYWORDS),
            builtins: owned(BUILTINS),
        }
    }
}

/// A builder holding the full Clyp rule table, in priority order.
pub fn clyp_lexer_builder(words: &WordLists) -> LexerBuilder {
    use Category::*;

    let mut builder = LexerBuilder::new();
    builder
        // Comments. Block comments must open and close on the same line.
        .regex(r"#.*", CommentSingle)
        .regex(r"/\*.*?\*/", CommentMultiline)
        // Strings
        .regex(r#""([^"\\]|\\.)*""#, StringDouble)
        .regex(r"'([^'\\]|\\.)*'", StringSingle)
        // Numbers. Float first, or `3.14` would lex as `3` `.` `14`.
        .regex(r"\b\d+\.\d+\b", NumberFloat)
        .regex(r"\b\d+\b", NumberInteger)
        // Declarations and call sites
        .groups(
            &format!(r"\b(function)(\s+)({})", IDENTIFIER),
            &[Keyword, Whitespace, FunctionDecl],
        )
        .groups(
            &format!(r"\b(class)(\s+)({})", IDENTIFIER),
            &[Keyword, Whitespace, ClassDecl],
        )
        .groups(
            &format!(r"\b({0}(?:\[.*?\])?)(\s+)({0})(\s*)(=)", IDENTIFIER),
            &[
                TypeAnnotation,
                Whitespace,
                VariableName,
                Whitespace,
                AssignmentOperator,
            ],
        )
        .groups(
            &format!(r"\b({})(\s*)(\()", IDENTIFIER),
            &[FunctionCall, Whitespace, Punctuation],
        )
        // Words
        .words(&words.keywords, Keyword)
        .words(&words.type_keywords, TypeKeyword)
        .words(&words.builtins, BuiltinName)
        // Operators
        .regex(r"\|>", PipelineOperator)
        .regex(r"==|!=|<=|>=|&&|\|\|", ComparisonOperator)
        .regex(r"[+\-*/%]=", CompoundAssignOperator)
        .regex(r"[+\-*/%=<>!&|^~]", Operator)
        .regex(r"[{}()\[\];,.]", Punctuation)
        .regex(&format!(r"\b{}\b", IDENTIFIER), Identifier)
        .regex(r"\s+", Whitespace)
        .fallback(PlainText);
    builder
}

/// Build a Clyp lexer that recognizes the given words.
pub fn build_lexer(words: &WordLists) -> Result<Lexer, LexerBuilderError> {
    clyp_lexer_builder(words).build()
}

impl Lexer {
    /// A lexer for Clyp, with the standard word lists.
    pub fn clyp() -> Lexer {
        lexer().clone()
    }
}

/// The shared Clyp lexer, built on first use.
pub fn lexer() -> &'static Lexer {
    static LEXER: OnceLock<Lexer> = OnceLock::new();
    LEXER.get_or_init(|| {
        build_lexer(&WordLists::default()).expect("the built-in Clyp rules are valid regexes")
    })
}

/// Tokenize Clyp source with the shared lexer.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    lexer().tokenize(source)
}
