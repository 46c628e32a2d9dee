use clyp_highlight::clyp::{self, WordLists};
use clyp_highlight::{Category, Lexer};
use std::fmt::Write;

const HELLO_WORLD: &str = r#"# A simple "Hello, World!" program in Clyp
str name = "World";
print("Hello, " + name + "!");

# Define a function to greet someone
function greet(str person) returns str {
    return "Greetings, " + person + "!";
};

# Call the function and print the result
print(greet("Clyp Developer"));"#;

const DATA_STRUCTURES: &str = r#"# Working with data structures in Clyp
list[int] numbers = [1, 2, 3, 4, 5, 6];
list[list[int]] chunks = chunk(numbers, 2);
list[int] flattened = flatten(chunks);

repeat 3 {
    print("Hello from a repeat loop!");
};"#;

const ADVANCED: &str = r#"# Advanced Clyp features
class Counter {
    int count = 0;

    increment(self) returns null {
        self.count = self.count + 1;
    };
};

let c = Counter();
c.increment();
print("Count is: " + toString(c.get_count()));
int result = initial_value |> double |> add_five;"#;

fn lex(source: &str) -> Vec<(&str, Category)> {
    clyp::tokenize(source)
        .into_iter()
        .map(|token| (token.text, token.category))
        .collect()
}

fn dump(source: &str) -> String {
    let mut out = String::new();
    for token in clyp::tokenize(source) {
        writeln!(out, "{:?} {:?}", token.category, token.text).unwrap();
    }
    out
}

#[test]
fn test_reconstructs_input() {
    let sources = [
        "",
        " \t\n ",
        "@@@$$$`",
        "/* unterminated",
        "\"unterminated",
        "αβγ = δ(ε) |> ζ;",
        "\u{0}\u{7f}\u{feff}",
        HELLO_WORLD,
        DATA_STRUCTURES,
        ADVANCED,
    ];
    for source in sources {
        let tokens = clyp::tokenize(source);
        let rebuilt = tokens.iter().map(|t| t.text).collect::<String>();
        assert_eq!(rebuilt, source);

        let mut offset = 0;
        for token in &tokens {
            assert!(!token.text.is_empty());
            assert_eq!(token.span.0, offset);
            assert_eq!(&source[token.span.0..token.span.1], token.text);
            offset = token.span.1;
        }
        assert_eq!(offset, source.len());
    }
}

#[test]
fn test_degenerate_inputs() {
    assert_eq!(lex(""), vec![]);
    assert_eq!(lex("  \n\t"), vec![("  \n\t", Category::Whitespace)]);
    assert_eq!(
        lex("@$`"),
        vec![
            ("@", Category::PlainText),
            ("$", Category::PlainText),
            ("`", Category::PlainText),
        ]
    );
    assert_eq!(lex("é"), vec![("é", Category::PlainText)]);
}

#[test]
fn test_is_deterministic() {
    assert_eq!(clyp::tokenize(ADVANCED), clyp::tokenize(ADVANCED));
    assert_eq!(Lexer::clyp().tokenize(ADVANCED), clyp::tokenize(ADVANCED));
}

#[test]
fn test_declaration_vs_call() {
    use Category::*;

    assert_eq!(
        lex("function greet(str person) returns str { }"),
        vec![
            ("function", Keyword),
            (" ", Whitespace),
            ("greet", FunctionDecl),
            ("(", Punctuation),
            ("str", TypeKeyword),
            (" ", Whitespace),
            ("person", Identifier),
            (")", Punctuation),
            (" ", Whitespace),
            ("returns", Keyword),
            (" ", Whitespace),
            ("str", TypeKeyword),
            (" ", Whitespace),
            ("{", Punctuation),
            (" ", Whitespace),
            ("}", Punctuation),
        ]
    );
    assert_eq!(
        lex("greet(\"Clyp Developer\")"),
        vec![
            ("greet", FunctionCall),
            ("(", Punctuation),
            ("\"Clyp Developer\"", StringDouble),
            (")", Punctuation),
        ]
    );

    let tokens = lex(HELLO_WORLD);
    let greets = tokens
        .iter()
        .filter(|(text, _)| *text == "greet")
        .map(|(_, category)| *category)
        .collect::<Vec<_>>();
    assert_eq!(greets, vec![FunctionDecl, FunctionCall]);
}

#[test]
fn test_call_site_beats_builtins_and_allows_space() {
    use Category::*;

    assert_eq!(
        lex("print (x)"),
        vec![
            ("print", FunctionCall),
            (" ", Whitespace),
            ("(", Punctuation),
            ("x", Identifier),
            (")", Punctuation),
        ]
    );
    assert_eq!(lex("print"), vec![("print", BuiltinName)]);
}

#[test]
fn test_float_before_integer() {
    assert_eq!(lex("3.14"), vec![("3.14", Category::NumberFloat)]);
    assert_eq!(lex("42"), vec![("42", Category::NumberInteger)]);
    assert_eq!(
        lex("1."),
        vec![("1", Category::NumberInteger), (".", Category::Punctuation)]
    );
}

#[test]
fn test_class_declaration() {
    insta::assert_snapshot!(dump("class Counter {\n    int count = 0;\n}"), @r###"
    Keyword "class"
    Whitespace " "
    ClassDecl "Counter"
    Whitespace " "
    Punctuation "{"
    Whitespace "\n    "
    TypeAnnotation "int"
    Whitespace " "
    VariableName "count"
    Whitespace " "
    AssignmentOperator "="
    Whitespace " "
    NumberInteger "0"
    Punctuation ";"
    Whitespace "\n"
    Punctuation "}"
    "###);
}

#[test]
fn test_typed_declaration() {
    use Category::*;

    assert_eq!(
        lex("int count = 0;"),
        vec![
            ("int", TypeAnnotation),
            (" ", Whitespace),
            ("count", VariableName),
            (" ", Whitespace),
            ("=", AssignmentOperator),
            (" ", Whitespace),
            ("0", NumberInteger),
            (";", Punctuation),
        ]
    );
    assert_eq!(
        lex("list[list[int]] chunks=chunk(numbers, 2);"),
        vec![
            ("list[list[int]]", TypeAnnotation),
            (" ", Whitespace),
            ("chunks", VariableName),
            ("=", AssignmentOperator),
            ("chunk", FunctionCall),
            ("(", Punctuation),
            ("numbers", Identifier),
            (",", Punctuation),
            (" ", Whitespace),
            ("2", NumberInteger),
            (")", Punctuation),
            (";", Punctuation),
        ]
    );
}

#[test]
fn test_pipeline_operator() {
    use Category::*;

    assert_eq!(
        lex("initial_value |> double |> add_five"),
        vec![
            ("initial_value", Identifier),
            (" ", Whitespace),
            ("|>", PipelineOperator),
            (" ", Whitespace),
            ("double", Identifier),
            (" ", Whitespace),
            ("|>", PipelineOperator),
            (" ", Whitespace),
            ("add_five", Identifier),
        ]
    );
    assert_eq!(lex("a||b")[1], ("||", ComparisonOperator));
    assert_eq!(lex("a|b")[1], ("|", Operator));
}

#[test]
fn test_words_are_exact() {
    use Category::*;

    assert_eq!(lex("forEachThing"), vec![("forEachThing", Identifier)]);
    assert_eq!(lex("for"), vec![("for", Keyword)]);
    assert_eq!(lex("returns"), vec![("returns", Keyword)]);
    assert_eq!(lex("integer"), vec![("integer", Identifier)]);
    assert_eq!(lex("int"), vec![("int", TypeKeyword)]);
    assert_eq!(lex("toStringify"), vec![("toStringify", Identifier)]);
    assert_eq!(lex("len"), vec![("len", BuiltinName)]);
    // A word glued to a number is not a word.
    assert_eq!(
        lex("12for"),
        vec![
            ("1", PlainText),
            ("2", PlainText),
            ("f", PlainText),
            ("o", PlainText),
            ("r", PlainText),
        ]
    );
}

#[test]
fn test_comments() {
    use Category::*;

    assert_eq!(
        lex("x # note\ny"),
        vec![
            ("x", Identifier),
            (" ", Whitespace),
            ("# note", CommentSingle),
            ("\n", Whitespace),
            ("y", Identifier),
        ]
    );
    assert_eq!(
        lex("/* a */ /* b */"),
        vec![
            ("/* a */", CommentMultiline),
            (" ", Whitespace),
            ("/* b */", CommentMultiline),
        ]
    );
    // Block comments don't span lines.
    assert_eq!(
        lex("/* a\n*/"),
        vec![
            ("/", Operator),
            ("*", Operator),
            (" ", Whitespace),
            ("a", Identifier),
            ("\n", Whitespace),
            ("*", Operator),
            ("/", Operator),
        ]
    );
    // Or nest.
    assert_eq!(
        lex("/* /* */ */"),
        vec![
            ("/* /* */", CommentMultiline),
            (" ", Whitespace),
            ("*", Operator),
            ("/", Operator),
        ]
    );
    // A comment marker inside a string is part of the string.
    assert_eq!(lex("\"# no\""), vec![("\"# no\"", StringDouble)]);
}

#[test]
fn test_strings() {
    use Category::*;

    assert_eq!(lex(r#""a\"b""#), vec![(r#""a\"b""#, StringDouble)]);
    assert_eq!(
        lex("'it''s'"),
        vec![("'it'", StringSingle), ("'s'", StringSingle)]
    );
    assert_eq!(
        lex("\"abc"),
        vec![("\"", PlainText), ("abc", Identifier)]
    );
}

#[test]
fn test_operators() {
    use Category::*;

    assert_eq!(
        lex("x += 1 == y"),
        vec![
            ("x", Identifier),
            (" ", Whitespace),
            ("+=", CompoundAssignOperator),
            (" ", Whitespace),
            ("1", NumberInteger),
            (" ", Whitespace),
            ("==", ComparisonOperator),
            (" ", Whitespace),
            ("y", Identifier),
        ]
    );
    assert_eq!(
        lex("!a&&~b"),
        vec![
            ("!", Operator),
            ("a", Identifier),
            ("&&", ComparisonOperator),
            ("~", Operator),
            ("b", Identifier),
        ]
    );
    assert_eq!(
        lex("c.increment();"),
        vec![
            ("c", Identifier),
            (".", Punctuation),
            ("increment", FunctionCall),
            ("(", Punctuation),
            (")", Punctuation),
            (";", Punctuation),
        ]
    );
}

#[test]
fn test_custom_word_lists() {
    let mut words = WordLists::default();
    words.keywords.push("unless".to_owned());
    words.builtins.retain(|w| w != "len");
    let lexer = clyp::build_lexer(&words).unwrap();

    let categories = lexer
        .tokenize("unless len")
        .into_iter()
        .map(|t| t.category)
        .collect::<Vec<_>>();
    assert_eq!(
        categories,
        vec![Category::Keyword, Category::Whitespace, Category::Identifier]
    );
    assert_eq!(lexer.patterns().len(), clyp::lexer().patterns().len());
}

#[test]
fn test_rule_order() {
    let mut rules = String::new();
    for pattern in clyp::lexer().patterns() {
        writeln!(rules, "{}", pattern).unwrap();
    }
    insta::assert_snapshot!(rules, @r###"
    /#.*/ -> Comment.Single
    //\\*.*?\\*// -> Comment.Multiline
    /\"([^\"\\\\]|\\\\.)*\"/ -> String.Double
    /\'([^\'\\\\]|\\\\.)*\'/ -> String.Single
    /\\b\\d+\\.\\d+\\b/ -> Number.Float
    /\\b\\d+\\b/ -> Number.Integer
    /\\b(function)(\\s+)([a-zA-Z_][a-zA-Z0-9_]*)/ -> (Keyword, Whitespace, Name.Function.Decl)
    /\\b(class)(\\s+)([a-zA-Z_][a-zA-Z0-9_]*)/ -> (Keyword, Whitespace, Name.Class)
    /\\b([a-zA-Z_][a-zA-Z0-9_]*(?:\\[.*?\\])?)(\\s+)([a-zA-Z_][a-zA-Z0-9_]*)(\\s*)(=)/ -> (Keyword.Type.Annotation, Whitespace, Name.Variable, Whitespace, Operator.Assignment)
    /\\b([a-zA-Z_][a-zA-Z0-9_]*)(\\s*)(\\()/ -> (Name.Function.Call, Whitespace, Punctuation)
    /\\b(?:function|continue|returns|repeat|return|import|class|while|times|false|break|else|elif|self|null|true|from|for|let|not|and|if|as|in|or)\\b/ -> Keyword
    /\\b(?:float|bool|list|dict|void|int|str|any)\\b/ -> Keyword.Type
    /\\b(?:json_stringify|write_file|json_parse|read_file|uppercase|lowercase|http_post|toString|http_get|toFloat|flatten|reverse|slugify|toBool|filter|reduce|print|range|toInt|chunk|sort|len|map)\\b/ -> Name.Builtin
    /\\|>/ -> Operator.Pipeline
    /==|!=|<=|>=|&&|\\|\\|/ -> Operator.Comparison
    /[+\\-*/%]=/ -> Operator.CompoundAssign
    /[+\\-*/%=<>!&|^~]/ -> Operator
    /[{}()\\[\\];,.]/ -> Punctuation
    /\\b[a-zA-Z_][a-zA-Z0-9_]*\\b/ -> Name
    /\\s+/ -> Whitespace
    "###);
    assert_eq!(clyp::lexer().fallback(), Category::PlainText);
}

#[test]
fn test_shared_between_threads() {
    let handles = (0..4)
        .map(|_| std::thread::spawn(|| clyp::tokenize(ADVANCED).len()))
        .collect::<Vec<_>>();
    let expected = clyp::tokenize(ADVANCED).len();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
