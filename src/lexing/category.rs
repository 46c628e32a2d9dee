use std::fmt;

/// The lexical class of a token. Every character of the source belongs to exactly one token, and
/// every token has exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    CommentSingle,
    CommentMultiline,
    StringDouble,
    StringSingle,
    NumberFloat,
    NumberInteger,
    /// The name of a function, at its definition.
    FunctionDecl,
    /// The name of a class, at its definition.
    ClassDecl,
    /// The type at the head of a typed declaration, like `list[int]` in `list[int] xs = ...`.
    TypeAnnotation,
    VariableName,
    AssignmentOperator,
    /// The name of a function, at a call site.
    FunctionCall,
    Keyword,
    TypeKeyword,
    BuiltinName,
    /// `|>`
    PipelineOperator,
    ComparisonOperator,
    CompoundAssignOperator,
    Operator,
    Punctuation,
    Identifier,
    Whitespace,
    /// Anything no rule recognized.
    PlainText,
}

impl Category {
    /// Every category, each exactly once.
    pub const ALL: [Category; 23] = [
        Category::CommentSingle,
        Category::CommentMultiline,
        Category::StringDouble,
        Category::StringSingle,
        Category::NumberFloat,
        Category::NumberInteger,
        Category::FunctionDecl,
        Category::ClassDecl,
        Category::TypeAnnotation,
        Category::VariableName,
        Category::AssignmentOperator,
        Category::FunctionCall,
        Category::Keyword,
        Category::TypeKeyword,
        Category::BuiltinName,
        Category::PipelineOperator,
        Category::ComparisonOperator,
        Category::CompoundAssignOperator,
        Category::Operator,
        Category::Punctuation,
        Category::Identifier,
        Category::Whitespace,
        Category::PlainText,
    ];

    /// The short CSS class used when rendering this category to HTML. Distinct for every
    /// category. Where one exists, this is the Pygments short name for the closest token type.
    pub fn css_class(self) -> &'static str {
        use Category::*;

        match self {
            CommentSingle => "c1",
            CommentMultiline => "cm",
            StringDouble => "s2",
            StringSingle => "s1",
            NumberFloat => "mf",
            NumberInteger => "mi",
            FunctionDecl => "nf",
            ClassDecl => "nc",
            TypeAnnotation => "nt",
            VariableName => "nv",
            AssignmentOperator => "oa",
            FunctionCall => "fc",
            Keyword => "k",
            TypeKeyword => "kt",
            BuiltinName => "nb",
            PipelineOperator => "op",
            ComparisonOperator => "oc",
            CompoundAssignOperator => "ou",
            Operator => "o",
            Punctuation => "p",
            Identifier => "n",
            Whitespace => "w",
            PlainText => "x",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Category::CommentSingle | Category::CommentMultiline)
    }

    pub fn is_operator(self) -> bool {
        use Category::*;

        matches!(
            self,
            AssignmentOperator
                | PipelineOperator
                | ComparisonOperator
                | CompoundAssignOperator
                | Operator
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Category::*;

        let name = match self {
            CommentSingle => "Comment.Single",
            CommentMultiline => "Comment.Multiline",
            StringDouble => "String.Double",
            StringSingle => "String.Single",
            NumberFloat => "Number.Float",
            NumberInteger => "Number.Integer",
            FunctionDecl => "Name.Function.Decl",
            ClassDecl => "Name.Class",
            TypeAnnotation => "Keyword.Type.Annotation",
            VariableName => "Name.Variable",
            AssignmentOperator => "Operator.Assignment",
            FunctionCall => "Name.Function.Call",
            Keyword => "Keyword",
            TypeKeyword => "Keyword.Type",
            BuiltinName => "Name.Builtin",
            PipelineOperator => "Operator.Pipeline",
            ComparisonOperator => "Operator.Comparison",
            CompoundAssignOperator => "Operator.CompoundAssign",
            Operator => "Operator",
            Punctuation => "Punctuation",
            Identifier => "Name",
            Whitespace => "Whitespace",
            PlainText => "Text",
        };
        write!(f, "{}", name)
    }
}
