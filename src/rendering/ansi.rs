//! Terminal output. Whether colors are actually emitted is up to `colored`, which honors
//! `NO_COLOR` and `CLICOLOR_FORCE`.

use super::{Highlighted, Style};
use crate::lexing::Category;
use colored::{ColoredString, Colorize};

/// Color `text` as a token of the given category.
pub fn paint(text: &str, category: Category) -> ColoredString {
    use Category::*;

    match category {
        c if c.is_comment() => text.bright_black().italic(),
        StringDouble | StringSingle => text.green(),
        NumberFloat | NumberInteger => text.cyan(),
        FunctionDecl => text.blue().bold(),
        FunctionCall => text.blue(),
        ClassDecl => text.yellow().bold(),
        TypeAnnotation | TypeKeyword => text.yellow(),
        VariableName => text.bold(),
        Keyword => text.magenta().bold(),
        BuiltinName => text.bright_cyan(),
        PipelineOperator => text.bright_magenta().bold(),
        c if c.is_operator() => text.red(),
        _ => text.normal(),
    }
}

pub(super) fn render(runs: &[Highlighted]) -> String {
    let mut out = String::new();
    for run in runs {
        match &run.style {
            Style::Category(category) => out.push_str(&paint(&run.text, *category).to_string()),
            // Other highlighters' classes have no terminal colors.
            Style::Class(_) | Style::Plain => out.push_str(&run.text),
        }
    }
    out
}
