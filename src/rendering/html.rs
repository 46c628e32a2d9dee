use super::{Highlighted, Style};
use crate::lexing::Category;

/// Options for HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// CSS class of the `<div>` wrapping each code block.
    pub container_class: String,
    /// Prepended to every token's CSS class, e.g. `"clyp-"` gives `clyp-k` for keywords.
    pub class_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            container_class: "highlight".to_owned(),
            class_prefix: String::new(),
        }
    }
}

/// Escape text for use in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub(super) fn render(config: &RenderConfig, language: &str, runs: &[Highlighted]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"{}\"><pre><code class=\"language-{}\">",
        escape_html(&config.container_class),
        escape_html(language)
    ));
    for run in runs {
        let class = match &run.style {
            Style::Category(category) => Some(category.css_class()),
            Style::Class(class) => Some(class.as_str()),
            Style::Plain => None,
        };
        match class {
            Some(class) => {
                out.push_str(&format!(
                    "<span class=\"{}{}\">{}</span>",
                    escape_html(&config.class_prefix),
                    escape_html(class),
                    escape_html(&run.text)
                ));
            }
            None => out.push_str(&escape_html(&run.text)),
        }
    }
    out.push_str("</code></pre></div>");
    out
}

/// A stylesheet with a rule for every category.
pub fn stylesheet(config: &RenderConfig) -> String {
    let mut css = String::new();
    for category in Category::ALL {
        css.push_str(&format!(
            ".{} .{}{} {{ {} }} /* {} */\n",
            config.container_class,
            config.class_prefix,
            category.css_class(),
            declarations(category),
            category
        ));
    }
    css
}

fn declarations(category: Category) -> &'static str {
    use Category::*;

    match category {
        c if c.is_comment() => "color: #6a737d; font-style: italic;",
        StringDouble | StringSingle => "color: #22863a;",
        NumberFloat | NumberInteger => "color: #005cc5;",
        FunctionDecl => "color: #6f42c1; font-weight: bold;",
        FunctionCall => "color: #6f42c1;",
        ClassDecl => "color: #e36209; font-weight: bold;",
        TypeAnnotation | TypeKeyword => "color: #e36209;",
        VariableName => "color: #24292e; font-weight: bold;",
        Keyword => "color: #d73a49; font-weight: bold;",
        BuiltinName => "color: #0086b3;",
        PipelineOperator => "color: #d73a49; font-weight: bold;",
        c if c.is_operator() => "color: #d73a49;",
        Punctuation | Identifier => "color: #24292e;",
        _ => "color: inherit;",
    }
}
