use crate::lang::{BasicLexer, Dialect, Token};

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(ch),
        }
    }
}

/// Escapes `&` and `<`, which is all that is needed inside a `<pre>`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Renders tokens as HTML.
///
/// Runs of tokens with the same display class share one
/// `<span class="...">`. Tokens without a class are written bare.
pub fn render<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut html = String::new();
    let mut open: Option<&str> = None;
    for token in tokens {
        if token.text.is_empty() {
            continue;
        }
        let class = token.class();
        if class != open {
            if open.is_some() {
                html.push_str("</span>");
            }
            if let Some(class) = class {
                html.push_str("<span class=\"");
                html.push_str(class);
                html.push_str("\">");
            }
        }
        escape_into(&mut html, token.text);
        open = class;
    }
    if open.is_some() {
        html.push_str("</span>");
    }
    html
}

pub fn highlight(text: &str, dialect: Dialect) -> String {
    render(BasicLexer::new(text, dialect))
}

/// Renders a code block tagged with a language, the way a page does.
/// Blocks tagged with a language other than SmileBASIC are only escaped.
pub fn highlight_block(text: &str, tag: Option<&str>) -> String {
    if Dialect::is_basic_tag(tag) {
        highlight(text, Dialect::from_tag(tag))
    } else {
        escape(text)
    }
}
