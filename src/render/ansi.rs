extern crate ansi_term;
use crate::lang::{BasicLexer, Category, Dialect, Token};
use ansi_term::{ANSIString, ANSIStrings, Colour, Style};

/// Terminal style for a category. Plain text is `Style::default()`.
pub fn style(category: Category) -> Style {
    use Category::*;
    match category {
        Keyword | ArgKeyword | DefKeyword | TernaryKeyword | ToStepKeyword => {
            Colour::Blue.bold()
        }
        Name => Colour::Cyan.bold(),
        StatementFunction => Colour::Cyan.normal(),
        Function => Colour::Cyan.italic(),
        VariableFunction => Colour::Purple.normal(),
        Number | ConstantNumber | TrueFalseNumber => Colour::Yellow.normal(),
        String | LabelString => Colour::Green.normal(),
        Label => Colour::Red.bold(),
        WordOperator => Style::new().bold(),
        Comment => Colour::Fixed(244).italic(),
        Variable | Operator | Equals | Whitespace | Linebreak | ExprDelimiter | NonExpr
        | Uncategorized | End => Style::default(),
    }
}

/// Renders tokens with ANSI escapes. Adjacent tokens with the same style
/// are painted together so escapes are only written on a change.
pub fn render<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut runs: Vec<(Style, String)> = vec![];
    for token in tokens {
        if token.text.is_empty() {
            continue;
        }
        let style = style(token.category);
        if let Some((current, text)) = runs.last_mut() {
            if *current == style {
                text.push_str(token.text);
                continue;
            }
        }
        runs.push((style, token.text.to_string()));
    }
    let painted: Vec<ANSIString<'static>> = runs
        .into_iter()
        .map(|(style, text)| style.paint(text))
        .collect();
    ANSIStrings(&painted).to_string()
}

pub fn highlight(text: &str, dialect: Dialect) -> String {
    render(BasicLexer::new(text, dialect))
}
