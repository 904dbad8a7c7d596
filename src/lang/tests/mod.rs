use super::*;

mod cursor_test;
mod keyword_test;

fn kinds(s: &str, dialect: Dialect) -> Vec<(&str, Category)> {
    lex(s, dialect)
        .into_iter()
        .filter(|t| t.category != Category::End)
        .map(|t| (t.text, t.category))
        .collect()
}
