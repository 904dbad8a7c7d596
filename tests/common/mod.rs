#![allow(dead_code)]
use sbhl::lang::{lex, Category, Dialect};

pub const DIALECTS: [Dialect; 3] = [Dialect::Older, Dialect::Newer, Dialect::Unspecified];

pub fn kinds(s: &str, dialect: Dialect) -> Vec<(&str, Category)> {
    lex(s, dialect)
        .into_iter()
        .filter(|t| t.category != Category::End)
        .map(|t| (t.text, t.category))
        .collect()
}

pub fn category_of(s: &str, word: &str, dialect: Dialect) -> Option<Category> {
    lex(s, dialect)
        .into_iter()
        .find(|t| t.text == word)
        .map(|t| t.category)
}

/// Recovers the source text from rendered HTML.
pub fn strip_html(html: &str) -> String {
    let mut s = String::new();
    let mut chars = html.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                for ch in chars.by_ref() {
                    if ch == '>' {
                        break;
                    }
                }
            }
            '&' => {
                let entity: String = chars.by_ref().take_while(|&c| c != ';').collect();
                match entity.as_str() {
                    "amp" => s.push('&'),
                    "lt" => s.push('<'),
                    _ => panic!("unexpected entity &{};", entity),
                }
            }
            _ => s.push(ch),
        }
    }
    s
}

/// Removes ANSI escape sequences.
pub fn strip_ansi(text: &str) -> String {
    let mut s = String::new();
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for ch in chars.by_ref() {
                if ch == 'm' {
                    break;
                }
            }
        } else {
            s.push(ch);
        }
    }
    s
}
