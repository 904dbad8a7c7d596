mod common;
use common::*;
use proptest::prelude::*;
use sbhl::lang::{lex, BasicLexer, Category, Dialect};
use sbhl::render::html;

fn dialect() -> impl Strategy<Value = Dialect> {
    prop_oneof![
        Just(Dialect::Older),
        Just(Dialect::Newer),
        Just(Dialect::Unspecified),
    ]
}

const BASIC_CHARS: &str = "[A-Za-z0-9_#%$&@\"'.,;:()\\[\\]=<>!|+*/\\\\? \t\n\r-]{0,64}";

fn check_tokens(s: &str, dialect: Dialect) -> Result<(), TestCaseError> {
    let tokens = lex(s, dialect);
    let text: String = tokens.iter().map(|t| t.text).collect();
    prop_assert_eq!(text.as_str(), s);
    prop_assert_eq!(tokens.last().map(|t| t.category), Some(Category::End));
    for token in &tokens[..tokens.len() - 1] {
        prop_assert!(!token.text.is_empty());
        prop_assert_ne!(token.category, Category::End);
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_round_trip_any(s in "\\PC*", d in dialect()) {
        check_tokens(&s, d)?;
    }

    #[test]
    fn test_round_trip_basic(s in BASIC_CHARS, d in dialect()) {
        check_tokens(&s, d)?;
    }

    #[test]
    fn test_idempotent(s in BASIC_CHARS, d in dialect()) {
        prop_assert_eq!(lex(&s, d), lex(&s, d));
    }

    #[test]
    fn test_lazy_matches_eager(s in BASIC_CHARS, d in dialect()) {
        let lazy: Vec<_> = BasicLexer::new(&s, d).collect();
        prop_assert_eq!(lazy, lex(&s, d));
    }

    #[test]
    fn test_html_preserves_text(s in BASIC_CHARS, d in dialect()) {
        prop_assert_eq!(strip_html(&html::highlight(&s, d)), s);
    }
}
