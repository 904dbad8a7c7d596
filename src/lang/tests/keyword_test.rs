use crate::lang::keyword::*;
use crate::lang::Dialect::{self, *};

fn gated(table: Table, word: &str) -> [bool; 3] {
    [
        contains(table, word, Older),
        contains(table, word, Newer),
        contains(table, word, Unspecified),
    ]
}

#[test]
fn test_gate() {
    assert!(Gate::Always.admits(Older));
    assert!(Gate::Is(Older).admits(Older));
    assert!(!Gate::Is(Older).admits(Unspecified));
    assert!(!Gate::IsNot(Older).admits(Older));
    assert!(Gate::IsNot(Older).admits(Unspecified));
    assert!(Gate::IsNot(Older).admits(Newer));
}

#[test]
fn test_keywords() {
    assert_eq!(gated(Table::Keyword, "THEN"), [true, true, true]);
    assert_eq!(gated(Table::Keyword, "STOP"), [true, false, false]);
    assert_eq!(gated(Table::Keyword, "LOOP"), [false, true, true]);
    assert_eq!(gated(Table::Keyword, "OTHERWISE"), [false, true, true]);
}

#[test]
fn test_arg_keywords() {
    assert_eq!(gated(Table::ArgKeyword, "PRINT"), [true, true, true]);
    assert_eq!(gated(Table::ArgKeyword, "CASE"), [false, true, true]);
    assert_eq!(gated(Table::ArgKeyword, "WHEN"), [false, true, true]);
}

#[test]
fn test_builtins() {
    assert_eq!(gated(Table::Builtin, "ABS"), [true, true, true]);
    assert_eq!(gated(Table::Builtin, "BGPUT"), [true, false, true]);
    assert_eq!(gated(Table::Builtin, "TYPEOF"), [false, true, true]);
    assert_eq!(gated(Table::Builtin, "STOP"), [false, true, true]);
    assert_eq!(gated(Table::Builtin, "VISIBLE"), [true, true, true]);
}

#[test]
fn test_system_variables() {
    assert_eq!(gated(Table::SystemVariable, "MAINCNT"), [true, false, true]);
    assert_eq!(gated(Table::SystemVariable, "CSRX"), [true, false, true]);
    assert_eq!(gated(Table::SystemVariable, "ABS"), [false, false, false]);
}

#[test]
fn test_constants() {
    assert_eq!(gated(Table::Constant, "TRUE"), [true, true, true]);
    assert_eq!(gated(Table::Constant, "CANCEL"), [true, true, true]);
}

#[test]
fn test_word_operators() {
    assert_eq!(gated(Table::WordOperator, "XOR"), [true, true, true]);
    assert_eq!(gated(Table::WordOperator, "DIV"), [false, true, true]);
    assert_eq!(gated(Table::WordOperator, "MOD"), [false, true, true]);
}

#[test]
fn test_tables_are_upper_case() {
    let all = [
        Table::Keyword,
        Table::ArgKeyword,
        Table::Builtin,
        Table::SystemVariable,
        Table::Constant,
        Table::WordOperator,
    ];
    for &table in all.iter() {
        for &dialect in [Older, Newer, Unspecified].iter() {
            for word in words(table, dialect) {
                assert_eq!(word, word.to_ascii_uppercase());
            }
        }
    }
    assert!(!contains(Table::Keyword, "then", Older));
}

#[test]
fn test_words() {
    let older = words(Table::Keyword, Older);
    assert!(older.contains(&"STOP"));
    assert!(!older.contains(&"LOOP"));
    let unspecified = words(Table::Keyword, Dialect::Unspecified);
    assert!(!unspecified.contains(&"STOP"));
    assert!(unspecified.contains(&"LOOP"));
    assert!(words(Table::SystemVariable, Newer).is_empty());
}
