use super::keyword::{self, Table};
use super::{Category, Cursor, Dialect, ScanContext};

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Picks the category of an identifier-shaped word.
///
/// `cursor` sits right after the word. It is left there, except for `T?`
/// where the `?` is taken into the word.
pub fn classify_word(
    word: &str,
    cursor: &mut Cursor,
    context: ScanContext,
    dialect: Dialect,
) -> Category {
    let upper = word.to_ascii_uppercase();
    let upper = upper.as_str();
    if keyword::contains(Table::Constant, upper, dialect) {
        return Category::TrueFalseNumber;
    }
    if keyword::contains(Table::WordOperator, upper, dialect) {
        return Category::WordOperator;
    }
    if upper == "DEF" {
        return Category::DefKeyword;
    }
    if upper == "T" && cursor.peek() == Some('?') {
        cursor.advance();
        return Category::TernaryKeyword;
    }
    if keyword::contains(Table::Keyword, upper, dialect) {
        return Category::Keyword;
    }
    if keyword::contains(Table::ArgKeyword, upper, dialect) {
        return Category::ArgKeyword;
    }
    if context.after_def() {
        return Category::Name;
    }
    if looks_like_call(cursor, context) {
        if keyword::contains(Table::Builtin, upper, dialect) {
            Category::StatementFunction
        } else if upper == "TO" || upper == "STEP" {
            Category::ToStepKeyword
        } else {
            Category::Function
        }
    } else if keyword::contains(Table::SystemVariable, upper, dialect) {
        Category::VariableFunction
    } else {
        Category::Variable
    }
}

/// Decides function versus variable from what follows the word.
///
/// Inside an expression only `NAME(` is a call. At the head of a statement
/// everything is a call except `NAME[` and a bare assignment `NAME=`.
/// The cursor is restored before returning.
fn looks_like_call(cursor: &mut Cursor, context: ScanContext) -> bool {
    let mark = *cursor;
    cursor.eat_while(is_basic_whitespace);
    let call = if context.in_expr() {
        cursor.peek() == Some('(')
    } else {
        match cursor.peek() {
            Some('[') => false,
            Some('=') => {
                cursor.advance();
                cursor.peek() == Some('=')
            }
            _ => true,
        }
    };
    *cursor = mark;
    call
}
