use super::classify::classify_word;
use super::{Category, Cursor, Dialect, ScanContext, Token};
use tracing::{debug, trace};

/// Scans a whole listing.
///
/// The texts of the returned tokens concatenate back to `s`. The last token
/// is always an empty [`Category::End`] marker.
pub fn lex(s: &str, dialect: Dialect) -> Vec<Token<'_>> {
    let tokens: Vec<Token> = BasicLexer::new(s, dialect).collect();
    debug!(%dialect, bytes = s.len(), tokens = tokens.len(), "lexed listing");
    tokens
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_basic_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_type_suffix(c: char) -> bool {
    c == '#' || c == '%' || c == '$'
}

fn is_line_end(c: char) -> bool {
    c == '\n' || c == '\r'
}

trait Tokenizers<'a> {
    fn cursor(&mut self) -> &mut Cursor<'a>;
    fn dialect(&self) -> Dialect;
    fn context(&self) -> ScanContext;

    fn word(&mut self) -> Category {
        let (dialect, context) = (self.dialect(), self.context());
        let cursor = self.cursor();
        let start = cursor.position();
        cursor.advance();
        cursor.eat_while(is_basic_word);
        cursor.eat_if(is_type_suffix);
        let word = cursor.slice_from(start);
        classify_word(word, cursor, context, dialect)
    }

    fn number(&mut self) -> Category {
        let cursor = self.cursor();
        let start = cursor.position();
        cursor.eat_while(is_basic_digit);
        if cursor.peek() == Some('.') {
            let mark = *cursor;
            cursor.advance();
            if cursor.eat_while(is_basic_digit) == 0 {
                *cursor = mark;
                trace!(at = mark.position(), "no digits after decimal point");
                if cursor.position() == start {
                    cursor.advance();
                    return Category::Uncategorized;
                }
                return Category::Number;
            }
        }
        if let Some('E') | Some('e') = cursor.peek() {
            let mark = *cursor;
            cursor.advance();
            cursor.eat_if(|c| c == '+' || c == '-');
            if cursor.eat_while(is_basic_digit) == 0 {
                *cursor = mark;
                trace!(at = mark.position(), "no digits in exponent");
                return Category::Number;
            }
        }
        cursor.eat('#');
        Category::Number
    }

    fn string(&mut self) -> Category {
        let cursor = self.cursor();
        cursor.advance();
        cursor.eat_while(|c| c != '"' && !is_line_end(c));
        cursor.eat('"');
        Category::String
    }

    fn comment(&mut self) -> Category {
        let cursor = self.cursor();
        cursor.advance();
        cursor.eat_while(|c| !is_line_end(c));
        Category::Comment
    }

    fn ampersand(&mut self) -> Category {
        self.cursor().advance();
        match self.cursor().peek() {
            Some('&') => {
                self.cursor().advance();
                Category::Operator
            }
            Some('H') | Some('h') => self.radix(|c| c.is_ascii_hexdigit()),
            Some('B') | Some('b') => self.radix(|c| c == '0' || c == '1'),
            _ => Category::Uncategorized,
        }
    }

    /// `&H` and `&B` literals. On failure only the `&` is taken.
    fn radix<F>(&mut self, is_digit: F) -> Category
    where
        F: Fn(char) -> bool,
    {
        let separators = self.dialect() != Dialect::Older;
        let cursor = self.cursor();
        let mark = *cursor;
        cursor.advance();
        if cursor.eat_while(|c| is_digit(c) || (separators && c == '_')) == 0 {
            *cursor = mark;
            trace!(at = mark.position(), "radix prefix without digits");
            return Category::Uncategorized;
        }
        Category::Number
    }

    fn label(&mut self) -> Category {
        let in_expr = self.context().in_expr();
        let cursor = self.cursor();
        cursor.advance();
        cursor.eat_while(is_basic_word);
        if in_expr {
            Category::LabelString
        } else {
            Category::Label
        }
    }

    fn constant(&mut self) -> Category {
        let cursor = self.cursor();
        cursor.advance();
        if cursor.eat_while(is_basic_word) > 0 {
            cursor.eat_if(is_type_suffix);
            return Category::ConstantNumber;
        }
        if cursor.eat_if(is_type_suffix) {
            return Category::ConstantNumber;
        }
        Category::Uncategorized
    }

    fn backslash(&mut self) -> Category {
        let dialect = self.dialect();
        let cursor = self.cursor();
        cursor.advance();
        if dialect == Dialect::Older {
            return Category::Uncategorized;
        }
        cursor.eat_while(|c| !is_line_end(c));
        cursor.advance();
        Category::Whitespace
    }

    fn minutia(&mut self, pk: char) -> Category {
        let cursor = self.cursor();
        cursor.advance();
        match pk {
            '<' => {
                cursor.eat_if(|c| c == '=' || c == '<');
                Category::Operator
            }
            '>' => {
                cursor.eat_if(|c| c == '=' || c == '>');
                Category::Operator
            }
            '=' => {
                if cursor.eat('=') {
                    Category::Operator
                } else {
                    Category::Equals
                }
            }
            '!' => {
                cursor.eat('=');
                Category::Operator
            }
            '|' => {
                if cursor.eat('|') {
                    Category::Operator
                } else {
                    Category::Uncategorized
                }
            }
            '+' | '-' | '*' | '/' => Category::Operator,
            ';' | ',' | '[' | '(' => Category::ExprDelimiter,
            ')' | ']' | ':' => Category::NonExpr,
            '\n' => Category::Linebreak,
            ' ' | '\t' => Category::Whitespace,
            '?' => Category::ArgKeyword,
            _ => Category::Uncategorized,
        }
    }
}

/// Lazy scanner over one listing.
///
/// Yields every lexeme left to right and finishes with an empty
/// [`Category::End`] token.
pub struct BasicLexer<'a> {
    cursor: Cursor<'a>,
    dialect: Dialect,
    context: ScanContext,
    done: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn context(&self) -> ScanContext {
        self.context
    }
}

impl<'a> BasicLexer<'a> {
    pub fn new(s: &'a str, dialect: Dialect) -> BasicLexer<'a> {
        BasicLexer {
            cursor: Cursor::new(s),
            dialect,
            context: ScanContext::start(),
            done: false,
        }
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.cursor.position();
        let pk = match self.cursor.peek() {
            Some(pk) => pk,
            None => {
                self.done = true;
                return Some(Token::new("", Category::End));
            }
        };
        let mut category = if is_basic_alphabetic(pk) || pk == '_' {
            self.word()
        } else if is_basic_digit(pk) || pk == '.' {
            self.number()
        } else {
            match pk {
                '"' => self.string(),
                '\'' => self.comment(),
                '&' => self.ampersand(),
                '@' => self.label(),
                '#' => self.constant(),
                '\\' => self.backslash(),
                _ => self.minutia(pk),
            }
        };
        if self.cursor.position() == start {
            debug_assert!(false, "Failed to advance at {}.", start);
            self.cursor.advance();
            category = Category::Uncategorized;
        }
        self.context = self.context.after(category);
        Some(Token::new(self.cursor.slice_from(start), category))
    }
}

impl<'a> std::iter::FusedIterator for BasicLexer<'a> {}
