/// How a lexeme is displayed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Category {
    Keyword,
    ArgKeyword,
    DefKeyword,
    /// The identifier being defined after `DEF`.
    Name,
    /// Call of something that is not built in.
    Function,
    StatementFunction,
    Variable,
    VariableFunction,
    Number,
    ConstantNumber,
    TrueFalseNumber,
    String,
    Label,
    /// A label used as an operand, e.g. `GOTO @A` or `RESTORE @DATA`.
    LabelString,
    Operator,
    WordOperator,
    ToStepKeyword,
    Comment,
    /// `T?`
    TernaryKeyword,
    Equals,
    Whitespace,
    Linebreak,
    ExprDelimiter,
    NonExpr,
    Uncategorized,
    /// Empty marker after the last token.
    End,
}

impl Category {
    /// True for categories that leave the scanner in a value position,
    /// so the next word is an operand rather than a statement.
    pub fn is_expression_lead(self) -> bool {
        use Category::*;
        matches!(
            self,
            ArgKeyword
                | Function
                | StatementFunction
                | ToStepKeyword
                | Operator
                | WordOperator
                | Name
                | Equals
                | ExprDelimiter
        )
    }

    pub fn is_structural(self) -> bool {
        use Category::*;
        matches!(self, Whitespace | Linebreak | ExprDelimiter | NonExpr | End)
    }

    /// The CSS class the web renderer puts on this category, if any.
    pub fn class(self) -> Option<&'static str> {
        use Category::*;
        let class = match self {
            Keyword | ArgKeyword | TernaryKeyword => "keyword",
            DefKeyword => "def keyword",
            Name => "name",
            Function => "statement",
            StatementFunction => "statement function",
            Variable => "variable",
            VariableFunction => "variable function",
            Number => "number",
            ConstantNumber => "constant number",
            TrueFalseNumber => "true-false number",
            String => "string",
            Label => "label",
            LabelString => "label-string string",
            Operator => "operator",
            WordOperator => "word-operator operator",
            ToStepKeyword => "to-step keyword",
            Comment => "comment",
            Equals => "equals",
            Whitespace | Linebreak | ExprDelimiter | NonExpr | Uncategorized | End => {
                return None
            }
        };
        Some(class)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One lexeme and its category. `text` borrows from the scanned source.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub text: &'a str,
    pub category: Category,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, category: Category) -> Token<'a> {
        Token { text, category }
    }

    /// The CSS class of this lexeme. The `?` shorthand for `PRINT` gets
    /// its own `question keyword` class.
    pub fn class(&self) -> Option<&'static str> {
        match (self.category, self.text) {
            (Category::ArgKeyword, "?") => Some("question keyword"),
            (category, _) => category.class(),
        }
    }
}

impl<'a> std::fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// What the scanner remembers about the tokens behind it: the category of
/// the last token that was not whitespace.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct ScanContext {
    prev: Option<Category>,
}

impl ScanContext {
    /// Context at the start of a listing.
    pub fn start() -> ScanContext {
        ScanContext { prev: None }
    }

    pub fn prev(self) -> Option<Category> {
        self.prev
    }

    /// The next lexeme sits in a value position.
    pub fn in_expr(self) -> bool {
        self.prev.map_or(false, Category::is_expression_lead)
    }

    pub fn after_def(self) -> bool {
        self.prev == Some(Category::DefKeyword)
    }

    /// Context after emitting a token of `category`.
    /// Whitespace is transparent; every other token replaces the context.
    #[must_use]
    pub fn after(self, category: Category) -> ScanContext {
        match category {
            Category::Whitespace => self,
            _ => ScanContext {
                prev: Some(category),
            },
        }
    }
}
