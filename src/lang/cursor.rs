/// A position in the source text.
///
/// Cursors are `Copy`. Taking a snapshot before a speculative scan is
/// `let mark = cursor;` and backtracking is `cursor = mark;`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Cursor<'a> {
        Cursor { src, pos: 0 }
    }

    /// The character under the cursor, or `None` at the end of input.
    /// Reading past the end keeps returning `None`.
    pub fn peek(&self) -> Option<char> {
        self.src.get(self.pos..).and_then(|s| s.chars().next())
    }

    pub fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    /// Byte offset into the source text.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves to an earlier position. Offsets past the end clamp to the end.
    pub fn jump(&mut self, pos: usize) {
        debug_assert!(self.src.is_char_boundary(pos.min(self.src.len())));
        self.pos = pos.min(self.src.len());
    }

    /// Advances while `f` holds for the character under the cursor.
    pub fn eat_while<F>(&mut self, f: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !f(ch) {
                break;
            }
            self.advance();
        }
        self.pos - start
    }

    /// Advances past `ch` if it is under the cursor.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            return true;
        }
        false
    }

    /// Advances past the character under the cursor if it satisfies `f`.
    pub fn eat_if<F>(&mut self, f: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        match self.peek() {
            Some(ch) if f(ch) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }
}
