use super::*;

#[test]
fn test_peek_and_advance() {
    let mut c = Cursor::new("ab");
    assert_eq!(c.peek(), Some('a'));
    c.advance();
    assert_eq!(c.peek(), Some('b'));
    assert_eq!(c.position(), 1);
    c.advance();
    assert_eq!(c.peek(), None);
    assert!(c.is_eof());
}

#[test]
fn test_past_end() {
    let mut c = Cursor::new("x");
    for _ in 0..5 {
        c.advance();
    }
    assert_eq!(c.peek(), None);
    assert_eq!(c.position(), 1);
}

#[test]
fn test_jump() {
    let mut c = Cursor::new("&HQ");
    c.advance();
    c.advance();
    c.jump(1);
    assert_eq!(c.peek(), Some('H'));
    c.jump(99);
    assert!(c.is_eof());
}

#[test]
fn test_snapshot() {
    let mut c = Cursor::new("1E+X");
    c.advance();
    let mark = c;
    c.advance();
    c.advance();
    assert_eq!(c.peek(), Some('X'));
    c = mark;
    assert_eq!(c.peek(), Some('E'));
    assert_eq!(c.slice_from(0), "1");
}

#[test]
fn test_multibyte() {
    let mut c = Cursor::new("éA");
    c.advance();
    assert_eq!(c.position(), 2);
    assert_eq!(c.peek(), Some('A'));
    assert_eq!(c.slice_from(0), "é");
}

#[test]
fn test_eat() {
    let mut c = Cursor::new("  \tX=");
    assert_eq!(c.eat_while(|c| c == ' ' || c == '\t'), 3);
    assert_eq!(c.eat_while(|c| c == ' '), 0);
    assert!(!c.eat('='));
    assert!(c.eat('X'));
    assert!(c.eat_if(|c| c == '='));
    assert!(!c.eat_if(|_| true));
}
