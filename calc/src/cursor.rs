/// A forward-only cursor over the unconsumed part of an input line.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    rest: &'a str,
    consumed: usize,
}

/// Whitespace in the C sense: space, `\t`, `\n`, `\r`, form-feed and
/// vertical tab.
const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c' | '\x0b')
}

impl<'a> Cursor<'a> {
    pub const fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            consumed: 0,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Does nothing at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.rest = &self.rest[c.len_utf8()..];
            self.consumed += 1;
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.advance();
        }
    }

    pub fn consume_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a maximal run of ASCII digits. Overflow wraps; with no digit
    /// ahead this returns 0 and leaves the cursor where it was.
    pub fn consume_integer(&mut self) -> i32 {
        let mut result = 0i32;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            result = result.wrapping_mul(10).wrapping_add(digit as i32);
            self.advance();
        }
        result
    }

    pub const fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Number of characters consumed so far.
    pub const fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn advance_stops_at_end() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        assert!(cursor.is_empty());
        cursor.advance();
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.consumed(), 1);
    }

    #[test]
    fn skips_every_c_whitespace_character() {
        let mut cursor = Cursor::new(" \t\n\r\x0c\x0b7");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('7'));
        assert_eq!(cursor.consumed(), 6);
    }

    #[test]
    fn consume_if_only_on_match() {
        let mut cursor = Cursor::new("()");
        assert!(!cursor.consume_if(')'));
        assert_eq!(cursor.consumed(), 0);
        assert!(cursor.consume_if('('));
        assert_eq!(cursor.peek(), Some(')'));
    }

    #[test]
    fn integer_is_maximal_digit_run() {
        let mut cursor = Cursor::new("0042+1");
        assert_eq!(cursor.consume_integer(), 42);
        assert_eq!(cursor.peek(), Some('+'));
    }

    #[test]
    fn integer_without_digits_is_zero() {
        let mut cursor = Cursor::new("-1");
        assert_eq!(cursor.consume_integer(), 0);
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn integer_wraps_on_overflow() {
        let mut cursor = Cursor::new("2147483648");
        assert_eq!(cursor.consume_integer(), i32::MIN);
        let mut cursor = Cursor::new("4294967297");
        assert_eq!(cursor.consume_integer(), 1);
    }

    #[test]
    fn non_ascii_input_advances_by_character() {
        let mut cursor = Cursor::new("é1");
        cursor.advance();
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.consumed(), 1);
    }
}
