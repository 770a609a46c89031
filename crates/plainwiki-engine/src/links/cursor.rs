/// A cursor for byte-by-byte scanning of a page body.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The bytes being scanned.
    pub s: &'a [u8],
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a [u8]) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances while `pred` holds, returning how many bytes were consumed.
    pub fn bump_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while self.peek().is_some_and(&pred) {
            self.i += 1;
        }
        self.i - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new(b"hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn empty_input() {
        let cur = Cursor::new(b"");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new(b"x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn bump_while_stops_at_first_mismatch() {
        let mut cur = Cursor::new(b"abc1");
        assert_eq!(cur.bump_while(|b| b.is_ascii_alphabetic()), 3);
        assert_eq!(cur.peek(), Some(b'1'));
    }

    #[test]
    fn bump_while_runs_to_eof() {
        let mut cur = Cursor::new(b"abc");
        assert_eq!(cur.bump_while(|b| b.is_ascii_alphabetic()), 3);
        assert!(cur.eof());
        assert_eq!(cur.bump_while(|_| true), 0);
    }
}
