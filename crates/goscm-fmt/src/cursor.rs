/// Character cursor over the text being read.
///
/// Positions are byte offsets into the original UTF-8 text, which is what
/// [`goscm_common::Span`] and the diagnostics built from it expect.
pub(crate) struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `expected` if it is the current character.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        let len = self
            .rest()
            .find(|c: char| !predicate(c))
            .unwrap_or(self.rest().len());
        self.pos += len;
    }

    pub(crate) fn pos(&self) -> u32 {
        self.pos as u32
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Text from byte offset `start` up to the cursor.
    pub(crate) fn since(&self, start: u32) -> &'src str {
        &self.source[start as usize..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_bytes() {
        let mut cursor = Cursor::new("é(");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.peek(), Some('('));
        assert!(cursor.eat('('));
        assert!(cursor.is_eof());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn lookahead_does_not_move() {
        let cursor = Cursor::new("#\\a");
        assert_eq!(cursor.peek(), Some('#'));
        assert_eq!(cursor.peek(), Some('#'));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn eat_while_stops_at_first_mismatch() {
        let mut cursor = Cursor::new("abc def");
        cursor.eat_while(|c| !c.is_whitespace());
        assert_eq!(cursor.since(0), "abc");
        cursor.eat_while(|c| c.is_alphabetic());
        assert_eq!(cursor.pos(), 3);
        cursor.eat_while(|_| true);
        assert_eq!(cursor.since(3), " def");
        assert!(cursor.is_eof());
    }
}
