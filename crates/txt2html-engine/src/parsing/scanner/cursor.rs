/// A forward-only cursor over the document being scanned.
///
/// Positions are byte offsets into `s` and always sit on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The whole document.
    pub s: &'a str,
    /// Current byte offset into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if the whole input has been consumed.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes `n` bytes and returns them.
    ///
    /// `n` must land on a char boundary; callers only pass lengths of matches
    /// taken from [`Cursor::rest`].
    pub fn take(&mut self, n: usize) -> &'a str {
        let end = (self.i + n).min(self.s.len());
        let taken = &self.s[self.i..end];
        self.i = end;
        taken
    }
}
