/// A cursor for inline scanning with position tracking.
///
/// Positions are byte offsets into `s`. All delimiters are ASCII and
/// [`Cursor::bump_char`] advances by a whole UTF-8 scalar, so every position
/// the parser slices at lands on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.starts_with_at(self.i, pat)
    }

    /// Checks if the input at byte `at` starts with `pat`.
    pub fn starts_with_at(&self, at: usize, pat: &str) -> bool {
        self.s
            .as_bytes()
            .get(at..)
            .is_some_and(|rest| rest.starts_with(pat.as_bytes()))
    }

    /// Byte length of the char starting at `at`, or `None` at/after the end.
    pub fn char_len_at(&self, at: usize) -> Option<usize> {
        self.s.get(at..)?.chars().next().map(char::len_utf8)
    }

    /// First occurrence of `pat` at or after byte `from`, as an absolute index.
    pub fn find_from(&self, pat: &str, from: usize) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|idx| from + idx)
    }

    /// The text between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by one whole char, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.s.get(self.i..)?.chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Moves to an absolute byte position.
    pub fn jump_to(&mut self, pos: usize) {
        self.i = pos;
    }
}
