//! Character-level input cursor
//!
//! Wraps one input (a line or a whole file) as a flat `Vec<char>` with an
//! index cursor. The scanner needs exactly two primitives: [`next_char`] and
//! a one-step [`push_back`] that hands the most recent character back so the
//! following read sees it again, location included.
//!
//! [`next_char`]: CharStream::next_char
//! [`push_back`]: CharStream::push_back

/// A 1-based line/column position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        SourceLocation { line, column }
    }
}

/// Cursor over the characters of one input.
///
/// Pushback supports exactly one step: [`push_back`] rewinds only when the
/// call before it was a [`next_char`] that returned a character. Anywhere
/// else (at the start, twice in a row, after an end-of-input read) it does
/// nothing.
///
/// [`next_char`]: CharStream::next_char
/// [`push_back`]: CharStream::push_back
#[derive(Debug)]
pub struct CharStream {
    chars: Vec<char>,
    position: usize,
    location: SourceLocation,
    prev_location: Option<SourceLocation>,
}

impl CharStream {
    pub fn new(input: &str) -> Self {
        CharStream {
            chars: input.chars().collect(),
            position: 0,
            location: SourceLocation::new(1, 1),
            prev_location: None,
        }
    }

    /// Location of the next unread character (or of end-of-input).
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Consumes and returns the next character, advancing the tracked
    /// location. Returns `None` at the end of the input without moving,
    /// and a `None` read leaves nothing for [`push_back`] to rewind.
    ///
    /// [`push_back`]: CharStream::push_back
    pub fn next_char(&mut self) -> Option<char> {
        let c = match self.chars.get(self.position) {
            Some(c) => *c,
            None => {
                self.prev_location = None;
                return None;
            }
        };
        self.position += 1;
        self.prev_location = Some(self.location);
        if c == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
        Some(c)
    }

    /// Steps the cursor back one character so the following [`next_char`]
    /// re-reads it at its original location. Does nothing unless the call
    /// before it was a [`next_char`] that returned a character.
    ///
    /// [`next_char`]: CharStream::next_char
    pub fn push_back(&mut self) {
        if let Some(loc) = self.prev_location.take() {
            self.position -= 1;
            self.location = loc;
        }
    }
}

impl Iterator for CharStream {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.next_char()
    }
}
