// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::FileLocation;

/// Character-level input for the lexers. Only [`RuneStream::next`] moves the
/// stream forward; every peek is free of side effects.
pub trait RuneStream {
    /// The rune `n` positions ahead, where `0` is the next rune.
    fn peek_nth(&self, n: usize) -> Option<char>;

    fn next(&mut self) -> Option<char>;

    /// Location of the next rune, or of the end of the input.
    fn location(&self) -> FileLocation;

    fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// The next `N` runes, `None` past the end of the input.
    fn lookahead<const N: usize>(&self) -> [Option<char>; N]
            where Self: Sized {
        std::array::from_fn(|n| self.peek_nth(n))
    }

    /// Consumes runes while `predicate` holds.
    fn skip_while(&mut self, mut predicate: impl FnMut(char) -> bool)
            where Self: Sized {
        while self.peek().is_some_and(&mut predicate) {
            self.next();
        }
    }
}

pub struct StrRuneStream<'source_code> {
    input: &'source_code str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'source_code> StrRuneStream<'source_code> {
    #[must_use]
    pub const fn new(input: &'source_code str) -> Self {
        Self {
            input,
            offset: 0,
            line: 0,
            column: 0,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> &'source_code str {
        &self.input[self.offset..]
    }

    #[must_use]
    pub fn slice(&self, begin: FileLocation, end: FileLocation) -> &'source_code str {
        &self.input[begin.offset()..end.offset()]
    }
}

impl RuneStream for StrRuneStream<'_> {
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    fn next(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.offset += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    fn location(&self) -> FileLocation {
        FileLocation::new(self.offset, self.line, self.column)
    }
}
