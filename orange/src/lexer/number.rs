// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::trace;

use super::{LexerError, LexerErrorKind, NumberKind, RuneStream, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    fn from_marker(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Binary),
            'o' => Some(Self::Octal),
            'x' => Some(Self::Hexadecimal),
            _ => None,
        }
    }

    const fn radix(&self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    fn is_digit(&self, c: char) -> bool {
        c.is_digit(self.radix())
    }
}

/// Lexes a single numeric literal. The stream must be positioned on its first
/// digit. Exactly the runes of the literal are consumed: a dot that is not
/// followed by a hex digit (`5.toString()`) stays in the stream, any other dot
/// is part of the literal (`5.add` is an invalid decimal number).
///
/// Prefixed literals (`0x`, `0o`, `0b`) are unsigned and their value is
/// rewritten to base 10, so later stages only ever see decimal text.
pub fn lex_number<S: RuneStream>(stream: &mut S) -> Result<Token, LexerError> {
    let begin = stream.location();
    let error = move |kind| LexerError { location: begin, kind };

    let base = lex_prefix(stream).map_err(error)?;
    let mut kind = if base == Base::Decimal { NumberKind::Int } else { NumberKind::UInt };
    let mut value = String::new();
    let mut parse_suffix = true;

    while let Some(c) = stream.peek().filter(char::is_ascii_hexdigit) {
        // `f` and `d` are suffixes unless they can be hexadecimal digits
        if base != Base::Hexadecimal && is_floating_point_suffix(c) {
            break;
        }

        value.push(c);
        stream.next();
        stream.skip_while(|c| c == '_');

        match stream.lookahead::<2>() {
            [Some('.'), next] if !next.is_some_and(|c| c.is_ascii_hexdigit()) => {
                parse_suffix = false;
                break;
            }

            [Some('.'), _] if kind != NumberKind::Double => {
                stream.next();
                value.push('.');
                kind = NumberKind::Double;
            }

            _ => (),
        }
    }

    if !is_valid_for_base(&value, base) {
        return Err(error(LexerErrorKind::InvalidNumberForBase { number: value, base: base.radix() }));
    }

    if parse_suffix {
        let suffix = lex_suffix(stream);
        if !suffix.is_empty() {
            kind = match NumberKind::from_suffix(&suffix) {
                Some(kind) => kind,
                None => return Err(error(LexerErrorKind::InvalidSuffix { suffix })),
            };
        }

        if base != Base::Decimal && kind.is_floating_point() {
            return Err(error(LexerErrorKind::FloatingPointWithNonDecimalBase));
        }

        if base != Base::Decimal && kind.is_signed() {
            return Err(error(LexerErrorKind::SignedWithNonDecimalBase));
        }
    }

    if !kind.is_floating_point() && value.contains('.') {
        return Err(error(LexerErrorKind::IntegralSuffixOnFloatingPoint));
    }

    if base != Base::Decimal {
        let Ok(integer) = i64::from_str_radix(&value, base.radix()) else {
            return Err(error(LexerErrorKind::NumberOutOfRange));
        };

        value = integer.to_string();
    }

    trace!("Lexed {kind} literal {value} at {begin}");

    Ok(Token {
        kind: TokenKind::Number { kind, value },
        begin,
        end: stream.location(),
    })
}

fn lex_prefix<S: RuneStream>(stream: &mut S) -> Result<Base, LexerErrorKind> {
    let [Some('0'), Some(second)] = stream.lookahead::<2>() else {
        return Ok(Base::Decimal);
    };

    if let Some(base) = Base::from_marker(second) {
        stream.next();
        stream.next();
        return Ok(base);
    }

    // Letters after a leading zero are only fine when they start a suffix,
    // as in `0u8` or `0f`.
    if second.is_alphabetic() && !is_suffix_starter(second) {
        return Err(LexerErrorKind::InvalidNumericPrefix { prefix: second });
    }

    Ok(Base::Decimal)
}

fn lex_suffix<S: RuneStream>(stream: &mut S) -> String {
    let mut suffix = String::new();

    while let Some(c) = stream.peek().filter(|c| c.is_alphanumeric()) {
        suffix.push(c);
        stream.next();
    }

    suffix
}

fn is_valid_for_base(value: &str, base: Base) -> bool {
    let mut digits = 0;
    let mut dots = 0;

    for c in value.chars() {
        if c == '.' {
            dots += 1;
        } else if base.is_digit(c) {
            digits += 1;
        } else {
            return false;
        }
    }

    digits != 0 && dots <= 1
}

const fn is_floating_point_suffix(c: char) -> bool {
    matches!(c, 'f' | 'd')
}

const fn is_suffix_starter(c: char) -> bool {
    matches!(c, 'f' | 'd' | 'u' | 'i')
}
