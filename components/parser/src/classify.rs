//! Byte classification for the scanner.
//!
//! Every byte maps to one of five classes. The table is ASCII-only: bytes
//! 128-255, DEL and most control bytes are invalid, so any non-ASCII input
//! fails as soon as a production looks at it. Class order matters, the
//! predicates below compare classes rather than bytes.

/// Lexical class of a source byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CharClass {
    /// Not allowed in source text
    Invalid = 0,
    /// Whitespace and punctuation
    Delimiter = 1,
    /// `0`-`9`
    Digit = 2,
    /// `A`-`F` and `a`-`f`
    HexDigit = 3,
    /// Remaining ASCII letters
    Letter = 4,
}

use CharClass::{Delimiter as D, Digit as N, HexDigit as H, Invalid as X, Letter as L};

#[rustfmt::skip]
const ASCII_CLASSES: [CharClass; 128] = [
    X, X, X, X, X, X, X, X, X, D, D, X, D, X, X, X, //   0-15   \t \n \f
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, //  16-31
    D, D, D, D, D, D, D, D, D, D, D, D, D, D, D, D, //  32-47    !"#$%&'()*+,-./
    N, N, N, N, N, N, N, N, N, N, D, D, D, D, D, D, //  48-63   0123456789:;<=>?
    D, H, H, H, H, H, H, L, L, L, L, L, L, L, L, L, //  64-79   @ABCDEFGHIJKLMNO
    L, L, L, L, L, L, L, L, L, L, L, D, D, D, D, D, //  80-95   PQRSTUVWXYZ[\]^_
    D, H, H, H, H, H, H, L, L, L, L, L, L, L, L, L, //  96-111  `abcdefghijklmno
    L, L, L, L, L, L, L, L, L, L, L, D, D, D, D, X, // 112-127  pqrstuvwxyz{|}~ DEL
];

static CLASS_TABLE: [CharClass; 256] = {
    let mut table = [CharClass::Invalid; 256];
    let mut i = 0;
    while i < ASCII_CLASSES.len() {
        table[i] = ASCII_CLASSES[i];
        i += 1;
    }
    table
};

/// Classify a single byte.
///
/// # Examples
///
/// ```
/// use parser::{classify, CharClass};
///
/// assert_eq!(classify(b'7'), CharClass::Digit);
/// assert_eq!(classify(b'c'), CharClass::HexDigit);
/// assert_eq!(classify(b'x'), CharClass::Letter);
/// assert_eq!(classify(b'_'), CharClass::Delimiter);
/// assert_eq!(classify(0xC3), CharClass::Invalid);
/// ```
#[inline]
pub fn classify(byte: u8) -> CharClass {
    CLASS_TABLE[usize::from(byte)]
}

/// True for ASCII letters.
#[inline]
pub fn is_alpha(byte: u8) -> bool {
    classify(byte) > CharClass::Digit
}

/// True for ASCII letters and digits.
#[inline]
pub fn is_alnum(byte: u8) -> bool {
    classify(byte) > CharClass::Delimiter
}

/// True for `0`-`9`.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    classify(byte) == CharClass::Digit
}

/// True for space, tab, carriage return and line feed.
///
/// Independent of the class table: `\r` is an invalid byte there.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// True for a byte that may start an identifier.
#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    is_alpha(byte) || byte == b'_'
}

/// True for a byte that may continue an identifier.
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    is_alnum(byte) || byte == b'_'
}
