//! Line protocol decoder for joystick telemetry frames.
//!
//! One frame per line, four fields separated by a single space:
//!
//! ```text
//! 0 <button> <raw_y> <raw_x>\n
//! ```
//!
//! The leading `0` is a fixed sync token. Surrounding whitespace (including
//! the CR/LF terminator) is stripped before the line is split.

use core::str::FromStr;

use crate::types::RawFrame;

/// Maximum line length accepted from the transport (excluding newline).
pub const MAX_LINE_LENGTH: usize = 64;

/// Number of space-separated tokens in a frame, header included.
pub const FIELD_COUNT: usize = 4;

/// Sync token that opens every frame.
pub const FRAME_HEADER: &[u8] = b"0";

const SEPARATOR: u8 = b' ';

/// The check a rejected line failed, in the order checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameFault {
    /// The line contains non-ASCII bytes.
    NotAscii,
    /// The line split into the wrong number of tokens.
    TokenCount(usize),
    /// The first token is not the `0` sync token.
    MissingHeader,
    /// A field token is not a decimal integer.
    InvalidInteger,
}

/// Error type for frame decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The line violates the frame layout.
    #[error("malformed frame: {0:?}")]
    MalformedFrame(FrameFault),
}

/// Decode one line into a [`RawFrame`].
///
/// # Protocol Format
///
/// ```text
/// 0 <button> <raw_y> <raw_x>
/// ```
///
/// - `0` - Sync token
/// - `button` - Button code as decimal integer (1 pressed, 2 released)
/// - `raw_y`, `raw_x` - Raw axis readings as decimal integers (nominally 1-250)
///
/// Only the frame structure is validated. A frame with an out-of-range
/// button code still decodes; [`interpret`](crate::interpret) rejects it.
///
/// # Grammar
///
/// - Surrounding whitespace is stripped: space, `\t`, `\n`, `\x0B`, `\x0C`,
///   `\r` and the separators `\x1C`-`\x1F`.
/// - Tokens are separated by exactly one space; two spaces in a row make an
///   empty token.
/// - A field is an optional `+`/`-` followed by decimal digits. Single
///   underscores between digits are allowed (`1_37` is 137), and whitespace
///   around the digits inside the token is ignored.
/// - Values must fit in an `i32`.
///
/// # Example
///
/// ```
/// use joystick_core::{decode, RawFrame};
///
/// let frame = decode(b"0 1 137 133\r\n").unwrap();
/// assert_eq!(frame, RawFrame::new(1, 137, 133));
/// ```
pub fn decode(line: &[u8]) -> Result<RawFrame, DecodeError> {
    if !line.is_ascii() {
        return Err(DecodeError::MalformedFrame(FrameFault::NotAscii));
    }
    let line = trim_whitespace(line);

    let mut tokens: [&[u8]; FIELD_COUNT] = [&[]; FIELD_COUNT];
    let mut count = 0usize;
    for token in line.split(|&b| b == SEPARATOR) {
        if let Some(slot) = tokens.get_mut(count) {
            *slot = token;
        }
        count += 1;
    }

    if count != FIELD_COUNT {
        return Err(DecodeError::MalformedFrame(FrameFault::TokenCount(count)));
    }

    let [header, button, raw_y, raw_x] = tokens;

    if header != FRAME_HEADER {
        return Err(DecodeError::MalformedFrame(FrameFault::MissingHeader));
    }

    Ok(RawFrame {
        button_code: parse_i32(button)?,
        raw_y: parse_i32(raw_y)?,
        raw_x: parse_i32(raw_x)?,
    })
}

impl FromStr for RawFrame {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s.as_bytes())
    }
}

/// Whitespace stripped around a line or field.
#[inline]
const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | 0x1C..=0x1F)
}

/// Trim leading and trailing whitespace.
#[inline]
fn trim_whitespace(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&b| !is_whitespace(b)).unwrap_or(s.len());
    let end = s.iter().rposition(|&b| !is_whitespace(b)).map_or(start, |i| i + 1);
    &s[start..end]
}

/// Parse a decimal token (optional sign, `_` between digits) as i32.
#[inline]
fn parse_i32(token: &[u8]) -> Result<i32, DecodeError> {
    const INVALID: DecodeError = DecodeError::MalformedFrame(FrameFault::InvalidInteger);

    let s = trim_whitespace(token);
    let (negative, digits) = match s.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, s),
    };

    if !digits.first().is_some_and(u8::is_ascii_digit)
        || !digits.last().is_some_and(u8::is_ascii_digit)
    {
        return Err(INVALID);
    }

    // Accumulate negatively so i32::MIN fits
    let mut value: i32 = 0;
    let mut prev_underscore = false;
    for &b in digits {
        if b == b'_' {
            if prev_underscore {
                return Err(INVALID);
            }
            prev_underscore = true;
            continue;
        }
        if !b.is_ascii_digit() {
            return Err(INVALID);
        }
        prev_underscore = false;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(i32::from(b - b'0')))
            .ok_or(INVALID)?;
    }

    if negative {
        Ok(value)
    } else {
        value.checked_neg().ok_or(INVALID)
    }
}
