//! ASCII integer readers.
//!
//! Two readers with deliberately different rules:
//!
//! - [`next_header_value`] skips `#` comments and ignores stray non-digit
//!   bytes, so `P6 # made by foo\n 640 480\r\n255\n` parses cleanly.
//! - [`next_text_value`] reads plain-text samples strictly: no comment
//!   skipping, and anything but digits inside a token is an error.
//!
//! Both consume the single whitespace byte that terminates a token and
//! nothing after it.

use crate::error::PnmError;
use crate::source::ByteSource;

/// Longest plain-text sample token, in bytes.
pub const MAX_TOKEN_LEN: usize = 16;

#[inline]
fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Read the next header integer (width, height or maximum value).
///
/// Leading zeros are accepted; a value above `u32::MAX` is
/// [`PnmError::InvalidHeader`].
pub(crate) fn next_header_value(src: &mut dyn ByteSource) -> Result<u32, PnmError> {
    let mut value: u32 = 0;
    let mut digits = false;
    let mut comment = false;

    loop {
        let byte = src.next_byte()?.ok_or(PnmError::UnexpectedEof)?;

        if byte == b'#' {
            comment = true;
        }
        if comment {
            if byte == b'\n' {
                comment = false;
            }
            continue;
        }

        if is_delimiter(byte) {
            if digits {
                return Ok(value);
            }
        } else if byte.is_ascii_digit() {
            digits = true;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(byte - b'0')))
                .ok_or_else(|| {
                    PnmError::InvalidHeader(alloc::string::String::from(
                        "header value does not fit in u32",
                    ))
                })?;
        }
    }
}

/// Read the next plain-text sample.
///
/// The first byte is taken unconditionally; bytes then accumulate until a
/// space, tab or newline. Whitespace around the token (a leading delimiter
/// left by the previous token, a trailing `\r`) is trimmed and the rest must
/// be decimal digits. End of stream terminates a non-empty token; a stream
/// that ends on whitespace yields [`PnmError::UnexpectedEof`].
pub(crate) fn next_text_value(src: &mut dyn ByteSource) -> Result<u64, PnmError> {
    let mut buf = [0u8; MAX_TOKEN_LEN];
    let first = src.next_byte()?.ok_or(PnmError::UnexpectedEof)?;
    buf[0] = first;
    let mut len = 1;
    let mut at_eof = true;

    while let Some(byte) = src.next_byte()? {
        if is_delimiter(byte) {
            at_eof = false;
            break;
        }
        if len == MAX_TOKEN_LEN {
            return Err(PnmError::TokenTooLong {
                limit: MAX_TOKEN_LEN,
            });
        }
        buf[len] = byte;
        len += 1;
    }

    let token = buf[..len].trim_ascii();
    if token.is_empty() {
        return Err(if at_eof {
            PnmError::UnexpectedEof
        } else {
            PnmError::MalformedToken(first)
        });
    }
    token.iter().try_fold(0u64, |acc, &byte| {
        if byte.is_ascii_digit() {
            Ok(acc * 10 + u64::from(byte - b'0'))
        } else {
            Err(PnmError::MalformedToken(byte))
        }
    })
}
