//! Base62 short code encoding.
//!
//! Short codes are the positional base62 rendering of a canonical URL's
//! row id. The encoding is pure and injective, so the store's unique
//! identity column is all that is needed to produce collision-free codes.

use serde_json::json;

use crate::error::AppError;

/// Symbol table: digits, then lowercase, then uppercase. Index 0 is `'0'`.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest possible encoding of a `u64` (62^11 > 2^64).
const MAX_ENCODED_LEN: usize = 11;

/// Encodes a row id as a base62 short code.
///
/// Zero encodes to `"0"`; every other value is rendered most-significant
/// symbol first without padding.
///
/// # Examples
///
/// ```
/// use shortlink::utils::short_code::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut pos = buf.len();

    while value != 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}

/// Encodes a store row id.
///
/// The store only hands out positive ids, so a negative one means the row
/// state is corrupt and is reported as a storage failure.
pub fn encode_row_id(id: i64) -> Result<String, AppError> {
    u64::try_from(id)
        .map(encode)
        .map_err(|_| AppError::storage("Store returned a negative row id", json!({ "id": id })))
}

/// Decodes a short code back into the row id it was produced from.
///
/// Returns `None` if `code` is empty, contains a symbol outside the
/// alphabet, or denotes a value that does not fit in a `u64`.
pub fn decode(code: &str) -> Option<u64> {
    if code.is_empty() {
        return None;
    }

    code.bytes().try_fold(0u64, |acc, byte| {
        let digit = symbol_value(byte)?;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

/// Returns true if `code` consists solely of base62 symbols.
pub fn is_valid(code: &str) -> bool {
    decode(code).is_some()
}

fn symbol_value(byte: u8) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 36,
        _ => return None,
    };
    Some(u64::from(value))
}
