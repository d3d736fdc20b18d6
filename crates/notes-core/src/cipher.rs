//! ROT13 line codec.
//!
//! Every stored line passes through [`transform`] on the way to disk and
//! again on the way back. The rotation is half the alphabet, so the same
//! function both encodes and decodes. This is obfuscation only: anyone can
//! reverse it without a key.

const ROTATION: u8 = 13;
const ALPHABET_LEN: u8 = 26;

/// Rotate every ASCII letter by 13 places within its case.
///
/// Digits, punctuation, whitespace, and non-ASCII characters pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use notes_core::cipher::transform;
///
/// assert_eq!(transform("Hello, World!"), "Uryyb, Jbeyq!");
/// assert_eq!(transform(&transform("abc 123")), "abc 123");
/// ```
pub fn transform(text: &str) -> String {
    text.chars().map(rotate_char).collect()
}

/// Encode a plaintext line for storage.
pub fn encode(line: &str) -> String {
    transform(line)
}

/// Decode a stored line back to plaintext.
pub fn decode(line: &str) -> String {
    transform(line)
}

fn rotate_char(c: char) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    // Letters matched above are ASCII, so the cast is lossless.
    let offset = (c as u8 - base + ROTATION) % ALPHABET_LEN;
    (base + offset) as char
}
