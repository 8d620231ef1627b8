//! Question fingerprinting for memory keys.

/// Hashes a question to a short, stable memory key.
///
/// The hash runs over UTF-16 code units with 32-bit wrapping arithmetic
/// and renders base-36, so keys stay compatible with answer stores
/// written by earlier versions of the extension. No normalization is
/// applied; casing and whitespace produce distinct keys.
pub fn question_fingerprint(question: &str) -> String {
    let mut hash: i32 = 0;
    for unit in question.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    to_base36(hash.unsigned_abs())
}

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    while value > 0 {
        let digit = (value % 36) as u8;
        let ch = if digit < 10 {
            (b'0' + digit) as char
        } else {
            (b'a' + digit - 10) as char
        };
        out.insert(0, ch);
        value /= 36;
    }
    out
}
