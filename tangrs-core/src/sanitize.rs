//! Filtering of raw sequence text down to the residue alphabet.

/// Residue letters accepted in a sanitized sequence (upper case; lower case is accepted too).
pub const RESIDUE_ALPHABET: &[u8; 22] = b"ACDEFGHIKLMNOPQRSTVWYZ";

/// Lookup table over ASCII, `true` for every residue letter in either case.
const RESIDUE_LOOKUP: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0;
    while i < RESIDUE_ALPHABET.len() {
        let upper = RESIDUE_ALPHABET[i];
        table[upper as usize] = true;
        table[upper.to_ascii_lowercase() as usize] = true;
        i += 1;
    }
    table
};

/// Returns `true` if `c` is a residue letter (case-insensitive).
#[inline]
pub fn is_residue(c: char) -> bool {
    c.is_ascii() && RESIDUE_LOOKUP[c as usize]
}

///
/// Sanitize a raw sequence string.
///
/// Every character that is not a residue letter is dropped; order and case of
/// the remaining letters are preserved. This never fails.
///
/// ```
/// use tangrs_core::sanitize::sanitize_sequence;
///
/// assert_eq!(sanitize_sequence("ACD EFG\n12-xb"), "ACDEFG");
/// ```
pub fn sanitize_sequence(raw: &str) -> String {
    raw.chars().filter(|&c| is_residue(c)).collect()
}
