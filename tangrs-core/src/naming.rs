//! Display names from free-text headers.
//!
//! Headers come in two flavors. Database style headers (`>sp|P12345|NAME desc`)
//! carry an accession token in their second pipe-delimited field, and that
//! token is kept with only letters, digits, `_`, `-` and `.`. Anything else is
//! reduced to letters, digits and spaces, and the leading words are joined with
//! `_` until the name is long enough to be meaningful on its own.

use crate::consts::RECORD_MARKER;

/// A greedy name stops growing once it is longer than this many characters.
pub const NAME_MIN_LENGTH: usize = 5;

/// Characters an accession token may keep. Whitespace and quotes would break
/// the predictor's argument list.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

///
/// Extract the accession token from a database style header.
///
/// Returns `None` unless the line starts with the record marker and the rest of
/// it has at least two pipe-delimited segments, the second one non-empty after
/// filtering.
///
fn accession_token(line: &str) -> Option<String> {
    let body = line.strip_prefix(RECORD_MARKER)?;
    let mut fields = body.split('|');
    let _database = fields.next()?;
    let accession: String = fields.next()?.chars().filter(|c| is_name_char(*c)).collect();

    match accession.is_empty() {
        true => None,
        false => Some(accession),
    }
}

///
/// Join the leading words of `line` with underscores until the result is longer
/// than [NAME_MIN_LENGTH] or every word has been used.
///
fn greedy_name(line: &str) -> String {
    let cleaned: String = line
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    let tokens: Vec<&str> = cleaned.split(' ').filter(|t| !t.is_empty()).collect();

    let mut name = String::new();
    for token in tokens {
        if !name.is_empty() {
            name.push('_');
        }
        name.push_str(token);

        if name.len() > NAME_MIN_LENGTH {
            break;
        }
    }

    name
}

///
/// Derive a short, filename-safe display name from a header line or an
/// explicit name field.
///
/// # Arguments
/// - line: the raw header line, including its `>` if it has one
///
/// # Returns
/// The display name; empty when nothing usable is left in the line.
///
/// ```
/// use tangrs_core::naming::display_name;
///
/// assert_eq!(display_name(">sp|P12345|TEST_HUMAN desc"), "P12345");
/// assert_eq!(display_name(">Random Protein From Nowhere"), "Random");
/// assert_eq!(display_name(">A b c d"), "A_b_c_d");
/// ```
pub fn display_name(line: &str) -> String {
    match accession_token(line) {
        Some(accession) => accession,
        None => greedy_name(line),
    }
}
