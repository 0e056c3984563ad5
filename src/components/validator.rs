//! # Code Validator
//!
//! Policy filter applied to submitted code before anything else happens.
//! It does not parse the language: it checks the byte length and scans
//! line starts for an `import` statement.

use super::errors::{ValidationError, ValidationResult};

/// Maximum accepted code size in bytes
pub const MAX_CODE_SIZE: usize = 200 * 1024;

const IMPORT_KEYWORD: &[u8] = b"import";

/// Validate submitted code. The first failing rule wins.
pub fn validate(code: &str) -> ValidationResult<()> {
    if code.len() > MAX_CODE_SIZE {
        return Err(ValidationError::TooLarge);
    }

    if contains_import(code) {
        return Err(ValidationError::ImportsDisallowed);
    }

    Ok(())
}

/// ASCII whitespace as understood by the scanners: space, tab, newline,
/// form feed, carriage return.
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0c' | b'\r')
}

fn contains_import(code: &str) -> bool {
    let bytes = code.as_bytes();
    line_starts(bytes).any(|start| starts_with_import(&bytes[start..]))
}

fn line_starts(bytes: &[u8]) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        bytes
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == b'\n')
            .map(|(i, _)| i + 1),
    )
}

/// `line` runs from a line start to the end of the text. Leading blanks stop
/// at the newline so every line is only scanned from its own start.
fn starts_with_import(line: &[u8]) -> bool {
    let indent = line
        .iter()
        .position(|b| *b == b'\n' || !is_space(*b))
        .unwrap_or(line.len());

    match line[indent..].strip_prefix(IMPORT_KEYWORD) {
        // `\n` terminating the line counts as the whitespace after the keyword
        Some(rest) => rest.first().is_some_and(|b| is_space(*b)),
        None => false,
    }
}
