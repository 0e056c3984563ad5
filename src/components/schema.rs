//! # Props Schema Extraction
//!
//! Best-effort scan for an `interface Props { ... }` declaration. This is a
//! heuristic, not a parser: anything it cannot make sense of is skipped, and
//! a missing or malformed declaration yields an empty schema.
//!
//! Extraction is two-staged:
//! 1. capture the body between `interface Props {` and the next `}`
//! 2. read `name: type` members out of the body line by line
//!
//! Members sharing a line are separated by `;`, so
//! `interface Props { name: string; age?: number; }` yields two fields.

use super::record::PropsSchema;
use super::validator::is_space;

const INTERFACE_KEYWORD: &str = "interface";
const PROPS_IDENTIFIER: &str = "Props";

/// Extract the props schema from component code. Never fails.
pub fn extract(code: &str) -> PropsSchema {
    let mut schema = PropsSchema::new();

    let Some(body) = find_props_body(code) else {
        return schema;
    };

    for line in body.split('\n') {
        for member in line.split(';') {
            if let Some((name, ty)) = parse_member(member) {
                // last declaration wins
                schema.insert(name.to_string(), ty.to_string());
            }
        }
    }

    schema
}

/// Locate the first `interface <ws>+ Props <ws>* { ... }` block and return
/// the text between the braces.
fn find_props_body(code: &str) -> Option<&str> {
    let mut offset = 0;

    while let Some(found) = code[offset..].find(INTERFACE_KEYWORD) {
        let after_keyword = offset + found + INTERFACE_KEYWORD.len();
        offset = after_keyword;

        let rest = &code[after_keyword..];
        let name = rest.trim_start_matches(is_space_char);
        if name.len() == rest.len() {
            continue;
        }

        let Some(name) = name.strip_prefix(PROPS_IDENTIFIER) else {
            continue;
        };

        let Some(body) = name.trim_start_matches(is_space_char).strip_prefix('{') else {
            continue;
        };

        // With no closing brace here, no later declaration can be closed either.
        return body.find('}').map(|end| &body[..end]);
    }

    None
}

/// Parse one `name: type` member. Returns `None` for anything else.
fn parse_member(member: &str) -> Option<(&str, &str)> {
    let member = member.trim();
    if member.is_empty() {
        return None;
    }

    let (name, ty) = member.split_once(':')?;
    if ty.contains(':') {
        return None;
    }

    let name = name.trim();
    let name = name.strip_suffix('?').unwrap_or(name).trim_end();
    // Text before the last blank run is a colon-less line of its own; only
    // the final token names the field.
    let name = name.rsplit(is_space_char).next().unwrap_or(name);
    if name.is_empty() {
        return None;
    }

    let ty = ty.trim();
    let ty = ty.strip_suffix(';').unwrap_or(ty);

    Some((name, ty))
}

fn is_space_char(c: char) -> bool {
    c.is_ascii() && is_space(c as u8)
}
