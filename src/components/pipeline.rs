//! # Acceptance Pipeline

use super::errors::AcceptResult;
use super::id::IdGenerator;
use super::record::ComponentRecord;
use super::schema::extract;
use super::validator::validate;

/// Run submitted code through validation, id generation and schema
/// extraction.
///
/// A rejected submission never reaches the id generator.
pub fn accept(
    name: impl Into<String>,
    code: impl Into<String>,
    ids: &dyn IdGenerator,
) -> AcceptResult<ComponentRecord> {
    let code = code.into();
    validate(&code)?;

    let id = ids.new_id()?;
    let props_schema = extract(&code);

    Ok(ComponentRecord {
        id,
        name: name.into(),
        code,
        props_schema,
    })
}
