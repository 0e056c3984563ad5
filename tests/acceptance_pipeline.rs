//! Acceptance Pipeline Tests
//!
//! End-to-end behavior of `accept`:
//! - validation runs first and short-circuits
//! - accepted code gets a 32-character hex id and a derived props schema
//! - rejected code never reaches the id generator

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use component_store::components::{
    accept, extract, validate, AcceptError, GenerationFailure, IdGenerator, OsRngIdGenerator,
    PropsSchema, ValidationError, MAX_CODE_SIZE,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Hands out sequential ids and counts how often it was asked
#[derive(Default)]
struct CountingIds {
    calls: AtomicUsize,
}

impl IdGenerator for CountingIds {
    fn new_id(&self) -> Result<String, GenerationFailure> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{:032x}", n))
    }
}

fn schema(pairs: &[(&str, &str)]) -> PropsSchema {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// End-to-End
// =============================================================================

#[test]
fn test_button_is_accepted() {
    let record = accept(
        "Button",
        "interface Props { label: string; }",
        &OsRngIdGenerator::new(),
    )
    .unwrap();

    assert_eq!(record.id.len(), 32);
    assert_eq!(record.name, "Button");
    assert_eq!(record.code, "interface Props { label: string; }");
    assert_eq!(record.props_schema, schema(&[("label", "string")]));
}

#[test]
fn test_import_is_rejected_before_id_generation() {
    let ids = CountingIds::default();
    let code = "import React from 'react'\ninterface Props { label: string; }";

    let err = accept("Button", code, &ids).unwrap_err();

    assert_eq!(err, AcceptError::Validation(ValidationError::ImportsDisallowed));
    assert_eq!(ids.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_oversized_code_is_rejected_before_id_generation() {
    let ids = CountingIds::default();
    let code = "x".repeat(MAX_CODE_SIZE + 1);

    let err = accept("Big", code, &ids).unwrap_err();

    assert_eq!(err, AcceptError::Validation(ValidationError::TooLarge));
    assert_eq!(ids.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_code_without_props_gets_empty_schema() {
    let ids = CountingIds::default();
    let record = accept("Plain", "export const Plain = () => null;", &ids).unwrap();

    assert!(record.props_schema.is_empty());
    assert_eq!(ids.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_realistic_component() {
    let code = r#"
interface Props {
  title: string;
  subtitle?: string;
  items: Array<string>;
  onSelect: (index) => void;
  onHover: (event: MouseEvent) => void;
}

export default function List({ title, subtitle, items, onSelect }: Props) {
  return null;
}
"#;

    let record = accept("List", code, &OsRngIdGenerator::new()).unwrap();
    assert_eq!(
        record.props_schema,
        schema(&[
            ("title", "string"),
            ("subtitle", "string"),
            ("items", "Array<string>"),
            ("onSelect", "(index) => void"),
        ])
    );
}

// =============================================================================
// Validator Properties
// =============================================================================

#[test]
fn test_size_boundary() {
    assert_eq!(validate(&" ".repeat(204_800)), Ok(()));
    assert_eq!(validate(&" ".repeat(204_801)), Err(ValidationError::TooLarge));
}

#[test]
fn test_import_position_does_not_matter() {
    let lines = ["const a = 1;", "function f() {}", "export default f;"];

    for position in 0..=lines.len() {
        let mut code: Vec<&str> = lines.to_vec();
        code.insert(position, "  import foo");
        assert_eq!(
            validate(&code.join("\n")),
            Err(ValidationError::ImportsDisallowed),
            "import at line {}",
            position
        );
    }
}

#[test]
fn test_code_without_imports_passes() {
    let samples = [
        "",
        "export const a = 1;",
        "const importance = 3;\nconst x = importance;",
        "// imports are not allowed here\nconst y = 2;",
        "const s = \"import foo\";",
    ];

    for code in samples {
        assert_eq!(validate(code), Ok(()), "code: {:?}", code);
    }
}

// =============================================================================
// Extractor Properties
// =============================================================================

#[test]
fn test_documented_extraction_cases() {
    assert_eq!(
        extract("interface Props { name: string; age?: number; }"),
        schema(&[("name", "string"), ("age", "number")])
    );
    assert_eq!(extract("no props here"), PropsSchema::new());
    assert_eq!(
        extract("interface Props { bad_line_no_colon age: number; }"),
        schema(&[("age", "number")])
    );
}

#[test]
fn test_conceptual_lines_are_independent() {
    let code = "interface Props { one two three label: string; count: number; }";
    assert_eq!(
        extract(code),
        schema(&[("label", "string"), ("count", "number")])
    );
}

#[test]
fn test_redeclared_field_takes_last_type() {
    let code = "interface Props {\n  value: string;\n  other: boolean;\n  value: number;\n}";
    assert_eq!(
        extract(code),
        schema(&[("value", "number"), ("other", "boolean")])
    );
}

// =============================================================================
// Id Properties
// =============================================================================

#[test]
fn test_ids_are_unique_lowercase_hex() {
    let generator = OsRngIdGenerator::new();
    let mut seen = HashSet::new();

    for _ in 0..1_000 {
        let id = generator.new_id().unwrap();
        assert_eq!(id.len(), 32);
        assert!(id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        assert!(seen.insert(id));
    }
}
