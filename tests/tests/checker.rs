//! Constraint checks over whole schemas.

use graphdoc_constraint::ConstraintExpr;
use graphdoc_core::TypeKind;
use graphdoc_registry::SchemaBuilder;
use graphdoc_tests::prelude::*;

#[test]
fn test_example_schema_is_consistent() {
    let violations = example_schema().unwrap().check_constraints();
    assert!(violations.is_empty(), "{:?}", violations);
}

#[test]
fn test_misspelled_argument_is_reported() {
    // GIVEN a constraint naming an argument the field does not have
    let mut builder = SchemaBuilder::new();
    builder
        .add_type("Query", TypeKind::Object)
        .field_with("business", "String", |f| {
            f.arg("name", "String")
                .arg("street", "String")
                .constraint(ConstraintExpr::binary("XOR", "nmae", "street"))
        })
        .done()
        .unwrap();
    builder.query("Query");
    let schema = builder.build().unwrap();

    // WHEN the schema is checked
    let violations = schema.check_constraints();

    // THEN exactly one error names the field and the check
    assert!(violations.has_errors());
    assert_eq!(violations.len(), 1);
    let violation = violations.errors().next().unwrap();
    assert_eq!(violation.constraint_name, "unknown_argument");
    assert_eq!(violation.field.as_deref(), Some("Query.business"));

    // AND the page still renders
    Scenario::new("misspelled")
        .schema(schema)
        .field("Query.business", |a| a.constraints(["XOR(nmae, street)"]))
        .run()
        .unwrap();
}
