//! graphdoc Example
//!
//! A small schema exercising every kind of type and the constraints
//! extension. It is metadata only: nothing here resolves queries.
//!
//! Roots: `Test` (query), `MutationType`, `SubscriptionType`.

use graphdoc_constraint::ConstraintExpr;
use graphdoc_core::TypeKind;
use graphdoc_registry::{EnumValueDef, RegistryResult, Schema, SchemaBuilder};

/// Scalar-ish input shapes shared by `TestInput` fields and `Test.hasArgs` args.
const INPUT_SHAPES: &[(&str, &str)] = &[
    ("string", "String"),
    ("int", "Int"),
    ("float", "Float"),
    ("boolean", "Boolean"),
    ("id", "ID"),
    ("enum", "TestEnum"),
    ("object", "TestInput"),
    ("listString", "[String]"),
    ("listInt", "[Int]"),
    ("listFloat", "[Float]"),
    ("listBoolean", "[Boolean]"),
    ("listID", "[ID]"),
    ("listEnum", "[TestEnum]"),
    ("listObject", "[TestInput]"),
];

/// Build the example schema.
pub fn example_schema() -> RegistryResult<Schema> {
    let mut builder = SchemaBuilder::new();

    builder
        .add_type("TestEnum", TypeKind::Enum)
        .value(EnumValueDef::new("RED").with_description("A rosy color"))
        .value(EnumValueDef::new("GREEN").with_description("The color of martians and slime"))
        .value(
            EnumValueDef::new("BLUE")
                .with_description("A feeling you might have if you can't use GraphQL"),
        )
        .done()?;

    INPUT_SHAPES
        .iter()
        .fold(builder.add_type("TestInput", TypeKind::InputObject), |input, (name, ty)| {
            if *name == "string" {
                input.field_with(*name, *ty, |f| f.description("Repeats back this string"))
            } else {
                input.field(*name, *ty)
            }
        })
        .done()?;

    builder
        .add_type("TestInterface", TypeKind::Interface)
        .description("Test interface.")
        .field_with("name", "String", |f| f.description("Common name string."))
        .done()?;

    builder
        .add_type("First", TypeKind::Object)
        .implements("TestInterface")
        .field_with("name", "String", |f| {
            f.description("Common name string for UnionFirst.")
        })
        .field("first", "[TestInterface]")
        .done()?;

    builder
        .add_type("Second", TypeKind::Object)
        .implements("TestInterface")
        .field_with("name", "String", |f| {
            f.description("Common name string for UnionFirst.")
        })
        .field("second", "TestInterface")
        .done()?;

    builder
        .add_type("TestUnion", TypeKind::Union)
        .possible_type("First")
        .possible_type("Second")
        .done()?;

    builder
        .add_type("Business", TypeKind::Object)
        .field_with("name", "String!", |f| f.description("The name of the business"))
        .field_with("street", "String", |f| {
            f.description("The street where the business is located")
        })
        .field_with("house_number", "Int", |f| {
            f.description("The house number of the address")
        })
        .field_with("house_number_addition", "String", |f| {
            f.description("The addition to the house number (eg A in the number 23A)")
        })
        .done()?;

    builder
        .add_type("Test", TypeKind::Object)
        .field_with("test", "Test", |f| f.description("`test` field from `Test` type."))
        .field_with("union", "TestUnion", |f| {
            f.description("> union field from Test type, block-quoted.")
        })
        .field_with("id", "ID", |f| f.description("id field from Test type."))
        .field_with("isTest", "Boolean", |f| {
            f.description("Is this a test schema? Sure it is.")
        })
        .field_with("hasArgs", "String", |f| {
            INPUT_SHAPES.iter().fold(f, |f, (name, ty)| f.arg(*name, *ty))
        })
        .field_with("business", "Business", |f| {
            f.arg("name", "String")
                .arg("street", "String")
                .constraint(ConstraintExpr::binary("XOR", "name", "street"))
        })
        .done()?;

    builder
        .add_type("MutationType", TypeKind::Object)
        .description("This is a simple mutation type")
        .field_with("create_business", "Boolean", |f| {
            f.description("Creates a new business")
                .arg("name", "String!")
                .arg("street", "String")
                .arg("house_number", "Int")
                .arg("house_number_addition", "String")
                .constraint(ConstraintExpr::binary("WITH", "street", "house_number"))
                .constraint(ConstraintExpr::binary(
                    "THEN",
                    "house_number_addition",
                    "house_number",
                ))
        })
        .done()?;

    builder
        .add_type("SubscriptionType", TypeKind::Object)
        .description("This is a simple subscription type")
        .field_with("subscribeToTest", "Test", |f| {
            f.description("Subscribe to the test type").arg("id", "String")
        })
        .done()?;

    builder
        .query("Test")
        .mutation("MutationType")
        .subscription("SubscriptionType");
    builder.build()
}
