//! Type and schema pages of the example schema.

use graphdoc_tests::prelude::*;

#[test]
fn test_schema_overview() {
    Scenario::new("schema")
        .page(Page::Schema, |a| {
            a.titles(["root types"])
                .contains("query: Test")
                .contains("mutation: MutationType")
                .contains("subscription: SubscriptionType")
                .class_count(class::KEYWORD, 3)
        })
        .run()
        .unwrap();
}

#[test]
fn test_object_and_interface_pages() {
    Scenario::new("types")
        .type_page("First", |a| a.titles(["implements", "fields"]))
        .type_page("TestInterface", |a| {
            a.description("Test interface.")
                .titles(["implementations", "fields"])
                .contains("  First")
                .contains("  Second")
        })
        .type_page("TestUnion", |a| a.titles(["possible types"]))
        .run()
        .unwrap();
}

#[test]
fn test_test_type_fields() {
    Scenario::new("test_type")
        .type_page("Test", |a| {
            a.description("No Description")
                .titles(["fields"])
                .contains("business(name: String, street: String): Business")
                .contains("> union field from Test type, block-quoted.")
                .class_count(class::FIELD_NAME, 6)
        })
        .run()
        .unwrap();
}

#[test]
fn test_enum_and_input_pages() {
    Scenario::new("enum_input")
        .type_page("TestEnum", |a| {
            a.titles(["values"])
                .contains("RED")
                .contains("A rosy color")
                .class_count(class::ENUM_VALUE, 3)
        })
        .type_page("TestInput", |a| {
            a.titles(["fields"])
                .contains("listObject: [TestInput]")
                .class_count(class::FIELD_NAME, 14)
        })
        .run()
        .unwrap();
}

#[test]
fn test_unknown_page() {
    let result = Scenario::new("missing")
        .type_page("Nope", |a| a)
        .run();
    assert!(matches!(result, Err(ScenarioError::UnknownPage { .. })));
}
