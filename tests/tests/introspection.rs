//! Introspection export and import of the example schema.

use graphdoc_registry::Schema;
use graphdoc_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_export_import_renders_identically() {
    // GIVEN the example schema exported as introspection JSON
    let original = example_schema().unwrap();
    let json = original.to_introspection().unwrap();

    // WHEN it is imported again
    let imported = Schema::from_introspection(json).unwrap();

    // THEN every field page renders the same
    let renderer = DocRenderer::new();
    for (type_def, field) in original.all_fields() {
        let coordinate = format!("{}.{}", type_def.name, field.name);
        let reimported = imported.get_field(&coordinate).unwrap();
        assert_eq!(
            renderer.field_doc(field).unwrap(),
            renderer.field_doc(reimported).unwrap(),
            "{}",
            coordinate
        );
    }
    assert_eq!(original.type_count(), imported.type_count());
}

#[test]
fn test_constraints_in_exported_json() {
    let json = example_schema().unwrap().to_introspection().unwrap();

    let types = json["__schema"]["types"].as_array().unwrap();
    let test = types.iter().find(|t| t["name"] == "Test").unwrap();
    let business = test["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "business")
        .unwrap();

    assert_eq!(
        business["constraints"],
        serde_json::json!([{"name": "XOR", "leftSide": "name", "rightSide": "street"}])
    );
}

#[test]
fn test_import_with_data_envelope() {
    let source = r#"{
        "data": {
            "__schema": {
                "queryType": {"name": "Query"},
                "types": [
                    {"kind": "SCALAR", "name": "String"},
                    {
                        "kind": "OBJECT",
                        "name": "Query",
                        "fields": [{
                            "name": "find",
                            "args": [
                                {"name": "a", "type": {"kind": "SCALAR", "name": "String"}},
                                {"name": "b", "type": {"kind": "SCALAR", "name": "String"}}
                            ],
                            "type": {"kind": "SCALAR", "name": "String"},
                            "constraints": [{
                                "name": "THEN",
                                "leftSide": {"name": "WITH", "leftSide": "a", "rightSide": "b"},
                                "rightSide": "a"
                            }]
                        }]
                    }
                ]
            }
        }
    }"#;

    let schema = Schema::from_introspection_str(source).unwrap();

    Scenario::new("imported")
        .schema(schema)
        .field("Query.find", |a| a.constraints(["THEN(WITH(a, b), a)"]))
        .run()
        .unwrap();
}
