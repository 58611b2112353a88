//! Field pages of the example schema.

use graphdoc_tests::prelude::*;

mod constraints {
    use super::*;

    #[test]
    fn test_business_query_constraint() {
        Scenario::new("business")
            .field("Test.business", |a| {
                a.titles(["type", "arguments", "constraints"])
                    .arguments(["name: String", "street: String"])
                    .constraints(["XOR(name, street)"])
            })
            .run()
            .unwrap();
    }

    #[test]
    fn test_create_business_constraints_in_order() {
        Scenario::new("create_business")
            .field("MutationType.create_business", |a| {
                a.description("Creates a new business")
                    .constraints([
                        "WITH(street, house_number)",
                        "THEN(house_number_addition, house_number)",
                    ])
                    .class_count(class::CONSTRAINT, 2)
                    .class_count(class::CONSTRAINT_SIDE, 4)
            })
            .run()
            .unwrap();
    }

    #[test]
    fn test_fields_without_constraints() {
        Scenario::new("no_constraints")
            .field("Test.hasArgs", |a| {
                a.titles(["type", "arguments"]).constraints(Vec::<String>::new())
            })
            .field("Test.id", |a| {
                a.titles(["type"]).description("id field from Test type.")
            })
            .run()
            .unwrap();
    }
}

mod golden_text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_business_text() {
        let schema = example_schema().unwrap();
        let field = schema.get_field("MutationType.create_business").unwrap();

        let page = DocRenderer::new().field_doc(field).unwrap();

        let expected = "\
Creates a new business

type
  Boolean

arguments
  name: String!
  street: String
  house_number: Int
  house_number_addition: String

constraints
  WITH(street, house_number)
  THEN(house_number_addition, house_number)
";
        assert_eq!(page.to_text(), expected);
    }

    #[test]
    fn test_subscription_field_text() {
        let schema = example_schema().unwrap();
        let field = schema.get_field("SubscriptionType.subscribeToTest").unwrap();

        let page = DocRenderer::new().field_doc(field).unwrap();

        let expected = "\
Subscribe to the test type

type
  Test

arguments
  id: String
";
        assert_eq!(page.to_text(), expected);
    }
}

mod depth {
    use super::*;

    fn nested_pick_schema() -> graphdoc_registry::Schema {
        let mut builder = graphdoc_registry::SchemaBuilder::new();
        builder
            .add_type("Query", graphdoc_core::TypeKind::Object)
            .field_with("pick", "String", |f| {
                f.arg("a", "Int").arg("b", "Int").arg("c", "Int").constraint(
                    graphdoc_constraint::ConstraintExpr::binary(
                        "THEN",
                        graphdoc_constraint::ConstraintExpr::binary("WITH", "a", "b"),
                        "c",
                    ),
                )
            })
            .done()
            .unwrap();
        builder.query("Query");
        builder.build().unwrap()
    }

    #[test]
    fn test_shallow_ceiling_rejects_nested_constraint() {
        Scenario::new("depth")
            .schema(nested_pick_schema())
            .config(RenderConfig::default().with_max_constraint_depth(1))
            .field("Query.pick", |a| a.error("maximum depth of 1"))
            .run()
            .unwrap();

        Scenario::new("depth_pattern")
            .schema(nested_pick_schema())
            .config(RenderConfig::default().with_max_constraint_depth(1))
            .field("Query.pick", |a| a.error_pattern(r"maximum depth of \d+"))
            .run()
            .unwrap();

        Scenario::new("depth_within_ceiling")
            .config(RenderConfig::default().with_max_constraint_depth(1))
            .field("Test.business", |a| a.constraints(["XOR(name, street)"]))
            .run()
            .unwrap();
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;
    use graphdoc_constraint::ConstraintExpr;
    use graphdoc_core::TypeKind;
    use graphdoc_registry::{FieldDef, SchemaBuilder, TypeDef};

    #[test]
    fn test_empty_relation_name_fails_at_render() {
        // GIVEN a type assembled by hand, past the builder's checks
        let mut field = FieldDef::new("f", graphdoc_core::TypeRef::named("String"));
        field.constraints = vec![ConstraintExpr::new("", "a")];
        let mut query = TypeDef::new("Query", TypeKind::Object);
        query.fields.push(field.clone());

        // THEN the builder refuses it
        let mut builder = SchemaBuilder::new();
        assert!(builder.add_type_def(query).is_err());

        // AND the renderer fails fast on it
        let result = DocRenderer::new().field_doc(&field);
        let assertion = PageAssertion::new().error_pattern(r"^missing required input: constraint name$");
        assert_eq!(assertion.verify(result.as_ref()), Ok(()));
    }
}
