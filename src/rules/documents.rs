//! `document`-kind rules (§4.2): `uniqueFragmentNames`, `noUnusedFragments`.

use std::collections::HashSet;

use crate::ast::{Definition, Document};
use crate::context::Context;
use crate::error::Error;

pub fn unique_fragment_names(_ctx: &mut Context, document: &Document) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for definition in &document.definitions {
        if let Definition::Fragment(fragment) = definition {
            if !seen.insert(fragment.name.value.clone()) {
                return Err(Error::DuplicateFragmentName {
                    name: fragment.name.value.clone(),
                    span: fragment.span,
                });
            }
        }
    }
    Ok(())
}

/// Runs as a document *exit* rule — by the time it runs, every operation
/// subtree has been walked and `usedFragments` is fully populated (§4.1).
pub fn no_unused_fragments(ctx: &mut Context, document: &Document) -> Result<(), Error> {
    for definition in &document.definitions {
        if let Definition::Fragment(fragment) = definition {
            if !ctx.used_fragments.contains(&fragment.name.value) {
                return Err(Error::UnusedFragment {
                    name: fragment.name.value.clone(),
                    span: fragment.span,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::ast::{Definition, FragmentDefinition, Selection, Span};
    use crate::engine::validate;
    use crate::testing::*;

    // Scenario from §8: `fragment F on User { name }`, never spread.
    #[test]
    fn unused_fragment_is_rejected() {
        let user = object("User", [("name", field(crate::schema::Type::Scalar(string_scalar())))]);
        let query = object("Query", [("me", field(crate::schema::Type::Object(user.clone())))]);
        let schema = schema_with_query(query, [crate::schema::Type::Object(user)]);

        let document = crate::ast::Document {
            definitions: vec![
                Definition::Fragment(FragmentDefinition {
                    name: name("F"),
                    type_condition: name("User"),
                    directives: Vec::new(),
                    selection_set: selection_set(vec![Selection::Field(field_node("name"))]),
                    span: Span::default(),
                }),
                Definition::Operation(crate::ast::Operation {
                    kind: crate::ast::OperationKind::Query,
                    name: None,
                    directives: Vec::new(),
                    selection_set: selection_set(vec![Selection::Field(field_with_selection(
                        "me",
                        vec![Selection::Field(field_node("name"))],
                    ))]),
                    span: Span::default(),
                }),
            ],
        };

        match validate(&schema, &document) {
            Err(crate::Error::UnusedFragment { name, .. }) => {
                assert_eq!(name, "F");
            }
            other => panic!("expected UnusedFragment, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_fragment_names_are_rejected() {
        let schema = query_only_schema();
        let fragment = |selections| {
            Definition::Fragment(FragmentDefinition {
                name: name("F"),
                type_condition: name("Query"),
                directives: Vec::new(),
                selection_set: selection_set(selections),
                span: Span::default(),
            })
        };

        let document = crate::ast::Document {
            definitions: vec![fragment(Vec::new()), fragment(Vec::new())],
        };

        assert!(matches!(
            validate(&schema, &document),
            Err(crate::Error::DuplicateFragmentName { .. })
        ));
    }
}
