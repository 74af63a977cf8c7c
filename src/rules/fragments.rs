//! `inlineFragment` / `fragmentSpread` / `fragmentDefinition` rules (§4.2):
//! `fragmentHasValidType`, `fragmentSpreadTargetDefined`,
//! `fragmentDefinitionHasNoCycles`, `fragmentSpreadIsPossible`.

use std::collections::HashSet;

use crate::ast::{FragmentDefinition, FragmentSpread, InlineFragment, Name, Selection, SelectionSet, Span};
use crate::context::{Context, Frame};
use crate::error::Error;

fn check_type_condition(ctx: &Context, name: &Name, span: Span) -> Result<(), Error> {
    match ctx.schema.get_type(&name.value) {
        Some(ty) if ty.is_composite() => Ok(()),
        _ => Err(Error::InvalidFragmentType {
            type_name: name.value.clone(),
            span,
        }),
    }
}

pub fn fragment_has_valid_type_on_inline_fragment(
    ctx: &mut Context,
    fragment: &InlineFragment,
) -> Result<(), Error> {
    match &fragment.type_condition {
        Some(name) => check_type_condition(ctx, name, fragment.span),
        None => Ok(()),
    }
}

pub fn fragment_has_valid_type_on_definition(
    ctx: &mut Context,
    fragment: &FragmentDefinition,
) -> Result<(), Error> {
    check_type_condition(ctx, &fragment.type_condition, fragment.span)
}

pub fn fragment_spread_target_defined(
    ctx: &mut Context,
    spread: &FragmentSpread,
) -> Result<(), Error> {
    if !ctx.fragment_map.contains_key(&spread.fragment_name.value) {
        return Err(Error::UndefinedFragment {
            name: spread.fragment_name.value.clone(),
            span: spread.span,
        });
    }
    Ok(())
}

fn fragment_spread_is_possible(ctx: &Context, span: Span) -> Result<(), Error> {
    let (parent, target) = match (
        ctx.parent().and_then(Frame::as_type),
        ctx.top().and_then(Frame::as_type),
    ) {
        (Some(parent), Some(target)) => (parent, target),
        // Either side unresolved: another rule has already reported it, or
        // will. Abstain rather than raise a spurious error (§4.1).
        _ => return Ok(()),
    };

    let parent_possible: HashSet<&str> = ctx
        .schema
        .possible_types(parent)
        .iter()
        .map(|object| object.name.as_str())
        .collect();
    let target_possible: HashSet<&str> = ctx
        .schema
        .possible_types(target)
        .iter()
        .map(|object| object.name.as_str())
        .collect();

    if parent_possible.is_disjoint(&target_possible) {
        return Err(Error::ImpossibleFragmentSpread {
            type_name: target.name().unwrap_or("").to_owned(),
            span,
        });
    }
    Ok(())
}

pub fn fragment_spread_is_possible_on_inline_fragment(
    ctx: &mut Context,
    fragment: &InlineFragment,
) -> Result<(), Error> {
    fragment_spread_is_possible(ctx, fragment.span)
}

pub fn fragment_spread_is_possible_on_spread(
    ctx: &mut Context,
    spread: &FragmentSpread,
) -> Result<(), Error> {
    fragment_spread_is_possible(ctx, spread.span)
}

/// Walks transitive spreads starting at `fragment`, failing on a revisited
/// fragment name. Per the design notes, the `seen` set is shared across the
/// *entire* recursive scan rather than cloned per branch: this dedups
/// visits but can miss a cycle reachable only through a second branch once
/// the first has already marked the shared fragment as seen. Preserved for
/// fidelity, not "fixed".
pub fn fragment_definition_has_no_cycles(
    ctx: &mut Context,
    fragment: &FragmentDefinition,
) -> Result<(), Error> {
    let mut seen = HashSet::new();
    scan_for_cycle(ctx, &fragment.name.value, &fragment.selection_set, &mut seen)
}

fn scan_for_cycle(
    ctx: &Context,
    root_name: &str,
    selection_set: &SelectionSet,
    seen: &mut HashSet<String>,
) -> Result<(), Error> {
    for selection in &selection_set.selections {
        match selection {
            Selection::FragmentSpread(spread) => {
                let name = &spread.fragment_name.value;
                if name == root_name {
                    return Err(Error::FragmentCycle {
                        name: root_name.to_owned(),
                        span: spread.span,
                    });
                }
                if !seen.insert(name.clone()) {
                    continue;
                }
                if let Some(target) = ctx.fragment_map.get(name) {
                    scan_for_cycle(ctx, root_name, &target.selection_set, seen)?;
                }
            }
            Selection::InlineFragment(inline) => {
                scan_for_cycle(ctx, root_name, &inline.selection_set, seen)?;
            }
            Selection::Field(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::ast::{Definition, FragmentDefinition, Selection, Span};
    use crate::engine::validate;
    use crate::testing::*;

    // Scenario from §8: Object Dog, Object Cat, no shared interface; a
    // fragment `... on Cat` spread inside a selection on `Dog`.
    #[test]
    fn impossible_fragment_spread_is_rejected() {
        let cat = object("Cat", [("meow", field(crate::schema::Type::Scalar(boolean_scalar())))]);
        let dog = object("Dog", [("bark", field(crate::schema::Type::Scalar(boolean_scalar())))]);
        let query = object("Query", [("dog", field(crate::schema::Type::Object(dog.clone())))]);
        let schema = schema_with_query(
            query,
            [crate::schema::Type::Object(dog), crate::schema::Type::Object(cat)],
        );

        let inline = Selection::InlineFragment(crate::ast::InlineFragment {
            type_condition: Some(name("Cat")),
            directives: Vec::new(),
            selection_set: selection_set(vec![Selection::Field(field_node("meow"))]),
            span: Span::default(),
        });
        let document = query_document(vec![Selection::Field(field_with_selection("dog", vec![inline]))]);

        assert!(matches!(
            validate(&schema, &document),
            Err(crate::Error::ImpossibleFragmentSpread { .. })
        ));
    }

    #[test]
    fn direct_self_referential_fragment_is_a_cycle() {
        let query = object("User", [("name", field(crate::schema::Type::Scalar(string_scalar())))]);
        let schema = schema_with_query(query, []);

        let document = crate::ast::Document {
            definitions: vec![
                Definition::Fragment(FragmentDefinition {
                    name: name("F"),
                    type_condition: name("User"),
                    directives: Vec::new(),
                    selection_set: selection_set(vec![fragment_spread("F")]),
                    span: Span::default(),
                }),
                Definition::Operation(crate::ast::Operation {
                    kind: crate::ast::OperationKind::Query,
                    name: None,
                    directives: Vec::new(),
                    selection_set: selection_set(vec![fragment_spread("F")]),
                    span: Span::default(),
                }),
            ],
        };

        assert!(matches!(validate(&schema, &document), Err(crate::Error::FragmentCycle { .. })));
    }

    #[test]
    fn spread_of_undefined_fragment_is_rejected() {
        let query = object("Query", [("id", field(crate::schema::Type::Scalar(int_scalar())))]);
        let schema = schema_with_query(query, []);
        let document = query_document(vec![fragment_spread("Missing")]);

        assert!(matches!(validate(&schema, &document), Err(crate::Error::UndefinedFragment { .. })));
    }
}
