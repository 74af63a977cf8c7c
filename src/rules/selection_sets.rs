//! `unambiguousSelections` (§4.2) — the "overlapping fields can be merged"
//! check. This is the most involved rule in the set: it gathers every field
//! reachable from a selection set (descending through inline fragments and
//! named spreads), groups them by output key, and rejects any two entries
//! under the same key whose name, return type, or arguments disagree.

use std::collections::{HashMap, HashSet};

use crate::ast::{Argument, Field, Selection, SelectionSet, Value};
use crate::context::{Context, Frame};
use crate::error::Error;
use crate::schema::Type;

struct CollectedField<'a> {
    field: &'a Field,
    parent_type: Option<String>,
}

pub fn unambiguous_selections(ctx: &mut Context, selection_set: &SelectionSet) -> Result<(), Error> {
    let parent_type = ctx
        .top()
        .and_then(Frame::as_type)
        .and_then(Type::name)
        .map(str::to_owned);

    let mut seen_fragments = HashSet::new();
    let mut entries = Vec::new();
    collect_fields(ctx, selection_set, parent_type, &mut seen_fragments, &mut entries);

    check_for_conflicts(ctx, &entries)
}

/// Per the design notes, a fragment name already in `seen` causes this call
/// to `return` immediately — abandoning the *remaining* sibling selections
/// in the current selection set, not just the repeated spread. This is a
/// known, deliberately-preserved bug: see the design notes on
/// `unambiguousSelections`.
fn collect_fields<'a>(
    ctx: &Context,
    selection_set: &'a SelectionSet,
    parent_type: Option<String>,
    seen_fragments: &mut HashSet<String>,
    out: &mut Vec<CollectedField<'a>>,
) {
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => out.push(CollectedField {
                field,
                parent_type: parent_type.clone(),
            }),
            Selection::InlineFragment(inline) => {
                let ty = inline
                    .type_condition
                    .as_ref()
                    .map(|name| name.value.clone())
                    .or_else(|| parent_type.clone());
                collect_fields(ctx, &inline.selection_set, ty, seen_fragments, out);
            }
            Selection::FragmentSpread(spread) => {
                let name = &spread.fragment_name.value;
                if !seen_fragments.insert(name.clone()) {
                    return;
                }
                if let Some(definition) = ctx.fragment_map.get(name) {
                    collect_fields(
                        ctx,
                        &definition.selection_set,
                        Some(definition.type_condition.value.clone()),
                        seen_fragments,
                        out,
                    );
                }
            }
        }
    }
}

fn check_for_conflicts(ctx: &Context, entries: &[CollectedField]) -> Result<(), Error> {
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let a = &entries[i];
            let b = &entries[j];
            if a.field.output_key() != b.field.output_key() {
                continue;
            }

            if a.field.name.value != b.field.name.value && !disjoint_objects(ctx, a, b) {
                return Err(Error::AmbiguousSelectionName {
                    output_key: a.field.output_key().to_owned(),
                    span: b.field.span,
                });
            }

            if let (Some(ta), Some(tb)) = (field_return_type(ctx, a), field_return_type(ctx, b)) {
                if ta.to_string() != tb.to_string() {
                    return Err(Error::AmbiguousSelectionType {
                        output_key: a.field.output_key().to_owned(),
                        span: b.field.span,
                    });
                }
            }

            if !arguments_equivalent(&a.field.arguments, &b.field.arguments) {
                return Err(Error::AmbiguousSelectionArguments {
                    output_key: a.field.output_key().to_owned(),
                    span: b.field.span,
                });
            }
        }
    }
    Ok(())
}

fn disjoint_objects(ctx: &Context, a: &CollectedField, b: &CollectedField) -> bool {
    let resolve = |name: &Option<String>| -> Option<&Type> {
        name.as_deref().and_then(|name| ctx.schema.get_type(name))
    };
    matches!(
        (resolve(&a.parent_type), resolve(&b.parent_type)),
        (Some(Type::Object(x)), Some(Type::Object(y))) if x.name != y.name
    )
}

fn field_return_type(ctx: &Context, entry: &CollectedField) -> Option<Type> {
    let parent = ctx.schema.get_type(entry.parent_type.as_deref()?)?;
    parent.field(&entry.field.name.value).map(|def| def.kind.clone())
}

fn arguments_equivalent(a: &[Argument], b: &[Argument]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let to_map = |args: &[Argument]| -> HashMap<&str, &Value> {
        args.iter().map(|arg| (arg.name.value.as_str(), &arg.value)).collect()
    };
    let (ma, mb) = (to_map(a), to_map(b));
    ma.len() == mb.len()
        && ma
            .iter()
            .all(|(name, value)| mb.get(name).is_some_and(|other| values_equal(value, other)))
}

fn values_equal(a: &Value, b: &Value) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Null, Value::Null) => true,
        (Value::Enum(x), Value::Enum(y)) => x.value == y.value,
        (Value::Variable(x), Value::Variable(y)) => x.value == y.value,
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| values_equal(p, q))
        }
        (Value::InputObject(x), Value::InputObject(y)) => {
            if x.len() != y.len() {
                return false;
            }
            let mx: HashMap<&str, &Value> =
                x.iter().map(|field| (field.name.value.as_str(), &field.value)).collect();
            y.iter()
                .all(|field| mx.get(field.name.value.as_str()).is_some_and(|v| values_equal(v, &field.value)))
        }
        _ => false,
    }
}
