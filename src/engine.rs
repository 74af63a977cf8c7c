//! The traversal engine (§4.1): a depth-first walk driven by a dispatch
//! table keyed by AST node kind. Each kind below carries its own ordered
//! array of rule functions — the idiomatic stand-in for the source's
//! per-kind visitor records (§9). Entry rules run in declared order; a
//! failing rule aborts the whole walk immediately (§4.3).

use crate::ast::{
    Argument, Definition, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    Operation, Selection, SelectionSet,
};
use crate::context::{Context, Frame};
use crate::error::Error;
use crate::rules::arguments::{
    arguments_defined_on_type, arguments_of_correct_type, required_arguments_present,
    unique_argument_names, unique_input_object_fields,
};
use crate::rules::directives::{
    directives_are_defined_on_field, directives_are_defined_on_fragment_definition,
    directives_are_defined_on_inline_fragment, directives_are_defined_on_operation,
    directives_are_defined_on_spread,
};
use crate::rules::documents::{no_unused_fragments, unique_fragment_names};
use crate::rules::fields::{composite_fields_are_not_leaves, fields_defined_on_type, scalar_fields_are_leaves};
use crate::rules::fragments::{
    fragment_definition_has_no_cycles, fragment_has_valid_type_on_definition,
    fragment_has_valid_type_on_inline_fragment, fragment_spread_is_possible_on_inline_fragment,
    fragment_spread_is_possible_on_spread, fragment_spread_target_defined,
};
use crate::rules::operations::{lone_anonymous_operation, unique_operation_names};
use crate::rules::selection_sets::unambiguous_selections;
use crate::schema::Type;

type Rule<N> = fn(&mut Context, &N) -> Result<(), Error>;

const DOCUMENT_ENTRY_RULES: &[Rule<Document>] = &[unique_fragment_names];
const DOCUMENT_EXIT_RULES: &[Rule<Document>] = &[no_unused_fragments];

const OPERATION_RULES: &[Rule<Operation>] = &[
    unique_operation_names,
    lone_anonymous_operation,
    directives_are_defined_on_operation,
];

const SELECTION_SET_RULES: &[Rule<SelectionSet>] = &[unambiguous_selections];

const FIELD_RULES: &[Rule<Field>] = &[
    fields_defined_on_type,
    arguments_defined_on_type,
    scalar_fields_are_leaves,
    composite_fields_are_not_leaves,
    unique_argument_names,
    arguments_of_correct_type,
    required_arguments_present,
    directives_are_defined_on_field,
];

const INLINE_FRAGMENT_RULES: &[Rule<InlineFragment>] = &[
    fragment_has_valid_type_on_inline_fragment,
    fragment_spread_is_possible_on_inline_fragment,
    directives_are_defined_on_inline_fragment,
];

const FRAGMENT_SPREAD_RULES: &[Rule<FragmentSpread>] = &[
    fragment_spread_target_defined,
    fragment_spread_is_possible_on_spread,
    directives_are_defined_on_spread,
];

const FRAGMENT_DEFINITION_RULES: &[Rule<FragmentDefinition>] = &[
    fragment_has_valid_type_on_definition,
    fragment_definition_has_no_cycles,
    directives_are_defined_on_fragment_definition,
];

const ARGUMENT_RULES: &[Rule<Argument>] = &[unique_input_object_fields];

fn run_rules<N>(ctx: &mut Context, node: &N, rules: &[Rule<N>]) -> Result<(), Error> {
    for rule in rules {
        rule(ctx, node)?;
    }
    Ok(())
}

/// The public entry point (§6.3): validates `document` against `schema`,
/// returning the first violation encountered.
pub fn validate<'a>(schema: &'a crate::schema::Schema, document: &'a Document) -> Result<(), Error> {
    let mut ctx = Context::new(schema);
    traverse_document(&mut ctx, document)
}

fn traverse_document<'a>(ctx: &mut Context<'a>, document: &'a Document) -> Result<(), Error> {
    // enter: index fragment definitions before any operation subtree runs (§3.3 invariant).
    for definition in &document.definitions {
        if let Definition::Fragment(fragment) = definition {
            ctx.fragment_map.entry(fragment.name.value.clone()).or_insert(fragment);
        }
    }

    run_rules(ctx, document, DOCUMENT_ENTRY_RULES)?;

    for definition in &document.definitions {
        match definition {
            Definition::Operation(operation) => traverse_operation(ctx, operation)?,
            Definition::Fragment(fragment) => traverse_fragment_definition(ctx, fragment)?,
        }
    }

    run_rules(ctx, document, DOCUMENT_EXIT_RULES)?;
    Ok(())
}

fn traverse_operation(ctx: &mut Context, operation: &Operation) -> Result<(), Error> {
    ctx.push(Frame::Type(Type::Object(ctx.schema.query.clone())));
    let result =
        run_rules(ctx, operation, OPERATION_RULES).and_then(|()| traverse_selection_set(ctx, &operation.selection_set));
    ctx.pop();
    result
}

fn traverse_selection_set(ctx: &mut Context, selection_set: &SelectionSet) -> Result<(), Error> {
    run_rules(ctx, selection_set, SELECTION_SET_RULES)?;
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => traverse_field(ctx, field)?,
            Selection::InlineFragment(fragment) => traverse_inline_fragment(ctx, fragment)?,
            Selection::FragmentSpread(spread) => traverse_fragment_spread(ctx, spread)?,
        }
    }
    Ok(())
}

fn traverse_field(ctx: &mut Context, field: &Field) -> Result<(), Error> {
    let resolved = ctx
        .top()
        .and_then(Frame::as_type)
        .and_then(|ty| ty.field(&field.name.value))
        .map(|field_def| Frame::Type(field_def.kind.clone()))
        .unwrap_or(Frame::Absent);
    ctx.push(resolved);

    let result = (|| {
        run_rules(ctx, field, FIELD_RULES)?;
        for argument in &field.arguments {
            traverse_argument(ctx, argument)?;
        }
        if let Some(selection_set) = &field.selection_set {
            traverse_selection_set(ctx, selection_set)?;
        }
        Ok(())
    })();

    ctx.pop();
    result
}

fn traverse_argument(ctx: &mut Context, argument: &Argument) -> Result<(), Error> {
    run_rules(ctx, argument, ARGUMENT_RULES)
}

fn traverse_inline_fragment(ctx: &mut Context, fragment: &InlineFragment) -> Result<(), Error> {
    let resolved = match &fragment.type_condition {
        Some(name) => ctx
            .schema
            .get_type(&name.value)
            .cloned()
            .map(Frame::Type)
            .unwrap_or(Frame::Absent),
        None => ctx.top().cloned().unwrap_or(Frame::Absent),
    };
    ctx.push(resolved);

    let result = run_rules(ctx, fragment, INLINE_FRAGMENT_RULES)
        .and_then(|()| traverse_selection_set(ctx, &fragment.selection_set));

    ctx.pop();
    result
}

/// `fragmentSpread` pushes a frame on entry but the dispatch table (§4.1)
/// declares no exit hook for it — a known bug in the source, carried over
/// deliberately rather than fixed (§9). The frame pushed here is never
/// popped, so the `objects` stack leaks one entry per spread encountered.
fn traverse_fragment_spread(ctx: &mut Context, spread: &FragmentSpread) -> Result<(), Error> {
    ctx.used_fragments.insert(spread.fragment_name.value.clone());

    let fragment_def = ctx.fragment_map.get(&spread.fragment_name.value).copied();
    let target_type = fragment_def
        .and_then(|definition| ctx.schema.get_type(&definition.type_condition.value))
        .cloned();

    ctx.push(match target_type {
        Some(ty) => Frame::Type(ty),
        None => Frame::Absent,
    });

    run_rules(ctx, spread, FRAGMENT_SPREAD_RULES)
}

fn traverse_fragment_definition<'a>(ctx: &mut Context<'a>, fragment: &'a FragmentDefinition) -> Result<(), Error> {
    let resolved = ctx
        .schema
        .get_type(&fragment.type_condition.value)
        .cloned()
        .map(Frame::Type)
        .unwrap_or(Frame::Absent);
    ctx.push(resolved);

    let result = run_rules(ctx, fragment, FRAGMENT_DEFINITION_RULES)
        .and_then(|()| traverse_selection_set(ctx, &fragment.selection_set));

    ctx.pop();
    result
}
