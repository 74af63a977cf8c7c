//! `directivesAreDefined` (§4.2), applied at every kind that carries
//! directives.

use crate::ast::{Directive, Field, FragmentDefinition, FragmentSpread, InlineFragment, Operation};
use crate::context::Context;
use crate::error::Error;

fn directives_are_defined(ctx: &Context, directives: &[Directive]) -> Result<(), Error> {
    for directive in directives {
        if ctx.schema.get_directive(&directive.name.value).is_none() {
            return Err(Error::UnknownDirective {
                name: directive.name.value.clone(),
                span: directive.span,
            });
        }
    }
    Ok(())
}

pub fn directives_are_defined_on_operation(
    ctx: &mut Context,
    operation: &Operation,
) -> Result<(), Error> {
    directives_are_defined(ctx, &operation.directives)
}

pub fn directives_are_defined_on_field(ctx: &mut Context, field: &Field) -> Result<(), Error> {
    directives_are_defined(ctx, &field.directives)
}

pub fn directives_are_defined_on_inline_fragment(
    ctx: &mut Context,
    fragment: &InlineFragment,
) -> Result<(), Error> {
    directives_are_defined(ctx, &fragment.directives)
}

pub fn directives_are_defined_on_spread(
    ctx: &mut Context,
    spread: &FragmentSpread,
) -> Result<(), Error> {
    directives_are_defined(ctx, &spread.directives)
}

pub fn directives_are_defined_on_fragment_definition(
    ctx: &mut Context,
    fragment: &FragmentDefinition,
) -> Result<(), Error> {
    directives_are_defined(ctx, &fragment.directives)
}
