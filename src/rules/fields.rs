//! `field`-kind rules (§4.2): `fieldsDefinedOnType`, `scalarFieldsAreLeaves`,
//! `compositeFieldsAreNotLeaves`. Argument-related field rules live in
//! [`crate::rules::arguments`].

use crate::ast::Field;
use crate::context::{Context, Frame};
use crate::error::Error;
use crate::schema::FieldDef;

/// The field's declaration on its parent type, if any. `None` means either
/// the parent was absent or the parent genuinely has no such field — either
/// way, argument-related rules should abstain (§4.1).
pub fn resolve_field_def<'a>(ctx: &'a Context, field: &Field) -> Option<&'a FieldDef> {
    ctx.parent()
        .and_then(Frame::as_type)
        .and_then(|ty| ty.field(&field.name.value))
}

pub fn fields_defined_on_type(ctx: &mut Context, field: &Field) -> Result<(), Error> {
    if matches!(ctx.top(), Some(Frame::Absent)) {
        let type_name = ctx
            .parent()
            .and_then(Frame::as_type)
            .and_then(|ty| ty.name())
            .unwrap_or("<unknown>")
            .to_owned();

        return Err(Error::UndefinedField {
            type_name,
            field_name: field.name.value.clone(),
            span: field.span,
        });
    }
    Ok(())
}

pub fn scalar_fields_are_leaves(ctx: &mut Context, field: &Field) -> Result<(), Error> {
    if let Some(Frame::Type(ty)) = ctx.top() {
        let named = ty.named_type();
        let is_leaf_type =
            matches!(named, crate::schema::Type::Scalar(_) | crate::schema::Type::Enum(_));
        let has_subselection = field
            .selection_set
            .as_ref()
            .is_some_and(|set| !set.selections.is_empty());

        if is_leaf_type && has_subselection {
            return Err(Error::ScalarSubselection {
                field_name: field.output_key().to_owned(),
                type_name: named.name().unwrap_or("").to_owned(),
                span: field.span,
            });
        }
    }
    Ok(())
}

pub fn composite_fields_are_not_leaves(ctx: &mut Context, field: &Field) -> Result<(), Error> {
    if let Some(Frame::Type(ty)) = ctx.top() {
        let named = ty.named_type();
        if named.is_composite() {
            let has_subselection = field
                .selection_set
                .as_ref()
                .is_some_and(|set| !set.selections.is_empty());

            if !has_subselection {
                return Err(Error::MissingSubselection {
                    field_name: field.output_key().to_owned(),
                    type_name: named.name().unwrap_or("").to_owned(),
                    span: field.span,
                });
            }
        }
    }
    Ok(())
}
