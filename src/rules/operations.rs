//! `operation`-kind rules (§4.2): `uniqueOperationNames`, `loneAnonymousOperation`.

use crate::ast::Operation;
use crate::context::Context;
use crate::error::Error;

pub fn unique_operation_names(ctx: &mut Context, operation: &Operation) -> Result<(), Error> {
    if let Some(name) = &operation.name {
        if !ctx.operation_names.insert(name.value.clone()) {
            return Err(Error::DuplicateOperationName {
                name: name.value.clone(),
                span: operation.span,
            });
        }
    }
    Ok(())
}

/// Relies on [`unique_operation_names`] having already run for this
/// operation (§4.1 rule ordering; §9 design note) — named operations are
/// recorded into `operationNames` before this rule inspects anonymity.
pub fn lone_anonymous_operation(ctx: &mut Context, operation: &Operation) -> Result<(), Error> {
    match &operation.name {
        None => {
            if ctx.has_anonymous_operation || !ctx.operation_names.is_empty() {
                return Err(Error::AnonymousOperationNotAlone {
                    span: operation.span,
                });
            }
            ctx.has_anonymous_operation = true;
        }
        Some(_) => {
            if ctx.has_anonymous_operation {
                return Err(Error::AnonymousOperationNotAlone {
                    span: operation.span,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::ast::{Definition, Selection};
    use crate::engine::validate;
    use crate::testing::*;

    #[test]
    fn duplicate_operation_names_are_rejected() {
        let schema = query_only_schema();
        let document = crate::ast::Document {
            definitions: vec![
                Definition::Operation(name_op("A")),
                Definition::Operation(name_op("A")),
            ],
        };

        assert!(matches!(
            validate(&schema, &document),
            Err(crate::Error::DuplicateOperationName { .. })
        ));
    }

    #[test]
    fn anonymous_operation_cannot_coexist_with_another() {
        let schema = query_only_schema();
        let document = crate::ast::Document {
            definitions: vec![
                Definition::Operation(name_op("A")),
                Definition::Operation(crate::ast::Operation {
                    name: None,
                    ..name_op("B")
                }),
            ],
        };

        assert!(matches!(
            validate(&schema, &document),
            Err(crate::Error::AnonymousOperationNotAlone { .. })
        ));
    }

    fn name_op(operation_name: &str) -> crate::ast::Operation {
        crate::ast::Operation {
            kind: crate::ast::OperationKind::Query,
            name: Some(name(operation_name)),
            directives: Vec::new(),
            selection_set: selection_set(Vec::<Selection>::new()),
            span: crate::ast::Span::default(),
        }
    }
}
