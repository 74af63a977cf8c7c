//! `field`-kind argument rules and the `argument`-kind rule (§4.2):
//! `argumentsDefinedOnType`, `uniqueArgumentNames`, `argumentsOfCorrectType`,
//! `requiredArgumentsPresent`, `uniqueInputObjectFields`.

use std::collections::HashSet;

use crate::ast::{Argument, Field, Value};
use crate::context::Context;
use crate::error::Error;
use crate::rules::fields::resolve_field_def;
use crate::schema::Type;

pub fn arguments_defined_on_type(ctx: &mut Context, field: &Field) -> Result<(), Error> {
    let field_def = match resolve_field_def(ctx, field) {
        Some(field_def) => field_def,
        None => return Ok(()),
    };

    for argument in &field.arguments {
        if !field_def.arguments.contains_key(&argument.name.value) {
            return Err(Error::UndefinedArgument {
                field_name: field.output_key().to_owned(),
                argument_name: argument.name.value.clone(),
                span: argument.span,
            });
        }
    }
    Ok(())
}

pub fn unique_argument_names(_ctx: &mut Context, field: &Field) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for argument in &field.arguments {
        if !seen.insert(argument.name.value.clone()) {
            return Err(Error::DuplicateArgumentName {
                name: argument.name.value.clone(),
                span: argument.span,
            });
        }
    }
    Ok(())
}

/// Coerces every provided argument literal against its declared type,
/// recursing through `NonNull`/`List`/`InputObject` wrappers (§4.2).
pub fn arguments_of_correct_type(ctx: &mut Context, field: &Field) -> Result<(), Error> {
    let field_def = match resolve_field_def(ctx, field) {
        Some(field_def) => field_def,
        None => return Ok(()),
    };

    for argument in &field.arguments {
        if let Some(argument_def) = field_def.arguments.get(&argument.name.value) {
            check_value_against_type(
                &argument.value,
                &argument_def.kind,
                &argument.name.value,
                argument.span,
            )?;
        }
    }
    Ok(())
}

fn check_value_against_type(
    value: &Value,
    ty: &Type,
    argument_name: &str,
    span: crate::ast::Span,
) -> Result<(), Error> {
    if matches!(value, Value::Variable(_)) {
        // Variable-coercion and runtime value checks are out of scope (§1).
        return Ok(());
    }

    match ty {
        Type::NonNull(inner) => check_value_against_type(value, inner, argument_name, span),
        Type::List(inner) => match value {
            Value::List(items) => {
                for item in items {
                    check_value_against_type(item, inner, argument_name, span)?;
                }
                Ok(())
            }
            _ => Err(Error::ListValueRequired {
                argument_name: argument_name.to_owned(),
                span,
            }),
        },
        Type::InputObject(input_object) => match value {
            Value::InputObject(fields) => {
                for field in fields {
                    let field_def = input_object.fields.get(&field.name.value).ok_or_else(|| {
                        Error::UnknownInputObjectField {
                            type_name: input_object.name.clone(),
                            field_name: field.name.value.clone(),
                            span,
                        }
                    })?;
                    check_value_against_type(
                        &field.value,
                        &field_def.kind,
                        &field.name.value,
                        span,
                    )?;
                }
                Ok(())
            }
            _ => Err(Error::InputObjectValueRequired {
                argument_name: argument_name.to_owned(),
                type_name: input_object.name.clone(),
                span,
            }),
        },
        Type::Enum(enum_type) => match value {
            Value::Enum(name) if enum_type.values.contains(&name.value) => Ok(()),
            Value::Enum(name) => Err(Error::InvalidEnumValue {
                type_name: enum_type.name.clone(),
                value: name.value.clone(),
                span,
            }),
            _ => Err(Error::InvalidEnumValue {
                type_name: enum_type.name.clone(),
                value: format!("{:?}", value),
                span,
            }),
        },
        Type::Scalar(scalar_type) => {
            if (scalar_type.parse_literal)(value) {
                Ok(())
            } else {
                Err(Error::InvalidScalarValue {
                    type_name: scalar_type.name.clone(),
                    argument_name: argument_name.to_owned(),
                    span,
                })
            }
        }
        // Object/Interface/Union are never valid argument types; a schema
        // that declares one here is malformed upstream, out of scope (§1).
        Type::Object(_) | Type::Interface(_) | Type::Union(_) => Ok(()),
    }
}

pub fn required_arguments_present(ctx: &mut Context, field: &Field) -> Result<(), Error> {
    let field_def = match resolve_field_def(ctx, field) {
        Some(field_def) => field_def,
        None => return Ok(()),
    };

    let provided: HashSet<&str> = field
        .arguments
        .iter()
        .filter(|argument| !matches!(argument.value, Value::Null))
        .map(|argument| argument.name.value.as_str())
        .collect();

    let mut names: Vec<&String> = field_def.arguments.keys().collect();
    names.sort();

    for name in names {
        let argument_def = &field_def.arguments[name];
        if argument_def.kind.is_non_null() && !provided.contains(name.as_str()) {
            return Err(Error::MissingRequiredArgument {
                field_name: field.output_key().to_owned(),
                argument_name: name.clone(),
                span: field.span,
            });
        }
    }
    Ok(())
}

/// `argument`-kind rule: descends through list values looking for
/// `inputObject` values with duplicate field names (§4.2).
pub fn unique_input_object_fields(_ctx: &mut Context, argument: &Argument) -> Result<(), Error> {
    check_value_for_duplicate_fields(&argument.value, argument.span)
}

fn check_value_for_duplicate_fields(value: &Value, span: crate::ast::Span) -> Result<(), Error> {
    match value {
        Value::List(items) => {
            for item in items {
                check_value_for_duplicate_fields(item, span)?;
            }
            Ok(())
        }
        Value::InputObject(fields) => {
            let mut seen = HashSet::new();
            for field in fields {
                if !seen.insert(field.name.value.clone()) {
                    return Err(Error::DuplicateInputObjectField {
                        field_name: field.name.value.clone(),
                        span,
                    });
                }
            }
            for field in fields {
                check_value_for_duplicate_fields(&field.value, span)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Argument, Selection};
    use crate::engine::validate;
    use crate::schema::Type;
    use crate::testing::*;

    // Scenario from §8: `type Query { pick(x: Int!): Int }`, query `{ pick }`.
    #[test]
    fn missing_required_argument_is_rejected() {
        let query = object(
            "Query",
            [(
                "pick",
                field_with_args(
                    Type::Scalar(int_scalar()),
                    [("x", Type::NonNull(std::rc::Rc::new(Type::Scalar(int_scalar()))))],
                ),
            )],
        );
        let schema = schema_with_query(query, []);
        let document = query_document(vec![Selection::Field(field_node("pick"))]);

        match validate(&schema, &document) {
            Err(crate::Error::MissingRequiredArgument { argument_name, .. }) => {
                assert_eq!(argument_name, "x");
                assert_eq!(
                    crate::Error::MissingRequiredArgument {
                        field_name: "pick".to_owned(),
                        argument_name: "x".to_owned(),
                        span: Default::default(),
                    }
                    .to_string(),
                    "Required argument \"x\" was not supplied."
                );
            }
            other => panic!("expected MissingRequiredArgument, got {other:?}"),
        }
    }

    #[test]
    fn explicit_null_does_not_satisfy_a_required_argument() {
        let query = object(
            "Query",
            [(
                "pick",
                field_with_args(
                    Type::Scalar(int_scalar()),
                    [("x", Type::NonNull(std::rc::Rc::new(Type::Scalar(int_scalar()))))],
                ),
            )],
        );
        let schema = schema_with_query(query, []);

        let mut field = field_node("pick");
        field.arguments.push(Argument {
            name: name("x"),
            value: crate::ast::Value::Null,
            span: Default::default(),
        });
        let document = query_document(vec![Selection::Field(field)]);

        assert!(validate(&schema, &document).is_err());
    }

    #[test]
    fn reordering_arguments_does_not_change_the_verdict() {
        let query = object(
            "Query",
            [(
                "pair",
                field_with_args(
                    Type::Scalar(int_scalar()),
                    [
                        ("a", Type::Scalar(int_scalar())),
                        ("b", Type::Scalar(int_scalar())),
                    ],
                ),
            )],
        );
        let schema = schema_with_query(query, []);

        let build = |order: [(&str, i64); 2]| {
            let mut field = field_node("pair");
            for (name_str, value) in order {
                field.arguments.push(Argument {
                    name: name(name_str),
                    value: crate::ast::Value::Int(value),
                    span: Default::default(),
                });
            }
            query_document(vec![Selection::Field(field)])
        };

        let first = build([("a", 1), ("b", 2)]);
        let second = build([("b", 2), ("a", 1)]);

        assert_eq!(validate(&schema, &first).is_ok(), validate(&schema, &second).is_ok());
    }

    // Mirrors `demos/simple.rs`: a field declared `Hello!` still has its
    // subfields' arguments validated through the NonNull wrapper.
    #[test]
    fn required_argument_is_checked_through_a_non_null_parent() {
        let hello = object(
            "Hello",
            [(
                "world",
                field_with_args(
                    Type::Scalar(string_scalar()),
                    [("foo", Type::NonNull(std::rc::Rc::new(Type::Scalar(boolean_scalar()))))],
                ),
            )],
        );
        let query = object(
            "Query",
            [("hello", field(Type::NonNull(std::rc::Rc::new(Type::Object(hello.clone())))))],
        );
        let schema = schema_with_query(query, [Type::Object(hello)]);

        let document = query_document(vec![Selection::Field(field_with_selection(
            "hello",
            vec![Selection::Field(field_node("world"))],
        ))]);

        assert!(matches!(
            validate(&schema, &document),
            Err(crate::Error::MissingRequiredArgument { .. })
        ));
    }
}
