//! Test-only schema/AST builders shared by the rule modules' unit tests.

use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::*;
use crate::schema::*;

pub fn name(value: &str) -> Name {
    Name::new(value)
}

pub fn int_scalar() -> Rc<ScalarType> {
    Rc::new(ScalarType {
        name: "Int".to_owned(),
        parse_literal: Box::new(|value| matches!(value, Value::Int(_))),
    })
}

pub fn string_scalar() -> Rc<ScalarType> {
    Rc::new(ScalarType {
        name: "String".to_owned(),
        parse_literal: Box::new(|value| matches!(value, Value::String(_))),
    })
}

pub fn boolean_scalar() -> Rc<ScalarType> {
    Rc::new(ScalarType {
        name: "Boolean".to_owned(),
        parse_literal: Box::new(|value| matches!(value, Value::Boolean(_))),
    })
}

pub fn field(kind: Type) -> FieldDef {
    FieldDef {
        kind,
        arguments: HashMap::new(),
    }
}

pub fn field_with_args(kind: Type, arguments: impl IntoIterator<Item = (&'static str, Type)>) -> FieldDef {
    FieldDef {
        kind,
        arguments: arguments
            .into_iter()
            .map(|(name, kind)| {
                (
                    name.to_owned(),
                    ArgumentDef {
                        name: name.to_owned(),
                        kind,
                    },
                )
            })
            .collect(),
    }
}

pub fn object(
    name: &str,
    fields: impl IntoIterator<Item = (&'static str, FieldDef)>,
) -> Rc<ObjectType> {
    object_implementing(name, [], fields)
}

pub fn object_implementing(
    name: &str,
    interfaces: impl IntoIterator<Item = &'static str>,
    fields: impl IntoIterator<Item = (&'static str, FieldDef)>,
) -> Rc<ObjectType> {
    Rc::new(ObjectType {
        name: name.to_owned(),
        interfaces: interfaces.into_iter().map(str::to_owned).collect(),
        fields: fields.into_iter().map(|(k, v)| (k.to_owned(), v)).collect(),
    })
}

pub fn interface(
    name: &str,
    fields: impl IntoIterator<Item = (&'static str, FieldDef)>,
) -> Rc<InterfaceType> {
    Rc::new(InterfaceType {
        name: name.to_owned(),
        fields: fields.into_iter().map(|(k, v)| (k.to_owned(), v)).collect(),
    })
}

pub fn union(name: &str, members: impl IntoIterator<Item = Rc<ObjectType>>) -> Rc<UnionType> {
    Rc::new(UnionType {
        name: name.to_owned(),
        types: members.into_iter().collect(),
    })
}

/// A minimal schema with an empty `Query` root and no other types — enough
/// for tests of rules that only need the presence of a query root.
pub fn query_only_schema() -> Schema {
    let query = object("Query", []);
    Schema::build(query.clone(), [Type::Object(query)], [])
}

pub fn schema_with_query(query: Rc<ObjectType>, other_types: impl IntoIterator<Item = Type>) -> Schema {
    let mut types: Vec<Type> = vec![Type::Object(query.clone())];
    types.extend(other_types);
    Schema::build(query, types, [])
}

pub fn field_node(field_name: &str) -> Field {
    Field {
        alias: None,
        name: name(field_name),
        arguments: Vec::new(),
        directives: Vec::new(),
        selection_set: None,
        span: Span::default(),
    }
}

pub fn field_with_selection(field_name: &str, selections: Vec<Selection>) -> Field {
    Field {
        selection_set: Some(SelectionSet {
            selections,
            span: Span::default(),
        }),
        ..field_node(field_name)
    }
}

pub fn selection_set(selections: Vec<Selection>) -> SelectionSet {
    SelectionSet {
        selections,
        span: Span::default(),
    }
}

pub fn query_document(selections: Vec<Selection>) -> Document {
    Document {
        definitions: vec![Definition::Operation(Operation {
            kind: OperationKind::Query,
            name: None,
            directives: Vec::new(),
            selection_set: selection_set(selections),
            span: Span::default(),
        })],
    }
}

pub fn fragment_spread(fragment_name: &str) -> Selection {
    Selection::FragmentSpread(FragmentSpread {
        fragment_name: name(fragment_name),
        directives: Vec::new(),
        span: Span::default(),
    })
}
