use std::rc::Rc;

use litho_validation::ast::{
    Argument, Definition, Document, Field, Name, Operation, OperationKind, Selection, SelectionSet, Span, Value,
};
use litho_validation::diagnostics::{Emit, IntoDiagnostic};
use litho_validation::schema::{ArgumentDef, FieldDef, ObjectType, ScalarType, Schema, Type};
use litho_validation::validate;

fn name(value: &str) -> Name {
    Name::new(value)
}

pub fn main() {
    let boolean = Rc::new(ScalarType {
        name: "Boolean".to_owned(),
        parse_literal: Box::new(|value| matches!(value, Value::Boolean(_))),
    });
    let string = Rc::new(ScalarType {
        name: "String".to_owned(),
        parse_literal: Box::new(|value| matches!(value, Value::String(_))),
    });

    let hello = Rc::new(ObjectType {
        name: "Hello".to_owned(),
        interfaces: Vec::new(),
        fields: [(
            "world".to_owned(),
            FieldDef {
                kind: Type::NonNull(Rc::new(Type::Scalar(string.clone()))),
                arguments: [(
                    "foo".to_owned(),
                    ArgumentDef {
                        name: "foo".to_owned(),
                        kind: Type::NonNull(Rc::new(Type::Scalar(boolean.clone()))),
                    },
                )]
                .into_iter()
                .collect(),
            },
        )]
        .into_iter()
        .collect(),
    });

    let query = Rc::new(ObjectType {
        name: "Query".to_owned(),
        interfaces: Vec::new(),
        fields: [(
            "hello".to_owned(),
            FieldDef {
                kind: Type::NonNull(Rc::new(Type::Object(hello.clone()))),
                arguments: [
                    (
                        "foo".to_owned(),
                        ArgumentDef {
                            name: "foo".to_owned(),
                            kind: Type::NonNull(Rc::new(Type::Scalar(boolean.clone()))),
                        },
                    ),
                    (
                        "bar".to_owned(),
                        ArgumentDef {
                            name: "bar".to_owned(),
                            kind: Type::NonNull(Rc::new(Type::Scalar(string.clone()))),
                        },
                    ),
                ]
                .into_iter()
                .collect(),
            },
        )]
        .into_iter()
        .collect(),
    });

    let schema = Schema::build(query.clone(), [Type::Object(query), Type::Object(hello)], []);

    // query { hello(foo: true, bar: "ha") { world(foo: true) } }
    let document = Document {
        definitions: vec![Definition::Operation(Operation {
            kind: OperationKind::Query,
            name: None,
            directives: Vec::new(),
            selection_set: SelectionSet {
                selections: vec![Selection::Field(Field {
                    alias: None,
                    name: name("hello"),
                    arguments: vec![
                        Argument {
                            name: name("foo"),
                            value: Value::Boolean(true),
                            span: Span::default(),
                        },
                        Argument {
                            name: name("bar"),
                            value: Value::String("ha".to_owned()),
                            span: Span::default(),
                        },
                    ],
                    directives: Vec::new(),
                    selection_set: Some(SelectionSet {
                        selections: vec![Selection::Field(Field {
                            alias: None,
                            name: name("world"),
                            arguments: vec![Argument {
                                name: name("foo"),
                                value: Value::Boolean(true),
                                span: Span::default(),
                            }],
                            directives: Vec::new(),
                            selection_set: None,
                            span: Span::default(),
                        })],
                        span: Span::default(),
                    }),
                    span: Span::default(),
                })],
                span: Span::default(),
            },
            span: Span::default(),
        })],
    };

    let query_source = "query { hello(foo: true, bar: \"ha\") { world(foo: true) } }";

    if let Err(error) = validate(&schema, &document) {
        let message: String = error.into_diagnostic().emit(query_source).unwrap();
        eprintln!("{}", message)
    }
}
