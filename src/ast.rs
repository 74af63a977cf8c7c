//! Passive AST node shapes consumed by the validator.
//!
//! These types are produced by an external parser; nothing in this crate
//! constructs or mutates them except test fixtures and [`crate::demo`]
//! helpers. See §3.1 of the design for the node kinds modeled here.

/// A source position, one-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

/// A source span: a starting position and a length in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span(pub Pos, pub usize);

impl Default for Span {
    fn default() -> Self {
        Span(Pos { line: 1, column: 1 }, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Name {
    pub value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Name { value: value.into() }
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone)]
pub enum Definition {
    Operation(Operation),
    Fragment(FragmentDefinition),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

#[derive(Debug, Clone)]
pub struct Operation {
    pub kind: OperationKind,
    pub name: Option<Name>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: Name,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Selection {
    Field(Field),
    InlineFragment(InlineFragment),
    FragmentSpread(FragmentSpread),
}

impl Selection {
    pub fn span(&self) -> Span {
        match self {
            Selection::Field(field) => field.span,
            Selection::InlineFragment(fragment) => fragment.span,
            Selection::FragmentSpread(spread) => spread.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub span: Span,
}

impl Field {
    /// The alias if given, else the field name — the key the response is
    /// keyed under.
    pub fn output_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).value.as_str()
    }
}

#[derive(Debug, Clone)]
pub struct InlineFragment {
    pub type_condition: Option<Name>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    pub directives: Vec<Directive>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Variable(Name),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(Name),
    List(Vec<Value>),
    InputObject(Vec<ObjectField>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
}

/// A coarse-grained tag used by `unambiguousSelections` to compare argument
/// values without caring about their concrete literal representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    InputObject,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Variable(_) => ValueKind::Variable,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Enum(_) => ValueKind::Enum,
            Value::List(_) => ValueKind::List,
            Value::InputObject(_) => ValueKind::InputObject,
        }
    }
}
