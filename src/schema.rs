//! The schema capability set consumed by the validator (§3.2 / §6.1).
//!
//! A `Schema` is produced by an external builder — nothing here parses SDL.
//! Types are reference-counted so that pushing one onto the context's type
//! stack ([`crate::context::Frame`]) is a cheap handle copy, not a deep clone.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::Value;

#[derive(Clone)]
pub enum Type {
    Object(Rc<ObjectType>),
    Interface(Rc<InterfaceType>),
    Union(Rc<UnionType>),
    Scalar(Rc<ScalarType>),
    Enum(Rc<EnumType>),
    InputObject(Rc<InputObjectType>),
    NonNull(Rc<Type>),
    List(Rc<Type>),
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Object(ty) => write!(f, "{}", ty.name),
            Type::Interface(ty) => write!(f, "{}", ty.name),
            Type::Union(ty) => write!(f, "{}", ty.name),
            Type::Scalar(ty) => write!(f, "{}", ty.name),
            Type::Enum(ty) => write!(f, "{}", ty.name),
            Type::InputObject(ty) => write!(f, "{}", ty.name),
            Type::NonNull(inner) => write!(f, "{}!", inner),
            Type::List(inner) => write!(f, "[{}]", inner),
        }
    }
}

impl Type {
    /// The named-type name, or `None` for `NonNull`/`List` wrappers.
    pub fn name(&self) -> Option<&str> {
        match self {
            Type::Object(ty) => Some(&ty.name),
            Type::Interface(ty) => Some(&ty.name),
            Type::Union(ty) => Some(&ty.name),
            Type::Scalar(ty) => Some(&ty.name),
            Type::Enum(ty) => Some(&ty.name),
            Type::InputObject(ty) => Some(&ty.name),
            Type::NonNull(_) | Type::List(_) => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Type::Object(_) | Type::Interface(_) | Type::Union(_))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }

    /// Peels off any number of `NonNull`/`List` wrappers down to the named
    /// type selections are actually made against.
    pub fn named_type(&self) -> &Type {
        match self {
            Type::NonNull(inner) | Type::List(inner) => inner.named_type(),
            other => other,
        }
    }

    /// Looks up a field on the named Object/Interface this type wraps,
    /// peeling any `NonNull`/`List` first — schemas declare object fields as
    /// `User!`, `[User]`, `[User!]!` etc. pervasively, so resolution must not
    /// stop at the first wrapper.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        match self.named_type() {
            Type::Object(ty) => ty.fields.get(name),
            Type::Interface(ty) => ty.fields.get(name),
            _ => None,
        }
    }
}

pub struct ObjectType {
    pub name: String,
    pub fields: HashMap<String, FieldDef>,
    pub interfaces: Vec<String>,
}

pub struct InterfaceType {
    pub name: String,
    pub fields: HashMap<String, FieldDef>,
}

pub struct UnionType {
    pub name: String,
    pub types: Vec<Rc<ObjectType>>,
}

pub struct ScalarType {
    pub name: String,
    /// Coerces a literal value node; returns whether coercion succeeded.
    /// The coerced runtime value itself is execution's concern, out of
    /// scope here, so this only reports success or failure.
    pub parse_literal: Box<dyn Fn(&Value) -> bool>,
}

pub struct EnumType {
    pub name: String,
    pub values: std::collections::HashSet<String>,
}

pub struct InputObjectType {
    pub name: String,
    pub fields: HashMap<String, InputFieldDef>,
}

pub struct InputFieldDef {
    pub kind: Type,
}

pub struct FieldDef {
    pub kind: Type,
    pub arguments: HashMap<String, ArgumentDef>,
}

pub struct ArgumentDef {
    pub name: String,
    pub kind: Type,
}

pub struct DirectiveDef {
    pub name: String,
}

pub struct Schema {
    pub query: Rc<ObjectType>,
    types: HashMap<String, Type>,
    directives: HashMap<String, DirectiveDef>,
    implementors: HashMap<String, Vec<Rc<ObjectType>>>,
}

impl Schema {
    /// Builds a schema from its query root, the full type map (including
    /// `query` itself, keyed by name) and directive set. Precomputes the
    /// interface-to-implementors index so `getImplementors` is O(1).
    pub fn build(
        query: Rc<ObjectType>,
        types: impl IntoIterator<Item = Type>,
        directives: impl IntoIterator<Item = DirectiveDef>,
    ) -> Schema {
        let types: HashMap<String, Type> = types
            .into_iter()
            .filter_map(|ty| ty.name().map(|name| (name.to_owned(), ty)))
            .collect();

        let mut implementors: HashMap<String, Vec<Rc<ObjectType>>> = HashMap::new();
        for ty in types.values() {
            if let Type::Object(object) = ty {
                for interface in &object.interfaces {
                    implementors
                        .entry(interface.clone())
                        .or_default()
                        .push(object.clone());
                }
            }
        }

        Schema {
            query,
            types,
            directives: directives
                .into_iter()
                .map(|directive| (directive.name.clone(), directive))
                .collect(),
            implementors,
        }
    }

    pub fn get_type(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    pub fn get_directive(&self, name: &str) -> Option<&DirectiveDef> {
        self.directives.get(name)
    }

    pub fn get_implementors(&self, interface_name: &str) -> &[Rc<ObjectType>] {
        self.implementors
            .get(interface_name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The set of concrete Object types assignable to `ty`: itself for an
    /// Object, its implementors for an Interface, its members for a Union.
    pub fn possible_types(&self, ty: &Type) -> Vec<Rc<ObjectType>> {
        match ty {
            Type::Object(object) => vec![object.clone()],
            Type::Interface(interface) => self.get_implementors(&interface.name).to_vec(),
            Type::Union(union) => union.types.clone(),
            _ => vec![],
        }
    }
}
