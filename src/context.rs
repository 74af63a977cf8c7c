//! The mutable state threaded through one traversal (§3.3).

use std::collections::{HashMap, HashSet};

use crate::ast::FragmentDefinition;
use crate::schema::{Schema, Type};

/// The type environment governing a node's children: either a resolved
/// schema `Type`, or `Absent` when the field/fragment had no matching
/// definition. Rules consulting the stack must tolerate `Absent` — see the
/// design note on the "boolean sentinel" this replaces.
#[derive(Clone)]
pub enum Frame {
    Type(Type),
    Absent,
}

impl Frame {
    pub fn as_type(&self) -> Option<&Type> {
        match self {
            Frame::Type(ty) => Some(ty),
            Frame::Absent => None,
        }
    }
}

pub struct Context<'a> {
    pub schema: &'a Schema,
    pub fragment_map: HashMap<String, &'a FragmentDefinition>,
    pub operation_names: HashSet<String>,
    pub has_anonymous_operation: bool,
    pub used_fragments: HashSet<String>,
    pub objects: Vec<Frame>,
}

impl<'a> Context<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Context {
            schema,
            fragment_map: HashMap::new(),
            operation_names: HashSet::new(),
            has_anonymous_operation: false,
            used_fragments: HashSet::new(),
            objects: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: Frame) {
        self.objects.push(frame);
    }

    pub fn pop(&mut self) {
        self.objects.pop();
    }

    pub fn top(&self) -> Option<&Frame> {
        self.objects.last()
    }

    /// The frame governing the node that pushed `top` — e.g. a field's
    /// parent type.
    pub fn parent(&self) -> Option<&Frame> {
        let len = self.objects.len();
        len.checked_sub(2).and_then(|i| self.objects.get(i))
    }
}
