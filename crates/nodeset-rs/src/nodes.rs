// crates/nodeset-rs/src/nodes.rs
//! The typed node hierarchy assembled from the input rows.
//!
//! A [`TypeDef`] owns its [`VariablePrototype`]s and is never mutated after it is built.
//! An [`ObjectInstance`] bound to a type gets its own [`VariableInstance`] children,
//! built field-by-field by [`TypeDef::instantiate`].

use crate::allocator::{IdCategory, NodeIdAllocator};
use crate::constants::ACCESS_LEVEL_READ_WRITE;
use crate::error::NodeSetError;
use crate::types::{NodeId, TargetId};

/// A template slot of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePrototype {
    pub name: String,
    pub data_type: String,
    pub node_id: NodeId,
    pub default_value: Option<String>,
}

impl VariablePrototype {
    pub fn browse_name(&self) -> String {
        browse_name(self.node_id.namespace, &self.name)
    }
}

/// A custom object type with its ordered template children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: String,
    pub node_id: NodeId,
    pub children: Vec<VariablePrototype>,
}

impl TypeDef {
    pub fn browse_name(&self) -> String {
        browse_name(self.node_id.namespace, &self.name)
    }

    /// Builds a fresh set of concrete children for an instance with id `parent`.
    ///
    /// Each prototype yields one new `VariableInstance` with its own NodeId
    /// (category `Variable`), parented to `parent`. The i-th entry of `values`
    /// becomes the i-th child's value; without `values` each child takes its
    /// prototype's default. Callers check that `values` has one entry per child.
    pub fn instantiate(
        &self,
        parent: NodeId,
        values: Option<&[String]>,
        allocator: &mut NodeIdAllocator,
    ) -> Result<Vec<VariableInstance>, NodeSetError> {
        self.children
            .iter()
            .enumerate()
            .map(|(i, prototype)| {
                let value = match values {
                    Some(values) => values.get(i).cloned(),
                    None => prototype.default_value.clone(),
                };
                Ok(VariableInstance::new(
                    prototype.name.clone(),
                    allocator.allocate(IdCategory::Variable)?,
                    TargetId::Local(parent),
                    prototype.data_type.clone(),
                    value,
                ))
            })
            .collect()
    }
}

/// A leaf attribute node holding a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInstance {
    pub name: String,
    pub node_id: NodeId,
    pub parent_id: TargetId,
    pub data_type: String,
    pub value: Option<String>,
    pub access_level: u8,
    pub user_access_level: u8,
}

impl VariableInstance {
    /// Creates a read/write variable.
    pub fn new(
        name: String,
        node_id: NodeId,
        parent_id: TargetId,
        data_type: String,
        value: Option<String>,
    ) -> Self {
        Self {
            name,
            node_id,
            parent_id,
            data_type,
            value,
            access_level: ACCESS_LEVEL_READ_WRITE,
            user_access_level: ACCESS_LEVEL_READ_WRITE,
        }
    }

    pub fn browse_name(&self) -> String {
        browse_name(self.node_id.namespace, &self.name)
    }
}

/// The type an object instance is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub node_id: NodeId,
}

/// An object, optionally typed, with the children cloned from its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInstance {
    pub name: String,
    pub node_id: NodeId,
    pub parent_id: TargetId,
    pub type_ref: Option<TypeRef>,
    /// Empty unless `type_ref` is set; then one entry per type child, in declaration order.
    pub children: Vec<VariableInstance>,
}

impl ObjectInstance {
    pub fn browse_name(&self) -> String {
        browse_name(self.node_id.namespace, &self.name)
    }
}

/// Any node that can be added to a [`NodeSet`](crate::NodeSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    TypeDef(TypeDef),
    Object(ObjectInstance),
    Variable(VariableInstance),
}

impl Node {
    pub fn node_id(&self) -> NodeId {
        match self {
            Node::TypeDef(t) => t.node_id,
            Node::Object(o) => o.node_id,
            Node::Variable(v) => v.node_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::TypeDef(t) => &t.name,
            Node::Object(o) => &o.name,
            Node::Variable(v) => &v.name,
        }
    }
}

impl From<TypeDef> for Node {
    fn from(t: TypeDef) -> Self {
        Node::TypeDef(t)
    }
}

impl From<ObjectInstance> for Node {
    fn from(o: ObjectInstance) -> Self {
        Node::Object(o)
    }
}

impl From<VariableInstance> for Node {
    fn from(v: VariableInstance) -> Self {
        Node::Variable(v)
    }
}

fn browse_name(namespace: u16, name: &str) -> String {
    format!("{}:{}", namespace, name)
}
