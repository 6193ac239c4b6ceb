//! Projects the node hierarchy onto the NodeSet2 `model` structs.
//!
//! Each node kind has a fixed element and reference shape. A node's own element is
//! always emitted before the elements of the children it owns.

pub mod object;
pub mod object_type;
pub mod variable;

use crate::model::{Reference, UaNode};
use crate::nodes::Node;
use crate::types::TargetId;

pub(crate) const HAS_COMPONENT: &str = "HasComponent";
pub(crate) const HAS_MODELLING_RULE: &str = "HasModellingRule";
pub(crate) const HAS_SUBTYPE: &str = "HasSubtype";
pub(crate) const HAS_TYPE_DEFINITION: &str = "HasTypeDefinition";
pub(crate) const ORGANIZES: &str = "Organizes";

/// Converts one node, and every child it owns, into document elements.
pub fn project(node: &Node) -> Vec<UaNode> {
    match node {
        Node::TypeDef(type_def) => object_type::build_model_object_type(type_def),
        Node::Object(object) => object::build_model_object(object),
        Node::Variable(variable) => {
            vec![UaNode::Variable(variable::build_model_variable(variable))]
        }
    }
}

/// A reference stored from the node's own perspective.
pub(crate) fn forward(reference_type: &str, target: &TargetId) -> Reference {
    Reference {
        reference_type: reference_type.to_string(),
        is_forward: None,
        target: target.to_string(),
    }
}

/// The inverse of a reference declared from the target's side.
pub(crate) fn inverse(reference_type: &str, target: &TargetId) -> Reference {
    Reference {
        reference_type: reference_type.to_string(),
        is_forward: Some(false),
        target: target.to_string(),
    }
}
