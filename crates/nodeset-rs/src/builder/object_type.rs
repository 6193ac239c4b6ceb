// crates/nodeset-rs/src/builder/object_type.rs

//! Contains builder functions to convert a `TypeDef` into `model::UaObjectType` and its template members.

use super::{HAS_COMPONENT, HAS_SUBTYPE, forward, inverse, variable};
use crate::constants::ID_BASE_OBJECT_TYPE;
use crate::model::{References, UaNode, UaObjectType};
use crate::nodes::TypeDef;
use crate::types::TargetId;

/// Emits the `UAObjectType` element followed by one template `UAVariable` per child.
///
/// The type carries one inverse `HasSubtype` to BaseObjectType and one forward
/// `HasComponent` per child, in declaration order.
pub(super) fn build_model_object_type(type_def: &TypeDef) -> Vec<UaNode> {
    let type_id = TargetId::Local(type_def.node_id);

    let mut reference = Vec::with_capacity(type_def.children.len() + 1);
    reference.push(inverse(HAS_SUBTYPE, &TargetId::Standard(ID_BASE_OBJECT_TYPE)));
    reference.extend(
        type_def
            .children
            .iter()
            .map(|child| forward(HAS_COMPONENT, &TargetId::Local(child.node_id))),
    );

    let mut elements = Vec::with_capacity(type_def.children.len() + 1);
    elements.push(UaNode::ObjectType(UaObjectType {
        node_id: type_def.node_id.to_string(),
        browse_name: type_def.browse_name(),
        display_name: type_def.name.clone(),
        references: References { reference },
    }));
    elements.extend(
        type_def
            .children
            .iter()
            .map(|child| UaNode::Variable(variable::build_model_template(child, &type_id))),
    );
    elements
}
