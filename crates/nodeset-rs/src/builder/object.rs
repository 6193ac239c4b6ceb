// crates/nodeset-rs/src/builder/object.rs

//! Contains builder functions to convert an `ObjectInstance` into `model::UaObject`.

use super::{HAS_COMPONENT, HAS_TYPE_DEFINITION, ORGANIZES, forward, inverse, variable};
use crate::constants::ID_BASE_OBJECT_TYPE;
use crate::model::{References, UaNode, UaObject};
use crate::nodes::ObjectInstance;
use crate::types::TargetId;

/// Emits the `UAObject` element followed by its cloned children as concrete variables.
pub(super) fn build_model_object(object: &ObjectInstance) -> Vec<UaNode> {
    let type_definition = match &object.type_ref {
        Some(type_ref) => TargetId::Local(type_ref.node_id),
        None => TargetId::Standard(ID_BASE_OBJECT_TYPE),
    };

    let mut reference = vec![
        inverse(ORGANIZES, &object.parent_id),
        forward(HAS_TYPE_DEFINITION, &type_definition),
    ];
    reference.extend(
        object
            .children
            .iter()
            .map(|child| forward(HAS_COMPONENT, &TargetId::Local(child.node_id))),
    );

    let mut elements = Vec::with_capacity(object.children.len() + 1);
    elements.push(UaNode::Object(UaObject {
        node_id: object.node_id.to_string(),
        browse_name: object.browse_name(),
        display_name: object.name.clone(),
        references: References { reference },
    }));
    elements.extend(
        object
            .children
            .iter()
            .map(|child| UaNode::Variable(variable::build_model_variable(child))),
    );
    elements
}
