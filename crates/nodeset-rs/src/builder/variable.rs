// crates/nodeset-rs/src/builder/variable.rs

//! Contains builder functions to convert variables into `model::UaVariable`.

use super::{HAS_COMPONENT, HAS_MODELLING_RULE, HAS_TYPE_DEFINITION, ORGANIZES, forward, inverse};
use crate::constants::{ACCESS_LEVEL_READ_WRITE, ID_BASE_DATA_VARIABLE_TYPE, ID_MODELLING_RULE_MANDATORY};
use crate::model::{Reference, References, TypedValue, UaVariable};
use crate::nodes::{VariableInstance, VariablePrototype};
use crate::types::TargetId;

/// Builds a concrete variable: `HasTypeDefinition` forward and `Organizes` inverse to its parent.
pub(crate) fn build_model_variable(variable: &VariableInstance) -> UaVariable {
    let references = vec![
        forward(HAS_TYPE_DEFINITION, &TargetId::Standard(ID_BASE_DATA_VARIABLE_TYPE)),
        inverse(ORGANIZES, &variable.parent_id),
    ];
    UaVariable {
        data_type: variable.data_type.clone(),
        parent_node_id: variable.parent_id.to_string(),
        node_id: variable.node_id.to_string(),
        browse_name: variable.browse_name(),
        user_access_level: variable.user_access_level,
        access_level: variable.access_level,
        display_name: variable.name.clone(),
        references: References {
            reference: references,
        },
        value: typed_value(&variable.data_type, variable.value.as_deref()),
    }
}

/// Builds a template member of `owner`: `HasTypeDefinition` forward, `HasComponent`
/// inverse to the owning type and `HasModellingRule` forward to Mandatory.
pub(crate) fn build_model_template(prototype: &VariablePrototype, owner: &TargetId) -> UaVariable {
    let references: Vec<Reference> = vec![
        forward(HAS_TYPE_DEFINITION, &TargetId::Standard(ID_BASE_DATA_VARIABLE_TYPE)),
        inverse(HAS_COMPONENT, owner),
        forward(HAS_MODELLING_RULE, &TargetId::Standard(ID_MODELLING_RULE_MANDATORY)),
    ];
    UaVariable {
        data_type: prototype.data_type.clone(),
        parent_node_id: owner.to_string(),
        node_id: prototype.node_id.to_string(),
        browse_name: prototype.browse_name(),
        user_access_level: ACCESS_LEVEL_READ_WRITE,
        access_level: ACCESS_LEVEL_READ_WRITE,
        display_name: prototype.name.clone(),
        references: References {
            reference: references,
        },
        value: typed_value(&prototype.data_type, prototype.default_value.as_deref()),
    }
}

/// An absent value is written as an empty element, never omitted.
fn typed_value(data_type: &str, value: Option<&str>) -> TypedValue {
    TypedValue {
        data_type: data_type.to_string(),
        text: value.unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeId;

    #[test]
    fn test_build_model_variable() {
        let level = VariableInstance::new(
            "Level".into(),
            NodeId::new(1, 6001),
            TargetId::Local(NodeId::new(1, 5001)),
            "Float".into(),
            Some("12.5".into()),
        );
        let model = build_model_variable(&level);
        assert_eq!(model.data_type, "Float");
        assert_eq!(model.parent_node_id, "ns=1;i=5001");
        assert_eq!(model.node_id, "ns=1;i=6001");
        assert_eq!(model.browse_name, "1:Level");
        assert_eq!(model.access_level, 3);
        assert_eq!(model.user_access_level, 3);

        let refs = &model.references.reference;
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].reference_type, "HasTypeDefinition");
        assert_eq!(refs[0].target, "i=63");
        assert_eq!(refs[1].reference_type, "Organizes");
        assert_eq!(refs[1].is_forward, Some(false));
        assert_eq!(refs[1].target, "ns=1;i=5001");
        assert_eq!(model.value.text, "12.5");
    }

    #[test]
    fn test_absent_value_is_empty_text() {
        let flag = VariableInstance::new(
            "Flag".into(),
            NodeId::new(1, 6002),
            TargetId::External("SomeFolder".into()),
            "Boolean".into(),
            None,
        );
        let model = build_model_variable(&flag);
        assert_eq!(model.value.text, "");
        assert_eq!(model.parent_node_id, "SomeFolder");
    }

    #[test]
    fn test_build_model_template() {
        let prototype = VariablePrototype {
            name: "Speed".into(),
            data_type: "Double".into(),
            node_id: NodeId::new(1, 2001),
            default_value: None,
        };
        let owner = TargetId::Local(NodeId::new(1, 1001));
        let model = build_model_template(&prototype, &owner);
        assert_eq!(model.browse_name, "1:Speed");

        let refs = &model.references.reference;
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[1].reference_type, "HasComponent");
        assert_eq!(refs[1].is_forward, Some(false));
        assert_eq!(refs[1].target, "ns=1;i=1001");
        assert_eq!(refs[2].reference_type, "HasModellingRule");
        assert_eq!(refs[2].is_forward, None);
        assert_eq!(refs[2].target, "i=78");
        assert!(refs.iter().all(|r| r.reference_type != "Organizes"));
    }
}
