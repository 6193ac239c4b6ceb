// crates/nodeset-rs/src/engine.rs
//! Turns classified rows into nodes and registers them in a [`NodeSet`].
//!
//! Construction order is fixed: every TypeDef (declaration order), then every
//! Object, then every Variable. Objects and variables resolve their parents
//! against the objects built before them.

use crate::allocator::{IdCategory, NodeIdAllocator};
use crate::classify::{OrderedMap, classify};
use crate::config::BuildConfig;
use crate::diagnostics::Diagnostic;
use crate::error::NodeSetError;
use crate::nodes::{ObjectInstance, TypeDef, TypeRef, VariableInstance, VariablePrototype};
use crate::nodeset::NodeSet;
use crate::resolver::{ObjectRegistry, ParentResolver};
use crate::row::{RawRow, Row};
use indexmap::IndexMap;
use log::{debug, error, info, warn};

/// The result of a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub node_set: NodeSet,
    /// Non-fatal findings, in the order they were recorded.
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-build state: the id allocator, the object registry and collected diagnostics.
#[derive(Debug)]
pub struct ModelBuilder {
    allocator: NodeIdAllocator,
    registry: ObjectRegistry,
    resolver: ParentResolver,
    diagnostics: Vec<Diagnostic>,
}

impl ModelBuilder {
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            allocator: NodeIdAllocator::new(config.namespace_index, config.id_bases),
            registry: ObjectRegistry::new(),
            resolver: ParentResolver::new(config.parent_policy),
            diagnostics: Vec::new(),
        }
    }

    /// Builds a type and its prototypes. Ids come from the row overrides, else from
    /// the `TypeDef` and `TypeChild` counters.
    pub fn build_type<'r>(
        &mut self,
        row: &Row,
        children: impl IntoIterator<Item = &'r Row>,
    ) -> Result<TypeDef, NodeSetError> {
        let node_id = self.allocator.allocate_or(row.node_id, IdCategory::TypeDef)?;
        let children = children
            .into_iter()
            .map(|child| {
                Ok(VariablePrototype {
                    name: child.name.clone(),
                    data_type: child.data_type.clone().unwrap_or_default(),
                    node_id: self
                        .allocator
                        .allocate_or(child.node_id, IdCategory::TypeChild)?,
                    default_value: child.value.clone(),
                })
            })
            .collect::<Result<Vec<_>, NodeSetError>>()?;

        Ok(TypeDef {
            name: row.name.clone(),
            node_id,
            children,
        })
    }

    /// Builds an object, cloning its type's children if `instance type` names a known type.
    ///
    /// # Errors
    /// `ChildValueCountMismatch` if `child values` does not have one entry per type
    /// child; `UnresolvedParent` in strict mode.
    pub fn build_object(
        &mut self,
        row: &Row,
        types: &OrderedMap<TypeDef>,
    ) -> Result<ObjectInstance, NodeSetError> {
        let parent_id = self
            .resolver
            .resolve(row, &self.registry, &mut self.diagnostics)?;
        let node_id = self.allocator.allocate_or(row.node_id, IdCategory::Object)?;

        let type_def = match row.instance_type.as_deref() {
            Some(type_name) => match types.get(type_name) {
                Some(type_def) => Some(type_def),
                None => {
                    let diagnostic = Diagnostic::UnknownInstanceType {
                        line: row.line,
                        object: row.name.clone(),
                        type_name: type_name.to_string(),
                    };
                    warn!("{}", diagnostic);
                    self.diagnostics.push(diagnostic);
                    None
                }
            },
            None => None,
        };

        let (type_ref, children) = match type_def {
            Some(type_def) => {
                let values = split_child_values(row, type_def)?;
                let children =
                    type_def.instantiate(node_id, values.as_deref(), &mut self.allocator)?;
                let type_ref = TypeRef {
                    name: type_def.name.clone(),
                    node_id: type_def.node_id,
                };
                (Some(type_ref), children)
            }
            None => (None, Vec::new()),
        };

        debug!(
            "Object '{}' -> {} (parent {}, {} children)",
            row.name,
            node_id,
            parent_id,
            children.len()
        );
        Ok(ObjectInstance {
            name: row.name.clone(),
            node_id,
            parent_id,
            type_ref,
            children,
        })
    }

    /// Builds a standalone variable.
    pub fn build_variable(&mut self, row: &Row) -> Result<VariableInstance, NodeSetError> {
        let parent_id = self
            .resolver
            .resolve(row, &self.registry, &mut self.diagnostics)?;
        let node_id = self.allocator.allocate_or(row.node_id, IdCategory::Variable)?;
        debug!("Variable '{}' -> {} (parent {})", row.name, node_id, parent_id);
        Ok(VariableInstance::new(
            row.name.clone(),
            node_id,
            parent_id,
            row.data_type.clone().unwrap_or_default(),
            row.value.clone(),
        ))
    }

    /// Makes `object` resolvable as a parent for the rows that follow.
    pub fn register(&mut self, object: &ObjectInstance) {
        self.registry.register(&object.name, object.node_id);
    }


    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Splits `child values` on `;`. `None` means every child takes its prototype default.
fn split_child_values(row: &Row, type_def: &TypeDef) -> Result<Option<Vec<String>>, NodeSetError> {
    let Some(raw) = row.child_values.as_deref() else {
        return Ok(None);
    };
    let values: Vec<String> = raw.split(';').map(|v| v.trim().to_string()).collect();
    if values.len() != type_def.children.len() {
        error!(
            "Line {}: '{}' supplies {} child values for type '{}' with {} children",
            row.line,
            row.name,
            values.len(),
            type_def.name,
            type_def.children.len()
        );
        return Err(NodeSetError::ChildValueCountMismatch {
            object: row.name.clone(),
            type_name: type_def.name.clone(),
            expected: type_def.children.len(),
            actual: values.len(),
        });
    }
    Ok(Some(values))
}

/// Compiles input rows into a NodeSet document.
///
/// Runs classification, builds every node in the fixed order and registers each
/// in a fresh [`NodeSet`]. Any error stops the build; nothing is written.
pub fn compile(rows: &[RawRow], config: &BuildConfig) -> Result<BuildOutput, NodeSetError> {
    let classification = classify(rows, config.namespace_index)?;

    let mut builder = ModelBuilder::new(config);
    let mut node_set = NodeSet::new(&config.namespaces);

    let mut types: OrderedMap<TypeDef> = IndexMap::new();
    for row in &classification.type_rows {
        let type_def = builder.build_type(row, classification.children_of(&row.name))?;
        node_set.add(type_def.clone())?;
        types.insert(row.name.clone(), type_def);
    }
    info!("Built {} object types.", types.len());

    for row in &classification.object_rows {
        let object = builder.build_object(row, &types)?;
        builder.register(&object);
        node_set.add(object)?;
    }
    info!("Built {} objects.", classification.object_rows.len());

    for row in &classification.variable_rows {
        let variable = builder.build_variable(row)?;
        node_set.add(variable)?;
    }
    info!("Built {} variables.", classification.variable_rows.len());

    let diagnostics = builder.into_diagnostics();
    if !diagnostics.is_empty() {
        warn!("Build finished with {} diagnostic(s).", diagnostics.len());
    }

    Ok(BuildOutput {
        node_set,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeId, TargetId};

    fn raw(name: &str, base_type: &str, parent: &str) -> RawRow {
        RawRow {
            name: name.into(),
            base_type: base_type.into(),
            parent: parent.into(),
            data_type: "Double".into(),
            ..Default::default()
        }
    }

    fn pump_rows() -> Vec<RawRow> {
        let mut speed = raw("Speed", "Variable", "Pump");
        speed.value = "0.0".into();
        let mut running = raw("Running", "Variable", "Pump");
        running.data_type = "Boolean".into();
        running.value = "false".into();
        vec![raw("Pump", "ObjectType", ""), speed, running]
    }

    #[test]
    fn test_build_type_allocates_ids() {
        let rows = pump_rows();
        let config = BuildConfig::default();
        let c = classify(&rows, 1).unwrap();
        let mut builder = ModelBuilder::new(&config);
        let pump = builder
            .build_type(&c.type_rows[0], c.children_of("Pump"))
            .unwrap();

        assert_eq!(pump.node_id, NodeId::new(1, 1001));
        assert_eq!(pump.children.len(), 2);
        assert_eq!(pump.children[0].node_id, NodeId::new(1, 2001));
        assert_eq!(pump.children[1].node_id, NodeId::new(1, 2002));
        assert_eq!(pump.children[0].default_value.as_deref(), Some("0.0"));
    }

    #[test]
    fn test_build_type_explicit_ids() {
        let mut rows = pump_rows();
        rows[0].node_id = "1500".into();
        rows[1].node_id = "2500".into();
        let c = classify(&rows, 1).unwrap();
        let mut builder = ModelBuilder::new(&BuildConfig::default());
        let pump = builder
            .build_type(&c.type_rows[0], c.children_of("Pump"))
            .unwrap();
        assert_eq!(pump.node_id, NodeId::new(1, 1500));
        assert_eq!(pump.children[0].node_id, NodeId::new(1, 2500));
        assert_eq!(pump.children[1].node_id, NodeId::new(1, 2001));
    }

    #[test]
    fn test_child_value_count_mismatch() {
        let mut rows = pump_rows();
        let mut pump1 = raw("Pump1", "Object", "Root");
        pump1.instance_type = "Pump".into();
        pump1.child_values = "1.0;true;extra".into();
        rows.push(pump1);

        let err = compile(&rows, &BuildConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            NodeSetError::ChildValueCountMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_defaults_when_child_values_absent() {
        let mut rows = pump_rows();
        let mut pump1 = raw("Pump1", "Object", "Root");
        pump1.instance_type = "Pump".into();
        rows.push(pump1);

        let output = compile(&rows, &BuildConfig::default()).unwrap();
        let object = &output.node_set.objects()[0];
        assert_eq!(object.children[0].value.as_deref(), Some("0.0"));
        assert_eq!(object.children[1].value.as_deref(), Some("false"));
    }

    #[test]
    fn test_unknown_instance_type_is_untyped() {
        let mut tank = raw("Tank1", "Object", "Root");
        tank.instance_type = "Tank".into();
        let output = compile(&[tank], &BuildConfig::default()).unwrap();
        let object = &output.node_set.objects()[0];
        assert!(object.type_ref.is_none());
        assert!(object.children.is_empty());
        assert!(matches!(
            output.diagnostics.as_slice(),
            [Diagnostic::UnknownInstanceType { .. }]
        ));
    }

    #[test]
    fn test_forward_reference_to_later_object_is_literal() {
        let rows = vec![raw("Tank1", "Object", "Line1"), raw("Line1", "Object", "Root")];
        let output = compile(&rows, &BuildConfig::default()).unwrap();
        let tank = &output.node_set.objects()[0];
        assert_eq!(tank.parent_id, TargetId::External("Line1".into()));
        assert_eq!(output.diagnostics.len(), 1);
    }

    #[test]
    fn test_variables_resolve_against_objects() {
        let rows = vec![
            raw("Level", "Variable", "Tank1"),
            raw("Tank1", "Object", "Root"),
        ];
        let output = compile(&rows, &BuildConfig::default()).unwrap();
        let level = &output.node_set.variables()[0];
        assert_eq!(level.parent_id, TargetId::Local(NodeId::new(1, 5001)));
        assert_eq!(level.node_id, NodeId::new(1, 6001));
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_strict_mode_aborts() {
        let rows = vec![raw("Level", "Variable", "Nowhere")];
        let err = compile(&rows, &BuildConfig::default().strict()).unwrap_err();
        assert!(matches!(err, NodeSetError::UnresolvedParent { .. }));
    }

    #[test]
    fn test_duplicate_explicit_ids_abort() {
        let mut a = raw("A", "Object", "Root");
        a.node_id = "9000".into();
        let mut b = raw("B", "Object", "Root");
        b.node_id = "9000".into();
        let err = compile(&[a, b], &BuildConfig::default()).unwrap_err();
        assert!(matches!(err, NodeSetError::DuplicateNodeId { .. }));
    }

    #[test]
    fn test_builder_collects_diagnostics() {
        let mut builder = ModelBuilder::new(&BuildConfig::default());
        let row = Row::parse(&raw("Level", "Variable", "Nowhere"), 1).unwrap();
        builder.build_variable(&row).unwrap();
        assert_eq!(builder.into_diagnostics().len(), 1);
    }

    #[test]
    fn test_exhausted_id_range_aborts() {
        let mut config = BuildConfig::default();
        config.id_bases.object = u32::MAX;
        let rows = vec![raw("Line1", "Object", "Root")];
        let err = compile(&rows, &config).unwrap_err();
        assert!(matches!(
            err,
            NodeSetError::IdRangeExhausted {
                category: IdCategory::Object
            }
        ));
    }
}
