// crates/nodeset-rs/src/resolver.rs
//! Parent resolution.
//!
//! A row's `parent` column is resolved in two steps: first by name against the
//! objects built so far, then, failing that, as a literal id. The `Root` sentinel
//! sits between the two and maps to the Objects folder.

use crate::classify::OrderedMap;
use crate::config::ParentPolicy;
use crate::constants::{ID_ROOT_PARENT, ROOT_PARENT_NAME};
use crate::diagnostics::Diagnostic;
use crate::error::NodeSetError;
use crate::row::Row;
use crate::types::{NodeId, TargetId};
use indexmap::IndexMap;
use log::{error, warn};

/// Name → NodeId of every object built so far, in build order.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: OrderedMap<NodeId>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self {
            objects: IndexMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, node_id: NodeId) {
        self.objects.insert(name.to_string(), node_id);
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.objects.get(name).copied()
    }
}

/// Resolves parent names according to a [`ParentPolicy`].
#[derive(Debug)]
pub struct ParentResolver {
    policy: ParentPolicy,
}

impl ParentResolver {
    pub fn new(policy: ParentPolicy) -> Self {
        Self { policy }
    }

    /// Resolves `row.parent`.
    ///
    /// A registry match always wins over the literal interpretation. An unmatched
    /// name records a diagnostic and passes through verbatim, or fails in strict mode.
    pub fn resolve(
        &self,
        row: &Row,
        registry: &ObjectRegistry,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<TargetId, NodeSetError> {
        if let Some(target) = self.lookup_by_name(&row.parent, registry) {
            return Ok(target);
        }
        self.fallback_to_literal(row, diagnostics)
    }

    /// Step one: the registry, then the `Root` sentinel.
    pub fn lookup_by_name(&self, parent: &str, registry: &ObjectRegistry) -> Option<TargetId> {
        if let Some(id) = registry.get(parent) {
            return Some(TargetId::Local(id));
        }
        if parent == ROOT_PARENT_NAME {
            return Some(TargetId::Standard(ID_ROOT_PARENT));
        }
        None
    }

    /// Step two: treat the parent string as an already-qualified external id.
    pub fn fallback_to_literal(
        &self,
        row: &Row,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<TargetId, NodeSetError> {
        match self.policy {
            ParentPolicy::Strict => {
                error!(
                    "Line {}: parent '{}' of '{}' matches no object",
                    row.line, row.parent, row.name
                );
                Err(NodeSetError::UnresolvedParent {
                    node: row.name.clone(),
                    parent: row.parent.clone(),
                })
            }
            ParentPolicy::Permissive => {
                let diagnostic = Diagnostic::UnresolvedParent {
                    line: row.line,
                    node: row.name.clone(),
                    parent: row.parent.clone(),
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
                Ok(TargetId::External(row.parent.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{RawRow, Row};

    fn row(name: &str, parent: &str) -> Row {
        let raw = RawRow {
            line: 3,
            name: name.into(),
            base_type: "Variable".into(),
            parent: parent.into(),
            data_type: "Double".into(),
            ..Default::default()
        };
        Row::parse(&raw, 1).unwrap()
    }

    #[test]
    fn test_registry_match() {
        let mut registry = ObjectRegistry::new();
        registry.register("Line1", NodeId::new(1, 5001));
        let resolver = ParentResolver::new(ParentPolicy::Strict);
        let mut diagnostics = Vec::new();
        let target = resolver
            .resolve(&row("Tank1", "Line1"), &registry, &mut diagnostics)
            .unwrap();
        assert_eq!(target, TargetId::Local(NodeId::new(1, 5001)));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_root_sentinel() {
        let resolver = ParentResolver::new(ParentPolicy::Strict);
        let mut diagnostics = Vec::new();
        let target = resolver
            .resolve(&row("Line1", "Root"), &ObjectRegistry::new(), &mut diagnostics)
            .unwrap();
        assert_eq!(target, TargetId::Standard(85));
    }

    #[test]
    fn test_registry_wins_over_root() {
        let mut registry = ObjectRegistry::new();
        registry.register("Root", NodeId::new(1, 5009));
        let resolver = ParentResolver::new(ParentPolicy::Permissive);
        assert_eq!(
            resolver.lookup_by_name("Root", &registry),
            Some(TargetId::Local(NodeId::new(1, 5009)))
        );
    }

    #[test]
    fn test_permissive_fallback() {
        let resolver = ParentResolver::new(ParentPolicy::Permissive);
        let mut diagnostics = Vec::new();
        let target = resolver
            .resolve(&row("Temp", "ns=2;i=17"), &ObjectRegistry::new(), &mut diagnostics)
            .unwrap();
        assert_eq!(target, TargetId::External("ns=2;i=17".into()));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnresolvedParent {
                line: 3,
                node: "Temp".into(),
                parent: "ns=2;i=17".into(),
            }]
        );
    }

    #[test]
    fn test_strict_fallback() {
        let resolver = ParentResolver::new(ParentPolicy::Strict);
        let mut diagnostics = Vec::new();
        let err = resolver
            .resolve(&row("Temp", "Boiler"), &ObjectRegistry::new(), &mut diagnostics)
            .unwrap_err();
        assert!(matches!(err, NodeSetError::UnresolvedParent { .. }));
        assert!(diagnostics.is_empty());
    }
}
