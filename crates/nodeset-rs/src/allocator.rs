// crates/nodeset-rs/src/allocator.rs

use crate::config::IdBases;
use crate::error::NodeSetError;
use crate::types::NodeId;
use core::fmt;
use log::error;

/// The independently numbered NodeId ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCategory {
    /// Object types (`UAObjectType`).
    TypeDef,
    /// Template variables owned by an object type.
    TypeChild,
    /// Object instances (`UAObject`).
    Object,
    /// Standalone variables and the children cloned into typed objects.
    Variable,
}

impl fmt::Display for IdCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IdCategory::TypeDef => "object type",
            IdCategory::TypeChild => "type member",
            IdCategory::Object => "object",
            IdCategory::Variable => "variable",
        };
        f.write_str(s)
    }
}

/// Hands out fresh NodeIds, one monotonically increasing counter per [`IdCategory`].
///
/// One allocator belongs to one build. Counters never reset, decrement or
/// share values, so two builds with fresh allocators produce the same ids.
#[derive(Debug, Clone)]
pub struct NodeIdAllocator {
    namespace: u16,
    type_def: u32,
    type_child: u32,
    object: u32,
    variable: u32,
}

impl NodeIdAllocator {
    /// Creates an allocator whose counters start at `bases`.
    pub fn new(namespace: u16, bases: IdBases) -> Self {
        Self {
            namespace,
            type_def: bases.type_def,
            type_child: bases.type_child,
            object: bases.object,
            variable: bases.variable,
        }
    }

    /// Increments the category's counter and returns the new id.
    ///
    /// # Errors
    /// `IdRangeExhausted` once the counter has reached `u32::MAX`.
    pub fn allocate(&mut self, category: IdCategory) -> Result<NodeId, NodeSetError> {
        let counter = match category {
            IdCategory::TypeDef => &mut self.type_def,
            IdCategory::TypeChild => &mut self.type_child,
            IdCategory::Object => &mut self.object,
            IdCategory::Variable => &mut self.variable,
        };
        let Some(next) = counter.checked_add(1) else {
            error!("No {} NodeIds left after {}", category, counter);
            return Err(NodeSetError::IdRangeExhausted { category });
        };
        *counter = next;
        Ok(NodeId::new(self.namespace, next))
    }

    /// Returns `explicit` when the row supplied an id, otherwise allocates one.
    pub fn allocate_or(
        &mut self,
        explicit: Option<NodeId>,
        category: IdCategory,
    ) -> Result<NodeId, NodeSetError> {
        match explicit {
            Some(id) => Ok(id),
            None => self.allocate(category),
        }
    }
}
