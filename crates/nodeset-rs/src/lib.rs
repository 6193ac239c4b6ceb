// src/lib.rs

#![doc = "Builds OPC UA NodeSet2 XML documents from flat address-space model rows."]
#![doc = ""]
#![doc = "Each input row declares one object type, object or variable. The library"]
#![doc = "classifies the rows, allocates NodeIds, binds objects to their types (each"]
#![doc = "object gets its own copy of the type's variables) and serializes the result."]
#![doc = ""]
#![doc = "- `compile`: rows + `BuildConfig` into a `NodeSet` and its diagnostics."]
#![doc = "- `NodeSet::to_xml_string` / `NodeSet::write` / `NodeSet::write_to_path`: serialization."]

// --- Crate Modules ---

mod allocator;
mod builder;
mod classify;
mod config;
mod constants;
mod diagnostics;
mod engine;
mod error;
mod model;
mod nodes;
mod nodeset;
mod resolver;
mod row;
mod types;

// --- Public API Re-exports ---

pub use allocator::{IdCategory, NodeIdAllocator};
pub use classify::{Classification, OrderedMap, classify};
pub use config::{BuildConfig, IdBases, NamespaceAttributes, ParentPolicy};
pub use diagnostics::Diagnostic;
pub use engine::{BuildOutput, ModelBuilder, compile};
pub use error::NodeSetError;
pub use nodes::{Node, ObjectInstance, TypeDef, TypeRef, VariableInstance, VariablePrototype};
pub use nodeset::NodeSet;
pub use resolver::{ObjectRegistry, ParentResolver};
pub use row::{RawRow, Row, RowKind};
pub use types::{DEFAULT_NAMESPACE_INDEX, NodeId, NodeIdError, TargetId};
