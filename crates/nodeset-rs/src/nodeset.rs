// crates/nodeset-rs/src/nodeset.rs

use crate::builder;
use crate::config::NamespaceAttributes;
use crate::error::NodeSetError;
use crate::model::{Aliases, UaNodeSet};
use crate::nodes::{Node, ObjectInstance, TypeDef, VariableInstance};
use crate::types::NodeId;
use core::fmt::Write as _;
use log::{debug, error, info};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write as _};
use std::path::Path;
use tempfile::NamedTempFile;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// The output document plus every node added to it.
///
/// Nodes are projected into the document as soon as they are added, so the
/// element order of the output is the order of `add` calls.
#[derive(Debug)]
pub struct NodeSet {
    document: UaNodeSet,
    type_defs: Vec<TypeDef>,
    objects: Vec<ObjectInstance>,
    variables: Vec<VariableInstance>,
    node_ids: HashSet<NodeId>,
}

impl NodeSet {
    /// Creates an empty document with the given root namespaces and the static alias table.
    pub fn new(namespaces: &NamespaceAttributes) -> Self {
        Self {
            document: UaNodeSet {
                xmlns: namespaces.xmlns.clone(),
                xmlns_xsi: namespaces.xsi.clone(),
                xmlns_uax: namespaces.uax.clone(),
                xmlns_xsd: namespaces.xsd.clone(),
                xmlns_s1: namespaces.organization.clone(),
                aliases: Aliases::well_known(),
                nodes: Vec::new(),
            },
            type_defs: Vec::new(),
            objects: Vec::new(),
            variables: Vec::new(),
            node_ids: HashSet::new(),
        }
    }

    /// Appends `node` and the children it owns to the document.
    ///
    /// # Errors
    /// Returns `NodeSetError::DuplicateNodeId` if any of the node's ids is already
    /// in the document; the document is left unchanged in that case.
    pub fn add(&mut self, node: impl Into<Node>) -> Result<(), NodeSetError> {
        let node = node.into();
        let ids = owned_ids(&node);
        let mut fresh = HashSet::with_capacity(ids.len());
        for id in &ids {
            if self.node_ids.contains(id) || !fresh.insert(*id) {
                error!("NodeId {} of '{}' is already in use", id, node.name());
                return Err(NodeSetError::DuplicateNodeId {
                    node_id: id.to_string(),
                });
            }
        }
        self.node_ids.extend(ids);

        let elements = builder::project(&node);
        debug!(
            "Added '{}' ({}) with {} element(s)",
            node.name(),
            node.node_id(),
            elements.len()
        );
        self.document.nodes.extend(elements);

        match node {
            Node::TypeDef(t) => self.type_defs.push(t),
            Node::Object(o) => self.objects.push(o),
            Node::Variable(v) => self.variables.push(v),
        }
        Ok(())
    }

    pub fn type_defs(&self) -> &[TypeDef] {
        &self.type_defs
    }

    pub fn objects(&self) -> &[ObjectInstance] {
        &self.objects
    }

    pub fn variables(&self) -> &[VariableInstance] {
        &self.variables
    }

    /// Number of node elements in the document, owned children included.
    pub fn node_count(&self) -> usize {
        self.document.nodes.len()
    }

    /// Serializes the whole document, XML declaration included.
    pub fn to_xml_string(&self) -> Result<String, NodeSetError> {
        let mut buffer = String::new();
        write!(&mut buffer, "{}", XML_DECLARATION)?;

        let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
        serializer.indent(' ', 2);
        serializer.expand_empty_elements(true);

        self.document.serialize(serializer)?;
        Ok(buffer)
    }

    /// Writes the document to `sink` in a single write.
    ///
    /// The document is serialized in memory first, so a serialization error
    /// never reaches the sink.
    pub fn write<W: io::Write>(&self, mut sink: W) -> Result<(), NodeSetError> {
        let xml = self.to_xml_string()?;
        sink.write_all(xml.as_bytes())?;
        sink.flush()?;
        info!("Wrote NodeSet document ({} bytes).", xml.len());
        Ok(())
    }

    /// Writes the document to `path` through a uniquely named temporary file in the
    /// same directory, persisted over `path` on success.
    ///
    /// On failure the temporary file is dropped and `path` is left as it was.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), NodeSetError> {
        let path = path.as_ref();
        let xml = self.to_xml_string()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let result = NamedTempFile::new_in(dir).and_then(|mut tmp| {
            tmp.write_all(xml.as_bytes())?;
            tmp.flush()?;
            tmp.persist(path).map(|_| ()).map_err(|e| e.error)
        });
        if let Err(e) = result {
            error!("Failed to write {}: {}", path.display(), e);
            return Err(e.into());
        }
        info!(
            "Wrote NodeSet document to {} ({} bytes).",
            path.display(),
            xml.len()
        );
        Ok(())
    }
}

/// All ids a node contributes to the document: its own and its children's.
fn owned_ids(node: &Node) -> Vec<NodeId> {
    let mut ids = vec![node.node_id()];
    match node {
        Node::TypeDef(t) => ids.extend(t.children.iter().map(|c| c.node_id)),
        Node::Object(o) => ids.extend(o.children.iter().map(|c| c.node_id)),
        Node::Variable(_) => {}
    }
    ids
}
