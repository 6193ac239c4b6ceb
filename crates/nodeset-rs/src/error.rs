// crates/nodeset-rs/src/error.rs

use crate::allocator::IdCategory;
use core::fmt;
use quick_xml::errors::serialize::SeError;
use std::io;

/// Errors that abort a NodeSet build.
///
/// Every variant is fatal for the current build: no partial document is produced.
/// Conditions that only deserve a warning are reported as
/// [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Debug)]
pub enum NodeSetError {
    /// A row is missing a required field or carries an unparseable value.
    MalformedRow { line: usize, reason: String },

    /// Two rows that must be unique by name share the same name.
    DuplicateName { name: String, kind: &'static str },

    /// Two nodes of the document were given the same NodeId.
    DuplicateNodeId { node_id: String },

    /// A typed object supplied a different number of child values than its type declares.
    ChildValueCountMismatch {
        object: String,
        type_name: String,
        expected: usize,
        actual: usize,
    },

    /// A parent name matched no known object (strict mode only).
    UnresolvedParent { node: String, parent: String },

    /// A NodeId counter has no identifiers left.
    IdRangeExhausted { category: IdCategory },

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// Writing the document to its destination failed.
    Io(io::Error),

    /// An error occurred during string formatting.
    FmtError(fmt::Error),
}

impl From<SeError> for NodeSetError {
    fn from(e: SeError) -> Self {
        NodeSetError::XmlSerializing(e)
    }
}

impl From<io::Error> for NodeSetError {
    fn from(e: io::Error) -> Self {
        NodeSetError::Io(e)
    }
}

impl From<fmt::Error> for NodeSetError {
    fn from(e: fmt::Error) -> Self {
        NodeSetError::FmtError(e)
    }
}

impl fmt::Display for NodeSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeSetError::MalformedRow { line, reason } => {
                write!(f, "Malformed row at line {}: {}", line, reason)
            }
            NodeSetError::DuplicateName { name, kind } => {
                write!(f, "Duplicate {} name: '{}'", kind, name)
            }
            NodeSetError::DuplicateNodeId { node_id } => {
                write!(f, "NodeId {} is assigned to more than one node", node_id)
            }
            NodeSetError::ChildValueCountMismatch {
                object,
                type_name,
                expected,
                actual,
            } => write!(
                f,
                "Object '{}' of type '{}' supplies {} child values but the type declares {} children",
                object, type_name, actual, expected
            ),
            NodeSetError::UnresolvedParent { node, parent } => write!(
                f,
                "Parent '{}' of node '{}' does not name any known object",
                parent, node
            ),
            NodeSetError::IdRangeExhausted { category } => {
                write!(f, "No {} NodeIds left in the configured range", category)
            }
            NodeSetError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            NodeSetError::Io(e) => write!(f, "I/O error: {}", e),
            NodeSetError::FmtError(e) => write!(f, "Formatting error: {}", e),
        }
    }
}

impl std::error::Error for NodeSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NodeSetError::XmlSerializing(e) => Some(e),
            NodeSetError::Io(e) => Some(e),
            NodeSetError::FmtError(e) => Some(e),
            _ => None,
        }
    }
}
