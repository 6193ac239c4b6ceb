// crates/nodeset-rs/src/diagnostics.rs

use core::fmt;

/// A non-fatal finding recorded while building. The build continues, but the
/// document may not import the way the input intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A parent name matched no object and was written verbatim as the parent id.
    UnresolvedParent {
        line: usize,
        node: String,
        parent: String,
    },
    /// An object named an instance type that no TypeDef row declares; it was built untyped.
    UnknownInstanceType {
        line: usize,
        object: String,
        type_name: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedParent { line, node, parent } => write!(
                f,
                "line {}: parent '{}' of '{}' matches no object; passed through as a literal id",
                line, parent, node
            ),
            Diagnostic::UnknownInstanceType {
                line,
                object,
                type_name,
            } => write!(
                f,
                "line {}: instance type '{}' of '{}' is not declared; built as an untyped object",
                line, type_name, object
            ),
        }
    }
}
