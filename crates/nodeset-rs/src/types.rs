// crates/nodeset-rs/src/types.rs

use core::fmt;
use core::str::FromStr;

/// Namespace index used for every node this crate generates.
pub const DEFAULT_NAMESPACE_INDEX: u16 = 1;

/// A numeric NodeId in a specific namespace, written as `ns=<namespace>;i=<identifier>`.
///
/// This newtype keeps generated ids apart from the free-form parent strings
/// that pass through from the input unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: u32,
}

impl NodeId {
    pub fn new(namespace: u16, identifier: u32) -> Self {
        Self {
            namespace,
            identifier,
        }
    }

    /// Parses a node-id override from the input.
    ///
    /// Accepts a bare integer (`1234`), `i=1234`, or a fully-qualified
    /// `ns=1;i=1234`. The first two forms take `namespace`.
    pub fn parse_override(s: &str, namespace: u16) -> Result<Self, NodeIdError> {
        let s = s.trim();
        if s.starts_with("ns=") {
            return s.parse();
        }
        let digits = s.strip_prefix("i=").unwrap_or(s);
        let identifier = digits
            .parse::<u32>()
            .map_err(|_| NodeIdError::Invalid(s.to_string()))?;
        Ok(Self::new(namespace, identifier))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ns={};i={}", self.namespace, self.identifier)
    }
}

/// Error type for NodeId strings that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    Invalid(String),
}

impl fmt::Display for NodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeIdError::Invalid(value) => write!(
                f,
                "Invalid NodeId '{}'. Expected an integer, 'i=<n>' or 'ns=<ns>;i=<n>'.",
                value
            ),
        }
    }
}

impl std::error::Error for NodeIdError {}

impl FromStr for NodeId {
    type Err = NodeIdError;

    /// Parses the fully-qualified `ns=<namespace>;i=<identifier>` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NodeIdError::Invalid(s.to_string());
        let rest = s.strip_prefix("ns=").ok_or_else(invalid)?;
        let (ns, id) = rest.split_once(";i=").ok_or_else(invalid)?;
        let namespace = ns.parse::<u16>().map_err(|_| invalid())?;
        let identifier = id.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(namespace, identifier))
    }
}

/// The target of a reference, or the resolved parent of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetId {
    /// A node generated by this build.
    Local(NodeId),
    /// A well-known id of the base namespace, written as `i=<n>`.
    Standard(u32),
    /// An unresolved parent name, written verbatim.
    External(String),
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Local(id) => write!(f, "{}", id),
            TargetId::Standard(id) => write!(f, "i={}", id),
            TargetId::External(literal) => f.write_str(literal),
        }
    }
}
