// crates/nodeset-rs/src/config.rs
//! Build configuration.
//!
//! A `BuildConfig` is passed explicitly into [`compile`](crate::compile); nothing is
//! read from process-wide state. All fields have defaults, so a partial JSON file
//! only needs to name what it changes.

use crate::types::DEFAULT_NAMESPACE_INDEX;
use serde::Deserialize;

/// What to do when a parent name matches no object built so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentPolicy {
    /// Pass the name through as a literal id and record a diagnostic.
    #[default]
    Permissive,
    /// Abort the build with `NodeSetError::UnresolvedParent`.
    Strict,
}

/// Starting values of the four NodeId counters. The first id handed out is `base + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdBases {
    pub type_def: u32,
    pub type_child: u32,
    pub object: u32,
    pub variable: u32,
}

impl Default for IdBases {
    fn default() -> Self {
        Self {
            type_def: 1000,
            type_child: 2000,
            object: 5000,
            variable: 6000,
        }
    }
}

/// Namespace declarations written on the `<UANodeSet>` root element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamespaceAttributes {
    pub xmlns: String,
    pub xsi: String,
    pub uax: String,
    pub xsd: String,
    /// Organization-specific types namespace, declared as `xmlns:s1`.
    pub organization: String,
}

impl Default for NamespaceAttributes {
    fn default() -> Self {
        Self {
            xmlns: "http://opcfoundation.org/UA/2011/03/UANodeSet.xsd".into(),
            xsi: "http://www.w3.org/2001/XMLSchema-instance".into(),
            uax: "http://opcfoundation.org/UA/2008/02/Types.xsd".into(),
            xsd: "http://www.w3.org/2001/XMLSchema".into(),
            organization: "http://yourorganisation.org/dataobject/Types.xsd".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Namespace index of every generated node.
    pub namespace_index: u16,
    pub id_bases: IdBases,
    pub parent_policy: ParentPolicy,
    pub namespaces: NamespaceAttributes,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            namespace_index: DEFAULT_NAMESPACE_INDEX,
            id_bases: IdBases::default(),
            parent_policy: ParentPolicy::default(),
            namespaces: NamespaceAttributes::default(),
        }
    }
}

impl BuildConfig {
    /// Returns a copy of this config that rejects unresolved parents.
    pub fn strict(mut self) -> Self {
        self.parent_policy = ParentPolicy::Strict;
        self
    }
}
