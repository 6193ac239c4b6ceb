// crates/nodeset-rs/src/model/references.rs

//! Contains model structs for `<References>` and `<Reference>`.

use serde::Serialize;

/// Represents `<Reference ReferenceType="HasComponent" IsForward="false">ns=1;i=1001</Reference>`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Reference {
    #[serde(rename = "@ReferenceType")]
    pub reference_type: String,

    /// Omitted for forward references, `false` for inverse ones.
    #[serde(rename = "@IsForward", skip_serializing_if = "Option::is_none")]
    pub is_forward: Option<bool>,

    /// Target id.
    #[serde(rename = "$value")]
    pub target: String,
}

/// The ordered reference list of a node.
#[derive(Debug, Serialize, Default)]
pub struct References {
    #[serde(rename = "Reference")]
    pub reference: Vec<Reference>,
}
