//! Internal `serde` data structures that map directly to the NodeSet2 XML schema.
//!
//! These structs are only ever serialized. Field order is attribute and element
//! order in the output, so it follows `UANodeSet.xsd`.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use serde::Serialize;

pub mod aliases;
pub mod references;
pub mod value;

pub use aliases::{Alias, Aliases};
pub use references::{Reference, References};
pub use value::TypedValue;

/// The root element of a NodeSet2 document (`<UANodeSet>`).
#[derive(Debug, Serialize)]
#[serde(rename = "UANodeSet")]
pub struct UaNodeSet {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,

    #[serde(rename = "@xmlns:xsi")]
    pub xmlns_xsi: String,

    #[serde(rename = "@xmlns:uax")]
    pub xmlns_uax: String,

    #[serde(rename = "@xmlns:xsd")]
    pub xmlns_xsd: String,

    #[serde(rename = "@xmlns:s1")]
    pub xmlns_s1: String,

    #[serde(rename = "Aliases")]
    pub aliases: Aliases,

    /// Node elements in the order they were added.
    #[serde(rename = "$value")]
    pub nodes: Vec<UaNode>,
}

/// One node element of the document.
#[derive(Debug, Serialize)]
pub enum UaNode {
    #[serde(rename = "UAObjectType")]
    ObjectType(UaObjectType),
    #[serde(rename = "UAObject")]
    Object(UaObject),
    #[serde(rename = "UAVariable")]
    Variable(UaVariable),
}

/// Represents `<UAObjectType NodeId="..." BrowseName="...">`.
#[derive(Debug, Serialize)]
pub struct UaObjectType {
    #[serde(rename = "@NodeId")]
    pub node_id: String,

    #[serde(rename = "@BrowseName")]
    pub browse_name: String,

    #[serde(rename = "DisplayName")]
    pub display_name: String,

    #[serde(rename = "References")]
    pub references: References,
}

/// Represents `<UAObject NodeId="..." BrowseName="...">`.
#[derive(Debug, Serialize)]
pub struct UaObject {
    #[serde(rename = "@NodeId")]
    pub node_id: String,

    #[serde(rename = "@BrowseName")]
    pub browse_name: String,

    #[serde(rename = "DisplayName")]
    pub display_name: String,

    #[serde(rename = "References")]
    pub references: References,
}

/// Represents `<UAVariable DataType="..." ParentNodeId="..." ...>`.
#[derive(Debug, Serialize)]
pub struct UaVariable {
    #[serde(rename = "@DataType")]
    pub data_type: String,

    #[serde(rename = "@ParentNodeId")]
    pub parent_node_id: String,

    #[serde(rename = "@NodeId")]
    pub node_id: String,

    #[serde(rename = "@BrowseName")]
    pub browse_name: String,

    #[serde(rename = "@UserAccessLevel")]
    pub user_access_level: u8,

    #[serde(rename = "@AccessLevel")]
    pub access_level: u8,

    #[serde(rename = "DisplayName")]
    pub display_name: String,

    #[serde(rename = "References")]
    pub references: References,

    #[serde(rename = "Value")]
    pub value: TypedValue,
}
