// crates/nodeset-rs/src/model/aliases.rs

//! Contains model structs for the `<Aliases>` block.

use crate::constants::ALIASES;
use serde::Serialize;

/// Represents `<Alias Alias="Double">i=11</Alias>`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Alias {
    #[serde(rename = "@Alias")]
    pub alias: String,
    #[serde(rename = "$value")]
    pub value: String,
}

#[derive(Debug, Serialize, Default)]
pub struct Aliases {
    #[serde(rename = "Alias")]
    pub alias: Vec<Alias>,
}

impl Aliases {
    /// The static well-known alias table, in table order.
    pub fn well_known() -> Self {
        Self {
            alias: ALIASES
                .iter()
                .map(|(name, id)| Alias {
                    alias: (*name).to_string(),
                    value: format!("i={}", id),
                })
                .collect(),
        }
    }
}
