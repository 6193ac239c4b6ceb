// crates/nodeset-rs/src/model/value.rs

//! Contains the `<Value>` payload of a `<UAVariable>`.

use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};

/// Represents `<Value><uax:Double>42.5</uax:Double></Value>`.
///
/// The inner element is named after the variable's data type, which is only known at
/// run time, so this type serializes itself as a one-entry map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedValue {
    pub data_type: String,
    /// Element text. Empty when the variable has no value; the element is still written.
    pub text: String,
}

impl TypedValue {
    pub fn element_name(&self) -> String {
        format!("uax:{}", self.data_type)
    }
}

/// True if `name` can be used as the local part of the `uax:` value element.
pub(crate) fn is_valid_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !is_valid_type_name(&self.data_type) {
            return Err(S::Error::custom(format!(
                "'{}' is not a valid data type element name",
                self.data_type
            )));
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.element_name(), &self.text)?;
        map.end()
    }
}
