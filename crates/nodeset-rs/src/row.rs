// crates/nodeset-rs/src/row.rs
//! Input rows.
//!
//! A [`RawRow`] holds the eight input columns as plain strings, exactly as a
//! tabular reader produced them. [`Row::parse`] validates one and turns empty
//! optional columns into `None`.

use crate::error::NodeSetError;
use crate::model::value::is_valid_type_name;
use crate::types::NodeId;
use core::fmt;
use core::str::FromStr;

/// One unvalidated input row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based source line, used in error messages.
    pub line: usize,
    pub name: String,
    pub base_type: String,
    pub parent: String,
    pub instance_type: String,
    pub child_values: String,
    pub node_id: String,
    pub data_type: String,
    pub value: String,
}

/// The discriminator column (`base type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    TypeDef,
    Object,
    Variable,
}

impl FromStr for RowKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ObjectType" => Ok(RowKind::TypeDef),
            "Object" => Ok(RowKind::Object),
            "Variable" => Ok(RowKind::Variable),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RowKind::TypeDef => "ObjectType",
            RowKind::Object => "Object",
            RowKind::Variable => "Variable",
        };
        f.write_str(s)
    }
}

/// A validated input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub name: String,
    pub kind: RowKind,
    /// Parent name, or a literal id string.
    pub parent: String,
    pub instance_type: Option<String>,
    /// `;`-separated positional values for the children of a typed object.
    pub child_values: Option<String>,
    pub node_id: Option<NodeId>,
    pub data_type: Option<String>,
    pub value: Option<String>,
}

impl Row {
    /// Validates `raw`, resolving node-id overrides into `namespace`.
    pub fn parse(raw: &RawRow, namespace: u16) -> Result<Self, NodeSetError> {
        let malformed = |reason: String| NodeSetError::MalformedRow {
            line: raw.line,
            reason,
        };

        let name = raw.name.trim();
        if name.is_empty() {
            return Err(malformed("missing name".into()));
        }

        let base_type = raw.base_type.trim();
        if base_type.is_empty() {
            return Err(malformed(format!("'{}' has no base type", name)));
        }
        let kind = base_type.parse::<RowKind>().map_err(|_| {
            malformed(format!(
                "'{}' has unknown base type '{}' (expected ObjectType, Object or Variable)",
                name, base_type
            ))
        })?;

        let node_id = non_empty(&raw.node_id)
            .map(|s| NodeId::parse_override(&s, namespace))
            .transpose()
            .map_err(|e| malformed(format!("'{}': {}", name, e)))?;

        let data_type = non_empty(&raw.data_type);
        if kind == RowKind::Variable && data_type.is_none() {
            return Err(malformed(format!("variable '{}' has no data type", name)));
        }
        if let Some(dt) = data_type.as_deref().filter(|dt| !is_valid_type_name(dt)) {
            return Err(malformed(format!(
                "'{}' has invalid data type '{}'",
                name, dt
            )));
        }

        Ok(Row {
            line: raw.line,
            name: name.to_string(),
            kind,
            parent: raw.parent.trim().to_string(),
            instance_type: non_empty(&raw.instance_type),
            child_values: non_empty(&raw.child_values),
            node_id,
            data_type,
            value: non_empty(&raw.value),
        })
    }
}

/// Empty (or whitespace-only) columns mean "absent".
fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, base_type: &str) -> RawRow {
        RawRow {
            line: 2,
            name: name.into(),
            base_type: base_type.into(),
            parent: "Root".into(),
            data_type: "Double".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!(Row::parse(&raw("T", "ObjectType"), 1).unwrap().kind, RowKind::TypeDef);
        assert_eq!(Row::parse(&raw("O", "Object"), 1).unwrap().kind, RowKind::Object);
        assert_eq!(Row::parse(&raw("V", "Variable"), 1).unwrap().kind, RowKind::Variable);
    }

    #[test]
    fn test_empty_optionals_are_none() {
        let row = Row::parse(&raw("Pump1", "Object"), 1).unwrap();
        assert_eq!(row.instance_type, None);
        assert_eq!(row.child_values, None);
        assert_eq!(row.node_id, None);
        assert_eq!(row.value, None);
    }

    #[test]
    fn test_node_id_override() {
        let mut r = raw("Pump1", "Object");
        r.node_id = "7001".into();
        assert_eq!(
            Row::parse(&r, 1).unwrap().node_id,
            Some(NodeId::new(1, 7001))
        );
    }

    #[test]
    fn test_unparseable_node_id() {
        let mut r = raw("Pump1", "Object");
        r.node_id = "seven".into();
        let err = Row::parse(&r, 1).unwrap_err();
        assert!(matches!(err, NodeSetError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_missing_discriminator() {
        let err = Row::parse(&raw("Pump1", ""), 1).unwrap_err();
        assert!(matches!(err, NodeSetError::MalformedRow { .. }));
        let err = Row::parse(&raw("Pump1", "Method"), 1).unwrap_err();
        assert!(matches!(err, NodeSetError::MalformedRow { .. }));
    }

    #[test]
    fn test_missing_name() {
        let err = Row::parse(&raw("  ", "Object"), 1).unwrap_err();
        assert!(matches!(err, NodeSetError::MalformedRow { .. }));
    }

    #[test]
    fn test_variable_requires_data_type() {
        let mut r = raw("Speed", "Variable");
        r.data_type = String::new();
        assert!(Row::parse(&r, 1).is_err());
    }

    #[test]
    fn test_invalid_data_type() {
        let mut r = raw("Speed", "Variable");
        r.data_type = "Double Precision".into();
        assert!(matches!(
            Row::parse(&r, 1),
            Err(NodeSetError::MalformedRow { .. })
        ));
    }

    #[test]
    fn test_kind_display_round_trip() {
        for kind in [RowKind::TypeDef, RowKind::Object, RowKind::Variable] {
            assert_eq!(kind.to_string().parse::<RowKind>(), Ok(kind));
        }
    }
}
