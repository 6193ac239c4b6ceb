// crates/nodeset-rs/src/classify.rs
//! Splits the flat row list into type, object and variable bins.
//!
//! Classification is a pure pass over the whole input. It runs before any node is
//! built and is where malformed rows abort the build.

use crate::error::NodeSetError;
use crate::row::{RawRow, Row, RowKind};
use indexmap::IndexMap;
use log::{debug, info};
use std::collections::HashSet;

/// Insertion-ordered map. Iteration yields entries in the order they were first inserted;
/// downstream positional child values and reference order depend on this.
pub type OrderedMap<V> = IndexMap<String, V>;

/// The rows of the input, binned by kind.
#[derive(Debug, Default)]
pub struct Classification {
    /// TypeDef rows in declaration order.
    pub type_rows: Vec<Row>,
    /// For each type name, its children by name, in input order.
    pub type_children: OrderedMap<OrderedMap<Row>>,
    /// Object rows that are not children of a type, in input order.
    pub object_rows: Vec<Row>,
    /// Variable rows that are not children of a type, in input order.
    pub variable_rows: Vec<Row>,
}

impl Classification {
    /// Children of `type_name` in declaration order (empty if it has none).
    pub fn children_of(&self, type_name: &str) -> impl Iterator<Item = &Row> {
        self.type_children
            .get(type_name)
            .into_iter()
            .flat_map(|children| children.values())
    }
}

/// Validates and bins every row.
///
/// 1. Rows are bucketed by kind, keeping encounter order.
/// 2. For each TypeDef, every non-TypeDef row whose parent is that type's name
///    becomes one of its children.
/// 3. Every object or variable row whose name is a child name of any type is removed
///    from the object and variable bins, so a member is only ever materialized through
///    its type.
pub fn classify(raw_rows: &[RawRow], namespace: u16) -> Result<Classification, NodeSetError> {
    let rows = raw_rows
        .iter()
        .map(|raw| Row::parse(raw, namespace))
        .collect::<Result<Vec<_>, _>>()?;

    let mut type_rows: Vec<&Row> = Vec::new();
    let mut object_rows: Vec<&Row> = Vec::new();
    let mut variable_rows: Vec<&Row> = Vec::new();

    for row in &rows {
        match row.kind {
            RowKind::TypeDef => type_rows.push(row),
            RowKind::Object => object_rows.push(row),
            RowKind::Variable => variable_rows.push(row),
        }
    }

    ensure_unique_names(type_rows.iter().copied(), "object type")?;

    let mut type_children: OrderedMap<OrderedMap<Row>> = IndexMap::new();

    for type_row in &type_rows {
        let mut children: OrderedMap<Row> = IndexMap::new();
        for row in &rows {
            if row.kind == RowKind::TypeDef || row.parent != type_row.name {
                continue;
            }
            if row.data_type.is_none() {
                return Err(NodeSetError::MalformedRow {
                    line: row.line,
                    reason: format!(
                        "'{}' is a child of type '{}' but has no data type",
                        row.name, type_row.name
                    ),
                });
            }
            if children.insert(row.name.clone(), row.clone()).is_some() {
                return Err(NodeSetError::DuplicateName {
                    name: format!("{}.{}", type_row.name, row.name),
                    kind: "type child",
                });
            }
        }
        debug!(
            "Type '{}' declares {} children",
            type_row.name,
            children.len()
        );
        type_children.insert(type_row.name.clone(), children);
    }

    let member_names: HashSet<&str> = type_children
        .values()
        .flat_map(|children| children.keys())
        .map(String::as_str)
        .collect();
    let before = object_rows.len() + variable_rows.len();
    object_rows.retain(|row| !member_names.contains(row.name.as_str()));
    variable_rows.retain(|row| !member_names.contains(row.name.as_str()));
    let removed = before - object_rows.len() - variable_rows.len();

    ensure_unique_names(object_rows.iter().copied(), "object")?;

    let classification = Classification {
        type_rows: type_rows.into_iter().cloned().collect(),
        type_children,
        object_rows: object_rows.into_iter().cloned().collect(),
        variable_rows: variable_rows.into_iter().cloned().collect(),
    };

    info!(
        "Classified {} rows: {} types, {} member rows removed, {} objects, {} variables.",
        rows.len(),
        classification.type_rows.len(),
        removed,
        classification.object_rows.len(),
        classification.variable_rows.len(),
    );

    Ok(classification)
}

/// Object types and objects are looked up by name, so their names must be unique.
fn ensure_unique_names<'a>(
    rows: impl Iterator<Item = &'a Row>,
    kind: &'static str,
) -> Result<(), NodeSetError> {
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.name.as_str()) {
            return Err(NodeSetError::DuplicateName {
                name: row.name.clone(),
                kind,
            });
        }
    }
    Ok(())
}
