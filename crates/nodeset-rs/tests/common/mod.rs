//! Helpers shared by the integration tests: row construction and a small
//! element tree read back from serialized output with `quick_xml::Reader`.

#![allow(dead_code)]

use nodeset_rs::RawRow;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds an input row; empty strings mean "column left blank".
pub fn raw(name: &str, base_type: &str, parent: &str, data_type: &str, value: &str) -> RawRow {
    RawRow {
        name: name.into(),
        base_type: base_type.into(),
        parent: parent.into(),
        data_type: data_type.into(),
        value: value.into(),
        ..Default::default()
    }
}

pub fn typed_object(name: &str, parent: &str, instance_type: &str, child_values: &str) -> RawRow {
    RawRow {
        name: name.into(),
        base_type: "Object".into(),
        parent: parent.into(),
        instance_type: instance_type.into(),
        child_values: child_values.into(),
        ..Default::default()
    }
}

/// One element of a parsed document.
#[derive(Debug, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

/// A reference read back from a node's `References` list.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedReference {
    pub reference_type: String,
    pub is_forward: bool,
    pub target: String,
}

impl Element {
    fn from_start(e: &BytesStart) -> Self {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let attributes = e
            .attributes()
            .map(|attr| {
                let attr = attr.expect("malformed attribute");
                (
                    String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                    String::from_utf8_lossy(&attr.value).into_owned(),
                )
            })
            .collect();
        Element {
            name,
            attributes,
            ..Default::default()
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn node_id(&self) -> &str {
        self.attr("NodeId").expect("node without NodeId")
    }

    pub fn browse_name(&self) -> &str {
        self.attr("BrowseName").expect("node without BrowseName")
    }

    pub fn references(&self) -> Vec<ParsedReference> {
        self.child("References")
            .map(|refs| {
                refs.children
                    .iter()
                    .map(|r| ParsedReference {
                        reference_type: r.attr("ReferenceType").unwrap_or_default().to_string(),
                        is_forward: r.attr("IsForward") != Some("false"),
                        target: r.text.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `(element name, text)` of the single child of `Value`.
    pub fn value(&self) -> Option<(&str, &str)> {
        let typed = self.child("Value")?.children.first()?;
        Some((typed.name.as_str(), typed.text.as_str()))
    }
}

/// Parses a whole document into its root element.
pub fn parse(xml: &str) -> Element {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = vec![Element::default()];
    loop {
        match reader.read_event().expect("malformed XML") {
            Event::Start(e) => stack.push(Element::from_start(&e)),
            Event::Empty(e) => {
                let element = Element::from_start(&e);
                stack.last_mut().unwrap().children.push(element);
            }
            Event::End(_) => {
                let element = stack.pop().unwrap();
                stack.last_mut().unwrap().children.push(element);
            }
            Event::Text(t) => {
                let text = String::from_utf8_lossy(&t).into_owned();
                stack.last_mut().unwrap().text.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    let mut document = stack.pop().unwrap();
    assert_eq!(document.children.len(), 1, "expected a single root element");
    document.children.remove(0)
}

/// Every node element of a `UANodeSet`, in document order.
pub fn nodes(root: &Element) -> Vec<&Element> {
    root.children
        .iter()
        .filter(|c| c.name.starts_with("UA"))
        .collect()
}

pub fn find_node<'a>(root: &'a Element, kind: &str, browse_name: &str) -> &'a Element {
    nodes(root)
        .into_iter()
        .find(|n| n.name == kind && n.browse_name() == browse_name)
        .unwrap_or_else(|| panic!("no {} with BrowseName {}", kind, browse_name))
}

pub fn find_nodes<'a>(root: &'a Element, kind: &str, browse_name: &str) -> Vec<&'a Element> {
    nodes(root)
        .into_iter()
        .filter(|n| n.name == kind && n.browse_name() == browse_name)
        .collect()
}
