//! Scenario XML reading

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::document::{SiqDocument, SiqNode};
use crate::error::{Error, Result};

/// Read a scenario description file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_siq<P: AsRef<Path>>(path: P) -> Result<SiqDocument> {
    let content = fs::read_to_string(path)?;
    parse_siq(&content)
}

/// Parse a scenario description from an XML string
///
/// # Errors
/// Returns an error if the XML is malformed or has no root element.
pub fn parse_siq(content: &str) -> Result<SiqDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut node_stack: Vec<SiqNode> = Vec::new();
    let mut root: Option<SiqNode> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                node_stack.push(node_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let node = node_from_start(&e)?;
                if let Some(parent) = node_stack.last_mut() {
                    parent.children.push(node);
                } else if root.is_none() {
                    root = Some(node);
                }
            }
            Ok(Event::End(_)) => {
                if let Some(completed) = node_stack.pop() {
                    if let Some(parent) = node_stack.last_mut() {
                        parent.children.push(completed);
                    } else if root.is_none() {
                        root = Some(completed);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(node) = node_stack.last_mut() {
                    node.text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(node) = node_stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    root.map(|root| SiqDocument { root })
        .ok_or(Error::EmptyDocument)
}

fn node_from_start(e: &BytesStart<'_>) -> Result<SiqNode> {
    let mut node = SiqNode::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        node.attributes.insert(key, value);
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_attributes_text_and_children() {
        let doc = parse_siq(
            r#"<?xml version="1.0" encoding="utf-8"?>
<package id="p-1" name="Pack &amp; Co">
    <rounds>
        <round name="Round 1"/>
        <round name="Round 2"/>
    </rounds>
</package>"#,
        )
        .unwrap();

        assert_eq!(doc.root.name, "package");
        assert_eq!(doc.root.attr("id"), Some("p-1"));
        assert_eq!(doc.root.attr("name"), Some("Pack & Co"));

        let rounds = doc.root.child("rounds").unwrap();
        let names: Vec<_> = rounds
            .children_named("round")
            .map(|r| r.attr("name").unwrap())
            .collect();
        assert_eq!(names, vec!["Round 1", "Round 2"]);
    }

    #[test]
    fn collects_element_text() {
        let doc = parse_siq("<scenario><atom>Who  goes there?</atom><atom type=\"say\">A &lt;hint&gt;</atom></scenario>").unwrap();
        let atoms: Vec<_> = doc.root.children_named("atom").collect();
        assert_eq!(atoms[0].text, "Who  goes there?");
        assert_eq!(atoms[1].text, "A <hint>");
        assert_eq!(atoms[1].attr("type"), Some("say"));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_siq(""), Err(Error::EmptyDocument)));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(parse_siq("<package><rounds></package>").is_err());
    }
}
