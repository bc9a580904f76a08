// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! In-memory element tree backing the markup codec.
//!
//! The markup codec only needs a handful of document operations: create a
//! named element, set and read attribute text, append a child, and walk
//! same-named children in order. This module provides that tree plus
//! [`parse`]/[`render`] adapters over `quick-xml` events for the document
//! text itself. Attribute values are escaped on render and unescaped on
//! parse, so serialized text may freely contain markup metacharacters.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader as XmlReader, Writer as XmlWriter};

use crate::error::Error;

/// One named element: attributes plus an ordered child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Element {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets an attribute, replacing any previous value under the same key.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends a new empty child element and returns a handle to it.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(name));
        self.children.last_mut().unwrap()
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child carrying the given element name, in document order.
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children carrying the given element name, in document order.
    /// Walking this iterator is the sibling-cursor traversal the codec uses
    /// to consume positional `<item>` and `<field>` elements.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// Renders an element tree to document text.
pub fn render(root: &Element) -> Result<String, Error> {
    let mut writer = XmlWriter::new_with_indent(Vec::new(), b' ', 2);
    render_into(root, &mut writer)?;
    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::format(format!("rendered document is not valid UTF-8: {e}")))
}

fn render_into(element: &Element, writer: &mut XmlWriter<Vec<u8>>) -> Result<(), Error> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        for child in &element.children {
            render_into(child, writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    }
    Ok(())
}

/// Parses document text into its root element.
pub fn parse(text: &str) -> Result<Element, Error> {
    let mut reader = XmlReader::from_str(text);
    // Open elements between the root and the cursor; the root sits at index 0
    // once seen.
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::format(format!("malformed markup document: {e}")))?;
        match event {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => return Ok(element),
                }
            }
            Event::End(_) => {
                // Tag-name pairing is already enforced by the event reader.
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::format("unmatched closing tag"))?;
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => return Ok(element),
                }
            }
            Event::Eof => {
                return Err(Error::structural("document contains no root element"));
            }
            // Text between our elements is always insignificant whitespace;
            // declarations and comments carry nothing the codec reads.
            _ => {}
        }
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute =
            attribute.map_err(|e| Error::format(format!("malformed attribute: {e}")))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| Error::format(format!("malformed attribute value: {e}")))?
            .into_owned();
        element.set_attribute(key, value);
    }
    Ok(element)
}
