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

//! The dual-codec dispatch engine.
//!
//! [`Codec`] is implemented once per value shape (scalar, text, pair,
//! sequence, unique-set, mapping) and composed recursively for nested types,
//! so a `BTreeMap<String, Vec<(i32, f64)>>` decomposes into the same small
//! set of structural cases as a bare `i32`. User aggregate types join the
//! closed set through `#[derive(CartonObject)]`, which generates the same
//! trait impl field by field without touching this module.

use crate::buffer::{Reader, Writer};
use crate::dom::Element;
use crate::error::Error;
use crate::markup::{MarkupLoader, MarkupSaver};

mod collection;
mod list;
mod map;
mod number;
mod pair;
mod set;
mod string;

pub(crate) use collection::{read_count, read_items, write_count, write_items};

/// Element and attribute names shared by the markup codec and the derive
/// macro. Writer and reader must agree on these exactly.
pub mod tag {
    /// Single root container of every markup document.
    pub const ROOT: &str = "serialization";
    /// One top-level serialized value under the root.
    pub const FIELD: &str = "field";
    /// Attribute carrying a leaf value's textual form.
    pub const VALUE: &str = "val";

    pub const PAIR: &str = "pair";
    pub const FIRST: &str = "first";
    pub const SECOND: &str = "second";
    pub const SEQUENCE: &str = "sequence";
    pub const SET: &str = "set";
    pub const MAP: &str = "map";
    pub const LENGTH: &str = "length";
    pub const ITEM: &str = "item";
    pub const KEY: &str = "key";
    pub const VALUE_SLOT: &str = "value";
    /// Nested aggregate sub-value.
    pub const RECORD: &str = "record";
}

/// Serialization contract for one value shape, covering both target formats.
///
/// Binary writes go through [`Writer`]/[`Reader`]: scalars as fixed-width
/// little-endian bit patterns, variable-size structures behind a `u64`
/// element count. Markup writes receive a `slot` element owned by the
/// enclosing structure; leaves store their text under the [`tag::VALUE`]
/// attribute of the slot, containers attach child elements to it.
///
/// In-memory writes cannot fail, so only the read half returns `Result`;
/// read failures are truncation (binary) or structural/format errors
/// (markup).
pub trait Codec: Sized {
    fn write_binary(&self, writer: &mut Writer);

    fn read_binary(reader: &mut Reader) -> Result<Self, Error>;

    fn write_markup(&self, slot: &mut Element);

    fn read_markup(slot: &Element) -> Result<Self, Error>;

    /// Appends this value to an open markup document.
    ///
    /// The default writes one `<field>` element. Aggregate types override
    /// this to flatten their declared fields into consecutive sibling
    /// `<field>` elements, which is what lets them piggyback on the same
    /// per-field document traversal as plain values.
    fn write_document(&self, saver: &mut MarkupSaver) -> Result<(), Error> {
        saver.write_field(self)
    }

    /// Consumes this value from an open markup document, advancing the
    /// field cursor. Overridden by aggregates to consume one `<field>` per
    /// declared field.
    fn read_document(loader: &mut MarkupLoader) -> Result<Self, Error> {
        loader.read_field()
    }
}

/// Locates the required child of a markup slot, failing structurally when
/// the expected element is absent.
pub fn require_child<'a>(slot: &'a Element, name: &str) -> Result<&'a Element, Error> {
    slot.first_child(name)
        .ok_or_else(|| Error::structural(format!("missing <{}> element under <{}>", name, slot.name())))
}

/// Advances a positional child cursor, failing structurally on exhaustion.
/// Used by derive-generated aggregate impls to consume `<field>` children.
pub fn next_child<'a>(
    children: &mut impl Iterator<Item = &'a Element>,
    name: &str,
) -> Result<&'a Element, Error> {
    children
        .next()
        .ok_or_else(|| Error::structural(format!("missing <{name}> element")))
}

/// Parses the [`tag::VALUE`] attribute of a leaf slot into any `FromStr`
/// type. Each scalar type parses its own textual form, so 64-bit integers
/// survive the markup round trip at full range.
pub fn parse_value_attribute<T>(slot: &Element) -> Result<T, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let text = slot.attribute(tag::VALUE).ok_or_else(|| {
        Error::structural(format!(
            "missing '{}' attribute on <{}>",
            tag::VALUE,
            slot.name()
        ))
    })?;
    text.parse().map_err(|e| {
        Error::format(format!(
            "cannot parse '{}' on <{}>: {}",
            text,
            slot.name(),
            e
        ))
    })
}
