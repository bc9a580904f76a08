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

//! Shared framing for the three counted container shapes.
//!
//! Every sequence, set, and mapping is persisted behind its element count:
//! a `u64` prefix in binary form, a `<length>` child in markup form. Reload
//! consumes exactly that many elements and treats a shortfall as a
//! structural error.

use crate::buffer::{Reader, Writer};
use crate::codec::{require_child, tag, Codec};
use crate::dom::Element;
use crate::error::Error;

pub(crate) fn write_count(writer: &mut Writer, count: usize) {
    writer.write_u64(count as u64);
}

pub(crate) fn read_count(reader: &mut Reader) -> Result<usize, Error> {
    let count = reader.read_u64()?;
    usize::try_from(count)
        .map_err(|_| Error::format(format!("element count {count} exceeds address space")))
}

/// Writes a counted container to markup: a `container` child under `slot`
/// holding a `<length>` element followed by one `<item>` per element.
pub(crate) fn write_items<'a, T, I>(slot: &mut Element, container: &str, count: usize, items: I)
where
    T: Codec + 'a,
    I: Iterator<Item = &'a T>,
{
    let node = slot.add_child(container);
    (count as u64).write_markup(node.add_child(tag::LENGTH));
    for item in items {
        item.write_markup(node.add_child(tag::ITEM));
    }
}

/// Locates a counted container under `slot` and yields its declared count
/// plus the positional `<item>` cursor. Callers must consume exactly
/// `count` items via [`crate::codec::next_child`].
pub(crate) fn read_items<'a>(
    slot: &'a Element,
    container: &str,
) -> Result<(usize, impl Iterator<Item = &'a Element>), Error> {
    let node = require_child(slot, container)?;
    let count = u64::read_markup(require_child(node, tag::LENGTH)?)?;
    let count = usize::try_from(count)
        .map_err(|_| Error::format(format!("element count {count} exceeds address space")))?;
    Ok((count, node.children_named(tag::ITEM)))
}
