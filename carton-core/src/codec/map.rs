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

use std::collections::BTreeMap;

use crate::buffer::{Reader, Writer};
use crate::codec::{next_child, read_count, read_items, require_child, tag, write_count, Codec};
use crate::dom::Element;
use crate::error::Error;

/// Mapping shape: unique keys, persisted in ascending key order. Each markup
/// `<item>` holds a `<key>` and a `<value>` slot; the binary form writes key
/// then value back to back.
impl<K: Codec + Ord, V: Codec> Codec for BTreeMap<K, V> {
    fn write_binary(&self, writer: &mut Writer) {
        write_count(writer, self.len());
        for (key, value) in self {
            key.write_binary(writer);
            value.write_binary(writer);
        }
    }

    fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
        let count = read_count(reader)?;
        let mut out = BTreeMap::new();
        for _ in 0..count {
            let key = K::read_binary(reader)?;
            let value = V::read_binary(reader)?;
            out.insert(key, value);
        }
        Ok(out)
    }

    fn write_markup(&self, slot: &mut Element) {
        let node = slot.add_child(tag::MAP);
        (self.len() as u64).write_markup(node.add_child(tag::LENGTH));
        for (key, value) in self {
            let item = node.add_child(tag::ITEM);
            key.write_markup(item.add_child(tag::KEY));
            value.write_markup(item.add_child(tag::VALUE_SLOT));
        }
    }

    fn read_markup(slot: &Element) -> Result<Self, Error> {
        let (count, mut items) = read_items(slot, tag::MAP)?;
        let mut out = BTreeMap::new();
        for _ in 0..count {
            let item = next_child(&mut items, tag::ITEM)?;
            let key = K::read_markup(require_child(item, tag::KEY)?)?;
            let value = V::read_markup(require_child(item, tag::VALUE_SLOT)?)?;
            out.insert(key, value);
        }
        Ok(out)
    }
}
