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

use std::collections::BTreeSet;

use crate::buffer::{Reader, Writer};
use crate::codec::{next_child, read_count, read_items, tag, write_count, write_items, Codec};
use crate::dom::Element;
use crate::error::Error;

/// Unique-set shape. `BTreeSet` iteration is ascending by element order,
/// which is exactly the canonical persisted order; reload inserts into a
/// fresh set, so only final membership matters, not document order.
impl<T: Codec + Ord> Codec for BTreeSet<T> {
    fn write_binary(&self, writer: &mut Writer) {
        write_count(writer, self.len());
        for item in self {
            item.write_binary(writer);
        }
    }

    fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
        let count = read_count(reader)?;
        let mut out = BTreeSet::new();
        for _ in 0..count {
            out.insert(T::read_binary(reader)?);
        }
        Ok(out)
    }

    fn write_markup(&self, slot: &mut Element) {
        write_items(slot, tag::SET, self.len(), self.iter());
    }

    fn read_markup(slot: &Element) -> Result<Self, Error> {
        let (count, mut items) = read_items(slot, tag::SET)?;
        let mut out = BTreeSet::new();
        for _ in 0..count {
            out.insert(T::read_markup(next_child(&mut items, tag::ITEM)?)?);
        }
        Ok(out)
    }
}
