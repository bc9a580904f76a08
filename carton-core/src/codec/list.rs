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

//! Sequence shape: ordered, duplicates allowed.
//!
//! `Vec<T>` and `LinkedList<T>` are the dense-indexed and linked flavors of
//! the same shape; both persist as `sequence`, so either container reads
//! back what the other wrote.

use std::collections::LinkedList;

use crate::buffer::{Reader, Writer};
use crate::codec::{next_child, read_count, read_items, tag, write_count, write_items, Codec};
use crate::dom::Element;
use crate::error::Error;

impl<T: Codec> Codec for Vec<T> {
    fn write_binary(&self, writer: &mut Writer) {
        write_count(writer, self.len());
        for item in self {
            item.write_binary(writer);
        }
    }

    fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
        let count = read_count(reader)?;
        // Each element occupies at least one byte, so `remaining` bounds the
        // preallocation against a corrupt count.
        let mut out = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            out.push(T::read_binary(reader)?);
        }
        Ok(out)
    }

    fn write_markup(&self, slot: &mut Element) {
        write_items(slot, tag::SEQUENCE, self.len(), self.iter());
    }

    fn read_markup(slot: &Element) -> Result<Self, Error> {
        let (count, mut items) = read_items(slot, tag::SEQUENCE)?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(T::read_markup(next_child(&mut items, tag::ITEM)?)?);
        }
        Ok(out)
    }
}

impl<T: Codec> Codec for LinkedList<T> {
    fn write_binary(&self, writer: &mut Writer) {
        write_count(writer, self.len());
        for item in self {
            item.write_binary(writer);
        }
    }

    fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
        let count = read_count(reader)?;
        let mut out = LinkedList::new();
        for _ in 0..count {
            out.push_back(T::read_binary(reader)?);
        }
        Ok(out)
    }

    fn write_markup(&self, slot: &mut Element) {
        write_items(slot, tag::SEQUENCE, self.len(), self.iter());
    }

    fn read_markup(slot: &Element) -> Result<Self, Error> {
        let (count, mut items) = read_items(slot, tag::SEQUENCE)?;
        let mut out = LinkedList::new();
        for _ in 0..count {
            out.push_back(T::read_markup(next_child(&mut items, tag::ITEM)?)?);
        }
        Ok(out)
    }
}
