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

use crate::buffer::{Reader, Writer};
use crate::codec::{require_child, tag, Codec};
use crate::dom::Element;
use crate::error::Error;

/// Pair shape: fixed arity two, so the binary form needs no framing and the
/// markup form names its positions `<first>` and `<second>`.
impl<A: Codec, B: Codec> Codec for (A, B) {
    fn write_binary(&self, writer: &mut Writer) {
        self.0.write_binary(writer);
        self.1.write_binary(writer);
    }

    fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
        Ok((A::read_binary(reader)?, B::read_binary(reader)?))
    }

    fn write_markup(&self, slot: &mut Element) {
        let pair = slot.add_child(tag::PAIR);
        self.0.write_markup(pair.add_child(tag::FIRST));
        self.1.write_markup(pair.add_child(tag::SECOND));
    }

    fn read_markup(slot: &Element) -> Result<Self, Error> {
        let pair = require_child(slot, tag::PAIR)?;
        let first = A::read_markup(require_child(pair, tag::FIRST)?)?;
        let second = B::read_markup(require_child(pair, tag::SECOND)?)?;
        Ok((first, second))
    }
}
