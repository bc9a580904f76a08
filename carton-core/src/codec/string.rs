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
use crate::codec::{tag, write_count, Codec};
use crate::dom::Element;
use crate::error::Error;

/// Text shape: length-prefixed UTF-8 bytes in binary form, literal attribute
/// text in markup form (escaping is the document layer's concern).
impl Codec for String {
    fn write_binary(&self, writer: &mut Writer) {
        writer.reserve(8 + self.len());
        write_count(writer, self.len());
        writer.write_bytes(self.as_bytes());
    }

    fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
        let len = crate::codec::read_count(reader)?;
        let bytes = reader.read_bytes(len)?.to_vec();
        String::from_utf8(bytes)
            .map_err(|e| Error::format(format!("string bytes are not valid UTF-8: {e}")))
    }

    fn write_markup(&self, slot: &mut Element) {
        slot.set_attribute(tag::VALUE, self.clone());
    }

    fn read_markup(slot: &Element) -> Result<Self, Error> {
        slot.attribute(tag::VALUE)
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::structural(format!(
                    "missing '{}' attribute on <{}>",
                    tag::VALUE,
                    slot.name()
                ))
            })
    }
}
