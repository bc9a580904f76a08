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

//! Scalar shapes: fixed-width integers, floats, `bool`, and `char`.
//!
//! Binary form is the little-endian bit pattern, markup form is the decimal
//! (or literal) text under the `val` attribute. Any bit pattern of the right
//! width is a valid integer or float, so binary scalar reads can only fail
//! by truncation.

use crate::buffer::{Reader, Writer};
use crate::codec::{parse_value_attribute, tag, Codec};
use crate::dom::Element;
use crate::error::Error;

macro_rules! impl_scalar_codec {
    ($ty:ty, $write:ident, $read:ident) => {
        impl Codec for $ty {
            #[inline]
            fn write_binary(&self, writer: &mut Writer) {
                writer.$write(*self);
            }

            #[inline]
            fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
                reader.$read()
            }

            fn write_markup(&self, slot: &mut Element) {
                slot.set_attribute(tag::VALUE, self.to_string());
            }

            fn read_markup(slot: &Element) -> Result<Self, Error> {
                parse_value_attribute(slot)
            }
        }
    };
}

impl_scalar_codec!(u8, write_u8, read_u8);
impl_scalar_codec!(i8, write_i8, read_i8);
impl_scalar_codec!(u16, write_u16, read_u16);
impl_scalar_codec!(i16, write_i16, read_i16);
impl_scalar_codec!(u32, write_u32, read_u32);
impl_scalar_codec!(i32, write_i32, read_i32);
impl_scalar_codec!(u64, write_u64, read_u64);
impl_scalar_codec!(i64, write_i64, read_i64);
impl_scalar_codec!(f32, write_f32, read_f32);
impl_scalar_codec!(f64, write_f64, read_f64);

impl Codec for bool {
    fn write_binary(&self, writer: &mut Writer) {
        writer.write_u8(*self as u8);
    }

    fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
        Ok(reader.read_u8()? != 0)
    }

    fn write_markup(&self, slot: &mut Element) {
        slot.set_attribute(tag::VALUE, self.to_string());
    }

    fn read_markup(slot: &Element) -> Result<Self, Error> {
        parse_value_attribute(slot)
    }
}

impl Codec for char {
    fn write_binary(&self, writer: &mut Writer) {
        writer.write_u32(*self as u32);
    }

    fn read_binary(reader: &mut Reader) -> Result<Self, Error> {
        let bits = reader.read_u32()?;
        char::from_u32(bits)
            .ok_or_else(|| Error::format(format!("bit pattern {bits:#x} is not a character")))
    }

    fn write_markup(&self, slot: &mut Element) {
        slot.set_attribute(tag::VALUE, self.to_string());
    }

    fn read_markup(slot: &Element) -> Result<Self, Error> {
        // `char::from_str` requires exactly one character.
        parse_value_attribute(slot)
    }
}
