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

//! Binary file sessions and entry points.
//!
//! A session is scoped to one save or one load: it owns its file handle or
//! byte buffer exclusively and releases it on every exit path, error paths
//! included, through ordinary ownership. The stream itself carries no
//! header, magic, or version; writer and reader agree purely on the value
//! shape, fixed little-endian widths, and `u64` length prefixes. Concurrent
//! access to one target path is not guarded.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::buffer::{Reader, Writer};
use crate::codec::Codec;
use crate::error::Error;

/// Save-side binary session. The target file is created (and truncated) up
/// front so an unwritable path fails before any encoding work; bytes land in
/// the file when [`finish`](BinarySaver::finish) runs.
pub struct BinarySaver {
    file: File,
    writer: Writer,
}

impl BinarySaver {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::create(path)?;
        Ok(BinarySaver {
            file,
            writer: Writer::new(),
        })
    }

    /// Appends one value to the stream.
    pub fn process<T: Codec>(&mut self, value: &T) -> Result<(), Error> {
        value.write_binary(&mut self.writer);
        Ok(())
    }

    /// Flushes the encoded stream to the target file and closes it.
    pub fn finish(mut self) -> Result<(), Error> {
        self.file.write_all(self.writer.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }
}

/// Load-side binary session over the file's full contents.
pub struct BinaryLoader {
    reader: Reader,
}

impl BinaryLoader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let bytes = fs::read(path)?;
        Ok(BinaryLoader {
            reader: Reader::new(bytes),
        })
    }

    /// Consumes the next value from the stream.
    pub fn process<T: Codec>(&mut self) -> Result<T, Error> {
        T::read_binary(&mut self.reader)
    }

    /// True once every byte of the stream has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.reader.is_exhausted()
    }
}

/// Saves one value to `path` in the compact binary encoding.
pub fn save_binary<T: Codec>(value: &T, path: impl AsRef<Path>) -> Result<(), Error> {
    let mut saver = BinarySaver::create(path)?;
    saver.process(value)?;
    saver.finish()
}

/// Reconstructs a value of type `T` from a binary file written by
/// [`save_binary`].
pub fn load_binary<T: Codec>(path: impl AsRef<Path>) -> Result<T, Error> {
    let mut loader = BinaryLoader::open(path)?;
    loader.process()
}
