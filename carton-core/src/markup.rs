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

//! Markup document sessions, in plain-text and base64-wrapped modes.
//!
//! A document has a single `<serialization>` root holding one `<field>`
//! element per top-level value, consumed on load in document order by a
//! field cursor. Both sessions build the complete in-memory tree first; the
//! file boundary is crossed once, at [`MarkupSaver::finish`] or
//! [`MarkupLoader::open`]. In [`MarkupMode::Binary`] the rendered document
//! text passes through the base64 transcoder at that boundary, so no markup
//! syntax appears in the file itself.

use std::fs;
use std::path::{Path, PathBuf};

use crate::base64;
use crate::codec::{tag, Codec};
use crate::dom::{self, Element};
use crate::error::Error;

/// Persisted form of a markup document: literal text, or the same text
/// base64-encoded into an opaque byte file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupMode {
    #[default]
    Text,
    Binary,
}

/// Save-side markup session.
///
/// Values accumulate in the in-memory document across successive
/// [`process`](MarkupSaver::process) calls; nothing touches the file system
/// until [`finish`](MarkupSaver::finish). Dropping the saver without
/// finishing discards the document and leaves the target path untouched.
pub struct MarkupSaver {
    path: PathBuf,
    mode: MarkupMode,
    root: Element,
}

impl MarkupSaver {
    pub fn create(path: impl AsRef<Path>, mode: MarkupMode) -> Self {
        MarkupSaver {
            path: path.as_ref().to_path_buf(),
            mode,
            root: Element::new(tag::ROOT),
        }
    }

    /// Appends one value to the document. An aggregate appends one
    /// `<field>` per declared field; everything else appends exactly one.
    pub fn process<T: Codec>(&mut self, value: &T) -> Result<(), Error> {
        value.write_document(self)
    }

    /// Appends a single `<field>` element holding `value`. Called by
    /// [`Codec::write_document`] implementations; use
    /// [`process`](MarkupSaver::process) instead of calling this directly.
    pub fn write_field<T: Codec>(&mut self, value: &T) -> Result<(), Error> {
        value.write_markup(self.root.add_child(tag::FIELD));
        Ok(())
    }

    /// Renders the document and writes it to the target file in the
    /// session's mode.
    pub fn finish(self) -> Result<(), Error> {
        let text = dom::render(&self.root)?;
        let bytes = match self.mode {
            MarkupMode::Text => text.into_bytes(),
            MarkupMode::Binary => base64::encode(text.as_bytes()).into_bytes(),
        };
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// Load-side markup session with the field cursor.
pub struct MarkupLoader {
    root: Element,
    cursor: usize,
}

impl MarkupLoader {
    /// Reads, decodes (in [`MarkupMode::Binary`]), and parses the target
    /// file, then positions the field cursor at the first `<field>`.
    pub fn open(path: impl AsRef<Path>, mode: MarkupMode) -> Result<Self, Error> {
        let raw = fs::read(path)?;
        let text = match mode {
            MarkupMode::Text => String::from_utf8(raw)
                .map_err(|e| Error::format(format!("markup file is not valid UTF-8: {e}")))?,
            MarkupMode::Binary => {
                let encoded = String::from_utf8_lossy(&raw);
                let decoded = base64::decode(&encoded)?;
                String::from_utf8(decoded).map_err(|e| {
                    Error::format(format!("decoded markup text is not valid UTF-8: {e}"))
                })?
            }
        };
        let root = dom::parse(&text)?;
        if root.name() != tag::ROOT {
            return Err(Error::structural(format!(
                "expected <{}> root element, found <{}>",
                tag::ROOT,
                root.name()
            )));
        }
        Ok(MarkupLoader { root, cursor: 0 })
    }

    /// Consumes the next value from the document. Asking for more values
    /// than the document holds is a structural error.
    pub fn process<T: Codec>(&mut self) -> Result<T, Error> {
        T::read_document(self)
    }

    /// Consumes a single `<field>` element and advances the cursor. Called
    /// by [`Codec::read_document`] implementations; use
    /// [`process`](MarkupLoader::process) instead of calling this directly.
    pub fn read_field<T: Codec>(&mut self) -> Result<T, Error> {
        let slot = self
            .root
            .children_named(tag::FIELD)
            .nth(self.cursor)
            .ok_or_else(|| {
                Error::structural(format!("no <{}> element remaining in document", tag::FIELD))
            })?;
        let value = T::read_markup(slot)?;
        self.cursor += 1;
        Ok(value)
    }
}

/// Saves one value to `path` as a plain-text markup document.
pub fn save_markup<T: Codec>(value: &T, path: impl AsRef<Path>) -> Result<(), Error> {
    let mut saver = MarkupSaver::create(path, MarkupMode::Text);
    saver.process(value)?;
    saver.finish()
}

/// Reconstructs a value of type `T` from a plain-text markup document.
pub fn load_markup<T: Codec>(path: impl AsRef<Path>) -> Result<T, Error> {
    let mut loader = MarkupLoader::open(path, MarkupMode::Text)?;
    loader.process()
}

/// Saves one value to `path` as a base64-wrapped markup document.
pub fn save_markup_binary<T: Codec>(value: &T, path: impl AsRef<Path>) -> Result<(), Error> {
    let mut saver = MarkupSaver::create(path, MarkupMode::Binary);
    saver.process(value)?;
    saver.finish()
}

/// Reconstructs a value of type `T` from a base64-wrapped markup document.
pub fn load_markup_binary<T: Codec>(path: impl AsRef<Path>) -> Result<T, Error> {
    let mut loader = MarkupLoader::open(path, MarkupMode::Binary)?;
    loader.process()
}
