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

//! # Carton Core
//!
//! Core implementation of the carton serialization library: a dual-codec
//! engine that persists a value in either a compact binary encoding or a
//! structured markup document, plus a base64-wrapped variant of the markup
//! form for opaque-binary storage.
//!
//! ## Architecture
//!
//! - **`codec`**: the [`Codec`](codec::Codec) trait, implemented once per
//!   value shape (scalar, text, pair, sequence, unique-set, mapping) and
//!   composed recursively for nested types
//! - **`buffer`**: little-endian `Writer`/`Reader` byte buffers for the
//!   binary codec
//! - **`dom`**: the in-memory element tree for the markup codec, parsed and
//!   rendered through `quick-xml`
//! - **`base64`**: the byte/text transcoder behind the base64 markup mode
//! - **`binary`** / **`markup`**: per-file sessions and the six save/load
//!   entry points
//! - **`error`**: the single error type every operation reports through
//!
//! ## Guarantees
//!
//! Values round-trip exactly in binary form; in markup form, integers of
//! every width round-trip at full range and floats within the precision of
//! their decimal text. Sets and mappings persist in ascending canonical
//! order. Streams and documents frame variable-size data with explicit
//! element counts, and a reload consumes exactly the declared count.
//!
//! ## Constraints
//!
//! Operations are synchronous and single-threaded; each session owns its
//! target exclusively for the duration of one save or load. Concurrent
//! access to the same path from multiple processes or sessions is not
//! detected or guarded. There is no schema versioning: writer and reader
//! must declare identical shapes.
//!
//! Derived aggregate support lives in `carton-derive`; the `carton` facade
//! crate re-exports both.

pub mod base64;
pub mod binary;
pub mod buffer;
pub mod codec;
pub mod dom;
pub mod error;
pub mod markup;

pub use binary::{load_binary, save_binary, BinaryLoader, BinarySaver};
pub use codec::Codec;
pub use error::Error;
pub use markup::{
    load_markup, load_markup_binary, save_markup, save_markup_binary, MarkupLoader, MarkupMode,
    MarkupSaver,
};
