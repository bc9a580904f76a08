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

//! # Carton
//!
//! Carton serializes in-memory values to files in three interchangeable
//! persisted forms and reconstructs equal values from them:
//!
//! - **binary** — a compact little-endian byte stream with explicit length
//!   prefixes ([`save_binary`]/[`load_binary`])
//! - **markup** — a structured text document of named elements
//!   ([`save_markup`]/[`load_markup`])
//! - **markup-binary** — the same markup document, base64-encoded into an
//!   opaque byte file ([`save_markup_binary`]/[`load_markup_binary`])
//!
//! Supported shapes are fixed-width numerics, `bool`/`char`, `String`,
//! two-tuples, `Vec`/`LinkedList`, `BTreeSet`, `BTreeMap`, and user structs
//! registered with `#[derive(CartonObject)]` — nested to any depth.
//!
//! ## Example
//!
//! ```rust
//! use carton::{save_binary, load_binary, save_markup, load_markup, Error};
//! use carton_derive::CartonObject;
//! use std::collections::BTreeMap;
//!
//! #[derive(CartonObject, Debug, PartialEq)]
//! struct Inventory {
//!     revision: u64,
//!     label: String,
//!     stock: BTreeMap<String, i32>,
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let dir = tempfile::tempdir()?;
//! let inventory = Inventory {
//!     revision: 7,
//!     label: "warehouse A".to_string(),
//!     stock: BTreeMap::from([("bolt".to_string(), 120), ("nut".to_string(), 95)]),
//! };
//!
//! let path = dir.path().join("inventory.bin");
//! save_binary(&inventory, &path)?;
//! let restored: Inventory = load_binary(&path)?;
//! assert_eq!(inventory, restored);
//!
//! let path = dir.path().join("inventory.xml");
//! save_markup(&inventory, &path)?;
//! let restored: Inventory = load_markup(&path)?;
//! assert_eq!(inventory, restored);
//! # Ok(())
//! # }
//! ```
//!
//! ## Sessions
//!
//! The save/load functions handle the common one-value-per-file case. To
//! put several values in one document, drive a session directly: each
//! [`MarkupSaver::process`] call appends the next top-level field, and each
//! [`MarkupLoader::process`] call consumes one in the same order.
//!
//! Concurrent access to one target path is not supported; callers must
//! serialize access externally.

pub use carton_core::base64;
pub use carton_core::binary::{load_binary, save_binary, BinaryLoader, BinarySaver};
pub use carton_core::buffer;
pub use carton_core::codec::{self, Codec};
pub use carton_core::dom;
pub use carton_core::error::Error;
pub use carton_core::markup::{
    load_markup, load_markup_binary, save_markup, save_markup_binary, MarkupLoader, MarkupMode,
    MarkupSaver,
};
pub use carton_derive::CartonObject;
