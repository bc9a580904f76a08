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

//! # Carton Derive Macros
//!
//! `#[derive(CartonObject)]` registers a struct's ordered field list with
//! the carton codecs once, at the definition site, and generates the whole
//! `Codec` implementation from it: binary save/load, markup save/load, and
//! the flattened top-level document traversal. Fields participate in
//! declared order and are recovered purely by position, so the writing and
//! reading programs must declare the same fields in the same order.
//!
//! ```rust
//! use carton_derive::CartonObject;
//!
//! #[derive(CartonObject, Debug, PartialEq)]
//! struct Playlist {
//!     id: i32,
//!     title: String,
//!     track_lengths: Vec<f64>,
//! }
//! ```
//!
//! A field may itself be a derived aggregate; nesting recurses through the
//! same generated impls without special casing.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod record;

/// Derive macro implementing `carton_core::codec::Codec` for a struct with
/// named fields (unit structs are accepted as the degenerate case).
///
/// The generated impl:
/// - writes/reads fields back to back in declared order in binary form,
/// - nests as a `<record>` element with one `<field>` child per declared
///   field when the struct appears as a sub-value in markup form,
/// - flattens into consecutive sibling `<field>` elements when the struct
///   is saved as a document's top-level value.
#[proc_macro_derive(CartonObject)]
pub fn derive_carton_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(_) | Fields::Unit => record::expand(&input, &data.fields).into(),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                &input.ident,
                "CartonObject requires named fields; tuple structs have no declared field list",
            )
            .to_compile_error()
            .into(),
        },
        Data::Enum(_) | Data::Union(_) => syn::Error::new_spanned(
            &input.ident,
            "CartonObject can only be derived for structs",
        )
        .to_compile_error()
        .into(),
    }
}
