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

//! Codegen for aggregate (record) types.
//!
//! Expansion is field-list iteration, nothing more: every generated method
//! visits the declared fields in declared order and delegates each one to
//! its own `Codec` impl, which is how nested aggregates and containers of
//! aggregates fall out for free.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, Ident};

pub fn expand(input: &DeriveInput, fields: &Fields) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let idents: Vec<&Ident> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|f| f.ident.as_ref().expect("named field has an ident"))
            .collect(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => unreachable!("rejected before expansion"),
    };

    let write_binary = idents.iter().map(|ident| {
        quote! {
            carton_core::codec::Codec::write_binary(&self.#ident, writer);
        }
    });

    let read_binary = idents.iter().map(|ident| {
        quote! {
            #ident: carton_core::codec::Codec::read_binary(reader)?,
        }
    });

    let write_markup = idents.iter().map(|ident| {
        quote! {
            carton_core::codec::Codec::write_markup(
                &self.#ident,
                record.add_child(carton_core::codec::tag::FIELD),
            );
        }
    });

    let read_markup = idents.iter().map(|ident| {
        quote! {
            #ident: carton_core::codec::Codec::read_markup(
                carton_core::codec::next_child(&mut fields, carton_core::codec::tag::FIELD)?,
            )?,
        }
    });

    let write_document = idents.iter().map(|ident| {
        quote! {
            saver.write_field(&self.#ident)?;
        }
    });

    let read_document = idents.iter().map(|ident| {
        quote! {
            #ident: loader.read_field()?,
        }
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics carton_core::codec::Codec for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn write_binary(&self, writer: &mut carton_core::buffer::Writer) {
                #(#write_binary)*
            }

            #[allow(unused_variables)]
            fn read_binary(
                reader: &mut carton_core::buffer::Reader,
            ) -> ::std::result::Result<Self, carton_core::error::Error> {
                ::std::result::Result::Ok(Self {
                    #(#read_binary)*
                })
            }

            #[allow(unused_variables)]
            fn write_markup(&self, slot: &mut carton_core::dom::Element) {
                let record = slot.add_child(carton_core::codec::tag::RECORD);
                #(#write_markup)*
            }

            #[allow(unused_variables, unused_mut)]
            fn read_markup(
                slot: &carton_core::dom::Element,
            ) -> ::std::result::Result<Self, carton_core::error::Error> {
                let record = carton_core::codec::require_child(
                    slot,
                    carton_core::codec::tag::RECORD,
                )?;
                let mut fields = record.children_named(carton_core::codec::tag::FIELD);
                ::std::result::Result::Ok(Self {
                    #(#read_markup)*
                })
            }

            #[allow(unused_variables)]
            fn write_document(
                &self,
                saver: &mut carton_core::markup::MarkupSaver,
            ) -> ::std::result::Result<(), carton_core::error::Error> {
                #(#write_document)*
                ::std::result::Result::Ok(())
            }

            #[allow(unused_variables)]
            fn read_document(
                loader: &mut carton_core::markup::MarkupLoader,
            ) -> ::std::result::Result<Self, carton_core::error::Error> {
                ::std::result::Result::Ok(Self {
                    #(#read_document)*
                })
            }
        }
    }
}
