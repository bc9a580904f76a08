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

use std::collections::BTreeMap;
use std::fs;

use carton_core::error::Error;
use carton_core::{load_markup_binary, save_markup_binary};
use tempfile::tempdir;

#[test]
fn values_round_trip_through_the_wrapped_form() {
    let map = BTreeMap::from([
        (String::from("banana"), 'b'),
        (String::from("apple"), 'a'),
        (String::from("ZJU"), 'z'),
    ]);
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.b64");
    save_markup_binary(&map, &path).unwrap();
    let restored: BTreeMap<String, char> = load_markup_binary(&path).unwrap();
    assert_eq!(restored, map);
}

#[test]
fn no_markup_syntax_appears_in_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("opaque.b64");
    save_markup_binary(&(1i32, String::from("<angle> & text")), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(!bytes.contains(&b'<'));
    assert!(!bytes.contains(&b'>'));
    assert!(bytes
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'='));
}

#[test]
fn whitespace_inserted_into_the_file_is_tolerated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wrapped.b64");
    save_markup_binary(&vec![10i32, 20, 30], &path).unwrap();

    // Re-wrap the encoded text at column 8, as a mail gateway might.
    let encoded = fs::read_to_string(&path).unwrap();
    let wrapped: String = encoded
        .as_bytes()
        .chunks(8)
        .map(|c| std::str::from_utf8(c).unwrap())
        .collect::<Vec<_>>()
        .join("\r\n");
    fs::write(&path, wrapped).unwrap();

    let restored: Vec<i32> = load_markup_binary(&path).unwrap();
    assert_eq!(restored, vec![10, 20, 30]);
}

#[test]
fn bad_encoded_length_is_a_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clipped.b64");
    save_markup_binary(&String::from("payload"), &path).unwrap();

    let mut encoded = fs::read_to_string(&path).unwrap();
    encoded.pop();
    fs::write(&path, encoded).unwrap();

    let err = load_markup_binary::<String>(&path).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "{err}");
}

#[test]
fn plain_text_reads_fail_on_the_wrapped_form() {
    // The wrapped file holds no literal markup, so the text-mode loader
    // cannot find a document in it.
    let dir = tempdir().unwrap();
    let path = dir.path().join("wrapped.b64");
    save_markup_binary(&5u8, &path).unwrap();
    assert!(carton_core::load_markup::<u8>(&path).is_err());
}
