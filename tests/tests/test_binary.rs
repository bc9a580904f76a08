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

use std::collections::{BTreeMap, BTreeSet, LinkedList};
use std::fs;

use carton_core::codec::Codec;
use carton_core::error::Error;
use carton_core::{load_binary, save_binary, BinaryLoader, BinarySaver};
use tempfile::tempdir;

fn round_trip<T: Codec + PartialEq + std::fmt::Debug>(value: T) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("value.bin");
    save_binary(&value, &path).unwrap();
    let restored: T = load_binary(&path).unwrap();
    assert_eq!(restored, value);
}

#[test]
fn scalars_round_trip() {
    round_trip(0u8);
    round_trip(-1i8);
    round_trip(0xBEEFu16);
    round_trip(-30000i16);
    round_trip(u32::MAX);
    round_trip(i32::MIN);
    round_trip(u64::MAX);
    round_trip(i64::MIN);
    round_trip(3.25f32);
    round_trip(-2.5e300f64);
    round_trip(true);
    round_trip('中');
}

#[test]
fn strings_round_trip() {
    round_trip(String::new());
    round_trip(String::from("hello"));
    round_trip(String::from("späße 中文 \u{1F980}"));
}

#[test]
fn pairs_round_trip() {
    round_trip((42i32, String::from("answer")));
    round_trip((String::from("nested"), (1u8, 2.5f64)));
}

#[test]
fn sequences_round_trip() {
    round_trip(vec![1i32, 1, 2, 3, 5, 8]);
    round_trip(Vec::<f64>::new());
    round_trip(LinkedList::from([10u64, 20, 30]));
}

#[test]
fn sequence_and_linked_flavors_are_interchangeable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("seq.bin");
    save_binary(&vec![7i32, 8, 9], &path).unwrap();
    let as_list: LinkedList<i32> = load_binary(&path).unwrap();
    assert_eq!(as_list, LinkedList::from([7, 8, 9]));
}

#[test]
fn nested_sequences_preserve_both_orders() {
    let nested: Vec<LinkedList<i32>> =
        vec![LinkedList::from([1, 3, 5]), LinkedList::from([2, 4])];
    round_trip(nested);
}

#[test]
fn sets_and_maps_round_trip() {
    round_trip(BTreeSet::from([3i32, 1, 4, 1, 5]));
    round_trip(BTreeMap::from([
        (String::from("one"), 1i64),
        (String::from("two"), 2),
    ]));
    round_trip(BTreeMap::<String, char>::new());
}

#[test]
fn map_is_persisted_in_ascending_key_order() {
    let map = BTreeMap::from([
        (String::from("banana"), 'b'),
        (String::from("apple"), 'a'),
        (String::from("ZJU"), 'z'),
    ]);
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.bin");
    save_binary(&map, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let pos = |needle: &[u8]| {
        bytes
            .windows(needle.len())
            .position(|w| w == needle)
            .unwrap()
    };
    // 'Z' sorts before lowercase, so "ZJU" leads.
    assert!(pos(b"ZJU") < pos(b"apple"));
    assert!(pos(b"apple") < pos(b"banana"));

    let restored: BTreeMap<String, char> = load_binary(&path).unwrap();
    assert_eq!(restored, map);
}

#[test]
fn session_holds_multiple_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.bin");

    let mut saver = BinarySaver::create(&path).unwrap();
    saver.process(&99i32).unwrap();
    saver.process(&String::from("between")).unwrap();
    saver.process(&vec![1.5f64, 2.5]).unwrap();
    saver.finish().unwrap();

    let mut loader = BinaryLoader::open(&path).unwrap();
    assert_eq!(loader.process::<i32>().unwrap(), 99);
    assert_eq!(loader.process::<String>().unwrap(), "between");
    assert_eq!(loader.process::<Vec<f64>>().unwrap(), vec![1.5, 2.5]);
    assert!(loader.is_exhausted());
}

#[test]
fn truncated_stream_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.bin");
    // Length prefix promises 100 bytes, only 3 follow.
    let mut bytes = 100u64.to_le_bytes().to_vec();
    bytes.extend_from_slice(b"abc");
    fs::write(&path, bytes).unwrap();

    let err = load_binary::<String>(&path).unwrap_err();
    assert!(matches!(err, Error::Truncation { .. }), "{err}");
}

#[test]
fn truncated_element_list_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short-seq.bin");
    save_binary(&vec![1i64, 2, 3], &path).unwrap();
    let full = fs::read(&path).unwrap();
    fs::write(&path, &full[..full.len() - 4]).unwrap();

    let err = load_binary::<Vec<i64>>(&path).unwrap_err();
    assert!(matches!(err, Error::Truncation { .. }), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_binary::<i32>(dir.path().join("nope.bin")).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err}");
}

#[test]
fn invalid_utf8_text_is_a_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad-utf8.bin");
    let mut bytes = 2u64.to_le_bytes().to_vec();
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    fs::write(&path, bytes).unwrap();

    let err = load_binary::<String>(&path).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "{err}");
}
