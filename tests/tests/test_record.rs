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

use carton_core::error::Error;
use carton_core::{
    load_binary, load_markup, load_markup_binary, save_binary, save_markup, save_markup_binary,
    BinaryLoader, MarkupLoader, MarkupMode,
};
use carton_derive::CartonObject;
use tempfile::tempdir;

#[derive(CartonObject, Debug, PartialEq, Clone)]
struct Student {
    idx: i32,
    name: String,
    data: Vec<f64>,
}

fn sample() -> Student {
    Student {
        idx: 233,
        name: String::from("YANAMI"),
        data: vec![1.2, 2.3, 3.4],
    }
}

#[test]
fn aggregate_round_trips_in_all_three_formats() {
    let dir = tempdir().unwrap();
    let student = sample();

    let path = dir.path().join("student.bin");
    save_binary(&student, &path).unwrap();
    assert_eq!(load_binary::<Student>(&path).unwrap(), student);

    let path = dir.path().join("student.xml");
    save_markup(&student, &path).unwrap();
    assert_eq!(load_markup::<Student>(&path).unwrap(), student);

    let path = dir.path().join("student.b64");
    save_markup_binary(&student, &path).unwrap();
    assert_eq!(load_markup_binary::<Student>(&path).unwrap(), student);
}

#[test]
fn binary_aggregate_is_its_fields_back_to_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("student.bin");
    save_binary(&sample(), &path).unwrap();

    // Field identity is positional, so the stream reads back as the raw
    // field sequence with no extra framing.
    let mut loader = BinaryLoader::open(&path).unwrap();
    assert_eq!(loader.process::<i32>().unwrap(), 233);
    assert_eq!(loader.process::<String>().unwrap(), "YANAMI");
    assert_eq!(loader.process::<Vec<f64>>().unwrap(), vec![1.2, 2.3, 3.4]);
    assert!(loader.is_exhausted());
}

#[test]
fn markup_aggregate_flattens_into_sibling_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("student.xml");
    save_markup(&sample(), &path).unwrap();

    let mut loader = MarkupLoader::open(&path, MarkupMode::Text).unwrap();
    assert_eq!(loader.process::<i32>().unwrap(), 233);
    assert_eq!(loader.process::<String>().unwrap(), "YANAMI");
    assert_eq!(loader.process::<Vec<f64>>().unwrap(), vec![1.2, 2.3, 3.4]);

    let err = loader.process::<i32>().unwrap_err();
    assert!(matches!(err, Error::Structural(_)), "{err}");
}

#[derive(CartonObject, Debug, PartialEq)]
struct Roster {
    class: String,
    lead: Student,
    grades: BTreeMap<String, (u32, f32)>,
}

#[test]
fn nested_aggregates_round_trip() {
    let roster = Roster {
        class: String::from("2026-compilers"),
        lead: sample(),
        grades: BTreeMap::from([
            (String::from("alice"), (1, 91.5)),
            (String::from("bob"), (2, 84.0)),
        ]),
    };
    let dir = tempdir().unwrap();

    let path = dir.path().join("roster.bin");
    save_binary(&roster, &path).unwrap();
    assert_eq!(load_binary::<Roster>(&path).unwrap(), roster);

    let path = dir.path().join("roster.xml");
    save_markup(&roster, &path).unwrap();
    assert_eq!(load_markup::<Roster>(&path).unwrap(), roster);
}

#[test]
fn aggregates_nest_inside_containers() {
    let students = vec![
        sample(),
        Student {
            idx: 234,
            name: String::from("BUTAI"),
            data: vec![],
        },
    ];
    let dir = tempdir().unwrap();

    let path = dir.path().join("students.bin");
    save_binary(&students, &path).unwrap();
    assert_eq!(load_binary::<Vec<Student>>(&path).unwrap(), students);

    let path = dir.path().join("students.xml");
    save_markup(&students, &path).unwrap();
    assert_eq!(load_markup::<Vec<Student>>(&path).unwrap(), students);
}

#[derive(CartonObject, Debug, PartialEq)]
struct Empty;

#[test]
fn unit_aggregate_round_trips() {
    let dir = tempdir().unwrap();

    let path = dir.path().join("empty.bin");
    save_binary(&Empty, &path).unwrap();
    assert_eq!(load_binary::<Empty>(&path).unwrap(), Empty);

    let path = dir.path().join("empty.xml");
    save_markup(&Empty, &path).unwrap();
    assert_eq!(load_markup::<Empty>(&path).unwrap(), Empty);
}

#[test]
fn mismatched_shape_is_a_structural_error() {
    // A document holding a bare scalar cannot satisfy a type whose slot
    // must contain a container element.
    let dir = tempdir().unwrap();
    let path = dir.path().join("scalar.xml");
    save_markup(&5i32, &path).unwrap();

    let err = load_markup::<Vec<Student>>(&path).unwrap_err();
    assert!(matches!(err, Error::Structural(_)), "{err}");
}
