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

//! Byte-sequence <-> printable-text transcoder used by the base64 markup mode.
//!
//! Standard alphabet (`A-Z`, `a-z`, `0-9`, `+`, `/`) with `=` padding: each
//! group of 3 input bytes becomes 4 output characters, and the final group is
//! padded out to a multiple of 4. `decode(encode(bytes)) == bytes` holds for
//! every byte sequence. Decoding discards characters outside the alphabet
//! (whitespace, line breaks) before validating, so wrapped or pretty-printed
//! input is accepted.

use crate::error::Error;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: u8 = b'=';

fn sextet(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Encodes a byte sequence as base64 text.
pub fn encode(data: &[u8]) -> String {
    let mut encoded = String::with_capacity(data.len().div_ceil(3) * 4);
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        encoded.push(ALPHABET[(b0 >> 2) as usize] as char);
        encoded.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);
        if chunk.len() > 1 {
            encoded.push(ALPHABET[(((b1 & 0x0F) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            encoded.push(PAD as char);
        }
        if chunk.len() > 2 {
            encoded.push(ALPHABET[(b2 & 0x3F) as usize] as char);
        } else {
            encoded.push(PAD as char);
        }
    }
    encoded
}

/// Decodes base64 text back into the original byte sequence.
///
/// Characters outside the alphabet that are not `=` are skipped before
/// validation. Fails with [`Error::Format`] if the filtered input's length is
/// not a multiple of 4, or if padding appears anywhere but the final one or
/// two positions.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    let filtered: Vec<u8> = encoded
        .bytes()
        .filter(|&c| c == PAD || sextet(c).is_some())
        .collect();

    if filtered.len() % 4 != 0 {
        return Err(Error::format(format!(
            "base64 input length {} is not a multiple of 4",
            filtered.len()
        )));
    }

    let mut decoded = Vec::with_capacity(filtered.len() / 4 * 3);
    for (group_idx, group) in filtered.chunks_exact(4).enumerate() {
        let last_group = (group_idx + 1) * 4 == filtered.len();
        let pad_len = match group {
            [_, _, PAD, PAD] if last_group => 2,
            [_, _, _, PAD] if last_group => 1,
            _ => 0,
        };
        let mut sextets = [0u8; 4];
        for (i, &c) in group.iter().take(4 - pad_len).enumerate() {
            sextets[i] = sextet(c).ok_or_else(|| {
                Error::format(format!(
                    "base64 padding character at position {} requires an alphabet character",
                    group_idx * 4 + i
                ))
            })?;
        }

        decoded.push((sextets[0] << 2) | (sextets[1] >> 4));
        if pad_len < 2 {
            decoded.push((sextets[1] << 4) | (sextets[2] >> 2));
        }
        if pad_len < 1 {
            decoded.push((sextets[2] << 6) | sextets[3]);
        }
    }
    Ok(decoded)
}
