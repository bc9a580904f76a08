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

use std::borrow::Cow;

use thiserror::Error;

/// Global flag checked at compile time via the `CARTON_PANIC_ON_ERROR`
/// environment variable. When set, errors panic at their construction site
/// instead of propagating, which exposes the exact origin in a backtrace.
pub const PANIC_ON_ERROR: bool = option_env!("CARTON_PANIC_ON_ERROR").is_some();

/// Error type for all carton save and load operations.
///
/// Every failure is terminal for the operation that produced it: there is no
/// retry or partial-result recovery, and a save that fails midway may leave
/// the destination file incomplete. Resources held by the failing session are
/// still released.
///
/// Prefer the static constructor functions ([`Error::structural`],
/// [`Error::format`], [`Error::truncation`]) over building variants directly;
/// they accept anything convertible into a `Cow<'static, str>` and honor the
/// `CARTON_PANIC_ON_ERROR` debug flag.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The target file could not be opened, read, or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An expected document element, attribute, or field is absent, or a
    /// container held fewer elements than its declared count.
    #[error("{0}")]
    Structural(Cow<'static, str>),

    /// Malformed input: bad base64 text, an attribute that does not parse as
    /// the requested type, or bytes that are not valid UTF-8.
    #[error("{0}")]
    Format(Cow<'static, str>),

    /// The binary stream ended before the expected bytes could be read.
    #[error("stream exhausted: need {need} more bytes, {remaining} remaining")]
    Truncation { need: usize, remaining: usize },
}

impl Error {
    /// Creates a new [`Error::Structural`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn structural<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Structural(s.into());
        if PANIC_ON_ERROR {
            panic!("CARTON_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Format`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn format<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Format(s.into());
        if PANIC_ON_ERROR {
            panic!("CARTON_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Truncation`] with the requested and remaining
    /// byte counts.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn truncation(need: usize, remaining: usize) -> Self {
        let err = Error::Truncation { need, remaining };
        if PANIC_ON_ERROR {
            panic!("CARTON_PANIC_ON_ERROR: {}", err);
        }
        err
    }
}

/// Ensures a condition is true; otherwise returns a [`Error::Structural`].
///
/// # Examples
/// ```
/// use carton_core::ensure;
/// use carton_core::error::Error;
///
/// fn check_count(declared: usize, present: usize) -> Result<(), Error> {
///     ensure!(present >= declared, "container shorter than declared length");
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::structural($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::structural(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with a [`Error::Structural`].
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::structural($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::structural(format!($fmt, $($arg)*)))
    };
}
