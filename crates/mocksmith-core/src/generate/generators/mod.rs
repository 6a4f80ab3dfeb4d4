//! Per-type generator strategies.
//!
//! One module per type family. Every function here produces a single typed
//! value; nullability is handled once by the engine before dispatch, so
//! generators never see nullable fields.

pub mod crypto;
pub mod files;
pub mod finance;
pub mod geo;
pub mod internet;
pub mod media;
pub mod misc;
pub mod numeric;
pub mod person;
pub mod text;

use std::borrow::Cow;

use rand::Rng;

use crate::generate::value::Value;

/// Wrap a dynamically generated String into a Value::String.
#[inline]
pub(crate) fn owned(s: String) -> Value {
    Value::String(Cow::Owned(s))
}

/// Wrap a static string literal into a Value::String (zero heap allocation).
#[inline]
pub(crate) fn borrowed(s: &'static str) -> Value {
    Value::String(Cow::Borrowed(s))
}

pub(crate) fn random_alphanumeric(rng: &mut impl Rng, len: usize) -> String {
    const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..len)
        .map(|_| CHARS[rng.random_range(0..CHARS.len())] as char)
        .collect()
}

pub(crate) fn random_hex(rng: &mut impl Rng, len: usize) -> String {
    const CHARS: &[u8] = b"0123456789abcdef";
    (0..len)
        .map(|_| CHARS[rng.random_range(0..CHARS.len())] as char)
        .collect()
}

pub(crate) fn random_digits(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
