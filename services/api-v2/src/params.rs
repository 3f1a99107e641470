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

//! Request parameters and their canonical and wire forms.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use http::Method;

use crate::constants::*;

/// A scalar parameter value.
///
/// Values are rendered with their plain `Display` form, without quoting.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Text value.
    String(String),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(u64),
    /// Floating point value.
    Float(f64),
    /// Boolean value, rendered as `true` / `false`.
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(v) => f.write_str(v),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::UInt(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::String(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::String(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::String(v.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for ParamValue {
                fn from(v: $t) -> Self {
                    ParamValue::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Rewrite a parameter key into the form used on the wire and in the string
/// to sign: every `_` becomes `.`.
pub fn normalize_key(key: &str) -> String {
    key.replace('_', ".")
}

/// Params is the set of parameters of one API call.
///
/// Keys are case-sensitive and unique. Iteration is always in ascending
/// byte order of the keys, regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set with `key` set to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Return a new set with `key` set to `value` only if `key` is absent.
    pub fn with_default(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        if !self.0.contains_key(key) {
            self.0.insert(key.to_string(), value.into());
        }
        self
    }

    /// Get the value of `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Build the canonical query used in the string to sign.
    ///
    /// - keys in ascending byte order, `_` emitted as `.`
    /// - values rendered raw, without any URL encoding
    /// - for POST, values starting with `@` are skipped
    /// - the `Signature` key never takes part
    pub fn canonical_query(&self, method: &Method) -> String {
        let skip_files = method == Method::POST;

        let mut s = String::new();
        for (k, v) in self.0.iter() {
            if k == SIGNATURE {
                continue;
            }
            let value = v.to_string();
            if skip_files && value.starts_with(FILE_MARKER) {
                continue;
            }

            if !s.is_empty() {
                s.push('&');
            }
            s.push_str(&normalize_key(k));
            s.push('=');
            s.push_str(&value);
        }
        s
    }

    /// Attach `signature` and freeze the set.
    ///
    /// Any `Signature` already present is replaced.
    pub fn into_signed(mut self, signature: String) -> SignedParams {
        self.0
            .insert(SIGNATURE.to_string(), ParamValue::String(signature));
        SignedParams(self)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// SignedParams is a parameter set that already carries its `Signature`.
///
/// It exposes no way to add or change parameters: anything added after
/// signing would invalidate the signature.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedParams(Params);

impl SignedParams {
    /// The signature carried by this set.
    pub fn signature(&self) -> &str {
        match self.0.get(SIGNATURE) {
            Some(ParamValue::String(v)) => v,
            // `into_signed` is the only constructor and always stores a string.
            _ => "",
        }
    }

    /// Borrow all parameters, the signature included.
    pub fn params(&self) -> &Params {
        &self.0
    }

    /// Serialize every parameter for transport.
    ///
    /// Pairs are joined by `&`, keys get `_` replaced by `.`, values are
    /// form-urlencoded.
    pub fn to_wire(&self) -> String {
        let mut s = String::new();
        for (k, v) in self.0.iter() {
            if !s.is_empty() {
                s.push('&');
            }
            s.push_str(&normalize_key(k));
            s.push('=');
            for part in form_urlencoded::byte_serialize(v.to_string().as_bytes()) {
                s.push_str(part);
            }
        }
        s
    }
}

impl fmt::Display for SignedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Debug helper listing keys only, values may be sensitive.
pub(crate) fn key_list(params: &Params) -> String {
    params
        .0
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(";")
}
