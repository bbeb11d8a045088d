// awsrest: Rust client for Amazon S3, SQS and SimpleDB style services
// Copyright 2025 The awsrest Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HMAC-SHA1 request signatures
//!
//! Both REST style (Authorization header) and query style (`Signature`
//! parameter) requests use `base64(HMAC-SHA1(secret, string_to_sign))`.

use crate::creds::Credentials;
use crate::multimap_ext::Multimap;
use crate::utils::{b64encode, urlencode};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

/// Returns HMAC-SHA1 hash for given key and data
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns base64 encoded signature of the string to sign.
///
/// Callers must not pass an empty secret; connections refuse to be created
/// without one.
pub fn sign(secret_key: &str, string_to_sign: &str) -> String {
    debug_assert!(!secret_key.is_empty(), "signing with an empty secret key");
    b64encode(hmac_sha1(secret_key.as_bytes(), string_to_sign.as_bytes()))
}

/// Returns the `Authorization` header value of a REST style request.
pub fn get_authorization(access_key: &str, signature: &str) -> String {
    format!("AWS {}:{}", access_key, signature)
}

/// Signs a REST style request and adds the `Authorization` header.
pub fn sign_rest(headers: &mut Multimap, credentials: &Credentials, string_to_sign: &str) {
    let signature = sign(credentials.secret_key(), string_to_sign);
    headers.insert(
        crate::header_constants::AUTHORIZATION.to_string(),
        get_authorization(credentials.access_key(), &signature),
    );
}

/// Returns the query style string to sign: every `key` immediately followed
/// by its `value`, in key order, without separators.
pub fn get_query_string_to_sign(params: &BTreeMap<String, String>) -> String {
    let mut s = String::new();
    for (key, value) in params {
        s.push_str(key);
        s.push_str(value);
    }
    s
}

/// Returns the query string of a signed query style request, the signature
/// URL-encoded and appended last.
pub fn sign_query(params: &BTreeMap<String, String>, credentials: &Credentials) -> String {
    let string_to_sign = get_query_string_to_sign(params);
    log::trace!("query string to sign: {}", string_to_sign);
    let signature = sign(credentials.secret_key(), &string_to_sign);

    let mut query = String::new();
    for (key, value) in params {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(&urlencode(value));
    }
    query.push_str("&Signature=");
    query.push_str(&urlencode(&signature));
    query
}
