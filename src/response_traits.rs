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

//! Response traits and the HTTP header scanner shared by all responses
//!
//! Several operations (`HEAD`, `PUT`, `GET` of an object) carry everything
//! they report in headers, with an empty body or one that is not XML.
//! [`ResponseHeaders::scan`] extracts those fields independently of the body
//! parser, and [`HasResponseHeaders`] exposes them uniformly:
//!
//! ```rust,ignore
//! let resp = conn.head_object("bucket", "key").send()?;
//! let size = resp.content_length();
//! let etag = resp.etag();
//! let meta = resp.user_metadata();
//! ```
//!
//! List-valued responses keep their items in a [`Listing`], which supports
//! one forward pass per `open()`.

use crate::header_constants::*;
use crate::utils::{UtcTime, from_http_header_value, trim_quotes};
use http::{HeaderMap, StatusCode};
use std::collections::BTreeMap;

#[macro_export]
/// Implements the `HasResponseHeaders` trait for types with a `headers: ResponseHeaders` field.
macro_rules! impl_has_response_headers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::response_traits::HasResponseHeaders for $ty {
                #[inline]
                fn response_headers(&self) -> &$crate::response_traits::ResponseHeaders {
                    &self.headers
                }
            }
        )*
    };
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Fields taken from the status line and headers of a response
pub struct ResponseHeaders {
    pub status: u16,
    pub request_id: String,
    /// Provider diagnostic id (`x-amz-id-2`).
    pub id_2: String,
    /// `Date` header as sent.
    pub date: String,
    /// ETag with surrounding quotes removed.
    pub etag: String,
    pub content_length: Option<u64>,
    pub content_type: String,
    /// `Last-Modified` header as sent.
    pub last_modified: String,
    pub location: String,
    /// `x-amz-meta-*` headers keyed by the name after the prefix, lower-cased.
    pub user_metadata: BTreeMap<String, String>,
    /// A 2xx status line was received.
    pub successful: bool,
}

impl ResponseHeaders {
    pub fn scan(status: StatusCode, headers: &HeaderMap) -> Self {
        let mut scanned = ResponseHeaders {
            status: status.as_u16(),
            successful: status.is_success(),
            ..Default::default()
        };

        if let Some(v) = header_str(headers, X_AMZ_REQUEST_ID) {
            scanned.request_id = v.to_string();
        }
        if let Some(v) = header_str(headers, X_AMZ_ID_2) {
            scanned.id_2 = v.to_string();
        }
        if let Some(v) = header_str(headers, DATE) {
            scanned.date = v.to_string();
        }
        if let Some(v) = header_str(headers, ETAG) {
            scanned.etag = trim_quotes(v);
        }
        if let Some(v) = header_str(headers, CONTENT_LENGTH) {
            scanned.content_length = v.parse().ok();
        }
        if let Some(v) = header_str(headers, CONTENT_TYPE) {
            scanned.content_type = v.to_string();
        }
        if let Some(v) = header_str(headers, LAST_MODIFIED) {
            scanned.last_modified = v.to_string();
        }
        if let Some(v) = header_str(headers, LOCATION) {
            scanned.location = v.to_string();
        }

        // HeaderMap names are already lower-case
        for (name, value) in headers {
            if let Some(key) = name.as_str().strip_prefix(X_AMZ_META_PREFIX) {
                if let Ok(value) = value.to_str() {
                    scanned
                        .user_metadata
                        .entry(key.to_string())
                        .and_modify(|v| {
                            v.push(',');
                            v.push_str(value.trim());
                        })
                        .or_insert_with(|| value.trim().to_string());
                }
            }
        }
        scanned
    }
}

/// Accessors for the header-derived fields of a response.
pub trait HasResponseHeaders {
    fn response_headers(&self) -> &ResponseHeaders;

    /// HTTP status code of the response.
    #[inline]
    fn status(&self) -> u16 {
        self.response_headers().status
    }

    /// Request id assigned by the service.
    #[inline]
    fn request_id(&self) -> &str {
        &self.response_headers().request_id
    }

    #[inline]
    fn id_2(&self) -> &str {
        &self.response_headers().id_2
    }

    /// Returns the parsed `Date` header, `None` when absent or unparsable.
    #[inline]
    fn date(&self) -> Option<UtcTime> {
        from_http_header_value(&self.response_headers().date).ok()
    }

    #[inline]
    fn etag(&self) -> &str {
        &self.response_headers().etag
    }

    #[inline]
    fn content_length(&self) -> Option<u64> {
        self.response_headers().content_length
    }

    #[inline]
    fn content_type(&self) -> &str {
        &self.response_headers().content_type
    }

    #[inline]
    fn last_modified(&self) -> Option<UtcTime> {
        from_http_header_value(&self.response_headers().last_modified).ok()
    }

    #[inline]
    fn user_metadata(&self) -> &BTreeMap<String, String> {
        &self.response_headers().user_metadata
    }

    /// True when the status line was 2xx and the body, if parsed, was a
    /// complete success document.
    #[inline]
    fn is_successful(&self) -> bool {
        self.response_headers().successful
    }
}

/// The items of a list-valued response.
///
/// The sequence is complete and immutable once the response is returned.
/// Iterate with `open()`, then `next()` until it returns false, then
/// `close()`; opening again restarts from the first item. [`Listing::iter`]
/// gives ordinary iterator access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing<T> {
    items: Vec<T>,
    cursor: Option<usize>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
        }
    }
}

impl<T> Listing<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: None,
        }
    }

    /// Positions the cursor before the first item.
    pub fn open(&mut self) {
        self.cursor = Some(0);
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    /// Copies the next item into `out` and advances. Returns false when the
    /// listing is exhausted or not open, leaving `out` untouched.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, out: &mut T) -> bool
    where
        T: Clone,
    {
        let Some(i) = self.cursor else {
            return false;
        };
        match self.items.get(i) {
            Some(item) => {
                out.clone_from(item);
                self.cursor = Some(i + 1);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a Listing<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_scan_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-request-id", HeaderValue::from_static("318BC8BC148832E5"));
        headers.insert("x-amz-id-2", HeaderValue::from_static("eftixk72aD6Ap51T"));
        headers.insert("date", HeaderValue::from_static("Wed, 28 Oct 2009 22:32:00 GMT"));
        headers.insert("etag", HeaderValue::from_static("\"fba9dede5f27731c9771645a39863328\""));
        headers.insert("content-length", HeaderValue::from_static("434234"));
        headers.insert("content-type", HeaderValue::from_static("text/plain"));
        headers.insert("x-amz-meta-family", HeaderValue::from_static("Muntz"));
        headers.append("x-amz-meta-tags", HeaderValue::from_static("a"));
        headers.append("x-amz-meta-tags", HeaderValue::from_static("b"));

        let scanned = ResponseHeaders::scan(StatusCode::OK, &headers);
        assert!(scanned.successful);
        assert_eq!(scanned.request_id, "318BC8BC148832E5");
        assert_eq!(scanned.id_2, "eftixk72aD6Ap51T");
        assert_eq!(scanned.etag, "fba9dede5f27731c9771645a39863328");
        assert_eq!(scanned.content_length, Some(434234));
        assert_eq!(scanned.content_type, "text/plain");
        assert_eq!(scanned.user_metadata.get("family").map(String::as_str), Some("Muntz"));
        assert_eq!(scanned.user_metadata.get("tags").map(String::as_str), Some("a,b"));
    }

    #[test]
    fn test_status_alone_decides_headerless_success() {
        let scanned = ResponseHeaders::scan(StatusCode::NO_CONTENT, &HeaderMap::new());
        assert!(scanned.successful);
        assert_eq!(scanned.status, 204);
        let scanned = ResponseHeaders::scan(StatusCode::NOT_FOUND, &HeaderMap::new());
        assert!(!scanned.successful);
    }

    #[test]
    fn test_listing_iteration() {
        let mut listing = Listing::new(vec![1, 2, 3]);
        let mut out = 0;
        assert!(!listing.next(&mut out));

        listing.open();
        let mut seen = Vec::new();
        while listing.next(&mut out) {
            seen.push(out);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(!listing.next(&mut out));
        listing.close();
        assert!(!listing.next(&mut out));

        listing.open();
        assert!(listing.next(&mut out));
        assert_eq!(out, 1);
    }
}
