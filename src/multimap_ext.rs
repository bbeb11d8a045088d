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

//! Request header collection and the fixed rule deciding which headers are signed

use crate::header_constants::{CONTENT_MD5, CONTENT_TYPE, DATE, X_AMZ_DATE, X_AMZ_PREFIX};
use crate::utils::{UtcTime, to_http_header_value};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

/// Removes embedded line breaks and surrounding spaces from a header value.
///
/// Returns `Cow::Borrowed` when the value is already canonical.
#[inline]
pub(crate) fn canonical_value(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();
    if !trimmed.contains(['\r', '\n']) {
        return Cow::Borrowed(trimmed);
    }
    let joined: String = trimmed.chars().filter(|c| *c != '\r' && *c != '\n').collect();
    Cow::Owned(joined.trim().to_string())
}

/// The headers that take part in the string to sign, already canonicalised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SigningHeaders {
    pub content_md5: String,
    pub content_type: String,
    /// Empty when an alternate date header (`x-amz-date`) is present.
    pub date: String,
    /// Lower-cased provider header name to comma-joined values, sorted by name.
    pub amz: BTreeMap<String, String>,
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Returns all values stored under `name`, compared case-insensitively.
    fn get_ignore_case(&self, name: &str) -> Vec<&str>;

    fn contains_ignore_case(&self, name: &str) -> bool;

    /// Removes every value stored under `name`, compared case-insensitively.
    fn remove_ignore_case(&mut self, name: &str);

    /// Replaces the `Date` header with the given time.
    fn stamp_date(&mut self, time: UtcTime);

    /// Selects and canonicalises the headers that are signed.
    fn signing_headers(&self) -> SigningHeaders;

    /// Entries ordered by lower-cased name, then by name as stored. Names that
    /// differ only in case always come out in the same order.
    fn sorted_entries(&self) -> Vec<(&String, &Vec<String>)>;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn get_ignore_case(&self, name: &str) -> Vec<&str> {
        let mut found = Vec::new();
        for (key, values) in self.sorted_entries() {
            if key.eq_ignore_ascii_case(name) {
                found.extend(values.iter().map(String::as_str));
            }
        }
        found
    }

    fn contains_ignore_case(&self, name: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(name))
    }

    fn remove_ignore_case(&mut self, name: &str) {
        self.retain(|k, _| !k.eq_ignore_ascii_case(name));
    }

    fn stamp_date(&mut self, time: UtcTime) {
        self.remove_ignore_case(DATE);
        self.add(DATE, to_http_header_value(time));
    }

    fn signing_headers(&self) -> SigningHeaders {
        let first = |name: &str| {
            self.get_ignore_case(name)
                .first()
                .map(|v| canonical_value(v).into_owned())
                .unwrap_or_default()
        };

        let date = if self.contains_ignore_case(X_AMZ_DATE) {
            String::new()
        } else {
            first(DATE)
        };

        let mut amz: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, values) in self.sorted_entries() {
            let name = key.to_lowercase();
            if !name.starts_with(X_AMZ_PREFIX) {
                continue;
            }
            amz.entry(name)
                .or_default()
                .extend(values.iter().map(|v| canonical_value(v).into_owned()));
        }

        SigningHeaders {
            content_md5: first(CONTENT_MD5),
            content_type: first(CONTENT_TYPE),
            date,
            amz: amz.into_iter().map(|(k, v)| (k, v.join(","))).collect(),
        }
    }

    fn sorted_entries(&self) -> Vec<(&String, &Vec<String>)> {
        let mut entries: Vec<_> = self.iter_all().collect();
        entries.sort_by(|(a, _), (b, _)| (a.to_lowercase(), *a).cmp(&(b.to_lowercase(), *b)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_value_strips_line_breaks() {
        assert!(matches!(canonical_value("  plain  "), Cow::Borrowed("plain")));
        assert_eq!(canonical_value(" folded\r\n value "), "folded value");
        assert_eq!(canonical_value("a\nb"), "ab");
    }

    #[test]
    fn test_signing_headers_selection() {
        let mut headers = Multimap::new();
        headers.add("x-amz-meta-foo", "bar");
        headers.add("Content-Type", "text/plain");
        headers.add("X-Random", "ignored");
        headers.add("Date", "Tue, 27 Mar 2007 19:36:42 +0000");

        let signed = headers.signing_headers();
        assert_eq!(signed.content_type, "text/plain");
        assert_eq!(signed.content_md5, "");
        assert_eq!(signed.date, "Tue, 27 Mar 2007 19:36:42 +0000");
        assert_eq!(signed.amz.len(), 1);
        assert_eq!(signed.amz.get("x-amz-meta-foo").map(String::as_str), Some("bar"));
    }

    #[test]
    fn test_alternate_date_blanks_date_line() {
        let mut headers = Multimap::new();
        headers.add("Date", "Tue, 27 Mar 2007 19:36:42 +0000");
        headers.add("X-Amz-Date", "Tue, 27 Mar 2007 21:20:26 +0000");
        let signed = headers.signing_headers();
        assert_eq!(signed.date, "");
        assert_eq!(
            signed.amz.get("x-amz-date").map(String::as_str),
            Some("Tue, 27 Mar 2007 21:20:26 +0000")
        );
    }

    #[test]
    fn test_multi_valued_amz_headers_are_joined() {
        let mut headers = Multimap::new();
        headers.add("X-Amz-Meta-ReviewedBy", "joe@example.com");
        headers.add("x-amz-meta-reviewedby", "jane@example.com");
        let signed = headers.signing_headers();
        // "X-Amz-..." sorts before "x-amz-..." once the lower-cased names tie
        assert_eq!(
            signed.amz.get("x-amz-meta-reviewedby").map(String::as_str),
            Some("joe@example.com,jane@example.com")
        );
    }

    #[test]
    fn test_mixed_case_duplicates_sign_the_same_every_time() {
        let build = || {
            let mut headers = Multimap::new();
            headers.add("x-amz-meta-tag", "two");
            headers.add("X-Amz-Meta-Tag", "one");
            headers.add("content-type", "text/html");
            headers.add("Content-Type", "text/plain");
            headers
        };
        let expected = build().signing_headers();
        assert_eq!(expected.amz.get("x-amz-meta-tag").map(String::as_str), Some("one,two"));
        assert_eq!(expected.content_type, "text/plain");
        for _ in 0..200 {
            assert_eq!(build().signing_headers(), expected);
        }
    }

    #[test]
    fn test_stamp_date_replaces_existing() {
        let mut headers = Multimap::new();
        headers.add("date", "old");
        headers.stamp_date(chrono::Utc::now());
        assert_eq!(headers.get_ignore_case("Date").len(), 1);
        assert_ne!(headers.get_ignore_case("Date")[0], "old");
    }
}
