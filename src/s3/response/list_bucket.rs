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

use crate::connection::parse_response;
use crate::error::{Error, Service, XmlError};
use crate::http::HttpResponse;
use crate::impl_has_s3fields;
use crate::response_traits::{Listing, ResponseHeaders};
use crate::s3::response::HasBucket;
use crate::s3::types::{FromS3Response, ObjectEntry, Owner, S3Request};
use crate::utils::{from_iso8601utc, parse_number, trim_quotes};
use crate::xml::BodyHandler;

/// Response of
/// [list_bucket()](crate::s3::client::S3Connection::list_bucket)
/// API
///
/// One page of the listing. `contents` holds the objects in key order;
/// keys rolled up by `delimiter` are in `common_prefixes`.
#[derive(Clone, Debug)]
pub struct ListBucketResponse {
    pub(crate) request: S3Request,
    pub(crate) headers: ResponseHeaders,
    pub name: String,
    pub prefix: String,
    pub marker: String,
    /// Only sent by the service when a delimiter was given.
    pub next_marker: Option<String>,
    pub delimiter: String,
    pub max_keys: Option<u32>,
    pub is_truncated: bool,
    pub contents: Listing<ObjectEntry>,
    pub common_prefixes: Vec<String>,
}
impl_has_s3fields!(ListBucketResponse);

impl HasBucket for ListBucketResponse {}

impl ListBucketResponse {
    /// Marker of the next page: `NextMarker` when sent, otherwise the last
    /// key or common prefix of this page. `None` when the listing is complete.
    pub fn continuation_marker(&self) -> Option<&str> {
        if !self.is_truncated {
            return None;
        }
        if let Some(marker) = self.next_marker.as_deref().filter(|m| !m.is_empty()) {
            return Some(marker);
        }
        let last_key = self.contents.as_slice().last().map(|e| e.key.as_str());
        let last_prefix = self.common_prefixes.last().map(String::as_str);
        last_key.max(last_prefix)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Contents,
    ContentsOwner,
    CommonPrefixes,
}

#[derive(Debug, Default)]
struct ListBucketHandler {
    name: String,
    prefix: String,
    marker: String,
    next_marker: Option<String>,
    delimiter: String,
    max_keys: Option<u32>,
    is_truncated: bool,
    contents: Vec<ObjectEntry>,
    common_prefixes: Vec<String>,
}

impl ListBucketHandler {
    fn entry(&mut self) -> Option<&mut ObjectEntry> {
        self.contents.last_mut()
    }
}

impl BodyHandler for ListBucketHandler {
    type Scope = Scope;

    fn root(&self) -> &'static str {
        "ListBucketResult"
    }

    fn open(&mut self, parent: Option<Scope>, name: &str) -> Option<Scope> {
        match (parent, name) {
            (None, "Contents") => {
                self.contents.push(ObjectEntry::default());
                Some(Scope::Contents)
            }
            (None, "CommonPrefixes") => Some(Scope::CommonPrefixes),
            (Some(Scope::Contents), "Owner") => {
                if let Some(entry) = self.entry() {
                    entry.owner = Some(Owner::default());
                }
                Some(Scope::ContentsOwner)
            }
            _ => None,
        }
    }

    fn leaf(&mut self, parent: Option<Scope>, name: &str, text: &str) -> Result<(), XmlError> {
        match parent {
            None => match name {
                "Name" => self.name = text.trim().to_string(),
                "Prefix" => self.prefix = text.to_string(),
                "Marker" => self.marker = text.to_string(),
                "NextMarker" => self.next_marker = Some(text.to_string()),
                "Delimiter" => self.delimiter = text.to_string(),
                "MaxKeys" => self.max_keys = Some(parse_number(name, text)?),
                "IsTruncated" => self.is_truncated = text.trim().eq_ignore_ascii_case("true"),
                _ => {}
            },
            Some(Scope::Contents) => {
                let Some(entry) = self.entry() else {
                    return Ok(());
                };
                match name {
                    "Key" => entry.key = text.to_string(),
                    "LastModified" => entry.last_modified = from_iso8601utc(text.trim()).ok(),
                    "ETag" => entry.etag = trim_quotes(text),
                    "Size" => entry.size = parse_number(name, text)?,
                    "StorageClass" => entry.storage_class = text.trim().to_string(),
                    _ => {}
                }
            }
            Some(Scope::ContentsOwner) => {
                if let Some(owner) = self.entry().and_then(|e| e.owner.as_mut()) {
                    match name {
                        "ID" => owner.id = text.trim().to_string(),
                        "DisplayName" => owner.display_name = text.trim().to_string(),
                        _ => {}
                    }
                }
            }
            Some(Scope::CommonPrefixes) => {
                if name == "Prefix" {
                    self.common_prefixes.push(text.to_string());
                }
            }
        }
        Ok(())
    }
}

impl FromS3Response for ListBucketResponse {
    fn from_s3response(request: S3Request, response: HttpResponse) -> Result<Self, Error> {
        let parsed = parse_response(
            Service::S3,
            request.operation(),
            response,
            ListBucketHandler::default(),
        )?;
        let body = parsed.body;
        Ok(Self {
            request,
            headers: parsed.headers,
            name: body.name,
            prefix: body.prefix,
            marker: body.marker,
            next_marker: body.next_marker,
            delimiter: body.delimiter,
            max_keys: body.max_keys,
            is_truncated: body.is_truncated,
            contents: Listing::new(body.contents),
            common_prefixes: body.common_prefixes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{ResponseParser, parse};

    const PAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix/>
  <Marker/>
  <MaxKeys>1000</MaxKeys>
  <IsTruncated>true</IsTruncated>
  <Contents>
    <Key>my-image.jpg</Key>
    <LastModified>2009-10-12T17:50:30.000Z</LastModified>
    <ETag>&quot;fba9dede5f27731c9771645a39863328&quot;</ETag>
    <Size>434234</Size>
    <StorageClass>STANDARD</StorageClass>
    <Owner>
      <ID>8a6925ce4a7f21c32aa379004fef</ID>
      <DisplayName>mtd@amazon.com</DisplayName>
    </Owner>
  </Contents>
  <Contents>
    <Key>my-third-image.jpg</Key>
    <LastModified>2009-10-12T17:50:30.000Z</LastModified>
    <ETag>"1b2cf535f27731c974343645a3985328"</ETag>
    <Size>64994</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
</ListBucketResult>"#;

    #[test]
    fn test_contents_and_owner_are_kept_apart() {
        let mut parser = ResponseParser::new(Service::S3, ListBucketHandler::default());
        parse(PAGE.as_bytes(), &mut parser).unwrap();
        assert!(parser.is_successful());
        let (body, _) = parser.into_parts();

        assert_eq!(body.name, "bucket");
        assert_eq!(body.max_keys, Some(1000));
        assert!(body.is_truncated);
        assert_eq!(body.contents.len(), 2);
        let first = &body.contents[0];
        assert_eq!(first.key, "my-image.jpg");
        assert_eq!(first.etag, "fba9dede5f27731c9771645a39863328");
        assert_eq!(first.size, 434234);
        assert!(first.last_modified.is_some());
        let owner = first.owner.as_ref().unwrap();
        assert_eq!(owner.display_name, "mtd@amazon.com");
        assert_eq!(body.contents[1].etag, "1b2cf535f27731c974343645a3985328");
        assert!(body.contents[1].owner.is_none());
    }

    #[test]
    fn test_invalid_size_is_an_error() {
        let doc = "<ListBucketResult><Contents><Key>k</Key><Size>12a</Size></Contents></ListBucketResult>";
        let mut parser = ResponseParser::new(Service::S3, ListBucketHandler::default());
        assert!(matches!(
            parse(doc.as_bytes(), &mut parser),
            Err(XmlError::InvalidNumber { .. })
        ));
    }
}
