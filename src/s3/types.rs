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

//! Request and listing types of the object storage service

use super::client::S3Connection;
use crate::canonical::SubResource;
use crate::error::{Error, Operation, ValidationErr};
use crate::http::HttpResponse;
use crate::multimap_ext::Multimap;
use crate::utils::{UtcTime, urlencode};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// A REST style request before it is signed
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) operation: Operation,

    #[builder(!default)] // force required
    pub(crate) method: Method,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) subresource: Option<SubResource>,

    /// Path arguments, sent in insertion order.
    #[builder(default)]
    pub(crate) query_params: Vec<(String, String)>,

    #[builder(default)]
    pub(crate) headers: Multimap,

    #[builder(default)]
    pub(crate) body: Bytes,
}

impl S3Request {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Returns the encoded query string: the subresource first, then the
    /// path arguments in the order they were added.
    pub fn query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.query_params.len() + 1);
        if let Some(sub) = self.subresource {
            parts.push(sub.as_str().to_string());
        }
        for (key, value) in &self.query_params {
            parts.push(format!("{}={}", urlencode(key), urlencode(value)));
        }
        parts.join("&")
    }
}

pub trait ToS3Request {
    /// Validates the builder's arguments and returns the request to sign.
    fn to_s3request(&self) -> Result<S3Request, ValidationErr>;
}

pub trait FromS3Response: Sized {
    /// Builds the typed response from a response whose status was below 300.
    ///
    /// Implementations either parse the XML body as it streams in, take
    /// ownership of the body stream, or drain and discard it.
    fn from_s3response(request: S3Request, response: HttpResponse) -> Result<Self, Error>;
}

pub trait S3Api: ToS3Request + Sized {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    fn connection(&mut self) -> &mut S3Connection;

    /// Sends the S3 API request and returns the corresponding typed response.
    ///
    /// Fails with [`Error::Validation`] before anything is sent when the
    /// arguments are rejected, and with [`Error::Service`] when the service
    /// answers with an error status or error document.
    fn send(mut self) -> Result<Self::S3Response, Error> {
        let request = self.to_s3request()?;
        let response = self.connection().execute(&request)?;
        Self::S3Response::from_s3response(request, response)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Owner {
    pub id: String,
    pub display_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// One bucket of a [`ListAllBucketsResponse`](crate::s3::response::ListAllBucketsResponse)
pub struct BucketInfo {
    pub name: String,
    pub creation_date: Option<UtcTime>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// One object of a [`ListBucketResponse`](crate::s3::response::ListBucketResponse)
pub struct ObjectEntry {
    pub key: String,
    pub last_modified: Option<UtcTime>,
    /// ETag without surrounding quotes.
    pub etag: String,
    pub size: u64,
    pub storage_class: String,
    pub owner: Option<Owner>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_keeps_insertion_order() {
        let request = S3Request::builder()
            .operation(Operation::ListBucket)
            .method(Method::GET)
            .bucket(Some("photos".to_string()))
            .query_params(vec![
                ("prefix".to_string(), "2007/march".to_string()),
                ("marker".to_string(), "a b".to_string()),
                ("max-keys".to_string(), "40".to_string()),
            ])
            .build();
        assert_eq!(
            request.query_string(),
            "prefix=2007%2Fmarch&marker=a%20b&max-keys=40"
        );
    }

    #[test]
    fn test_subresource_comes_first() {
        let request = S3Request::builder()
            .operation(Operation::GetObject)
            .method(Method::GET)
            .bucket(Some("photos".to_string()))
            .object(Some("puppy.jpg".to_string()))
            .subresource(Some(SubResource::Acl))
            .build();
        assert_eq!(request.query_string(), "acl");
    }
}
