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

//! Connection to the object storage service
//!
//! Every operation has a constructor method here returning its request
//! builder. Set the optional arguments, then call `build()` and
//! [`send()`](crate::s3::types::S3Api::send):
//!
//! ```no_run
//! use awsrest::creds::Credentials;
//! use awsrest::factory::ClientFactory;
//! use awsrest::s3::types::S3Api;
//!
//! # fn main() -> Result<(), awsrest::error::Error> {
//! let factory = ClientFactory::new();
//! let mut s3 = factory.s3(Credentials::from_env()?).build()?;
//! let mut listing = s3.list_bucket("photos").prefix("2007/").build().send()?;
//!
//! let mut entry = Default::default();
//! listing.contents.open();
//! while listing.contents.next(&mut entry) {
//!     println!("{} {}", entry.key, entry.size);
//! }
//! listing.contents.close();
//! # Ok(())
//! # }
//! ```

use super::builders::*;
use super::types::S3Request;
use crate::canonical::{resource_path, string_to_sign};
use crate::connection::{Connection, to_header_map};
use crate::error::{Error, Service};
use crate::factory::ServiceConnection;
use crate::header_constants::{ACCEPT, PRAGMA};
use crate::http::{HttpRequest, HttpResponse};
use crate::multimap_ext::MultimapExt;
use crate::signer::sign_rest;
use crate::utils::{UtcTime, utc_now};
use bytes::Bytes;

/// Default host name of the object storage service.
pub const DEFAULT_S3_HOST: &str = "s3.amazonaws.com";

#[derive(Debug)]
pub struct S3Connection {
    inner: Connection,
}

impl ServiceConnection for S3Connection {
    const SERVICE: Service = Service::S3;
    const DEFAULT_HOST: &'static str = DEFAULT_S3_HOST;

    fn from_connection(connection: Connection) -> Self {
        Self { inner: connection }
    }
}

impl S3Connection {
    pub fn connection(&self) -> &Connection {
        &self.inner
    }

    /// Signs `request` as of `time` and returns the HTTP request to send.
    pub(crate) fn build_http_request(
        &self,
        request: &S3Request,
        time: UtcTime,
    ) -> Result<HttpRequest, Error> {
        let mut headers = request.headers.clone();
        headers.stamp_date(time);
        if !headers.contains_ignore_case(ACCEPT) {
            headers.add(ACCEPT, "*/*");
        }
        if !headers.contains_ignore_case(PRAGMA) {
            headers.add(PRAGMA, "");
        }

        let bucket = request.bucket.as_deref();
        let key = request.object.as_deref().unwrap_or_default();
        let sts = string_to_sign(&request.method, &headers, bucket, key, request.subresource);
        log::trace!("string to sign: {:?}", sts);
        sign_rest(&mut headers, self.inner.credentials(), &sts);

        let url = self
            .inner
            .endpoint()
            .url(&resource_path(bucket, key), &request.query_string());
        Ok(HttpRequest {
            method: request.method.clone(),
            url: url.to_string(),
            headers: to_header_map(&headers)?,
            body: request.body.clone(),
        })
    }

    /// Signs and sends a request; statuses of 300 and above become errors.
    pub(crate) fn execute(&mut self, request: &S3Request) -> Result<HttpResponse, Error> {
        let http_request = self.build_http_request(request, utc_now())?;
        self.inner.dispatch(request.operation, http_request)
    }

    /// Creates a [`CreateBucket`] request builder.
    pub fn create_bucket<S: Into<String>>(&mut self, bucket: S) -> CreateBucketBldr<'_> {
        CreateBucket::builder().connection(self).bucket(bucket)
    }

    /// Creates a [`DeleteBucket`] request builder. The bucket must be empty.
    pub fn delete_bucket<S: Into<String>>(&mut self, bucket: S) -> DeleteBucketBldr<'_> {
        DeleteBucket::builder().connection(self).bucket(bucket)
    }

    /// Creates a [`ListAllBuckets`] request builder listing every bucket
    /// owned by the caller.
    pub fn list_all_buckets(&mut self) -> ListAllBucketsBldr<'_> {
        ListAllBuckets::builder().connection(self)
    }

    /// Creates a [`ListBucket`] request builder listing one page of objects.
    pub fn list_bucket<S: Into<String>>(&mut self, bucket: S) -> ListBucketBldr<'_> {
        ListBucket::builder().connection(self).bucket(bucket)
    }

    /// Creates a [`PutObject`] request builder uploading `data` in one request.
    pub fn put_object<S1, S2, B>(&mut self, bucket: S1, key: S2, data: B) -> PutObjectBldr<'_>
    where
        S1: Into<String>,
        S2: Into<String>,
        B: Into<Bytes>,
    {
        PutObject::builder()
            .connection(self)
            .bucket(bucket)
            .key(key)
            .data(data.into())
    }

    /// Creates a [`GetObject`] request builder. The response body streams
    /// in while the caller reads it.
    pub fn get_object<S1: Into<String>, S2: Into<String>>(
        &mut self,
        bucket: S1,
        key: S2,
    ) -> GetObjectBldr<'_> {
        GetObject::builder().connection(self).bucket(bucket).key(key)
    }

    /// Creates a [`HeadObject`] request builder.
    pub fn head_object<S1: Into<String>, S2: Into<String>>(
        &mut self,
        bucket: S1,
        key: S2,
    ) -> HeadObjectBldr<'_> {
        HeadObject::builder().connection(self).bucket(bucket).key(key)
    }

    /// Creates a [`DeleteObject`] request builder.
    pub fn delete_object<S1: Into<String>, S2: Into<String>>(
        &mut self,
        bucket: S1,
        key: S2,
    ) -> DeleteObjectBldr<'_> {
        DeleteObject::builder().connection(self).bucket(bucket).key(key)
    }

    /// Creates a [`DeleteAll`] builder deleting every object of a bucket,
    /// optionally restricted to a prefix.
    pub fn delete_all<S: Into<String>>(&mut self, bucket: S) -> DeleteAllBldr<'_> {
        DeleteAll::builder().connection(self).bucket(bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creds::Credentials;
    use crate::error::Operation;
    use crate::http::Endpoint;
    use crate::transport::{ReqwestTransportFactory, TransportConfig, TransportFactory};
    use crate::utils::from_http_header_value;
    use http::Method;

    fn connection() -> S3Connection {
        let transport = ReqwestTransportFactory
            .create(&TransportConfig::default())
            .unwrap();
        S3Connection::from_connection(Connection::new(
            Service::S3,
            Credentials::new("0PN5J17HBGZHT7JJ3X82", "uV3F3YluFJax1cknvbcGwgjvx4QpvB+leU8dUj2o"),
            Endpoint::new("s3.amazonaws.com", 0, true).unwrap(),
            transport,
            30,
        ))
    }

    #[test]
    fn test_signed_get_request() {
        let conn = connection();
        let request = S3Request::builder()
            .operation(Operation::GetObject)
            .method(Method::GET)
            .bucket(Some("johnsmith".to_string()))
            .object(Some("photos/puppy.jpg".to_string()))
            .build();
        let time = from_http_header_value("Tue, 27 Mar 2007 19:36:42 GMT").unwrap();
        let http = conn.build_http_request(&request, time).unwrap();

        assert_eq!(http.url, "https://s3.amazonaws.com/johnsmith/photos/puppy.jpg");
        assert_eq!(
            http.headers.get("date").unwrap(),
            "Tue, 27 Mar 2007 19:36:42 GMT"
        );
        assert_eq!(http.headers.get("pragma").unwrap(), "");
        assert_eq!(http.headers.get("accept").unwrap(), "*/*");
        let expected = crate::signer::sign(
            "uV3F3YluFJax1cknvbcGwgjvx4QpvB+leU8dUj2o",
            "GET\n\n\nTue, 27 Mar 2007 19:36:42 GMT\n/johnsmith/photos/puppy.jpg",
        );
        assert_eq!(
            http.headers.get("authorization").unwrap().to_str().unwrap(),
            format!("AWS 0PN5J17HBGZHT7JJ3X82:{expected}")
        );
    }
}
