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

use crate::error::{Operation, ValidationErr};
use crate::header_constants::{CONTENT_TYPE, X_AMZ_ACL};
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::s3::client::S3Connection;
use crate::s3::response::CreateBucketResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::utils::check_bucket_name;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`CreateBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Connection::create_bucket`] method.
#[derive(Debug, TypedBuilder)]
pub struct CreateBucket<'a> {
    #[builder(!default)] // force required
    connection: &'a mut S3Connection,
    #[builder(!default, setter(into))]
    bucket: String,
    /// Canned ACL sent as `x-amz-acl`, such as `public-read`.
    #[builder(default, setter(into, strip_option))]
    acl: Option<String>,
    /// Region the bucket is created in; omitted for the default region.
    #[builder(default, setter(into, strip_option))]
    location_constraint: Option<String>,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
}

/// Builder type for [`CreateBucket`] that is returned by [`S3Connection::create_bucket`](crate::s3::client::S3Connection::create_bucket).
pub type CreateBucketBldr<'a> =
    CreateBucketBuilder<'a, ((&'a mut S3Connection,), (String,), (), (), ())>;

impl S3Api for CreateBucket<'_> {
    type S3Response = CreateBucketResponse;

    fn connection(&mut self) -> &mut S3Connection {
        &mut *self.connection
    }
}

impl ToS3Request for CreateBucket<'_> {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let mut headers = self.extra_headers.clone().unwrap_or_default();
        if let Some(acl) = &self.acl {
            headers.add(X_AMZ_ACL, acl);
        }

        let body = match &self.location_constraint {
            Some(region) if !region.is_empty() => {
                headers.add(CONTENT_TYPE, "application/xml");
                Bytes::from(format!(
                    "<CreateBucketConfiguration><LocationConstraint>{region}</LocationConstraint></CreateBucketConfiguration>"
                ))
            }
            _ => Bytes::new(),
        };

        Ok(S3Request::builder()
            .operation(Operation::CreateBucket)
            .method(Method::PUT)
            .bucket(self.bucket.clone())
            .headers(headers)
            .body(body)
            .build())
    }
}
