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

use crate::connection::discard_body;
use crate::error::Error;
use crate::http::HttpResponse;
use crate::impl_has_s3fields;
use crate::response_traits::ResponseHeaders;
use crate::s3::response::HasBucket;
use crate::s3::types::{FromS3Response, S3Request};

/// Response of
/// [create_bucket()](crate::s3::client::S3Connection::create_bucket)
/// API
#[derive(Clone, Debug)]
pub struct CreateBucketResponse {
    pub(crate) request: S3Request,
    pub(crate) headers: ResponseHeaders,
}
impl_has_s3fields!(CreateBucketResponse);

impl HasBucket for CreateBucketResponse {}

impl CreateBucketResponse {
    /// The `Location` header, such as `/bucket`.
    pub fn location(&self) -> &str {
        &self.headers.location
    }
}

impl FromS3Response for CreateBucketResponse {
    fn from_s3response(request: S3Request, response: HttpResponse) -> Result<Self, Error> {
        Ok(Self {
            request,
            headers: discard_body(response),
        })
    }
}
