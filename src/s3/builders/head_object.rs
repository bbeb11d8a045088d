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
use crate::s3::builders::check_object_key;
use crate::s3::client::S3Connection;
use crate::s3::response::HeadObjectResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::utils::check_bucket_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`HeadObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html) S3 API operation.
#[derive(Debug, TypedBuilder)]
pub struct HeadObject<'a> {
    #[builder(!default)] // force required
    connection: &'a mut S3Connection,
    #[builder(!default, setter(into))]
    bucket: String,
    #[builder(!default, setter(into))]
    key: String,
}

pub type HeadObjectBldr<'a> =
    HeadObjectBuilder<'a, ((&'a mut S3Connection,), (String,), (String,))>;

impl S3Api for HeadObject<'_> {
    type S3Response = HeadObjectResponse;

    fn connection(&mut self) -> &mut S3Connection {
        &mut *self.connection
    }
}

impl ToS3Request for HeadObject<'_> {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, false)?;
        check_object_key(&self.key)?;

        Ok(S3Request::builder()
            .operation(Operation::HeadObject)
            .method(Method::HEAD)
            .bucket(self.bucket.clone())
            .object(self.key.clone())
            .build())
    }
}
