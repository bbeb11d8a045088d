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
use crate::s3::client::S3Connection;
use crate::s3::response::ListAllBucketsResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`ListBuckets`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html) S3 API operation.
#[derive(Debug, TypedBuilder)]
pub struct ListAllBuckets<'a> {
    #[builder(!default)] // force required
    connection: &'a mut S3Connection,
}

pub type ListAllBucketsBldr<'a> = ListAllBucketsBuilder<'a, ((&'a mut S3Connection,),)>;

impl S3Api for ListAllBuckets<'_> {
    type S3Response = ListAllBucketsResponse;

    fn connection(&mut self) -> &mut S3Connection {
        &mut *self.connection
    }
}

impl ToS3Request for ListAllBuckets<'_> {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        Ok(S3Request::builder()
            .operation(Operation::ListAllBuckets)
            .method(Method::GET)
            .build())
    }
}
