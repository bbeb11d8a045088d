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
use crate::s3::response::ListBucketResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::utils::check_bucket_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`ListObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjects.html) S3 API operation.
///
/// Returns one page of at most `max_keys` objects. When the response is
/// truncated, send another request with `marker` set to
/// [`ListBucketResponse::continuation_marker`].
#[derive(Debug, TypedBuilder)]
pub struct ListBucket<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut S3Connection,
    #[builder(!default, setter(into))]
    pub(crate) bucket: String,
    #[builder(default, setter(into, strip_option))]
    pub(crate) prefix: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub(crate) marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub(crate) delimiter: Option<String>,
    #[builder(default, setter(strip_option))]
    pub(crate) max_keys: Option<u32>,
}

pub type ListBucketBldr<'a> =
    ListBucketBuilder<'a, ((&'a mut S3Connection,), (String,), (), (), (), ())>;

impl S3Api for ListBucket<'_> {
    type S3Response = ListBucketResponse;

    fn connection(&mut self) -> &mut S3Connection {
        &mut *self.connection
    }
}

impl ToS3Request for ListBucket<'_> {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, false)?;

        let mut query_params = Vec::new();
        if let Some(v) = &self.prefix {
            query_params.push(("prefix".to_string(), v.clone()));
        }
        if let Some(v) = &self.marker {
            query_params.push(("marker".to_string(), v.clone()));
        }
        if let Some(v) = &self.delimiter {
            query_params.push(("delimiter".to_string(), v.clone()));
        }
        if let Some(v) = self.max_keys {
            query_params.push(("max-keys".to_string(), v.to_string()));
        }

        Ok(S3Request::builder()
            .operation(Operation::ListBucket)
            .method(Method::GET)
            .bucket(self.bucket.clone())
            .query_params(query_params)
            .build())
    }
}
