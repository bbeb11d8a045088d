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

use crate::canonical::SubResource;
use crate::error::{Operation, ValidationErr};
use crate::header_constants::RANGE;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::s3::builders::check_object_key;
use crate::s3::client::S3Connection;
use crate::s3::response::GetObjectResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::utils::check_bucket_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html) S3 API operation.
///
/// With `subresource` set, the object's ACL, torrent or logging document is
/// fetched instead of its content.
#[derive(Debug, TypedBuilder)]
pub struct GetObject<'a> {
    #[builder(!default)] // force required
    connection: &'a mut S3Connection,
    #[builder(!default, setter(into))]
    bucket: String,
    #[builder(!default, setter(into))]
    key: String,
    /// First byte to return.
    #[builder(default, setter(strip_option))]
    offset: Option<u64>,
    /// Number of bytes to return, starting at `offset`.
    #[builder(default, setter(strip_option))]
    length: Option<u64>,
    #[builder(default, setter(strip_option))]
    subresource: Option<SubResource>,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
}

pub type GetObjectBldr<'a> =
    GetObjectBuilder<'a, ((&'a mut S3Connection,), (String,), (String,), (), (), (), ())>;

impl S3Api for GetObject<'_> {
    type S3Response = GetObjectResponse;

    fn connection(&mut self) -> &mut S3Connection {
        &mut *self.connection
    }
}

/// Returns the `Range` header value, `None` for the whole object.
fn range_header(offset: Option<u64>, length: Option<u64>) -> Result<Option<String>, ValidationErr> {
    let start = offset.unwrap_or(0);
    match length {
        Some(0) => Err(ValidationErr::InvalidHeader {
            name: RANGE.to_string(),
            reason: "length must be greater than zero".into(),
        }),
        Some(len) => {
            let end = start
                .checked_add(len - 1)
                .ok_or_else(|| ValidationErr::InvalidHeader {
                    name: RANGE.to_string(),
                    reason: format!("offset {start} plus length {len} overflows"),
                })?;
            Ok(Some(format!("bytes={start}-{end}")))
        }
        None if start > 0 => Ok(Some(format!("bytes={start}-"))),
        None => Ok(None),
    }
}

impl ToS3Request for GetObject<'_> {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, false)?;
        check_object_key(&self.key)?;

        let mut headers = self.extra_headers.clone().unwrap_or_default();
        if let Some(range) = range_header(self.offset, self.length)? {
            headers.remove_ignore_case(RANGE);
            headers.add(RANGE, range);
        }

        Ok(S3Request::builder()
            .operation(Operation::GetObject)
            .method(Method::GET)
            .bucket(self.bucket.clone())
            .object(self.key.clone())
            .subresource(self.subresource)
            .headers(headers)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_header() {
        assert_eq!(range_header(None, None).unwrap(), None);
        assert_eq!(range_header(Some(10), None).unwrap().as_deref(), Some("bytes=10-"));
        assert_eq!(range_header(None, Some(5)).unwrap().as_deref(), Some("bytes=0-4"));
        assert_eq!(range_header(Some(10), Some(5)).unwrap().as_deref(), Some("bytes=10-14"));
        assert!(range_header(Some(1), Some(0)).is_err());
        assert_eq!(
            range_header(Some(u64::MAX - 4), Some(5)).unwrap().as_deref(),
            Some(format!("bytes={}-{}", u64::MAX - 4, u64::MAX).as_str())
        );
        assert!(matches!(
            range_header(Some(u64::MAX - 1), Some(5)),
            Err(ValidationErr::InvalidHeader { .. })
        ));
    }
}
