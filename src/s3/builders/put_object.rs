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
use crate::header_constants::{CONTENT_MD5, CONTENT_TYPE, X_AMZ_ACL, X_AMZ_META_PREFIX};
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::s3::builders::check_object_key;
use crate::s3::client::S3Connection;
use crate::s3::response::PutObjectResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::utils::{check_bucket_name, md5sum_hash};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html) S3 API operation.
///
/// The whole object is sent in one request. `Content-MD5` is computed from
/// the data unless one is given.
#[derive(Debug, TypedBuilder)]
pub struct PutObject<'a> {
    #[builder(!default)] // force required
    connection: &'a mut S3Connection,
    #[builder(!default, setter(into))]
    bucket: String,
    #[builder(!default, setter(into))]
    key: String,
    #[builder(!default)]
    data: Bytes,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
    /// Base64 encoded MD5 digest of the data.
    #[builder(default, setter(into, strip_option))]
    content_md5: Option<String>,
    /// Sent as `x-amz-meta-*` headers; the prefix is added when missing.
    #[builder(default, setter(into, strip_option))]
    user_metadata: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    acl: Option<String>,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
}

pub type PutObjectBldr<'a> = PutObjectBuilder<
    'a,
    (
        (&'a mut S3Connection,),
        (String,),
        (String,),
        (Bytes,),
        (),
        (),
        (),
        (),
        (),
    ),
>;

impl S3Api for PutObject<'_> {
    type S3Response = PutObjectResponse;

    fn connection(&mut self) -> &mut S3Connection {
        &mut *self.connection
    }
}

fn add_user_metadata(headers: &mut Multimap, metadata: &Multimap) -> Result<(), ValidationErr> {
    for (key, values) in metadata.iter_all() {
        let name = key.trim().to_lowercase();
        let name = match name.strip_prefix(X_AMZ_META_PREFIX) {
            Some(rest) if !rest.is_empty() => name.clone(),
            Some(_) => return Err(ValidationErr::InvalidUserMetadata(key.clone())),
            None if name.is_empty() => return Err(ValidationErr::InvalidUserMetadata(key.clone())),
            None => format!("{X_AMZ_META_PREFIX}{name}"),
        };
        for value in values {
            headers.add(name.clone(), value.clone());
        }
    }
    Ok(())
}

impl ToS3Request for PutObject<'_> {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, false)?;
        check_object_key(&self.key)?;

        let mut headers = self.extra_headers.clone().unwrap_or_default();
        if let Some(metadata) = &self.user_metadata {
            add_user_metadata(&mut headers, metadata)?;
        }
        if let Some(acl) = &self.acl {
            headers.add(X_AMZ_ACL, acl);
        }
        headers.remove_ignore_case(CONTENT_TYPE);
        headers.add(
            CONTENT_TYPE,
            self.content_type
                .as_deref()
                .unwrap_or("application/octet-stream"),
        );
        headers.remove_ignore_case(CONTENT_MD5);
        headers.add(
            CONTENT_MD5,
            match &self.content_md5 {
                Some(md5) => md5.clone(),
                None => md5sum_hash(&self.data),
            },
        );

        Ok(S3Request::builder()
            .operation(Operation::PutObject)
            .method(Method::PUT)
            .bucket(self.bucket.clone())
            .object(self.key.clone())
            .headers(headers)
            .body(self.data.clone())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_metadata_prefix() {
        let mut metadata = Multimap::new();
        metadata.add("Reviewed-By", "joe");
        metadata.add("x-amz-meta-family", "Muntz");
        let mut headers = Multimap::new();
        add_user_metadata(&mut headers, &metadata).unwrap();
        assert_eq!(headers.get_ignore_case("x-amz-meta-reviewed-by"), vec!["joe"]);
        assert_eq!(headers.get_ignore_case("x-amz-meta-family"), vec!["Muntz"]);

        let mut bad = Multimap::new();
        bad.add("x-amz-meta-", "v");
        assert!(matches!(
            add_user_metadata(&mut headers, &bad),
            Err(ValidationErr::InvalidUserMetadata(_))
        ));
    }
}
