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

//! Header names used when building and scanning requests

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const DATE: &str = "Date";
pub const ETAG: &str = "ETag";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const LOCATION: &str = "Location";
pub const RANGE: &str = "Range";
pub const ACCEPT: &str = "Accept";
pub const PRAGMA: &str = "Pragma";

/// Prefix of provider headers that take part in signing.
pub const X_AMZ_PREFIX: &str = "x-amz-";
/// Prefix of user metadata headers.
pub const X_AMZ_META_PREFIX: &str = "x-amz-meta-";

pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_REQUEST_ID: &str = "x-amz-request-id";
pub const X_AMZ_ID_2: &str = "x-amz-id-2";
pub const X_AMZ_ACL: &str = "x-amz-acl";
