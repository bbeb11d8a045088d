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

use crate::body_stream::BodyStream;
use crate::error::Error;
use crate::http::HttpResponse;
use crate::impl_has_s3fields;
use crate::response_traits::ResponseHeaders;
use crate::s3::response::{HasBucket, HasObject};
use crate::s3::types::{FromS3Response, S3Request};
use bytes::Bytes;
use std::io::{self, Read};

/// Response of
/// [get_object()](crate::s3::client::S3Connection::get_object)
/// API
///
/// The headers are available as soon as the call returns; the content is
/// read from [`GetObjectResponse::content`] while it is still arriving.
/// Dropping the response closes the transfer.
#[derive(Debug)]
pub struct GetObjectResponse {
    pub(crate) request: S3Request,
    pub(crate) headers: ResponseHeaders,
    pub(crate) body: BodyStream,
}
impl_has_s3fields!(GetObjectResponse);

impl HasBucket for GetObjectResponse {}
impl HasObject for GetObjectResponse {}

impl GetObjectResponse {
    /// The object content as a blocking reader.
    pub fn content(&mut self) -> &mut BodyStream {
        &mut self.body
    }

    pub fn into_content(self) -> BodyStream {
        self.body
    }

    /// Reads the rest of the content into memory.
    pub fn bytes(mut self) -> io::Result<Bytes> {
        let mut buf = Vec::with_capacity(self.headers.content_length.unwrap_or(0) as usize);
        self.body.read_to_end(&mut buf)?;
        Ok(Bytes::from(buf))
    }
}

impl FromS3Response for GetObjectResponse {
    fn from_s3response(request: S3Request, response: HttpResponse) -> Result<Self, Error> {
        Ok(Self {
            request,
            headers: ResponseHeaders::scan(response.status, &response.headers),
            body: BodyStream::new(response.body),
        })
    }
}
