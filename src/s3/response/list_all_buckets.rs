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

use crate::connection::parse_response;
use crate::error::{Error, Service, XmlError};
use crate::http::HttpResponse;
use crate::impl_has_s3fields;
use crate::response_traits::{Listing, ResponseHeaders};
use crate::s3::types::{BucketInfo, FromS3Response, Owner, S3Request};
use crate::utils::from_iso8601utc;
use crate::xml::BodyHandler;

/// Response of
/// [list_all_buckets()](crate::s3::client::S3Connection::list_all_buckets)
/// API
#[derive(Clone, Debug)]
pub struct ListAllBucketsResponse {
    pub(crate) request: S3Request,
    pub(crate) headers: ResponseHeaders,
    pub owner: Owner,
    pub buckets: Listing<BucketInfo>,
}
impl_has_s3fields!(ListAllBucketsResponse);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Owner,
    Buckets,
    Bucket,
}

#[derive(Debug, Default)]
struct ListAllBucketsHandler {
    owner: Owner,
    buckets: Vec<BucketInfo>,
}

impl BodyHandler for ListAllBucketsHandler {
    type Scope = Scope;

    fn root(&self) -> &'static str {
        "ListAllMyBucketsResult"
    }

    fn open(&mut self, parent: Option<Scope>, name: &str) -> Option<Scope> {
        match (parent, name) {
            (None, "Owner") => Some(Scope::Owner),
            (None, "Buckets") => Some(Scope::Buckets),
            (Some(Scope::Buckets), "Bucket") => {
                self.buckets.push(BucketInfo::default());
                Some(Scope::Bucket)
            }
            _ => None,
        }
    }

    fn leaf(&mut self, parent: Option<Scope>, name: &str, text: &str) -> Result<(), XmlError> {
        match (parent, name) {
            (Some(Scope::Owner), "ID") => self.owner.id = text.trim().to_string(),
            (Some(Scope::Owner), "DisplayName") => self.owner.display_name = text.trim().to_string(),
            (Some(Scope::Bucket), name) => {
                if let Some(bucket) = self.buckets.last_mut() {
                    match name {
                        "Name" => bucket.name = text.trim().to_string(),
                        "CreationDate" => bucket.creation_date = from_iso8601utc(text.trim()).ok(),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl FromS3Response for ListAllBucketsResponse {
    fn from_s3response(request: S3Request, response: HttpResponse) -> Result<Self, Error> {
        let parsed = parse_response(
            Service::S3,
            request.operation(),
            response,
            ListAllBucketsHandler::default(),
        )?;
        Ok(Self {
            request,
            headers: parsed.headers,
            owner: parsed.body.owner,
            buckets: Listing::new(parsed.body.buckets),
        })
    }
}
