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

use crate::error::Error;
use crate::s3::builders::{DeleteObject, ListBucket};
use crate::s3::client::S3Connection;
use crate::s3::response::DeleteAllResponse;
use crate::s3::types::S3Api;
use typed_builder::TypedBuilder;

/// Deletes every object of a bucket, or every object under a prefix.
///
/// Pages through the listing with `marker` and deletes one key at a time.
/// The first failed listing or delete stops the operation with
/// [`Error::DeleteAll`], which wraps the failure of that sub-request.
/// Objects deleted before the failure stay deleted.
#[derive(Debug, TypedBuilder)]
pub struct DeleteAll<'a> {
    #[builder(!default)] // force required
    connection: &'a mut S3Connection,
    #[builder(!default, setter(into))]
    bucket: String,
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
    /// `max-keys` of each listing request.
    #[builder(default, setter(strip_option))]
    page_size: Option<u32>,
}

pub type DeleteAllBldr<'a> = DeleteAllBuilder<'a, ((&'a mut S3Connection,), (String,), (), ())>;

impl DeleteAll<'_> {
    pub fn send(self) -> Result<DeleteAllResponse, Error> {
        let DeleteAll {
            connection,
            bucket,
            prefix,
            page_size,
        } = self;

        let mut deleted = Vec::new();
        let mut marker: Option<String> = None;
        loop {
            let page = ListBucket {
                connection: &mut *connection,
                bucket: bucket.clone(),
                prefix: prefix.clone(),
                marker: marker.clone(),
                delimiter: None,
                max_keys: page_size,
            }
            .send()
            .map_err(|e| Error::DeleteAll {
                key: marker.clone().or_else(|| prefix.clone()).unwrap_or_default(),
                source: Box::new(e),
            })?;

            for entry in page.contents.iter() {
                DeleteObject {
                    connection: &mut *connection,
                    bucket: bucket.clone(),
                    key: entry.key.clone(),
                }
                .send()
                .map_err(|e| Error::DeleteAll {
                    key: entry.key.clone(),
                    source: Box::new(e),
                })?;
                log::trace!("deleted {}/{}", bucket, entry.key);
                deleted.push(entry.key.clone());
            }

            if !page.is_truncated {
                break;
            }
            match page.continuation_marker() {
                Some(next) if marker.as_deref() != Some(next) => marker = Some(next.to_string()),
                _ => break,
            }
        }

        log::debug!("deleted {} objects from {}", deleted.len(), bucket);
        Ok(DeleteAllResponse { bucket, deleted })
    }
}
