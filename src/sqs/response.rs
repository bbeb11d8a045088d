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

//! Responses for queue service operations

mod create_queue;
mod list_queues;
mod message;

pub use create_queue::*;
pub use list_queues::*;
pub use message::*;

use crate::impl_from_query_response_metadata_only;
use crate::impl_has_query_fields;
use crate::response_traits::ResponseHeaders;
use crate::xml::ResponseMetadata;

/// Response of
/// [delete_queue()](crate::sqs::client::SqsConnection::delete_queue)
/// API
#[derive(Clone, Debug)]
pub struct DeleteQueueResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
}

/// Response of
/// [delete_message()](crate::sqs::client::SqsConnection::delete_message)
/// API
#[derive(Clone, Debug)]
pub struct DeleteMessageResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
}

impl_has_query_fields!(DeleteQueueResponse, DeleteMessageResponse);
impl_from_query_response_metadata_only!(
    DeleteQueueResponse => "DeleteQueueResponse",
    DeleteMessageResponse => "DeleteMessageResponse",
);
