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

use crate::connection::Connection;
use crate::error::{Operation, ValidationErr};
use crate::query::{QueryApi, QueryRequest, ToQueryRequest, queue_resource};
use crate::sqs::client::SqsConnection;
use crate::sqs::response::DeleteQueueResponse;
use typed_builder::TypedBuilder;

/// Argument builder for the `DeleteQueue` action of the queue service.
///
/// `queue_url` is the URL returned by `CreateQueue` or `ListQueues`; only
/// its path is used.
#[derive(Debug, TypedBuilder)]
pub struct DeleteQueue<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SqsConnection,
    #[builder(!default, setter(into))]
    pub(crate) queue_url: String,
}

pub type DeleteQueueBldr<'a> = DeleteQueueBuilder<'a, ((&'a mut SqsConnection,), (String,))>;

impl QueryApi for DeleteQueue<'_> {
    type QueryResponse = DeleteQueueResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for DeleteQueue<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        let resource = queue_resource(&self.queue_url)?;
        Ok(QueryRequest::new(Operation::DeleteQueue).resource(resource))
    }
}
