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
use crate::query::{QueryApi, QueryRequest, ToQueryRequest};
use crate::sqs::client::SqsConnection;
use crate::sqs::response::CreateQueueResponse;
use crate::sqs::types::check_queue_name;
use typed_builder::TypedBuilder;

/// Argument builder for the `CreateQueue` action of the queue service.
#[derive(Debug, TypedBuilder)]
pub struct CreateQueue<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SqsConnection,
    #[builder(!default, setter(into))]
    pub(crate) queue_name: String,
    /// Seconds a received message stays hidden, unless overridden on receive.
    #[builder(default, setter(strip_option))]
    pub(crate) default_visibility_timeout: Option<u32>,
}

pub type CreateQueueBldr<'a> = CreateQueueBuilder<'a, ((&'a mut SqsConnection,), (String,), ())>;

impl QueryApi for CreateQueue<'_> {
    type QueryResponse = CreateQueueResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for CreateQueue<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        check_queue_name(&self.queue_name)?;
        Ok(QueryRequest::new(Operation::CreateQueue)
            .param("QueueName", self.queue_name.as_str())
            .param_opt("DefaultVisibilityTimeout", self.default_visibility_timeout))
    }
}
