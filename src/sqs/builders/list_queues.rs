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
use crate::sqs::response::ListQueuesResponse;
use typed_builder::TypedBuilder;

/// Argument builder for the `ListQueues` action of the queue service.
#[derive(Debug, TypedBuilder)]
pub struct ListQueues<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SqsConnection,
    /// Only queues whose name starts with this prefix are listed.
    #[builder(default, setter(into, strip_option))]
    pub(crate) prefix: Option<String>,
}

pub type ListQueuesBldr<'a> = ListQueuesBuilder<'a, ((&'a mut SqsConnection,), ())>;

impl QueryApi for ListQueues<'_> {
    type QueryResponse = ListQueuesResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for ListQueues<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        Ok(QueryRequest::new(Operation::ListQueues)
            .param_opt("QueueNamePrefix", self.prefix.as_deref()))
    }
}
