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
use crate::sqs::response::ReceiveMessageResponse;
use typed_builder::TypedBuilder;

/// Argument builder for the `ReceiveMessage` action of the queue service.
#[derive(Debug, TypedBuilder)]
pub struct ReceiveMessage<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SqsConnection,
    #[builder(!default, setter(into))]
    pub(crate) queue_url: String,
    /// At most this many messages are returned; the service caps it at 10.
    #[builder(default, setter(strip_option))]
    pub(crate) max_messages: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub(crate) visibility_timeout: Option<u32>,
}

pub type ReceiveMessageBldr<'a> =
    ReceiveMessageBuilder<'a, ((&'a mut SqsConnection,), (String,), (), ())>;

impl QueryApi for ReceiveMessage<'_> {
    type QueryResponse = ReceiveMessageResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for ReceiveMessage<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        let resource = queue_resource(&self.queue_url)?;
        Ok(QueryRequest::new(Operation::ReceiveMessage)
            .resource(resource)
            .param_opt("MaxNumberOfMessages", self.max_messages)
            .param_opt("VisibilityTimeout", self.visibility_timeout))
    }
}
