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

//! Connection to the queue service
//!
//! ```no_run
//! use awsrest::creds::Credentials;
//! use awsrest::factory::ClientFactory;
//! use awsrest::query::QueryApi;
//!
//! # fn main() -> Result<(), awsrest::error::Error> {
//! let factory = ClientFactory::new();
//! let mut sqs = factory.sqs(Credentials::from_env()?).build()?;
//! let queue = sqs.create_queue("jobs").build().send()?;
//! sqs.send_message(queue.queue_url.as_str(), "hello").build().send()?;
//!
//! let received = sqs.receive_message(queue.queue_url.as_str()).max_messages(10).build().send()?;
//! for message in received.messages.iter() {
//!     println!("{}", message.body);
//! }
//! # Ok(())
//! # }
//! ```

use super::builders::*;
use crate::connection::Connection;
use crate::error::Service;
use crate::factory::ServiceConnection;

/// Default host name of the queue service.
pub const DEFAULT_SQS_HOST: &str = "queue.amazonaws.com";

#[derive(Debug)]
pub struct SqsConnection {
    inner: Connection,
}

impl ServiceConnection for SqsConnection {
    const SERVICE: Service = Service::Sqs;
    const DEFAULT_HOST: &'static str = DEFAULT_SQS_HOST;

    fn from_connection(connection: Connection) -> Self {
        Self { inner: connection }
    }
}

impl SqsConnection {
    pub fn connection(&self) -> &Connection {
        &self.inner
    }

    pub(crate) fn connection_mut(&mut self) -> &mut Connection {
        &mut self.inner
    }

    /// Creates a [`CreateQueue`] request builder. Creating a queue that
    /// already exists returns its URL.
    pub fn create_queue<S: Into<String>>(&mut self, queue_name: S) -> CreateQueueBldr<'_> {
        CreateQueue::builder().connection(self).queue_name(queue_name)
    }

    pub fn delete_queue<S: Into<String>>(&mut self, queue_url: S) -> DeleteQueueBldr<'_> {
        DeleteQueue::builder().connection(self).queue_url(queue_url)
    }

    /// Creates a [`ListQueues`] request builder listing the caller's queue URLs.
    pub fn list_queues(&mut self) -> ListQueuesBldr<'_> {
        ListQueues::builder().connection(self)
    }

    pub fn send_message<S1: Into<String>, S2: Into<String>>(
        &mut self,
        queue_url: S1,
        body: S2,
    ) -> SendMessageBldr<'_> {
        SendMessage::builder()
            .connection(self)
            .queue_url(queue_url)
            .body(body)
    }

    /// Creates a [`ReceiveMessage`] request builder. Received messages stay
    /// hidden from other receivers for the visibility timeout.
    pub fn receive_message<S: Into<String>>(&mut self, queue_url: S) -> ReceiveMessageBldr<'_> {
        ReceiveMessage::builder().connection(self).queue_url(queue_url)
    }

    pub fn delete_message<S1: Into<String>, S2: Into<String>>(
        &mut self,
        queue_url: S1,
        receipt_handle: S2,
    ) -> DeleteMessageBldr<'_> {
        DeleteMessage::builder()
            .connection(self)
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
    }
}
