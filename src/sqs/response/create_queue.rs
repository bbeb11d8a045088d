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
use crate::impl_has_query_fields;
use crate::query::{FromQueryResponse, QueryRequest};
use crate::response_traits::ResponseHeaders;
use crate::xml::{BodyHandler, ResponseMetadata};

/// Response of
/// [create_queue()](crate::sqs::client::SqsConnection::create_queue)
/// API
#[derive(Clone, Debug)]
pub struct CreateQueueResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
    /// URL of the queue; pass it to every other queue operation.
    pub queue_url: String,
}
impl_has_query_fields!(CreateQueueResponse);

#[derive(Debug, Default)]
struct CreateQueueHandler {
    queue_url: String,
}

impl BodyHandler for CreateQueueHandler {
    type Scope = ();

    fn root(&self) -> &'static str {
        "CreateQueueResponse"
    }

    fn open(&mut self, parent: Option<()>, name: &str) -> Option<()> {
        (parent.is_none() && name == "CreateQueueResult").then_some(())
    }

    fn leaf(&mut self, parent: Option<()>, name: &str, text: &str) -> Result<(), XmlError> {
        if parent.is_some() && name == "QueueUrl" {
            self.queue_url = text.trim().to_string();
        }
        Ok(())
    }
}

impl FromQueryResponse for CreateQueueResponse {
    fn from_query_response(request: QueryRequest, response: HttpResponse) -> Result<Self, Error> {
        let parsed = parse_response(
            Service::Sqs,
            request.operation(),
            response,
            CreateQueueHandler::default(),
        )?;
        Ok(Self {
            headers: parsed.headers,
            metadata: parsed.metadata,
            queue_url: parsed.body.queue_url,
        })
    }
}
