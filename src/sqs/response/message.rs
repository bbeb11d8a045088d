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
use crate::response_traits::{Listing, ResponseHeaders};
use crate::sqs::types::Message;
use crate::xml::{BodyHandler, ResponseMetadata};

/// Response of
/// [send_message()](crate::sqs::client::SqsConnection::send_message)
/// API
#[derive(Clone, Debug)]
pub struct SendMessageResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
    pub message_id: String,
    /// MD5 of the body as received by the service, in hex.
    pub md5_of_body: String,
}

/// Response of
/// [receive_message()](crate::sqs::client::SqsConnection::receive_message)
/// API
#[derive(Clone, Debug)]
pub struct ReceiveMessageResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
    /// Empty when the queue had nothing visible.
    pub messages: Listing<Message>,
}
impl_has_query_fields!(SendMessageResponse, ReceiveMessageResponse);

#[derive(Debug, Default)]
struct SendMessageHandler {
    message_id: String,
    md5_of_body: String,
}

impl BodyHandler for SendMessageHandler {
    type Scope = ();

    fn root(&self) -> &'static str {
        "SendMessageResponse"
    }

    fn open(&mut self, parent: Option<()>, name: &str) -> Option<()> {
        (parent.is_none() && name == "SendMessageResult").then_some(())
    }

    fn leaf(&mut self, parent: Option<()>, name: &str, text: &str) -> Result<(), XmlError> {
        if parent.is_some() {
            match name {
                "MessageId" => self.message_id = text.trim().to_string(),
                "MD5OfMessageBody" => self.md5_of_body = text.trim().to_string(),
                _ => {}
            }
        }
        Ok(())
    }
}

impl FromQueryResponse for SendMessageResponse {
    fn from_query_response(request: QueryRequest, response: HttpResponse) -> Result<Self, Error> {
        let parsed = parse_response(
            Service::Sqs,
            request.operation(),
            response,
            SendMessageHandler::default(),
        )?;
        Ok(Self {
            headers: parsed.headers,
            metadata: parsed.metadata,
            message_id: parsed.body.message_id,
            md5_of_body: parsed.body.md5_of_body,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Result,
    Message,
}

#[derive(Debug, Default)]
struct ReceiveMessageHandler {
    messages: Vec<Message>,
}

impl BodyHandler for ReceiveMessageHandler {
    type Scope = Scope;

    fn root(&self) -> &'static str {
        "ReceiveMessageResponse"
    }

    fn open(&mut self, parent: Option<Scope>, name: &str) -> Option<Scope> {
        match (parent, name) {
            (None, "ReceiveMessageResult") => Some(Scope::Result),
            (Some(Scope::Result), "Message") => {
                self.messages.push(Message::default());
                Some(Scope::Message)
            }
            _ => None,
        }
    }

    fn leaf(&mut self, parent: Option<Scope>, name: &str, text: &str) -> Result<(), XmlError> {
        if parent != Some(Scope::Message) {
            return Ok(());
        }
        let Some(message) = self.messages.last_mut() else {
            return Ok(());
        };
        match name {
            "MessageId" => message.message_id = text.trim().to_string(),
            "ReceiptHandle" => message.receipt_handle = text.trim().to_string(),
            "MD5OfBody" => message.md5_of_body = text.trim().to_string(),
            // whitespace is part of the message
            "Body" => message.body = text.to_string(),
            _ => {}
        }
        Ok(())
    }
}

impl FromQueryResponse for ReceiveMessageResponse {
    fn from_query_response(request: QueryRequest, response: HttpResponse) -> Result<Self, Error> {
        let parsed = parse_response(
            Service::Sqs,
            request.operation(),
            response,
            ReceiveMessageHandler::default(),
        )?;
        Ok(Self {
            headers: parsed.headers,
            metadata: parsed.metadata,
            messages: Listing::new(parsed.body.messages),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{ResponseParser, parse};

    #[test]
    fn test_received_messages() {
        let doc = r#"<ReceiveMessageResponse>
  <ReceiveMessageResult>
    <Message>
      <MessageId>5fea7756-0ea4-451a-a703-a558b933e274</MessageId>
      <ReceiptHandle>MbZj6wDWli+JvwwJaBV+3dcjk2YW2vA3+STFFljTM8tJJg6HRG6PYSasuWXPJB+Cw</ReceiptHandle>
      <MD5OfBody>fafb00f5732ab283681e124bf8747ed1</MD5OfBody>
      <Body>  This is a test message </Body>
    </Message>
    <Message>
      <MessageId>second</MessageId>
      <ReceiptHandle>rh2</ReceiptHandle>
      <Body>&lt;b&gt;</Body>
    </Message>
  </ReceiveMessageResult>
  <ResponseMetadata><RequestId>b6633655-283d-45b4-aee4-4e84e0ae6afa</RequestId></ResponseMetadata>
</ReceiveMessageResponse>"#;
        let mut parser = ResponseParser::new(Service::Sqs, ReceiveMessageHandler::default());
        parse(doc.as_bytes(), &mut parser).unwrap();
        assert!(parser.is_successful());
        let (body, metadata) = parser.into_parts();
        assert_eq!(body.messages.len(), 2);
        assert_eq!(body.messages[0].message_id, "5fea7756-0ea4-451a-a703-a558b933e274");
        assert_eq!(body.messages[0].md5_of_body, "fafb00f5732ab283681e124bf8747ed1");
        assert_eq!(body.messages[0].body, "  This is a test message ");
        assert_eq!(body.messages[1].receipt_handle, "rh2");
        assert_eq!(body.messages[1].body, "<b>");
        assert_eq!(metadata.request_id, "b6633655-283d-45b4-aee4-4e84e0ae6afa");
    }

    #[test]
    fn test_sent_message_digest() {
        let doc = "<SendMessageResponse><SendMessageResult>\
            <MD5OfMessageBody>fafb00f5732ab283681e124bf8747ed1</MD5OfMessageBody>\
            <MessageId>id-1</MessageId>\
            </SendMessageResult></SendMessageResponse>";
        let mut parser = ResponseParser::new(Service::Sqs, SendMessageHandler::default());
        parse(doc.as_bytes(), &mut parser).unwrap();
        let (body, _) = parser.into_parts();
        assert_eq!(body.message_id, "id-1");
        assert_eq!(body.md5_of_body, "fafb00f5732ab283681e124bf8747ed1");
    }
}
