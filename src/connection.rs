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

//! State shared by the connections of all three services
//!
//! A [`Connection`] owns one transport handle and the credentials used to
//! sign every request sent over it. It is used by one thread at a time;
//! hand whole connections between threads, for example through a
//! [`ConnectionPool`](crate::pool::ConnectionPool).

use crate::body_stream::BodyStream;
use crate::creds::Credentials;
use crate::error::{Error, NetworkError, Operation, Service, ValidationErr, XmlError};
use crate::error_response::ErrorResponse;
use crate::http::{Endpoint, HttpRequest, HttpResponse};
use crate::multimap_ext::{Multimap, MultimapExt, canonical_value};
use crate::response_traits::ResponseHeaders;
use crate::transport::Transport;
use crate::xml::{self, BodyHandler, NoBody, ResponseMetadata, ResponseParser, Root};
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use std::fmt;

/// Requests sent over one transport handle before it is replaced.
pub const DEFAULT_REFRESH_THRESHOLD: u32 = 30;

pub struct Connection {
    service: Service,
    credentials: Credentials,
    endpoint: Endpoint,
    transport: Box<dyn Transport>,
    refresh_threshold: u32,
    requests_on_handle: u32,
}

impl Connection {
    /// `refresh_threshold` of zero keeps one handle for the whole lifetime.
    pub(crate) fn new(
        service: Service,
        credentials: Credentials,
        endpoint: Endpoint,
        transport: Box<dyn Transport>,
        refresh_threshold: u32,
    ) -> Self {
        Self {
            service,
            credentials,
            endpoint,
            transport,
            refresh_threshold,
            requests_on_handle: 0,
        }
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn refresh_threshold(&self) -> u32 {
        self.refresh_threshold
    }

    /// Requests issued since the transport handle was last replaced.
    pub fn requests_on_handle(&self) -> u32 {
        self.requests_on_handle
    }

    /// Sends a signed request and returns the response once its status is
    /// known to be below 300.
    ///
    /// Once `refresh_threshold` requests went over the current handle, the
    /// transport is reconnected first and the counter starts again from zero.
    /// Error statuses have their body drained and parsed into an
    /// [`ErrorResponse`].
    pub(crate) fn dispatch(
        &mut self,
        operation: Operation,
        request: HttpRequest,
    ) -> Result<HttpResponse, Error> {
        if self.refresh_threshold > 0 && self.requests_on_handle >= self.refresh_threshold {
            log::debug!(
                "refreshing {} connection to {} after {} requests",
                self.service,
                self.endpoint,
                self.requests_on_handle
            );
            self.transport
                .reconnect()
                .map_err(|e| Error::network(operation, e))?;
            self.requests_on_handle = 0;
        }
        self.requests_on_handle += 1;

        log::debug!(
            "{} {} {}",
            operation,
            request.method,
            request.url.split('?').next().unwrap_or_default()
        );
        let response = self
            .transport
            .execute(request)
            .map_err(|e| Error::network(operation, e))?;
        log::debug!("{} returned {}", operation, response.status);

        if response.status.as_u16() >= 300 {
            return Err(self.service_error(operation, response));
        }
        Ok(response)
    }

    fn service_error(&self, operation: Operation, response: HttpResponse) -> Error {
        let HttpResponse {
            status,
            headers,
            body,
        } = response;
        let mut stream = BodyStream::new(body);
        let error = match stream.drain_to_end() {
            Ok(bytes) => parse_error_document(self.service, &bytes),
            Err(e) => {
                log::debug!("error body of {} unreadable: {}", operation, e);
                ErrorResponse::default()
            }
        };
        Error::Service {
            operation,
            response: error.resolve(self.service, status, &headers),
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("service", &self.service)
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("refresh_threshold", &self.refresh_threshold)
            .field("requests_on_handle", &self.requests_on_handle)
            .finish_non_exhaustive()
    }
}

/// Converts collected request headers into a [`HeaderMap`]. Values are sent
/// exactly as they were signed.
pub(crate) fn to_header_map(headers: &Multimap) -> Result<HeaderMap, ValidationErr> {
    let mut map = HeaderMap::new();
    for (name, values) in headers.sorted_entries() {
        let header = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ValidationErr::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            }
        })?;
        for value in values {
            let value = HeaderValue::from_str(&canonical_value(value)).map_err(|e| ValidationErr::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            map.append(header.clone(), value);
        }
    }
    Ok(map)
}

/// Best effort extraction of an error document. Whatever was read before a
/// parse failure is kept.
pub(crate) fn parse_error_document(service: Service, body: &[u8]) -> ErrorResponse {
    if body.iter().all(u8::is_ascii_whitespace) {
        return ErrorResponse::default();
    }
    let mut parser = ResponseParser::new(service, NoBody);
    if let Err(e) = xml::parse(body, &mut parser) {
        log::debug!("{} error document unreadable: {}", service, e);
    }
    if parser.root() != Root::Error {
        return ErrorResponse::default();
    }
    parser.into_error()
}

/// A success response whose XML body was parsed to its end.
#[derive(Debug)]
pub(crate) struct ParsedResponse<B> {
    pub headers: ResponseHeaders,
    pub body: B,
    pub metadata: ResponseMetadata,
}

/// Feeds a streaming body to `handler` as it arrives.
///
/// The body is released as soon as the document ends. An error document
/// sent with a success status becomes [`Error::Service`]; a body that is
/// not the expected document, or ends early, becomes [`Error::Xml`].
pub(crate) fn parse_response<B: BodyHandler>(
    service: Service,
    operation: Operation,
    response: HttpResponse,
    handler: B,
) -> Result<ParsedResponse<B>, Error> {
    let HttpResponse {
        status,
        headers,
        body,
    } = response;
    let mut scanned = ResponseHeaders::scan(status, &headers);

    let mut stream = BodyStream::new(body);
    let mut parser = ResponseParser::new(service, handler);
    let result = xml::parse(&mut stream, &mut parser);
    stream.close();

    match result {
        Ok(()) => {}
        Err(XmlError::Io(e)) => {
            return Err(Error::network(operation, NetworkError::Aborted(e)));
        }
        Err(e) => return Err(Error::xml(operation, e)),
    }

    match parser.root() {
        Root::Success if parser.is_successful() => {}
        Root::Error => {
            return Err(Error::Service {
                operation,
                response: parser.into_error().resolve(service, error_status(status), &headers),
            });
        }
        Root::Unexpected => {
            return Err(Error::xml(
                operation,
                XmlError::Malformed(format!(
                    "unexpected root element <{}>",
                    parser.root_name()
                )),
            ));
        }
        _ => return Err(Error::xml(operation, XmlError::Truncated)),
    }

    let (body, metadata) = parser.into_parts();
    if scanned.request_id.is_empty() {
        scanned.request_id = metadata.request_id.clone();
    }
    scanned.successful = true;
    Ok(ParsedResponse {
        headers: scanned,
        body,
        metadata,
    })
}

/// An error document under a 2xx status is still an error.
fn error_status(status: StatusCode) -> StatusCode {
    if status.is_success() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        status
    }
}

/// Drains a body nobody reads, so the transport can reuse the handle.
pub(crate) fn discard_body(response: HttpResponse) -> ResponseHeaders {
    let scanned = ResponseHeaders::scan(response.status, &response.headers);
    let mut stream = BodyStream::new(response.body);
    if let Err(e) = stream.drain_to_end() {
        log::debug!("discarding response body failed: {}", e);
    }
    scanned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_response::{S3ErrorCode, ServiceErrorCode};
    use bytes::Bytes;

    #[test]
    fn test_parse_error_document_of_each_service() {
        let s3 = parse_error_document(
            Service::S3,
            b"<Error><Code>NoSuchKey</Code><Message>missing</Message>\
              <Resource>/b/k</Resource><RequestId>4442587FB7D0A2F9</RequestId></Error>",
        );
        assert_eq!(s3.code_text, "NoSuchKey");
        assert_eq!(s3.resource, "/b/k");

        let sqs = parse_error_document(
            Service::Sqs,
            b"<ErrorResponse><Error><Type>Sender</Type><Code>InvalidParameterValue</Code>\
              <Message>bad</Message><Detail/></Error><RequestId>42d59b56</RequestId></ErrorResponse>",
        );
        assert_eq!(sqs.error_type, "Sender");
        assert_eq!(sqs.request_id, "42d59b56");
    }

    #[test]
    fn test_non_xml_error_body_falls_back_to_status() {
        let error = parse_error_document(Service::S3, b"<html>bad gateway</html>");
        assert_eq!(error, ErrorResponse::default());
        let error = error.resolve(Service::S3, StatusCode::BAD_GATEWAY, &HeaderMap::new());
        assert_eq!(error.code, ServiceErrorCode::None);
        assert_eq!(error.message, "HTTP status 502 Bad Gateway");
    }

    #[test]
    fn test_error_document_with_success_status() {
        let response = HttpResponse::from_bytes(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(b"<Error><Code>InternalError</Code><Message>try again</Message></Error>"),
        );
        let err = parse_response(Service::S3, Operation::ListBucket, response, NoBody).unwrap_err();
        assert_eq!(err.code(), ServiceErrorCode::S3(S3ErrorCode::InternalError));
        assert_eq!(err.message(), "try again");
        assert_eq!(err.operation(), Some(Operation::ListBucket));
    }

    #[test]
    fn test_invalid_header_value_is_rejected() {
        let mut headers = Multimap::new();
        headers.insert("x-amz-meta-bad".to_string(), "bell\u{7}value".to_string());
        assert!(matches!(
            to_header_map(&headers),
            Err(ValidationErr::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_header_map_keeps_signing_order() {
        let mut headers = Multimap::new();
        headers.add("x-amz-meta-tag", "two");
        headers.add("X-Amz-Meta-Tag", "one");
        let map = to_header_map(&headers).unwrap();
        let sent: Vec<&str> = map
            .get_all("x-amz-meta-tag")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(sent.join(","), headers.signing_headers().amz["x-amz-meta-tag"]);
    }
}
