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

//! Error definitions shared by all services

use crate::error_response::{ErrorResponse, ServiceErrorCode};
use std::fmt;
use thiserror::Error;

/// Service families served by this crate. Each one has its own error codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    S3,
    Sqs,
    Sdb,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::S3 => write!(f, "s3"),
            Service::Sqs => write!(f, "sqs"),
            Service::Sdb => write!(f, "sdb"),
        }
    }
}

/// The operation a request was issued for. Service errors are tagged with it
/// so a caller can tell a failed `ListBucket` from a failed `DeleteObject`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateBucket,
    DeleteBucket,
    ListAllBuckets,
    ListBucket,
    PutObject,
    GetObject,
    HeadObject,
    DeleteObject,
    DeleteAll,
    CreateQueue,
    DeleteQueue,
    ListQueues,
    SendMessage,
    ReceiveMessage,
    DeleteMessage,
    CreateDomain,
    DeleteDomain,
    ListDomains,
    PutAttributes,
    GetAttributes,
    DeleteAttributes,
    Query,
}

impl Operation {
    pub fn service(&self) -> Service {
        use Operation::*;
        match self {
            CreateBucket | DeleteBucket | ListAllBuckets | ListBucket | PutObject | GetObject
            | HeadObject | DeleteObject | DeleteAll => Service::S3,
            CreateQueue | DeleteQueue | ListQueues | SendMessage | ReceiveMessage
            | DeleteMessage => Service::Sqs,
            CreateDomain | DeleteDomain | ListDomains | PutAttributes | GetAttributes
            | DeleteAttributes | Query => Service::Sdb,
        }
    }

    /// Name of the action as sent on the wire by query style services.
    pub fn as_str(&self) -> &'static str {
        use Operation::*;
        match self {
            CreateBucket => "CreateBucket",
            DeleteBucket => "DeleteBucket",
            ListAllBuckets => "ListAllBuckets",
            ListBucket => "ListBucket",
            PutObject => "PutObject",
            GetObject => "GetObject",
            HeadObject => "HeadObject",
            DeleteObject => "DeleteObject",
            DeleteAll => "DeleteAll",
            CreateQueue => "CreateQueue",
            DeleteQueue => "DeleteQueue",
            ListQueues => "ListQueues",
            SendMessage => "SendMessage",
            ReceiveMessage => "ReceiveMessage",
            DeleteMessage => "DeleteMessage",
            CreateDomain => "CreateDomain",
            DeleteDomain => "DeleteDomain",
            ListDomains => "ListDomains",
            PutAttributes => "PutAttributes",
            GetAttributes => "GetAttributes",
            DeleteAttributes => "DeleteAttributes",
            Query => "Query",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised while a connection is being created, before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("access key id must not be empty")]
    MissingAccessKey,
    #[error("secret key must not be empty")]
    MissingSecretKey,
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("transport initialization failed: {0}")]
    TransportInit(String),
}

/// Raised when request parameters are rejected before they are sent.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),
    #[error("object key cannot be empty")]
    EmptyObjectKey,
    #[error("invalid queue: {0}")]
    InvalidQueue(String),
    #[error("domain name cannot be empty")]
    EmptyDomainName,
    #[error("item name cannot be empty")]
    EmptyItemName,
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("invalid user metadata key {0}")]
    InvalidUserMetadata(String),
    #[error("message of {size} bytes exceeds the limit of {max} bytes")]
    MessageTooLarge { size: usize, max: usize },
}

/// Failures of the transport itself; the text is whatever the HTTP client reported.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("{0}")]
    Transport(String),
    #[error("transfer aborted: {0}")]
    Aborted(#[from] std::io::Error),
}

/// Failures of the streaming XML parser.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("malformed xml: {0}")]
    Malformed(String),
    #[error("document ended before its root element was closed")]
    Truncated,
    #[error("response body contains no xml document")]
    Empty,
    #[error("invalid number <{tag}>{value}</{tag}>")]
    InvalidNumber { tag: String, value: String },
    #[error("read failed while parsing: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(e) => XmlError::Io(std::io::Error::new(e.kind(), e.to_string())),
            other => XmlError::Malformed(other.to_string()),
        }
    }
}

/// Top level error returned by every public operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("{operation} failed: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: NetworkError,
    },

    #[error("{operation} failed: {response}")]
    Service {
        operation: Operation,
        response: ErrorResponse,
    },

    #[error("{operation} returned an unusable response: {source}")]
    Xml {
        operation: Operation,
        #[source]
        source: XmlError,
    },

    #[error("delete of every object failed at key {key}: {source}")]
    DeleteAll {
        key: String,
        #[source]
        source: Box<Error>,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn network(operation: Operation, source: NetworkError) -> Self {
        Error::Network { operation, source }
    }

    pub(crate) fn xml(operation: Operation, source: XmlError) -> Self {
        Error::Xml { operation, source }
    }

    /// The service error response behind this error, if the service sent one.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Service { response, .. } => Some(response),
            Error::DeleteAll { source, .. } => source.error_response(),
            _ => None,
        }
    }

    /// Provider error code, [`ServiceErrorCode::None`] when none was received.
    pub fn code(&self) -> ServiceErrorCode {
        self.error_response()
            .map(|r| r.code.clone())
            .unwrap_or_default()
    }

    /// Human-readable message; the service message when one was received.
    pub fn message(&self) -> String {
        match self.error_response() {
            Some(r) => r.message.clone(),
            None => match self {
                Error::Network { source, .. } => source.to_string(),
                Error::Xml { source, .. } => source.to_string(),
                other => other.to_string(),
            },
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.error_response()
            .map(|r| r.request_id.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Network { operation, .. }
            | Error::Service { operation, .. }
            | Error::Xml { operation, .. } => Some(*operation),
            Error::DeleteAll { .. } => Some(Operation::DeleteAll),
            _ => None,
        }
    }
}
