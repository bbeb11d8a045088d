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

//! Provider error codes and the error document returned by the services

use crate::error::Service;
use crate::header_constants::X_AMZ_REQUEST_ID;
use http::{HeaderMap, StatusCode};
use std::fmt;
use std::str::FromStr;

/// Declares a provider error code enum. Every enum gets a `NoError` default
/// and an `Unknown` sentinel that unrecognised code strings map to.
macro_rules! error_codes {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            #[default]
            NoError,
            $($variant,)*
            Unknown,
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::NoError => "NoError",
                    $($name::$variant => $text,)*
                    $name::Unknown => "Unknown",
                }
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s.trim() {
                    "" => $name::NoError,
                    $($text => $name::$variant,)*
                    _ => $name::Unknown,
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

error_codes! {
    /// Error codes returned by the object storage service.
    S3ErrorCode {
        AccessDenied => "AccessDenied",
        AccountProblem => "AccountProblem",
        BadDigest => "BadDigest",
        BucketAlreadyExists => "BucketAlreadyExists",
        BucketAlreadyOwnedByYou => "BucketAlreadyOwnedByYou",
        BucketNotEmpty => "BucketNotEmpty",
        EntityTooLarge => "EntityTooLarge",
        IncompleteBody => "IncompleteBody",
        InternalError => "InternalError",
        InvalidAccessKeyId => "InvalidAccessKeyId",
        InvalidArgument => "InvalidArgument",
        InvalidBucketName => "InvalidBucketName",
        InvalidDigest => "InvalidDigest",
        InvalidRange => "InvalidRange",
        InvalidRequest => "InvalidRequest",
        MalformedXML => "MalformedXML",
        MetadataTooLarge => "MetadataTooLarge",
        MethodNotAllowed => "MethodNotAllowed",
        MissingContentLength => "MissingContentLength",
        MissingSecurityHeader => "MissingSecurityHeader",
        NoSuchBucket => "NoSuchBucket",
        NoSuchKey => "NoSuchKey",
        NotImplemented => "NotImplemented",
        NotSignedUp => "NotSignedUp",
        OperationAborted => "OperationAborted",
        PermanentRedirect => "PermanentRedirect",
        PreconditionFailed => "PreconditionFailed",
        Redirect => "Redirect",
        RequestTimeTooSkewed => "RequestTimeTooSkewed",
        RequestTimeout => "RequestTimeout",
        SignatureDoesNotMatch => "SignatureDoesNotMatch",
        SlowDown => "SlowDown",
        TemporaryRedirect => "TemporaryRedirect",
        TooManyBuckets => "TooManyBuckets",
    }
}

error_codes! {
    /// Error codes returned by the queue service.
    SqsErrorCode {
        AccessDenied => "AccessDenied",
        AuthFailure => "AuthFailure",
        InternalError => "InternalError",
        InvalidAccessKeyId => "InvalidAccessKeyId",
        InvalidAction => "InvalidAction",
        InvalidAddress => "InvalidAddress",
        InvalidHttpRequest => "InvalidHttpRequest",
        InvalidMessageContents => "InvalidMessageContents",
        InvalidParameterCombination => "InvalidParameterCombination",
        InvalidParameterValue => "InvalidParameterValue",
        InvalidQueryParameter => "InvalidQueryParameter",
        InvalidRequest => "InvalidRequest",
        InvalidSecurity => "InvalidSecurity",
        MessageTooLong => "MessageTooLong",
        MissingCredentials => "MissingCredentials",
        MissingParameter => "MissingParameter",
        NonExistentQueue => "AWS.SimpleQueueService.NonExistentQueue",
        QueueDeletedRecently => "AWS.SimpleQueueService.QueueDeletedRecently",
        QueueNameExists => "AWS.SimpleQueueService.QueueNameExists",
        ReadCountOutOfRange => "ReadCountOutOfRange",
        RequestExpired => "RequestExpired",
        RequestThrottled => "RequestThrottled",
        ServiceUnavailable => "ServiceUnavailable",
        SignatureDoesNotMatch => "SignatureDoesNotMatch",
    }
}

error_codes! {
    /// Error codes returned by the domain service.
    SdbErrorCode {
        AccessFailure => "AccessFailure",
        AttributeDoesNotExist => "AttributeDoesNotExist",
        AuthFailure => "AuthFailure",
        AuthMissingFailure => "AuthMissingFailure",
        InternalError => "InternalError",
        InvalidAction => "InvalidAction",
        InvalidHttpAuthHeader => "InvalidHTTPAuthHeader",
        InvalidHttpRequest => "InvalidHttpRequest",
        InvalidNextToken => "InvalidNextToken",
        InvalidNumberPredicates => "InvalidNumberPredicates",
        InvalidNumberValueTests => "InvalidNumberValueTests",
        InvalidParameterCombination => "InvalidParameterCombination",
        InvalidParameterValue => "InvalidParameterValue",
        InvalidQueryExpression => "InvalidQueryExpression",
        InvalidResponseGroups => "InvalidResponseGroups",
        InvalidService => "InvalidService",
        InvalidUri => "InvalidURI",
        MissingParameter => "MissingParameter",
        NoSuchDomain => "NoSuchDomain",
        NoSuchVersion => "NoSuchVersion",
        NotYetImplemented => "NotYetImplemented",
        NumberDomainsExceeded => "NumberDomainsExceeded",
        NumberDomainAttributesExceeded => "NumberDomainAttributesExceeded",
        NumberDomainBytesExceeded => "NumberDomainBytesExceeded",
        NumberItemAttributesExceeded => "NumberItemAttributesExceeded",
        RequestTimeout => "RequestTimeout",
        ServiceUnavailable => "ServiceUnavailable",
        SignatureDoesNotMatch => "SignatureDoesNotMatch",
        TooManyRequestedAttributes => "TooManyRequestedAttributes",
        UnsupportedHttpVerb => "UnsupportedHttpVerb",
        UnsupportedNextToken => "UnsupportedNextToken",
    }
}

/// Error code of whichever service answered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ServiceErrorCode {
    /// No error document (or no `<Code>`) was received.
    #[default]
    None,
    S3(S3ErrorCode),
    Sqs(SqsErrorCode),
    Sdb(SdbErrorCode),
}

impl ServiceErrorCode {
    /// Maps a code string through the enumeration of the given service.
    pub fn parse(service: Service, code: &str) -> Self {
        if code.trim().is_empty() {
            return ServiceErrorCode::None;
        }
        // from_str is infallible for all three enums
        match service {
            Service::S3 => ServiceErrorCode::S3(code.parse().unwrap_or_default()),
            Service::Sqs => ServiceErrorCode::Sqs(code.parse().unwrap_or_default()),
            Service::Sdb => ServiceErrorCode::Sdb(code.parse().unwrap_or_default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceErrorCode::None => "NoError",
            ServiceErrorCode::S3(c) => c.as_str(),
            ServiceErrorCode::Sqs(c) => c.as_str(),
            ServiceErrorCode::Sdb(c) => c.as_str(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(
            self,
            ServiceErrorCode::S3(S3ErrorCode::Unknown)
                | ServiceErrorCode::Sqs(SqsErrorCode::Unknown)
                | ServiceErrorCode::Sdb(SdbErrorCode::Unknown)
        )
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Error document returned by a service, or the best effort reconstruction of
/// one when the body was missing or unreadable.
pub struct ErrorResponse {
    pub code: ServiceErrorCode,
    /// The code exactly as the service spelled it.
    pub code_text: String,
    /// `Sender` or `Receiver` for query style services.
    pub error_type: String,
    pub message: String,
    pub request_id: String,
    pub resource: String,
    pub host_id: String,
    pub box_usage: String,
    pub status: u16,
}

impl ErrorResponse {
    /// Records one leaf of an error document. Returns false for tags that
    /// carry nothing of interest.
    pub(crate) fn set_field(&mut self, tag: &str, text: &str) -> bool {
        let slot = match tag {
            "Code" => &mut self.code_text,
            "Type" => &mut self.error_type,
            "Message" => &mut self.message,
            "RequestId" | "RequestID" => &mut self.request_id,
            "Resource" => &mut self.resource,
            "HostId" => &mut self.host_id,
            "BoxUsage" => &mut self.box_usage,
            _ => return false,
        };
        *slot = text.trim().to_string();
        true
    }

    /// Maps the code through the service enumeration and fills the gaps left
    /// by an absent or partial body from the status line and headers.
    pub(crate) fn resolve(mut self, service: Service, status: StatusCode, headers: &HeaderMap) -> Self {
        self.code = ServiceErrorCode::parse(service, &self.code_text);
        self.status = status.as_u16();
        if self.message.is_empty() {
            self.message = match status.canonical_reason() {
                Some(reason) => format!("HTTP status {} {}", status.as_u16(), reason),
                None => format!("HTTP status {}", status.as_u16()),
            };
        }
        if self.request_id.is_empty() {
            if let Some(v) = headers.get(X_AMZ_REQUEST_ID).and_then(|v| v.to_str().ok()) {
                self.request_id = v.to_string();
            }
        }
        self
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code: {}, message: {}, request_id: {}, status: {}",
            if self.code_text.is_empty() {
                self.code.as_str()
            } else {
                &self.code_text
            },
            self.message,
            self.request_id,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map_per_service() {
        assert_eq!(
            ServiceErrorCode::parse(Service::S3, "NoSuchBucket"),
            ServiceErrorCode::S3(S3ErrorCode::NoSuchBucket)
        );
        assert_eq!(
            ServiceErrorCode::parse(Service::Sqs, "AWS.SimpleQueueService.NonExistentQueue"),
            ServiceErrorCode::Sqs(SqsErrorCode::NonExistentQueue)
        );
        assert_eq!(
            ServiceErrorCode::parse(Service::Sdb, "NoSuchDomain"),
            ServiceErrorCode::Sdb(SdbErrorCode::NoSuchDomain)
        );
    }

    #[test]
    fn test_unrecognised_code_maps_to_sentinel() {
        let code = ServiceErrorCode::parse(Service::S3, "SomethingNew");
        assert_eq!(code, ServiceErrorCode::S3(S3ErrorCode::Unknown));
        assert!(code.is_unknown());
        // S3 codes are not valid queue codes
        assert_eq!(
            ServiceErrorCode::parse(Service::Sqs, "NoSuchBucket"),
            ServiceErrorCode::Sqs(SqsErrorCode::Unknown)
        );
        assert_eq!(ServiceErrorCode::parse(Service::Sdb, ""), ServiceErrorCode::None);
    }

    #[test]
    fn test_resolve_falls_back_to_status_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AMZ_REQUEST_ID, "REQ123".parse().unwrap());
        let resolved =
            ErrorResponse::default().resolve(Service::S3, StatusCode::NOT_FOUND, &headers);
        assert_eq!(resolved.code, ServiceErrorCode::None);
        assert_eq!(resolved.message, "HTTP status 404 Not Found");
        assert_eq!(resolved.request_id, "REQ123");
        assert_eq!(resolved.status, 404);
    }
}
