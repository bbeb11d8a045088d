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

//! Query style requests of the queue and domain services
//!
//! Every parameter of a query style request travels in the query string of
//! a `GET`. The parameter map always carries `Action`, `AWSAccessKeyId`,
//! `SignatureVersion`, `Timestamp` and `Version`; the signature covers
//! every key and value concatenated in key order and is appended last.

use crate::connection::Connection;
use crate::error::{Error, Operation, Service, ValidationErr, XmlError};
use crate::http::{HttpRequest, HttpResponse};
use crate::signer::sign_query;
use crate::utils::{UtcTime, to_query_timestamp, utc_now};
use crate::xml::{BodyHandler, ResponseMetadata};
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::collections::BTreeMap;

/// Signature version of query style requests.
pub const SIGNATURE_VERSION: &str = "1";
/// API version sent to the queue service.
pub const SQS_API_VERSION: &str = "2008-01-01";
/// API version sent to the domain service.
pub const SDB_API_VERSION: &str = "2007-11-07";

pub fn api_version(service: Service) -> &'static str {
    match service {
        Service::Sqs => SQS_API_VERSION,
        Service::Sdb => SDB_API_VERSION,
        // not a query style service; never sent
        Service::S3 => "2006-03-01",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Action specific part of a query style request
pub struct QueryRequest {
    pub(crate) operation: Operation,
    /// Encoded path the request is sent to, such as the path of a queue URL.
    pub(crate) resource: Option<String>,
    pub(crate) params: BTreeMap<String, String>,
}

impl QueryRequest {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            resource: None,
            params: BTreeMap::new(),
        }
    }

    pub fn resource<S: Into<String>>(mut self, resource: S) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn param<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Adds the parameter only when a value is given.
    pub fn param_opt<K: Into<String>, V: ToString>(self, key: K, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v.to_string()),
            None => self,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Returns the complete parameter map as it is signed at `time`.
    pub fn signed_params(&self, service: Service, access_key: &str, time: UtcTime) -> BTreeMap<String, String> {
        let mut params = self.params.clone();
        params.insert("Action".into(), self.operation.as_str().into());
        params.insert("AWSAccessKeyId".into(), access_key.into());
        params.insert("SignatureVersion".into(), SIGNATURE_VERSION.into());
        params.insert("Timestamp".into(), to_query_timestamp(time));
        params.insert("Version".into(), api_version(service).into());
        params
    }
}

pub trait ToQueryRequest {
    /// Validates the builder's arguments and returns the request parameters.
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr>;
}

pub trait FromQueryResponse: Sized {
    /// Builds the typed response from a response whose status was below 300.
    fn from_query_response(request: QueryRequest, response: HttpResponse) -> Result<Self, Error>;
}

pub trait QueryApi: ToQueryRequest + Sized {
    type QueryResponse: FromQueryResponse;

    fn connection(&mut self) -> &mut Connection;

    /// Signs and sends the request and parses its response.
    fn send(mut self) -> Result<Self::QueryResponse, Error> {
        let request = self.to_query_request()?;
        let response = execute(self.connection(), &request, utc_now())?;
        Self::QueryResponse::from_query_response(request, response)
    }
}

/// Builds the URL of a signed query style request.
pub(crate) fn signed_url(connection: &Connection, request: &QueryRequest, time: UtcTime) -> String {
    let params = request.signed_params(
        connection.service(),
        connection.credentials().access_key(),
        time,
    );
    let query = sign_query(&params, connection.credentials());
    let path = request.resource.as_deref().unwrap_or("/");
    connection.endpoint().url(path, &query).to_string()
}

pub(crate) fn execute(
    connection: &mut Connection,
    request: &QueryRequest,
    time: UtcTime,
) -> Result<HttpResponse, Error> {
    let url = signed_url(connection, request, time);
    connection.dispatch(
        request.operation,
        HttpRequest {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        },
    )
}

/// Access to the `ResponseMetadata` of query style responses.
pub trait HasResponseMetadata {
    fn response_metadata(&self) -> &ResponseMetadata;

    /// Machine utilisation charged for the request, as reported by the service.
    #[inline]
    fn box_usage(&self) -> &str {
        &self.response_metadata().box_usage
    }
}

#[macro_export]
/// Implements `HasResponseHeaders` and `HasResponseMetadata` for query style responses.
macro_rules! impl_has_query_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            $crate::impl_has_response_headers!($ty);

            impl $crate::query::HasResponseMetadata for $ty {
                #[inline]
                fn response_metadata(&self) -> &$crate::xml::ResponseMetadata {
                    &self.metadata
                }
            }
        )*
    };
}

/// Implements `FromQueryResponse` for responses whose body carries nothing
/// beyond `ResponseMetadata`.
#[macro_export]
macro_rules! impl_from_query_response_metadata_only {
    ($($ty:ty => $root:literal),* $(,)?) => {
        $(
            impl $crate::query::FromQueryResponse for $ty {
                fn from_query_response(
                    request: $crate::query::QueryRequest,
                    response: $crate::http::HttpResponse,
                ) -> Result<Self, $crate::error::Error> {
                    let parsed = $crate::connection::parse_response(
                        request.operation().service(),
                        request.operation(),
                        response,
                        $crate::query::MetadataOnly::new($root),
                    )?;
                    Ok(Self {
                        headers: parsed.headers,
                        metadata: parsed.metadata,
                    })
                }
            }
        )*
    };
}

/// Body handler for documents that only carry `ResponseMetadata`.
#[derive(Debug)]
pub struct MetadataOnly {
    root: &'static str,
}

impl MetadataOnly {
    pub fn new(root: &'static str) -> Self {
        Self { root }
    }
}

impl BodyHandler for MetadataOnly {
    type Scope = ();

    fn root(&self) -> &'static str {
        self.root
    }

    fn open(&mut self, _parent: Option<()>, _name: &str) -> Option<()> {
        None
    }

    fn leaf(&mut self, _parent: Option<()>, _name: &str, _text: &str) -> Result<(), XmlError> {
        Ok(())
    }
}

/// Returns the request path of a queue URL.
pub(crate) fn queue_resource(queue_url: &str) -> Result<String, ValidationErr> {
    let path = if queue_url.starts_with('/') {
        queue_url.to_string()
    } else {
        url::Url::parse(queue_url)
            .map_err(|e| ValidationErr::InvalidQueue(format!("{queue_url}: {e}")))?
            .path()
            .to_string()
    };
    if path.trim_matches('/').is_empty() {
        return Err(ValidationErr::InvalidQueue(format!(
            "{queue_url}: queue URL has no path"
        )));
    }
    Ok(path)
}
