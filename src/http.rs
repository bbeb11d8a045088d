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

//! HTTP URL and message types exchanged with a [`Transport`](crate::transport::Transport)

use crate::error::ConfigError;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::fmt;
use std::io::Read;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Host, port and scheme a connection talks to
pub struct Endpoint {
    pub https: bool,
    pub host: String,
    /// Zero means the scheme's default port.
    pub port: u16,
}

impl Endpoint {
    pub fn new<S: Into<String>>(host: S, port: u16, https: bool) -> Result<Self, ConfigError> {
        let host = host.into();
        let host = host.trim().to_string();
        if host.is_empty() {
            return Err(ConfigError::InvalidEndpoint("host must not be empty".into()));
        }
        if host.contains("://") || host.contains('/') || host.contains('?') {
            return Err(ConfigError::InvalidEndpoint(format!(
                "{host}: expected a bare host name"
            )));
        }
        Ok(Self { https, host, port })
    }

    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Returns `scheme://host[:port]`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}",
            if self.https { "https" } else { "http" },
            self.host_header_value()
        )
    }

    /// Builds a full URL from an already encoded path and query string.
    pub fn url(&self, path: &str, query: &str) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: path.to_string(),
            query: query.to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.base_url())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    /// Encoded path, `/` when empty.
    pub path: String,
    /// Encoded query string without the leading `?`.
    pub query: String,
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            write!(f, "{}:{}", self.host, self.port)?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query)?;
        }

        Ok(())
    }
}

/// A fully signed request, ready to be handed to a transport.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Status line and headers of a response whose body may still be in flight.
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Reading blocks until the transport delivers more of the transfer.
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    /// Response with a fully buffered body.
    pub fn from_bytes(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body: Box::new(std::io::Cursor::new(body)),
        }
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_display() {
        let endpoint = Endpoint::new("s3.amazonaws.com", 0, true).unwrap();
        assert_eq!(
            endpoint.url("/bucket/key", "prefix=a%2Fb").to_string(),
            "https://s3.amazonaws.com/bucket/key?prefix=a%2Fb"
        );
        let endpoint = Endpoint::new("localhost", 9000, false).unwrap();
        assert_eq!(endpoint.url("", "").to_string(), "http://localhost:9000/");
        assert_eq!(endpoint.host_header_value(), "localhost:9000");
    }

    #[test]
    fn test_endpoint_rejects_urls() {
        assert!(Endpoint::new("", 0, true).is_err());
        assert!(Endpoint::new("https://s3.amazonaws.com", 0, true).is_err());
        assert!(Endpoint::new("host/path", 0, true).is_err());
    }
}
