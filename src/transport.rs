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

//! The seam between connections and the HTTP client
//!
//! A [`Transport`] owns one underlying connection handle. The default
//! implementation wraps a blocking reqwest client; tests substitute a
//! scripted one through [`TransportFactory`].

use crate::error::{ConfigError, NetworkError};
use crate::http::{HttpRequest, HttpResponse};
use http::Method;
use std::fmt;
use std::time::Duration;

/// Settings handed to a [`TransportFactory`] when a connection is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportConfig {
    pub user_agent: String,
    /// `None` waits indefinitely, as the underlying client allows.
    pub timeout: Option<Duration>,
}

/// Issues signed requests over one connection handle.
pub trait Transport: Send {
    /// Sends the request and returns once the status line and headers have
    /// arrived. The body is read from the returned response as it streams in.
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, NetworkError>;

    /// Discards the current connection handle. The next request opens a
    /// fresh TCP connection.
    fn reconnect(&mut self) -> Result<(), NetworkError>;
}

/// Creates transports for new connections.
pub trait TransportFactory: Send + Sync + fmt::Debug {
    fn create(&self, config: &TransportConfig) -> Result<Box<dyn Transport>, ConfigError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwestTransportFactory;

impl TransportFactory for ReqwestTransportFactory {
    fn create(&self, config: &TransportConfig) -> Result<Box<dyn Transport>, ConfigError> {
        Ok(Box::new(ReqwestTransport::new(config.clone())?))
    }
}

/// Transport backed by [`reqwest::blocking::Client`].
///
/// The blocking client drives its transfers on a runtime thread of its own,
/// so reading a response body blocks the caller until bytes arrive.
pub struct ReqwestTransport {
    config: TransportConfig,
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Result<Self, ConfigError> {
        let client = Self::build_client(&config)
            .map_err(|e| ConfigError::TransportInit(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn build_client(config: &TransportConfig) -> Result<reqwest::blocking::Client, reqwest::Error> {
        let mut builder = reqwest::blocking::Client::builder()
            .no_gzip()
            .pool_max_idle_per_host(1)
            .timeout(config.timeout);
        if !config.user_agent.is_empty() {
            builder = builder.user_agent(config.user_agent.clone());
        }
        builder.build()
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Transport for ReqwestTransport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let send_body = !body.is_empty() || method == Method::PUT || method == Method::POST;
        let mut req = self.client.request(method, url).headers(headers);
        if send_body {
            req = req.body(body.to_vec());
        }

        let resp = req
            .send()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        Ok(HttpResponse {
            status: resp.status(),
            headers: resp.headers().clone(),
            body: Box::new(resp),
        })
    }

    fn reconnect(&mut self) -> Result<(), NetworkError> {
        self.client =
            Self::build_client(&self.config).map_err(|e| NetworkError::Transport(e.to_string()))?;
        Ok(())
    }
}
