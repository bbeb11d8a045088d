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

//! Explicitly constructed entry point creating service connections
//!
//! ```no_run
//! use awsrest::creds::Credentials;
//! use awsrest::factory::ClientFactory;
//! use awsrest::s3::types::S3Api;
//!
//! # fn main() -> Result<(), awsrest::error::Error> {
//! let factory = ClientFactory::new();
//! let mut s3 = factory
//!     .s3(Credentials::from_env()?)
//!     .host("localhost")
//!     .port(9000)
//!     .secure(false)
//!     .build()?;
//! let buckets = s3.list_all_buckets().build().send()?;
//! factory.shutdown();
//! # Ok(())
//! # }
//! ```

use crate::connection::{Connection, DEFAULT_REFRESH_THRESHOLD};
use crate::creds::Credentials;
use crate::error::{Error, Service};
use crate::http::Endpoint;
use crate::transport::{ReqwestTransportFactory, TransportConfig, TransportFactory};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

/// User agent sent when the caller adds nothing.
pub const DEFAULT_USER_AGENT: &str = concat!("awsrest/", env!("CARGO_PKG_VERSION"));

/// A connection type of one of the services.
pub trait ServiceConnection: Sized {
    const SERVICE: Service;
    const DEFAULT_HOST: &'static str;

    fn from_connection(connection: Connection) -> Self;
}

/// Creates connections. Everything a connection needs from the process is
/// owned here; connections never reach for global state.
#[derive(Clone, Debug)]
pub struct ClientFactory {
    transport: Arc<dyn TransportFactory>,
}

impl Default for ClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientFactory {
    /// Factory whose connections use the reqwest HTTP client.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransportFactory))
    }

    pub fn with_transport(transport: Arc<dyn TransportFactory>) -> Self {
        log::debug!("client factory initialised with {:?}", transport);
        Self { transport }
    }

    pub fn s3(&self, credentials: Credentials) -> S3ConnectionBuilder {
        ConnectionBuilder::new(Arc::clone(&self.transport), credentials)
    }

    pub fn sqs(&self, credentials: Credentials) -> SqsConnectionBuilder {
        ConnectionBuilder::new(Arc::clone(&self.transport), credentials)
    }

    pub fn sdb(&self, credentials: Credentials) -> SdbConnectionBuilder {
        ConnectionBuilder::new(Arc::clone(&self.transport), credentials)
    }

    /// Consumes the factory. There is no process-wide state to release;
    /// connections already built keep their own transport and keep working.
    pub fn shutdown(self) {
        log::debug!("client factory shut down");
    }
}

pub type S3ConnectionBuilder = ConnectionBuilder<crate::s3::S3Connection>;
pub type SqsConnectionBuilder = ConnectionBuilder<crate::sqs::SqsConnection>;
pub type SdbConnectionBuilder = ConnectionBuilder<crate::sdb::SdbConnection>;

/// Settings of one connection, validated by [`ConnectionBuilder::build`].
#[derive(Debug)]
pub struct ConnectionBuilder<C> {
    transport: Arc<dyn TransportFactory>,
    credentials: Credentials,
    host: Option<String>,
    port: u16,
    secure: bool,
    refresh_threshold: u32,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    _service: PhantomData<fn() -> C>,
}

impl<C: ServiceConnection> ConnectionBuilder<C> {
    fn new(transport: Arc<dyn TransportFactory>, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            host: None,
            port: 0,
            secure: true,
            refresh_threshold: DEFAULT_REFRESH_THRESHOLD,
            user_agent: None,
            timeout: None,
            _service: PhantomData,
        }
    }

    /// Overrides the service's default host name.
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Explicit port; zero uses the scheme's default.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Requests sent over one transport handle before a fresh one is opened.
    /// Zero disables refreshing.
    pub fn refresh_threshold(mut self, threshold: u32) -> Self {
        self.refresh_threshold = threshold;
        self
    }

    /// Appended to [`DEFAULT_USER_AGENT`].
    pub fn user_agent<S: Into<String>>(mut self, suffix: S) -> Self {
        self.user_agent = Some(suffix.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the settings and creates the connection. No request is sent.
    pub fn build(self) -> Result<C, Error> {
        self.credentials.validate()?;
        let endpoint = Endpoint::new(
            self.host.as_deref().unwrap_or(C::DEFAULT_HOST),
            self.port,
            self.secure,
        )?;

        let config = TransportConfig {
            user_agent: match &self.user_agent {
                Some(suffix) if !suffix.is_empty() => format!("{DEFAULT_USER_AGENT} {suffix}"),
                _ => DEFAULT_USER_AGENT.to_string(),
            },
            timeout: self.timeout,
        };
        let transport = self.transport.create(&config)?;
        log::debug!("created {} connection to {}", C::SERVICE, endpoint);

        Ok(C::from_connection(Connection::new(
            C::SERVICE,
            self.credentials,
            endpoint,
            transport,
            self.refresh_threshold,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_build_rejects_empty_credentials() {
        let factory = ClientFactory::new();
        let err = factory.s3(Credentials::new("", "secret")).build().unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingAccessKey)));
        let err = factory.sqs(Credentials::new("access", "")).build().unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingSecretKey)));
    }

    #[test]
    fn test_build_rejects_bad_host() {
        let factory = ClientFactory::new();
        let err = factory
            .sdb(Credentials::new("access", "secret"))
            .host("http://sdb.amazonaws.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_defaults() {
        let factory = ClientFactory::new();
        let conn = factory
            .s3(Credentials::new("access", "secret"))
            .build()
            .unwrap();
        assert_eq!(conn.connection().endpoint().host, "s3.amazonaws.com");
        assert!(conn.connection().endpoint().https);
        assert_eq!(conn.connection().refresh_threshold(), DEFAULT_REFRESH_THRESHOLD);
        factory.shutdown();
    }
}
