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

//! Scripted transport recording every request it is given

use awsrest::error::{ConfigError, NetworkError};
use awsrest::http::{HttpRequest, HttpResponse};
use awsrest::transport::{Transport, TransportConfig, TransportFactory};
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::{Arc, Mutex, MutexGuard};

/// A request as the transport saw it.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
    /// True for the first request sent on a newly opened handle.
    pub fresh_handle: bool,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Path of the URL, without the query string.
    pub fn path(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        let rest = rest.find('/').map(|i| &rest[i..]).unwrap_or("/");
        rest.split_once('?').map(|(path, _)| path).unwrap_or(rest)
    }

    pub fn query(&self) -> &str {
        self.url.split_once('?').map(|(_, q)| q).unwrap_or("")
    }

    /// Query arguments in the order they appear, still percent-encoded.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query()
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|p| match p.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (p.to_string(), String::new()),
            })
            .collect()
    }
}

/// A response the transport replays.
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
    /// Largest number of bytes one read of the body returns.
    pub chunk_size: usize,
    /// The body read fails once this many bytes were delivered.
    pub fail_after: Option<usize>,
}

impl MockResponse {
    pub fn new<B: Into<Bytes>>(status: u16, body: B) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            headers: HeaderMap::new(),
            body: body.into(),
            chunk_size: 7,
            fail_after: None,
        }
    }

    pub fn ok<B: Into<Bytes>>(body: B) -> Self {
        Self::new(200, body)
    }

    pub fn xml<B: Into<Bytes>>(status: u16, body: B) -> Self {
        Self::new(status, body).header("content-type", "application/xml")
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.headers.append(HeaderName::from_static(name), value);
        }
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn fail_after(mut self, bytes: usize) -> Self {
        self.fail_after = Some(bytes);
        self
    }
}

/// Hands out a scripted body a few bytes at a time.
#[derive(Debug)]
pub struct ChunkedReader {
    body: Bytes,
    pos: usize,
    chunk_size: usize,
    fail_after: Option<usize>,
}

impl ChunkedReader {
    pub fn new(body: Bytes, chunk_size: usize, fail_after: Option<usize>) -> Self {
        Self {
            body,
            pos: 0,
            chunk_size: chunk_size.max(1),
            fail_after,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut end = self.body.len();
        if let Some(limit) = self.fail_after {
            if self.pos >= limit {
                return Err(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                ));
            }
            end = end.min(limit);
        }
        let n = (end - self.pos).min(self.chunk_size).min(buf.len());
        buf[..n].copy_from_slice(&self.body[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<Result<MockResponse, String>>,
    requests: Vec<RecordedRequest>,
    handles_opened: usize,
    fresh: bool,
}

/// Transport factory whose transports share one script and one log.
///
/// Clones observe the same state, so a test keeps one clone to script
/// responses and inspect requests while the connection owns the other.
#[derive(Clone, Debug, Default)]
pub struct MockTransportFactory {
    state: Arc<Mutex<MockState>>,
}

impl MockTransportFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queues a response for the next request.
    pub fn push(&self, response: MockResponse) -> &Self {
        self.state().responses.push_back(Ok(response));
        self
    }

    /// Queues a transport failure for the next request.
    pub fn push_failure<S: Into<String>>(&self, message: S) -> &Self {
        self.state().responses.push_back(Err(message.into()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state().requests.last().cloned()
    }

    /// Number of transport handles opened, including the first one.
    pub fn handles_opened(&self) -> usize {
        self.state().handles_opened
    }

    pub fn pending(&self) -> usize {
        self.state().responses.len()
    }
}

impl TransportFactory for MockTransportFactory {
    fn create(&self, config: &TransportConfig) -> Result<Box<dyn Transport>, ConfigError> {
        log::debug!("mock transport created for {}", config.user_agent);
        {
            let mut state = self.state();
            state.handles_opened += 1;
            state.fresh = true;
        }
        Ok(Box::new(MockTransport {
            state: Arc::clone(&self.state),
        }))
    }
}

/// One handle of a [`MockTransportFactory`].
#[derive(Debug)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl Transport for MockTransport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let fresh_handle = std::mem::take(&mut state.fresh);
        state.requests.push(RecordedRequest {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body: request.body,
            fresh_handle,
        });
        match state.responses.pop_front() {
            Some(Ok(response)) => Ok(HttpResponse {
                status: response.status,
                headers: response.headers,
                body: Box::new(ChunkedReader::new(
                    response.body,
                    response.chunk_size,
                    response.fail_after,
                )),
            }),
            Some(Err(message)) => Err(NetworkError::Transport(message)),
            None => Err(NetworkError::Transport("no scripted response left".into())),
        }
    }

    fn reconnect(&mut self) -> Result<(), NetworkError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.handles_opened += 1;
        state.fresh = true;
        Ok(())
    }
}
