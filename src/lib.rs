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

//! # awsrest
//!
//! Blocking client for the object storage (S3), queue (SQS) and domain
//! (SimpleDB) services of Amazon and of servers speaking the same REST and
//! query protocols. Requests are signed with HMAC-SHA1 (signature version 2
//! for object storage, version 1 for the query services).
//!
//! Each operation has a request builder, created from a service connection
//! (e.g. [`s3::S3Connection::list_bucket`], [`sqs::SqsConnection::send_message`],
//! [`sdb::SdbConnection::query`]). Object storage builders implement
//! [`s3::types::S3Api`]; queue and domain builders implement
//! [`query::QueryApi`]. Both provide `send()`, which signs the request,
//! sends it and parses the response while it is still streaming in.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use awsrest::creds::Credentials;
//! use awsrest::factory::ClientFactory;
//! use awsrest::response_traits::HasResponseHeaders;
//! use awsrest::s3::types::S3Api;
//!
//! fn main() -> Result<(), awsrest::error::Error> {
//!     let factory = ClientFactory::new();
//!     let mut s3 = factory.s3(Credentials::from_env()?).build()?;
//!
//!     let put = s3.put_object("my-bucket", "hello.txt", "hello").build().send()?;
//!     println!("stored with etag {}", put.etag());
//!
//!     let get = s3.get_object("my-bucket", "hello.txt").build().send()?;
//!     println!("{}", String::from_utf8_lossy(&get.bytes()?));
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//! - Connections are created by an explicit [`factory::ClientFactory`]; a
//!   connection is used by one thread at a time, [`pool::ConnectionPool`]
//!   shares several between threads
//! - Failures are returned as [`error::Error`]; service errors carry the
//!   provider's code, message and request id
//! - Responses are parsed by a push parser ([`xml`]) fed from
//!   [`body_stream::BodyStream`] as chunks arrive

#![allow(clippy::result_large_err)]

pub mod body_stream;
pub mod canonical;
pub mod connection;
pub mod creds;
pub mod error;
pub mod error_response;
pub mod factory;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod pool;
pub mod query;
pub mod response_traits;
pub mod s3;
pub mod sdb;
pub mod signer;
pub mod sqs;
pub mod transport;
pub mod utils;
pub mod xml;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
