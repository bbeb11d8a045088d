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

use awsrest::creds::Credentials;
use awsrest::error::{ConfigError, Error, NetworkError, Operation};
use awsrest::error_response::ServiceErrorCode;
use awsrest::factory::ClientFactory;
use awsrest::pool::ConnectionPool;
use awsrest::s3::S3Connection;
use awsrest::s3::types::S3Api;
use awsrest_common::fixtures::list_bucket_page;
use awsrest_common::mock_transport::MockResponse;
use awsrest_common::test_context::TestContext;
use awsrest_common::utils::rand_bucket_name;
use std::sync::Arc;

#[test]
fn handle_is_refreshed_after_threshold() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3_with_threshold(3);
    for _ in 0..7 {
        ctx.mock.push(MockResponse::new(204, ""));
    }
    for _ in 0..7 {
        s3.delete_object("photos", "a").build().send().unwrap();
    }

    let fresh: Vec<bool> = ctx.mock.requests().iter().map(|r| r.fresh_handle).collect();
    assert_eq!(fresh, vec![true, false, false, true, false, false, true]);
    assert_eq!(ctx.mock.handles_opened(), 3);
    assert_eq!(s3.connection().requests_on_handle(), 1);
}

#[test]
fn zero_threshold_never_refreshes() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3_with_threshold(0);
    for _ in 0..40 {
        ctx.mock.push(MockResponse::new(204, ""));
        s3.delete_object("photos", "a").build().send().unwrap();
    }
    assert_eq!(ctx.mock.handles_opened(), 1);
}

#[test]
fn transport_failure_is_a_network_error() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock.push_failure("couldn't connect to host");

    let err = s3.list_all_buckets().build().send().unwrap_err();
    match &err {
        Error::Network {
            operation: Operation::ListAllBuckets,
            source: NetworkError::Transport(message),
        } => assert_eq!(message, "couldn't connect to host"),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.code(), ServiceErrorCode::None);
    assert_eq!(err.message(), "couldn't connect to host");
}

#[test]
fn body_aborted_mid_document() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock.push(
        MockResponse::xml(200, list_bucket_page("photos", &["a", "b", "c"], false, None))
            .fail_after(120),
    );

    let err = s3.list_bucket("photos").build().send().unwrap_err();
    assert!(matches!(
        err,
        Error::Network {
            source: NetworkError::Aborted(_),
            ..
        }
    ));
}

#[test]
fn status_only_error_uses_the_status_line() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock
        .push(MockResponse::new(503, "").header("x-amz-request-id", "HDR-REQ"));

    let err = s3.head_object("photos", "a").build().send().unwrap_err();
    assert_eq!(err.code(), ServiceErrorCode::None);
    assert_eq!(err.message(), "HTTP status 503 Service Unavailable");
    assert_eq!(err.request_id(), Some("HDR-REQ"));
    assert_eq!(err.operation(), Some(Operation::HeadObject));
}

#[test]
fn build_checks_settings_before_any_request() {
    let ctx = TestContext::new();
    let err = ctx
        .factory
        .sqs(Credentials::new("AKID", ""))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::MissingSecretKey)));

    let err = ctx
        .factory
        .s3(ctx.credentials.clone())
        .host("http://s3.example.com")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::InvalidEndpoint(_))));
    assert_eq!(ctx.mock.handles_opened(), 0);
    assert!(ctx.mock.requests().is_empty());
}

#[test]
fn plain_http_endpoint_with_port() {
    let ctx = TestContext::new();
    let mut s3 = ctx
        .factory
        .s3(ctx.credentials.clone())
        .host("localhost")
        .port(9000)
        .secure(false)
        .build()
        .unwrap();
    ctx.mock.push(MockResponse::new(204, ""));
    let bucket = rand_bucket_name();
    s3.delete_bucket(bucket.as_str()).build().send().unwrap();

    let request = ctx.mock.last_request().unwrap();
    assert_eq!(request.url, format!("http://localhost:9000/{bucket}/"));
    assert_eq!(request.method, http::Method::DELETE);
}

#[test]
fn pooled_connections_are_reused_across_threads() {
    let ctx = TestContext::new();
    let pool: Arc<ConnectionPool<S3Connection>> = Arc::new(ConnectionPool::new(2));
    for _ in 0..4 {
        ctx.mock.push(MockResponse::new(204, ""));
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let factory: ClientFactory = ctx.factory.clone();
            let credentials = ctx.credentials.clone();
            std::thread::spawn(move || {
                let mut s3 = pool
                    .get(|| factory.s3(credentials).host("s3.example.com").build())
                    .unwrap();
                s3.delete_object("photos", "a").build().send().unwrap();
                pool.put(s3);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ctx.mock.requests().len(), 4);
    assert!(pool.len() <= 2);
    assert!(ctx.mock.handles_opened() <= 4);
}
