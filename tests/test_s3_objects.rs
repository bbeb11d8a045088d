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

use awsrest::error::Error;
use awsrest::response_traits::HasResponseHeaders;
use awsrest::s3::response::{HasBucket, HasObject};
use awsrest::s3::types::S3Api;
use awsrest::signer::sign;
use awsrest::utils::from_http_header_value;
use awsrest_common::mock_transport::{MockResponse, RecordedRequest};
use awsrest_common::test_context::{ACCESS_KEY, SECRET_KEY, TestContext};
use awsrest_common::utils::rand_payload;
use std::io::Read;

/// Recomputes the signature of a recorded REST request without `x-amz-` headers.
fn expected_authorization(request: &RecordedRequest) -> String {
    let sts = format!(
        "{}\n{}\n{}\n{}\n{}",
        request.method,
        request.header("content-md5").unwrap_or_default(),
        request.header("content-type").unwrap_or_default(),
        request.header("date").unwrap(),
        request.path(),
    );
    format!("AWS {}:{}", ACCESS_KEY, sign(SECRET_KEY, &sts))
}

#[test]
fn put_object_is_signed_and_digested() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock.push(
        MockResponse::ok("")
            .header("etag", "\"5d41402abc4b2a76b9719d911017c592\"")
            .header("x-amz-request-id", "318BC8BC148832E5"),
    );

    let resp = s3
        .put_object("photos", "2007/hello world.txt", "hello")
        .build()
        .send()
        .unwrap();
    assert_eq!(resp.bucket(), "photos");
    assert_eq!(resp.object(), "2007/hello world.txt");
    assert_eq!(resp.etag(), "5d41402abc4b2a76b9719d911017c592");
    assert_eq!(resp.request_id(), "318BC8BC148832E5");
    assert!(resp.is_successful());

    let request = ctx.mock.last_request().unwrap();
    assert_eq!(request.method, http::Method::PUT);
    assert_eq!(request.url, "https://s3.example.com/photos/2007/hello%20world.txt");
    assert_eq!(request.body, "hello");
    assert_eq!(request.header("content-md5"), Some("XUFAKrxLKna5cZ2REBfFkg=="));
    assert_eq!(request.header("content-type"), Some("application/octet-stream"));
    assert!(from_http_header_value(request.header("date").unwrap()).is_ok());
    assert_eq!(request.header("authorization"), Some(expected_authorization(&request).as_str()));
}

#[test]
fn get_object_is_readable_while_streaming() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    let payload = rand_payload(4096);
    ctx.mock.push(
        MockResponse::ok(payload.clone())
            .chunk_size(100)
            .header("content-length", "4096")
            .header("etag", "\"abc\"")
            .header("x-amz-meta-color", "blue"),
    );

    let mut resp = s3.get_object("photos", "cat.jpg").build().send().unwrap();
    assert_eq!(resp.content_length(), Some(4096));
    assert_eq!(resp.etag(), "abc");
    assert_eq!(resp.user_metadata().get("color").map(String::as_str), Some("blue"));

    let mut head = [0u8; 10];
    resp.content().read_exact(&mut head).unwrap();
    assert_eq!(&head, &payload.as_bytes()[..10]);
    assert!(!resp.content().is_complete());

    let rest = resp.bytes().unwrap();
    assert_eq!(&rest[..], &payload.as_bytes()[10..]);

    let request = ctx.mock.last_request().unwrap();
    assert_eq!(request.method, http::Method::GET);
    assert_eq!(request.header("authorization"), Some(expected_authorization(&request).as_str()));
}

#[test]
fn get_object_range_and_subresource() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock.push(MockResponse::ok("partial"));

    s3.get_object("photos", "cat.jpg")
        .offset(10)
        .length(20)
        .build()
        .send()
        .unwrap();
    let request = ctx.mock.last_request().unwrap();
    assert_eq!(request.header("range"), Some("bytes=10-29"));
}

#[test]
fn head_object_reports_headers_only() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock.push(
        MockResponse::ok("")
            .header("content-length", "434234")
            .header("content-type", "image/jpeg")
            .header("last-modified", "Sun, 1 Jan 2006 12:00:00 GMT")
            .header("etag", "\"fba9dede5f27731c9771645a39863328\""),
    );

    let resp = s3.head_object("photos", "cat.jpg").build().send().unwrap();
    assert_eq!(resp.size(), 434234);
    assert_eq!(resp.content_type(), "image/jpeg");
    assert_eq!(resp.etag(), "fba9dede5f27731c9771645a39863328");
    assert_eq!(ctx.mock.last_request().unwrap().method, http::Method::HEAD);
}

#[test]
fn missing_key_carries_the_service_error() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock.push(MockResponse::xml(
        404,
        awsrest_common::fixtures::s3_error("NoSuchKey", "The resource you requested does not exist", "4442587FB7D0A2F9"),
    ));

    let err = s3.get_object("photos", "gone.jpg").build().send().unwrap_err();
    assert!(matches!(err, Error::Service { .. }));
    assert_eq!(err.code().as_str(), "NoSuchKey");
    assert_eq!(err.message(), "The resource you requested does not exist");
    assert_eq!(err.request_id(), Some("4442587FB7D0A2F9"));
    assert_eq!(err.error_response().unwrap().status, 404);
}

#[test]
fn invalid_arguments_send_nothing() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();

    let err = s3.get_object("photos", "").build().send().unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    let err = s3.create_bucket("UPPER_case").build().send().unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(ctx.mock.requests().is_empty());
}
