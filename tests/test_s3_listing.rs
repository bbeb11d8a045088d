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

use awsrest::error::{Error, Operation, XmlError};
use awsrest::error_response::{S3ErrorCode, ServiceErrorCode};
use awsrest::s3::types::{ObjectEntry, S3Api};
use awsrest_common::fixtures::{LIST_ALL_BUCKETS, list_bucket_page, s3_error};
use awsrest_common::mock_transport::MockResponse;
use awsrest_common::test_context::TestContext;

#[test]
fn listing_pages_follow_the_marker() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock
        .push(MockResponse::xml(200, list_bucket_page("photos", &["a", "b"], true, None)))
        .push(MockResponse::xml(200, list_bucket_page("photos", &["c"], false, None)));

    let mut seen = Vec::new();
    let mut marker: Option<String> = None;
    loop {
        let builder = s3.list_bucket("photos").max_keys(2);
        let page = match marker.take() {
            Some(m) => builder.marker(m).build().send().unwrap(),
            None => builder.build().send().unwrap(),
        };
        seen.extend(page.contents.iter().map(|e| e.key.clone()));
        match page.continuation_marker() {
            Some(next) => marker = Some(next.to_string()),
            None => break,
        }
    }
    assert_eq!(seen, vec!["a", "b", "c"]);

    let requests = ctx.mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].query(), "max-keys=2");
    assert_eq!(requests[1].query(), "marker=b&max-keys=2");
    assert_eq!(requests[0].path(), "/photos/");
}

#[test]
fn listing_iteration_exhausts_and_reopens() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock.push(MockResponse::xml(
        200,
        list_bucket_page("photos", &["a", "b"], false, None),
    ));

    let mut page = s3.list_bucket("photos").build().send().unwrap();
    let mut entry = ObjectEntry::default();
    let mut keys = Vec::new();
    page.contents.open();
    while page.contents.next(&mut entry) {
        keys.push(entry.key.clone());
    }
    assert_eq!(keys, vec!["a", "b"]);
    assert!(!page.contents.next(&mut entry));
    assert_eq!(entry.key, "b");
    page.contents.close();
    assert!(!page.contents.next(&mut entry));

    page.contents.open();
    assert!(page.contents.next(&mut entry));
    assert_eq!(entry.key, "a");
    assert_eq!(entry.etag, "fba9dede5f27731c9771645a39863328");
    assert_eq!(entry.owner.as_ref().unwrap().display_name, "webfile");
}

#[test]
fn list_all_buckets_reads_owner_and_buckets() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock.push(MockResponse::xml(200, LIST_ALL_BUCKETS).chunk_size(3));

    let resp = s3.list_all_buckets().build().send().unwrap();
    assert_eq!(resp.owner.id, "bcaf1ffd86f461ca5fb16fd081034f");
    assert_eq!(resp.owner.display_name, "webfile");
    let names: Vec<&str> = resp.buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["quotes", "samples"]);
    assert!(resp.buckets.as_slice()[0].creation_date.is_some());
    assert_eq!(ctx.mock.last_request().unwrap().path(), "/");
}

#[test]
fn truncated_listing_is_an_xml_error() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    let doc = list_bucket_page("photos", &["a", "b"], false, None);
    let cut = doc.find("</Contents>").unwrap() + "</Contents>".len();
    ctx.mock.push(MockResponse::xml(200, doc[..cut].to_string()));

    let err = s3.list_bucket("photos").build().send().unwrap_err();
    assert!(matches!(
        err,
        Error::Xml {
            operation: Operation::ListBucket,
            source: XmlError::Truncated
        }
    ));
}

#[test]
fn error_document_under_success_status() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock
        .push(MockResponse::xml(200, s3_error("InternalError", "We encountered an internal error", "R1")));

    let err = s3.list_bucket("photos").build().send().unwrap_err();
    assert_eq!(err.code(), ServiceErrorCode::S3(S3ErrorCode::InternalError));
    assert_eq!(err.request_id(), Some("R1"));
    assert_eq!(err.error_response().unwrap().status, 500);
}

#[test]
fn delete_all_stops_at_the_first_failure() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    let keys = ["key1", "key2", "key3", "key4", "key5"];
    ctx.mock
        .push(MockResponse::xml(200, list_bucket_page("photos", &keys, false, None)))
        .push(MockResponse::new(204, ""))
        .push(MockResponse::new(204, ""))
        .push(MockResponse::xml(403, s3_error("AccessDenied", "Access Denied", "RID-3")));

    let err = s3.delete_all("photos").build().send().unwrap_err();
    match &err {
        Error::DeleteAll { key, .. } => assert_eq!(key, "key3"),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.code(), ServiceErrorCode::S3(S3ErrorCode::AccessDenied));
    assert_eq!(err.message(), "Access Denied");
    assert_eq!(err.request_id(), Some("RID-3"));

    let deletes: Vec<String> = ctx
        .mock
        .requests()
        .iter()
        .filter(|r| r.method == http::Method::DELETE)
        .map(|r| r.path().to_string())
        .collect();
    assert_eq!(deletes, vec!["/photos/key1", "/photos/key2", "/photos/key3"]);
}

#[test]
fn delete_all_pages_through_the_bucket() {
    let ctx = TestContext::new();
    let mut s3 = ctx.s3();
    ctx.mock
        .push(MockResponse::xml(200, list_bucket_page("photos", &["a"], true, Some("a"))))
        .push(MockResponse::new(204, ""))
        .push(MockResponse::xml(200, list_bucket_page("photos", &["b"], false, None)))
        .push(MockResponse::new(204, ""));

    let resp = s3.delete_all("photos").page_size(1).build().send().unwrap();
    assert_eq!(resp.deleted, vec!["a", "b"]);
    let requests = ctx.mock.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[2].query(), "marker=a&max-keys=1");
    assert_eq!(ctx.mock.pending(), 0);
}
