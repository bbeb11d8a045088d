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

use crate::mock_transport::MockTransportFactory;
use awsrest::creds::Credentials;
use awsrest::factory::ClientFactory;
use awsrest::s3::S3Connection;
use awsrest::sdb::SdbConnection;
use awsrest::sqs::SqsConnection;
use std::sync::Arc;

pub const ACCESS_KEY: &str = "0PN5J17HBGZHT7JJ3X82";
pub const SECRET_KEY: &str = "uV3F3YluFJax1cknvbcGwgjvx4QpvB+leU8dUj2o";

/// A client factory wired to a [`MockTransportFactory`].
#[derive(Clone, Debug)]
pub struct TestContext {
    pub factory: ClientFactory,
    pub mock: MockTransportFactory,
    pub credentials: Credentials,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock = MockTransportFactory::new();
        Self {
            factory: ClientFactory::with_transport(Arc::new(mock.clone())),
            mock,
            credentials: Credentials::new(ACCESS_KEY, SECRET_KEY),
        }
    }

    pub fn s3(&self) -> S3Connection {
        self.s3_with_threshold(30)
    }

    pub fn s3_with_threshold(&self, refresh_threshold: u32) -> S3Connection {
        self.factory
            .s3(self.credentials.clone())
            .host("s3.example.com")
            .refresh_threshold(refresh_threshold)
            .build()
            .unwrap()
    }

    pub fn sqs(&self) -> SqsConnection {
        self.factory
            .sqs(self.credentials.clone())
            .host("queue.example.com")
            .build()
            .unwrap()
    }

    pub fn sdb(&self) -> SdbConnection {
        self.factory
            .sdb(self.credentials.clone())
            .host("sdb.example.com")
            .build()
            .unwrap()
    }
}
