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

use rand::distr::{Alphanumeric, SampleString};

pub fn rand_bucket_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
}

pub fn rand_object_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}

/// Random printable payload of `size` bytes.
pub fn rand_payload(size: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), size)
}
