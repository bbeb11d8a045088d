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

/// Result of [delete_all()](crate::s3::client::S3Connection::delete_all)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteAllResponse {
    pub bucket: String,
    /// Keys deleted, in the order they were deleted.
    pub deleted: Vec<String>,
}
