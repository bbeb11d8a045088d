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

//! Argument builders for [`S3Api`](crate::s3::types::S3Api) operations

mod create_bucket;
mod delete_all;
mod delete_bucket;
mod delete_object;
mod get_object;
mod head_object;
mod list_all_buckets;
mod list_bucket;
mod put_object;

pub use create_bucket::*;
pub use delete_all::*;
pub use delete_bucket::*;
pub use delete_object::*;
pub use get_object::*;
pub use head_object::*;
pub use list_all_buckets::*;
pub use list_bucket::*;
pub use put_object::*;

use crate::error::ValidationErr;

pub(crate) fn check_object_key(key: &str) -> Result<(), ValidationErr> {
    if key.is_empty() {
        return Err(ValidationErr::EmptyObjectKey);
    }
    Ok(())
}
