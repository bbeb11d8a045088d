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

//! Responses for [`S3Api`](crate::s3::types::S3Api) operations

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

use crate::response_traits::HasResponseHeaders;
use crate::s3::types::S3Request;

#[macro_export]
/// Implements the `HasS3Fields` and `HasResponseHeaders` traits for the specified types.
macro_rules! impl_has_s3fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::s3::response::HasS3Fields for $ty {
                /// The request that was sent to the S3 API.
                #[inline]
                fn request(&self) -> &$crate::s3::types::S3Request {
                    &self.request
                }
            }

            $crate::impl_has_response_headers!($ty);
        )*
    };
}

pub trait HasS3Fields: HasResponseHeaders {
    fn request(&self) -> &S3Request;
}

/// Returns the bucket name of the response.
pub trait HasBucket: HasS3Fields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request().bucket().unwrap_or_default()
    }
}

/// Returns the object key of the response.
pub trait HasObject: HasS3Fields {
    #[inline]
    fn object(&self) -> &str {
        self.request().object().unwrap_or_default()
    }
}
