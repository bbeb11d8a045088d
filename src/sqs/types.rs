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

//! Types of the queue service

use crate::error::ValidationErr;

/// Largest message body the queue service accepts, in bytes.
pub const MAX_MESSAGE_SIZE: usize = 8 * 1024;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A message returned by [`receive_message()`](crate::sqs::client::SqsConnection::receive_message)
pub struct Message {
    pub message_id: String,
    /// Pass to [`delete_message()`](crate::sqs::client::SqsConnection::delete_message).
    pub receipt_handle: String,
    pub md5_of_body: String,
    pub body: String,
}

/// Queue names are 1 to 80 alphanumeric, `-` or `_` characters.
pub(crate) fn check_queue_name(name: &str) -> Result<(), ValidationErr> {
    if name.is_empty() || name.len() > 80 {
        return Err(ValidationErr::InvalidQueue(format!(
            "queue name must be 1 to 80 characters: {name:?}"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ValidationErr::InvalidQueue(format!(
            "queue name {name:?} contains {c:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_queue_name() {
        assert!(check_queue_name("jobs_v2-high").is_ok());
        assert!(check_queue_name("").is_err());
        assert!(check_queue_name("has space").is_err());
        assert!(check_queue_name(&"q".repeat(81)).is_err());
    }
}
