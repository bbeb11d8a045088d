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

//! Argument builders for [`QueryApi`](crate::query::QueryApi) operations of the queue service

mod create_queue;
mod delete_message;
mod delete_queue;
mod list_queues;
mod receive_message;
mod send_message;

pub use create_queue::*;
pub use delete_message::*;
pub use delete_queue::*;
pub use list_queues::*;
pub use receive_message::*;
pub use send_message::*;
