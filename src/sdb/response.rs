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

//! Responses for domain service operations

mod get_attributes;
mod list_domains;
mod query;

pub use get_attributes::*;
pub use list_domains::*;
pub use query::*;

use crate::impl_from_query_response_metadata_only;
use crate::impl_has_query_fields;
use crate::response_traits::ResponseHeaders;
use crate::xml::ResponseMetadata;

/// Response of
/// [create_domain()](crate::sdb::client::SdbConnection::create_domain)
/// API
#[derive(Clone, Debug)]
pub struct CreateDomainResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
}

/// Response of
/// [delete_domain()](crate::sdb::client::SdbConnection::delete_domain)
/// API
#[derive(Clone, Debug)]
pub struct DeleteDomainResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
}

/// Response of
/// [put_attributes()](crate::sdb::client::SdbConnection::put_attributes)
/// API
#[derive(Clone, Debug)]
pub struct PutAttributesResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
}

/// Response of
/// [delete_attributes()](crate::sdb::client::SdbConnection::delete_attributes)
/// API
#[derive(Clone, Debug)]
pub struct DeleteAttributesResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
}

impl_has_query_fields!(
    CreateDomainResponse,
    DeleteDomainResponse,
    PutAttributesResponse,
    DeleteAttributesResponse,
);
impl_from_query_response_metadata_only!(
    CreateDomainResponse => "CreateDomainResponse",
    DeleteDomainResponse => "DeleteDomainResponse",
    PutAttributesResponse => "PutAttributesResponse",
    DeleteAttributesResponse => "DeleteAttributesResponse",
);
