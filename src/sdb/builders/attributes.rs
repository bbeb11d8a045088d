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

use crate::connection::Connection;
use crate::error::{Operation, ValidationErr};
use crate::query::{QueryApi, QueryRequest, ToQueryRequest};
use crate::sdb::client::SdbConnection;
use crate::sdb::response::{
    DeleteAttributesResponse, GetAttributesResponse, PutAttributesResponse,
};
use crate::sdb::types::{
    Attribute, ReplaceableAttribute, add_attributes, add_replaceable_attributes,
    check_domain_name, check_item_name,
};
use typed_builder::TypedBuilder;

fn item_request(operation: Operation, domain: &str, item: &str) -> Result<QueryRequest, ValidationErr> {
    check_domain_name(domain)?;
    check_item_name(item)?;
    Ok(QueryRequest::new(operation)
        .param("DomainName", domain)
        .param("ItemName", item))
}

/// Argument builder for the `PutAttributes` action of the domain service.
///
/// Creates the item when it does not exist yet.
#[derive(Debug, TypedBuilder)]
pub struct PutAttributes<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SdbConnection,
    #[builder(!default, setter(into))]
    pub(crate) domain: String,
    #[builder(!default, setter(into))]
    pub(crate) item: String,
    #[builder(default)]
    pub(crate) attributes: Vec<ReplaceableAttribute>,
}

pub type PutAttributesBldr<'a> =
    PutAttributesBuilder<'a, ((&'a mut SdbConnection,), (String,), (String,), ())>;

impl QueryApi for PutAttributes<'_> {
    type QueryResponse = PutAttributesResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for PutAttributes<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        let request = item_request(Operation::PutAttributes, &self.domain, &self.item)?;
        Ok(add_replaceable_attributes(request, &self.attributes))
    }
}

/// Argument builder for the `GetAttributes` action of the domain service.
#[derive(Debug, TypedBuilder)]
pub struct GetAttributes<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SdbConnection,
    #[builder(!default, setter(into))]
    pub(crate) domain: String,
    #[builder(!default, setter(into))]
    pub(crate) item: String,
    /// Names of the attributes to return.
    #[builder(default)]
    pub(crate) names: Vec<String>,
}

pub type GetAttributesBldr<'a> =
    GetAttributesBuilder<'a, ((&'a mut SdbConnection,), (String,), (String,), ())>;

impl QueryApi for GetAttributes<'_> {
    type QueryResponse = GetAttributesResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for GetAttributes<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        let mut request = item_request(Operation::GetAttributes, &self.domain, &self.item)?;
        for (i, name) in self.names.iter().enumerate() {
            request = request.param(format!("AttributeName.{i}"), name.as_str());
        }
        Ok(request)
    }
}

/// Argument builder for the `DeleteAttributes` action of the domain service.
#[derive(Debug, TypedBuilder)]
pub struct DeleteAttributes<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SdbConnection,
    #[builder(!default, setter(into))]
    pub(crate) domain: String,
    #[builder(!default, setter(into))]
    pub(crate) item: String,
    #[builder(default)]
    pub(crate) attributes: Vec<Attribute>,
}

pub type DeleteAttributesBldr<'a> =
    DeleteAttributesBuilder<'a, ((&'a mut SdbConnection,), (String,), (String,), ())>;

impl QueryApi for DeleteAttributes<'_> {
    type QueryResponse = DeleteAttributesResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for DeleteAttributes<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        let request = item_request(Operation::DeleteAttributes, &self.domain, &self.item)?;
        Ok(add_attributes(request, &self.attributes))
    }
}
