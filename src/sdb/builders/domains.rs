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
use crate::sdb::response::{CreateDomainResponse, DeleteDomainResponse, ListDomainsResponse};
use crate::sdb::types::check_domain_name;
use typed_builder::TypedBuilder;

/// Argument builder for the `CreateDomain` action of the domain service.
#[derive(Debug, TypedBuilder)]
pub struct CreateDomain<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SdbConnection,
    #[builder(!default, setter(into))]
    pub(crate) domain: String,
}

pub type CreateDomainBldr<'a> = CreateDomainBuilder<'a, ((&'a mut SdbConnection,), (String,))>;

impl QueryApi for CreateDomain<'_> {
    type QueryResponse = CreateDomainResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for CreateDomain<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        check_domain_name(&self.domain)?;
        Ok(QueryRequest::new(Operation::CreateDomain).param("DomainName", self.domain.as_str()))
    }
}

/// Argument builder for the `DeleteDomain` action of the domain service.
#[derive(Debug, TypedBuilder)]
pub struct DeleteDomain<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SdbConnection,
    #[builder(!default, setter(into))]
    pub(crate) domain: String,
}

pub type DeleteDomainBldr<'a> = DeleteDomainBuilder<'a, ((&'a mut SdbConnection,), (String,))>;

impl QueryApi for DeleteDomain<'_> {
    type QueryResponse = DeleteDomainResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for DeleteDomain<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        check_domain_name(&self.domain)?;
        Ok(QueryRequest::new(Operation::DeleteDomain).param("DomainName", self.domain.as_str()))
    }
}

/// Argument builder for the `ListDomains` action of the domain service.
#[derive(Debug, TypedBuilder)]
pub struct ListDomains<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SdbConnection,
    #[builder(default, setter(strip_option))]
    pub(crate) max_domains: Option<u32>,
    /// Token of the previous page.
    #[builder(default, setter(into, strip_option))]
    pub(crate) next_token: Option<String>,
}

pub type ListDomainsBldr<'a> = ListDomainsBuilder<'a, ((&'a mut SdbConnection,), (), ())>;

impl QueryApi for ListDomains<'_> {
    type QueryResponse = ListDomainsResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for ListDomains<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        Ok(QueryRequest::new(Operation::ListDomains)
            .param_opt("MaxNumberOfDomains", self.max_domains)
            .param_opt("NextToken", self.next_token.as_deref()))
    }
}
