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
use crate::sdb::response::QueryResponse;
use crate::sdb::types::check_domain_name;
use typed_builder::TypedBuilder;

/// Argument builder for the `Query` action of the domain service.
///
/// Returns the names of the items matching `query_expression`, or of every
/// item when no expression is given.
#[derive(Debug, TypedBuilder)]
pub struct Query<'a> {
    #[builder(!default)] // force required
    pub(crate) connection: &'a mut SdbConnection,
    #[builder(!default, setter(into))]
    pub(crate) domain: String,
    #[builder(default, setter(into, strip_option))]
    pub(crate) query_expression: Option<String>,
    #[builder(default, setter(strip_option))]
    pub(crate) max_items: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    pub(crate) next_token: Option<String>,
}

pub type QueryBldr<'a> = QueryBuilder<'a, ((&'a mut SdbConnection,), (String,), (), (), ())>;

impl QueryApi for Query<'_> {
    type QueryResponse = QueryResponse;

    fn connection(&mut self) -> &mut Connection {
        self.connection.connection_mut()
    }
}

impl ToQueryRequest for Query<'_> {
    fn to_query_request(&self) -> Result<QueryRequest, ValidationErr> {
        check_domain_name(&self.domain)?;
        Ok(QueryRequest::new(Operation::Query)
            .param("DomainName", self.domain.as_str())
            .param_opt("QueryExpression", self.query_expression.as_deref())
            .param_opt("MaxNumberOfItems", self.max_items)
            .param_opt("NextToken", self.next_token.as_deref()))
    }
}
