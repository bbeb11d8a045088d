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

use crate::connection::parse_response;
use crate::error::{Error, Service, XmlError};
use crate::http::HttpResponse;
use crate::impl_has_query_fields;
use crate::query::{FromQueryResponse, QueryRequest};
use crate::response_traits::{Listing, ResponseHeaders};
use crate::sdb::types::Attribute;
use crate::xml::{BodyHandler, ResponseMetadata};

/// Response of
/// [get_attributes()](crate::sdb::client::SdbConnection::get_attributes)
/// API
///
/// An attribute with several values appears once per value.
#[derive(Clone, Debug)]
pub struct GetAttributesResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
    pub attributes: Listing<Attribute>,
}
impl_has_query_fields!(GetAttributesResponse);

impl GetAttributesResponse {
    /// Every value stored under `name`, in document order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes
            .iter()
            .filter(move |a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Result,
    Attribute,
}

#[derive(Debug, Default)]
struct GetAttributesHandler {
    attributes: Vec<Attribute>,
}

impl BodyHandler for GetAttributesHandler {
    type Scope = Scope;

    fn root(&self) -> &'static str {
        "GetAttributesResponse"
    }

    fn open(&mut self, parent: Option<Scope>, name: &str) -> Option<Scope> {
        match (parent, name) {
            (None, "GetAttributesResult") => Some(Scope::Result),
            (Some(Scope::Result), "Attribute") => {
                self.attributes.push(Attribute::default());
                Some(Scope::Attribute)
            }
            _ => None,
        }
    }

    fn leaf(&mut self, parent: Option<Scope>, name: &str, text: &str) -> Result<(), XmlError> {
        if parent != Some(Scope::Attribute) {
            return Ok(());
        }
        if let Some(attr) = self.attributes.last_mut() {
            match name {
                "Name" => attr.name = text.to_string(),
                "Value" => attr.value = text.to_string(),
                _ => {}
            }
        }
        Ok(())
    }
}

impl FromQueryResponse for GetAttributesResponse {
    fn from_query_response(request: QueryRequest, response: HttpResponse) -> Result<Self, Error> {
        let parsed = parse_response(
            Service::Sdb,
            request.operation(),
            response,
            GetAttributesHandler::default(),
        )?;
        Ok(Self {
            headers: parsed.headers,
            metadata: parsed.metadata,
            attributes: Listing::new(parsed.body.attributes),
        })
    }
}
