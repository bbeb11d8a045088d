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
use crate::xml::{BodyHandler, ResponseMetadata};

/// Response of
/// [query()](crate::sdb::client::SdbConnection::query)
/// API
#[derive(Clone, Debug)]
pub struct QueryResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
    pub item_names: Listing<String>,
    pub next_token: Option<String>,
}
impl_has_query_fields!(QueryResponse);

#[derive(Debug, Default)]
struct QueryHandler {
    item_names: Vec<String>,
    next_token: Option<String>,
}

impl BodyHandler for QueryHandler {
    type Scope = ();

    fn root(&self) -> &'static str {
        "QueryResponse"
    }

    fn open(&mut self, parent: Option<()>, name: &str) -> Option<()> {
        (parent.is_none() && name == "QueryResult").then_some(())
    }

    fn leaf(&mut self, parent: Option<()>, name: &str, text: &str) -> Result<(), XmlError> {
        if parent.is_none() {
            return Ok(());
        }
        match name {
            "ItemName" => self.item_names.push(text.to_string()),
            "NextToken" => {
                let token = text.trim();
                self.next_token = (!token.is_empty()).then(|| token.to_string());
            }
            _ => {}
        }
        Ok(())
    }
}

impl FromQueryResponse for QueryResponse {
    fn from_query_response(request: QueryRequest, response: HttpResponse) -> Result<Self, Error> {
        let parsed = parse_response(
            Service::Sdb,
            request.operation(),
            response,
            QueryHandler::default(),
        )?;
        Ok(Self {
            headers: parsed.headers,
            metadata: parsed.metadata,
            item_names: Listing::new(parsed.body.item_names),
            next_token: parsed.body.next_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{ResponseParser, parse};

    #[test]
    fn test_item_names_keep_their_spelling() {
        let doc = "<QueryResponse><QueryResult>\
            <ItemName>eID001</ItemName><ItemName> spaced </ItemName>\
            </QueryResult>\
            <ResponseMetadata><RequestId>r</RequestId><BoxUsage>0.0000219907</BoxUsage></ResponseMetadata>\
            </QueryResponse>";
        let mut parser = ResponseParser::new(Service::Sdb, QueryHandler::default());
        parse(doc.as_bytes(), &mut parser).unwrap();
        let (body, metadata) = parser.into_parts();
        assert_eq!(body.item_names, vec!["eID001", " spaced "]);
        assert!(body.next_token.is_none());
        assert_eq!(metadata.box_usage, "0.0000219907");
    }
}
