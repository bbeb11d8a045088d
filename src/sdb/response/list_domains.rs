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
/// [list_domains()](crate::sdb::client::SdbConnection::list_domains)
/// API
#[derive(Clone, Debug)]
pub struct ListDomainsResponse {
    pub(crate) headers: ResponseHeaders,
    pub(crate) metadata: ResponseMetadata,
    pub domains: Listing<String>,
    /// Present when more domains remain; pass it to the next request.
    pub next_token: Option<String>,
}
impl_has_query_fields!(ListDomainsResponse);

#[derive(Debug, Default)]
struct ListDomainsHandler {
    domains: Vec<String>,
    next_token: Option<String>,
}

impl BodyHandler for ListDomainsHandler {
    type Scope = ();

    fn root(&self) -> &'static str {
        "ListDomainsResponse"
    }

    fn open(&mut self, parent: Option<()>, name: &str) -> Option<()> {
        (parent.is_none() && name == "ListDomainsResult").then_some(())
    }

    fn leaf(&mut self, parent: Option<()>, name: &str, text: &str) -> Result<(), XmlError> {
        if parent.is_none() {
            return Ok(());
        }
        match name {
            "DomainName" => self.domains.push(text.trim().to_string()),
            "NextToken" => {
                let token = text.trim();
                self.next_token = (!token.is_empty()).then(|| token.to_string());
            }
            _ => {}
        }
        Ok(())
    }
}

impl FromQueryResponse for ListDomainsResponse {
    fn from_query_response(request: QueryRequest, response: HttpResponse) -> Result<Self, Error> {
        let parsed = parse_response(
            Service::Sdb,
            request.operation(),
            response,
            ListDomainsHandler::default(),
        )?;
        Ok(Self {
            headers: parsed.headers,
            metadata: parsed.metadata,
            domains: Listing::new(parsed.body.domains),
            next_token: parsed.body.next_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{ResponseParser, parse};

    #[test]
    fn test_domains_token_and_box_usage() {
        let doc = r#"<ListDomainsResponse xmlns="http://sdb.amazonaws.com/doc/2007-11-07">
  <ListDomainsResult>
    <DomainName>Domain1-200706011651</DomainName>
    <DomainName>Domain2-200706011652</DomainName>
    <NextToken>TWV0ZXJpbmdUZXN0RG9tYWluMS0yMDA3MDYwMTE2NTY=</NextToken>
  </ListDomainsResult>
  <ResponseMetadata>
    <RequestId>eb13162f-1b95-4511-8b12-489b86acfd28</RequestId>
    <BoxUsage>0.0000219907</BoxUsage>
  </ResponseMetadata>
</ListDomainsResponse>"#;
        let mut parser = ResponseParser::new(Service::Sdb, ListDomainsHandler::default());
        parse(doc.as_bytes(), &mut parser).unwrap();
        assert!(parser.is_successful());
        let (body, metadata) = parser.into_parts();
        assert_eq!(body.domains, vec!["Domain1-200706011651", "Domain2-200706011652"]);
        assert_eq!(
            body.next_token.as_deref(),
            Some("TWV0ZXJpbmdUZXN0RG9tYWluMS0yMDA3MDYwMTE2NTY=")
        );
        assert_eq!(metadata.request_id, "eb13162f-1b95-4511-8b12-489b86acfd28");
        assert_eq!(metadata.box_usage, "0.0000219907");
    }
}
