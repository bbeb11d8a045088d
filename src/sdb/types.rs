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

//! Types of the domain service

use crate::error::ValidationErr;
use crate::query::QueryRequest;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A name/value pair stored on an item. An item may hold several values
/// under the same name.
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// An attribute written by `PutAttributes`.
///
/// With `replace` set, the value replaces every existing value of the
/// attribute instead of being added next to them.
pub struct ReplaceableAttribute {
    pub name: String,
    pub value: String,
    pub replace: bool,
}

impl ReplaceableAttribute {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V, replace: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            replace,
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V, bool)> for ReplaceableAttribute {
    fn from((name, value, replace): (N, V, bool)) -> Self {
        Self::new(name, value, replace)
    }
}

pub(crate) fn check_domain_name(domain: &str) -> Result<(), ValidationErr> {
    if domain.is_empty() {
        return Err(ValidationErr::EmptyDomainName);
    }
    Ok(())
}

pub(crate) fn check_item_name(item: &str) -> Result<(), ValidationErr> {
    if item.is_empty() {
        return Err(ValidationErr::EmptyItemName);
    }
    Ok(())
}

/// Adds `Attribute.N.Name`, `Attribute.N.Value` and, for replacing writes,
/// `Attribute.N.Replace`, numbering from 0.
pub(crate) fn add_replaceable_attributes(
    mut request: QueryRequest,
    attributes: &[ReplaceableAttribute],
) -> QueryRequest {
    for (i, attr) in attributes.iter().enumerate() {
        request = request
            .param(format!("Attribute.{i}.Name"), attr.name.as_str())
            .param(format!("Attribute.{i}.Value"), attr.value.as_str());
        if attr.replace {
            request = request.param(format!("Attribute.{i}.Replace"), "true");
        }
    }
    request
}

/// Adds `Attribute.N.Name` and `Attribute.N.Value`, numbering from 0.
/// An attribute with an empty value is sent by name only, which selects
/// every value of that attribute.
pub(crate) fn add_attributes(mut request: QueryRequest, attributes: &[Attribute]) -> QueryRequest {
    for (i, attr) in attributes.iter().enumerate() {
        request = request.param(format!("Attribute.{i}.Name"), attr.name.as_str());
        if !attr.value.is_empty() {
            request = request.param(format!("Attribute.{i}.Value"), attr.value.as_str());
        }
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;

    #[test]
    fn test_replaceable_attributes_are_numbered_from_zero() {
        let request = add_replaceable_attributes(
            QueryRequest::new(Operation::PutAttributes),
            &[
                ReplaceableAttribute::new("color", "red", false),
                ("size", "XL", true).into(),
            ],
        );
        let params = request.params();
        assert_eq!(params["Attribute.0.Name"], "color");
        assert_eq!(params["Attribute.0.Value"], "red");
        assert!(!params.contains_key("Attribute.0.Replace"));
        assert_eq!(params["Attribute.1.Name"], "size");
        assert_eq!(params["Attribute.1.Value"], "XL");
        assert_eq!(params["Attribute.1.Replace"], "true");
    }

    #[test]
    fn test_attribute_without_value_is_sent_by_name() {
        let request = add_attributes(
            QueryRequest::new(Operation::DeleteAttributes),
            &[Attribute::new("color", ""), Attribute::new("size", "XL")],
        );
        let params = request.params();
        assert_eq!(params["Attribute.0.Name"], "color");
        assert!(!params.contains_key("Attribute.0.Value"));
        assert_eq!(params["Attribute.1.Value"], "XL");
    }
}
