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

//! Push-style XML parsing of response bodies
//!
//! [`parse`] scans a body incrementally and reports start tags, character
//! data and end tags to an [`XmlHandler`], using local names only.
//! [`ResponseParser`] is the handler every operation shares: the first tag
//! decides whether the document is a success body or an error document,
//! and a stack of typed frames tells an operation's [`BodyHandler`] which
//! container a leaf belongs to.

use crate::error::{Service, XmlError};
use crate::error_response::ErrorResponse;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fmt;
use std::io::BufRead;

/// Root elements of error documents: `Error` for object storage,
/// `ErrorResponse` for the queue service and `Response` for the domain service.
pub const ERROR_ROOTS: [&str; 3] = ["Error", "ErrorResponse", "Response"];

/// Receives the events of one document.
pub trait XmlHandler {
    fn start_element(&mut self, name: &str) -> Result<(), XmlError>;

    /// Character data, possibly split over several calls.
    fn characters(&mut self, text: &str) -> Result<(), XmlError>;

    fn end_element(&mut self, name: &str) -> Result<(), XmlError>;

    /// Called once the root element has been closed and the input ended.
    fn end_document(&mut self) -> Result<(), XmlError> {
        Ok(())
    }
}

fn as_utf8(name: &[u8]) -> Result<&str, XmlError> {
    std::str::from_utf8(name).map_err(|e| XmlError::Malformed(e.to_string()))
}

/// Drives `handler` with the events of the document read from `source`.
///
/// The input is pulled as the parser needs it, so events are delivered
/// while the rest of the body is still in flight. Input that ends inside
/// the root element yields [`XmlError::Truncated`]; input without any
/// element yields [`XmlError::Empty`].
pub fn parse<R: BufRead, H: XmlHandler + ?Sized>(source: R, handler: &mut H) -> Result<(), XmlError> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                seen_root = true;
                handler.start_element(as_utf8(e.local_name().as_ref())?)?;
            }
            Event::Empty(e) => {
                seen_root = true;
                let name = e.local_name();
                let name = as_utf8(name.as_ref())?;
                handler.start_element(name)?;
                handler.end_element(name)?;
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                handler.end_element(as_utf8(e.local_name().as_ref())?)?;
            }
            Event::Text(e) => {
                if depth > 0 {
                    let text = e.unescape()?;
                    handler.characters(&text)?;
                }
            }
            Event::CData(e) => {
                if depth > 0 {
                    handler.characters(as_utf8(&e)?)?;
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions
            _ => {}
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(XmlError::Truncated);
    }
    if !seen_root {
        return Err(XmlError::Empty);
    }
    handler.end_document()
}

/// Fills an operation's response from the leaves of a success body.
///
/// Containers are described by `Scope`, so a leaf name reused under
/// different parents (such as `DisplayName` below `Owner`) is told apart by
/// the scope it is reported with rather than by its name.
pub trait BodyHandler {
    type Scope: Copy + Eq + fmt::Debug;

    /// Local name of the root element of a success body.
    fn root(&self) -> &'static str;

    /// Called for each start tag below the root. `parent` is the innermost
    /// open container, `None` directly below the root. Returns the scope the
    /// element opens, or `None` when it is a leaf.
    fn open(&mut self, parent: Option<Self::Scope>, name: &str) -> Option<Self::Scope>;

    /// Called with the complete text of a leaf when its end tag is seen.
    fn leaf(&mut self, parent: Option<Self::Scope>, name: &str, text: &str) -> Result<(), XmlError>;

    /// Called when a container opened by [`BodyHandler::open`] ends.
    fn close(&mut self, _scope: Self::Scope) {}
}

/// Handler for bodies that are only inspected for an error document.
#[derive(Debug, Default)]
pub struct NoBody;

impl BodyHandler for NoBody {
    type Scope = ();

    fn root(&self) -> &'static str {
        ""
    }

    fn open(&mut self, _parent: Option<()>, _name: &str) -> Option<()> {
        None
    }

    fn leaf(&mut self, _parent: Option<()>, _name: &str, _text: &str) -> Result<(), XmlError> {
        Ok(())
    }
}

/// What the first tag of the document said it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Root {
    Pending,
    Success,
    Error,
    Unexpected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame<S> {
    Root,
    Scope(S),
    /// Element whose text is being collected.
    Leaf,
    /// Element the handler has no use for, along with all its children.
    Ignored,
}

/// `ResponseMetadata` of query style success bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    pub request_id: String,
    pub box_usage: String,
}

/// Per-request state machine turning parser events into either a filled
/// [`BodyHandler`] or an [`ErrorResponse`].
pub struct ResponseParser<B: BodyHandler> {
    service: Service,
    handler: B,
    root: Root,
    root_name: String,
    frames: Vec<Frame<B::Scope>>,
    text: String,
    error: ErrorResponse,
    metadata: ResponseMetadata,
    successful: bool,
}

impl<B: BodyHandler> ResponseParser<B> {
    pub fn new(service: Service, handler: B) -> Self {
        Self {
            service,
            handler,
            root: Root::Pending,
            root_name: String::new(),
            frames: Vec::new(),
            text: String::new(),
            error: ErrorResponse::default(),
            metadata: ResponseMetadata::default(),
            successful: false,
        }
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn root(&self) -> Root {
        self.root
    }

    /// Local name of the root element, empty before the first tag.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// True once a success body was parsed to its end. Stays false for
    /// error documents and for documents that never completed.
    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn handler(&self) -> &B {
        &self.handler
    }

    pub fn metadata(&self) -> &ResponseMetadata {
        &self.metadata
    }

    /// Error document collected so far. Codes are not resolved yet.
    pub fn error(&self) -> &ErrorResponse {
        &self.error
    }

    pub fn into_parts(self) -> (B, ResponseMetadata) {
        (self.handler, self.metadata)
    }

    pub fn into_error(self) -> ErrorResponse {
        self.error
    }

    fn innermost_scope(&self) -> Option<B::Scope> {
        match self.frames.last() {
            Some(Frame::Scope(s)) => Some(*s),
            _ => None,
        }
    }

    fn is_metadata(name: &str) -> bool {
        matches!(name, "RequestId" | "RequestID" | "BoxUsage")
    }

    fn start_root(&mut self, name: &str) {
        self.root_name = name.to_string();
        self.root = if name == self.handler.root() {
            Root::Success
        } else if ERROR_ROOTS.contains(&name) {
            Root::Error
        } else {
            log::debug!("unexpected root element <{}> in {} response", name, self.service);
            Root::Unexpected
        };
        self.frames.push(Frame::Root);
    }
}

impl<B: BodyHandler> XmlHandler for ResponseParser<B> {
    fn start_element(&mut self, name: &str) -> Result<(), XmlError> {
        if self.frames.is_empty() {
            if self.root == Root::Pending {
                self.start_root(name);
            } else {
                // trailing content after the root element
                self.frames.push(Frame::Ignored);
            }
            return Ok(());
        }

        // a leaf that turns out to have children is a container nobody asked for
        if let Some(top) = self.frames.last_mut() {
            if *top == Frame::Leaf {
                *top = Frame::Ignored;
            }
        }
        let ignored = self.frames.iter().any(|f| *f == Frame::Ignored);

        let frame = match self.root {
            Root::Error => Frame::Leaf,
            Root::Success if Self::is_metadata(name) => Frame::Leaf,
            Root::Success if !ignored => match self.handler.open(self.innermost_scope(), name) {
                Some(scope) => Frame::Scope(scope),
                None => Frame::Leaf,
            },
            _ => Frame::Ignored,
        };
        if frame == Frame::Leaf {
            self.text.clear();
        }
        self.frames.push(frame);
        Ok(())
    }

    fn characters(&mut self, text: &str) -> Result<(), XmlError> {
        if self.frames.last() == Some(&Frame::Leaf) {
            self.text.push_str(text);
        }
        Ok(())
    }

    fn end_element(&mut self, name: &str) -> Result<(), XmlError> {
        let Some(frame) = self.frames.pop() else {
            return Ok(());
        };
        match frame {
            Frame::Leaf => {
                let text = std::mem::take(&mut self.text);
                match self.root {
                    Root::Error => {
                        self.error.set_field(name, &text);
                    }
                    Root::Success if name == "BoxUsage" => {
                        self.metadata.box_usage = text.trim().to_string();
                    }
                    Root::Success if Self::is_metadata(name) => {
                        self.metadata.request_id = text.trim().to_string();
                    }
                    Root::Success => {
                        let parent = self.innermost_scope();
                        self.handler.leaf(parent, name, &text)?;
                    }
                    _ => {}
                }
            }
            Frame::Scope(scope) => self.handler.close(scope),
            Frame::Root | Frame::Ignored => {}
        }
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), XmlError> {
        self.successful = self.root == Root::Success && self.frames.is_empty();
        Ok(())
    }
}

impl<B: BodyHandler + fmt::Debug> fmt::Debug for ResponseParser<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseParser")
            .field("service", &self.service)
            .field("root", &self.root)
            .field("root_name", &self.root_name)
            .field("handler", &self.handler)
            .field("successful", &self.successful)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
        ended: bool,
    }

    impl XmlHandler for Recorder {
        fn start_element(&mut self, name: &str) -> Result<(), XmlError> {
            self.events.push(format!("<{name}>"));
            Ok(())
        }

        fn characters(&mut self, text: &str) -> Result<(), XmlError> {
            if !text.trim().is_empty() {
                self.events.push(text.to_string());
            }
            Ok(())
        }

        fn end_element(&mut self, name: &str) -> Result<(), XmlError> {
            self.events.push(format!("</{name}>"));
            Ok(())
        }

        fn end_document(&mut self) -> Result<(), XmlError> {
            self.ended = true;
            Ok(())
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Scope {
        Owner,
        Bucket,
    }

    #[derive(Debug, Default)]
    struct Buckets {
        owner: String,
        names: Vec<String>,
    }

    impl BodyHandler for Buckets {
        type Scope = Scope;

        fn root(&self) -> &'static str {
            "ListAllMyBucketsResult"
        }

        fn open(&mut self, _parent: Option<Scope>, name: &str) -> Option<Scope> {
            match name {
                "Owner" => Some(Scope::Owner),
                "Bucket" => Some(Scope::Bucket),
                _ => None,
            }
        }

        fn leaf(&mut self, parent: Option<Scope>, name: &str, text: &str) -> Result<(), XmlError> {
            match (parent, name) {
                (Some(Scope::Owner), "DisplayName") => self.owner = text.to_string(),
                (Some(Scope::Bucket), "Name") => self.names.push(text.to_string()),
                _ => {}
            }
            Ok(())
        }
    }

    #[test]
    fn test_events_use_local_names() {
        let doc = r#"<?xml version="1.0"?><s:Root xmlns:s="urn:x"><s:A>1 &amp; 2</s:A><B/></s:Root>"#;
        let mut rec = Recorder::default();
        parse(doc.as_bytes(), &mut rec).unwrap();
        assert_eq!(
            rec.events,
            vec!["<Root>", "<A>", "1 & 2", "</A>", "<B>", "</B>", "</Root>"]
        );
        assert!(rec.ended);
    }

    #[test]
    fn test_truncated_and_empty_input() {
        let mut rec = Recorder::default();
        assert!(matches!(
            parse("<Root><A>text".as_bytes(), &mut rec),
            Err(XmlError::Truncated)
        ));
        assert!(!rec.ended);

        let mut rec = Recorder::default();
        assert!(matches!(parse("  ".as_bytes(), &mut rec), Err(XmlError::Empty)));
    }

    #[test]
    fn test_scopes_disambiguate_reused_names() {
        let doc = "<ListAllMyBucketsResult><Owner><ID>1</ID><DisplayName>me</DisplayName></Owner>\
            <Buckets><Bucket><Name>a</Name></Bucket><Bucket><Name>b</Name></Bucket></Buckets>\
            </ListAllMyBucketsResult>";
        let mut parser = ResponseParser::new(Service::S3, Buckets::default());
        parse(doc.as_bytes(), &mut parser).unwrap();
        assert!(parser.is_successful());
        assert_eq!(parser.handler().owner, "me");
        assert_eq!(parser.handler().names, vec!["a", "b"]);
    }

    #[test]
    fn test_error_root_never_fills_success_fields() {
        let doc = "<Error><Code>NoSuchBucket</Code><Message>gone</Message>\
            <Bucket><Name>a</Name></Bucket><RequestId>R1</RequestId></Error>";
        let mut parser = ResponseParser::new(Service::S3, Buckets::default());
        parse(doc.as_bytes(), &mut parser).unwrap();
        assert!(!parser.is_successful());
        assert_eq!(parser.root(), Root::Error);
        assert!(parser.handler().names.is_empty());
        let error = parser.into_error();
        assert_eq!(error.code_text, "NoSuchBucket");
        assert_eq!(error.message, "gone");
        assert_eq!(error.request_id, "R1");
    }

    #[test]
    fn test_nested_error_documents() {
        let doc = "<Response><Errors><Error><Code>NoSuchDomain</Code>\
            <Message>The specified domain does not exist.</Message><BoxUsage>0.0000219907</BoxUsage>\
            </Error></Errors><RequestID>abc</RequestID></Response>";
        let mut parser = ResponseParser::new(Service::Sdb, NoBody);
        parse(doc.as_bytes(), &mut parser).unwrap();
        let error = parser.into_error();
        assert_eq!(error.code_text, "NoSuchDomain");
        assert_eq!(error.box_usage, "0.0000219907");
        assert_eq!(error.request_id, "abc");
    }

    #[test]
    fn test_metadata_captured_below_unknown_containers() {
        let doc = "<ListAllMyBucketsResult><ResponseMetadata><RequestId>req</RequestId>\
            <BoxUsage>0.1</BoxUsage></ResponseMetadata></ListAllMyBucketsResult>";
        let mut parser = ResponseParser::new(Service::S3, Buckets::default());
        parse(doc.as_bytes(), &mut parser).unwrap();
        assert!(parser.is_successful());
        assert_eq!(parser.metadata().request_id, "req");
        assert_eq!(parser.metadata().box_usage, "0.1");
    }

    #[test]
    fn test_truncated_success_body_is_not_successful() {
        let doc = "<ListAllMyBucketsResult><Buckets><Bucket><Name>a</Name>";
        let mut parser = ResponseParser::new(Service::S3, Buckets::default());
        assert!(parse(doc.as_bytes(), &mut parser).is_err());
        assert!(!parser.is_successful());
    }

    #[test]
    fn test_unexpected_root() {
        let mut parser = ResponseParser::new(Service::S3, Buckets::default());
        parse("<Other><Name>x</Name></Other>".as_bytes(), &mut parser).unwrap();
        assert_eq!(parser.root(), Root::Unexpected);
        assert_eq!(parser.root_name(), "Other");
        assert!(!parser.is_successful());
        assert!(parser.handler().names.is_empty());
    }
}
