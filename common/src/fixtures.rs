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

//! Response documents as the services send them

/// One page of a bucket listing holding `keys`.
pub fn list_bucket_page(bucket: &str, keys: &[&str], is_truncated: bool, next_marker: Option<&str>) -> String {
    let mut doc = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <ListBucketResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
         <Name>{bucket}</Name><Prefix></Prefix><Marker></Marker><MaxKeys>1000</MaxKeys>\
         <IsTruncated>{is_truncated}</IsTruncated>"
    );
    if let Some(marker) = next_marker {
        doc.push_str(&format!("<NextMarker>{marker}</NextMarker>"));
    }
    for key in keys {
        doc.push_str(&format!(
            "<Contents><Key>{key}</Key>\
             <LastModified>2009-10-12T17:50:30.000Z</LastModified>\
             <ETag>&quot;fba9dede5f27731c9771645a39863328&quot;</ETag>\
             <Size>11</Size><StorageClass>STANDARD</StorageClass>\
             <Owner><ID>75aa57f09aa0c8caeab4f8c24e99d10f8e7faeebf76c078efc7c6caea54ba06a</ID>\
             <DisplayName>webfile</DisplayName></Owner></Contents>"
        ));
    }
    doc.push_str("</ListBucketResult>");
    doc
}

pub const LIST_ALL_BUCKETS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01">
  <Owner>
    <ID>bcaf1ffd86f461ca5fb16fd081034f</ID>
    <DisplayName>webfile</DisplayName>
  </Owner>
  <Buckets>
    <Bucket>
      <Name>quotes</Name>
      <CreationDate>2006-02-03T16:45:09.000Z</CreationDate>
    </Bucket>
    <Bucket>
      <Name>samples</Name>
      <CreationDate>2006-02-03T16:41:58.000Z</CreationDate>
    </Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;

/// Error document of the object storage service.
pub fn s3_error(code: &str, message: &str, request_id: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Error><Code>{code}</Code><Message>{message}</Message>\
         <Resource>/bucket/key</Resource><RequestId>{request_id}</RequestId>\
         <HostId>3L137</HostId></Error>"
    )
}

/// Error document of the query services.
pub fn query_error(error_type: &str, code: &str, message: &str, request_id: &str) -> String {
    format!(
        "<ErrorResponse><Error><Type>{error_type}</Type><Code>{code}</Code>\
         <Message>{message}</Message></Error>\
         <RequestId>{request_id}</RequestId></ErrorResponse>"
    )
}

pub fn create_queue(queue_url: &str) -> String {
    format!(
        "<CreateQueueResponse xmlns=\"http://queue.amazonaws.com/doc/2008-01-01/\">\
         <CreateQueueResult><QueueUrl>{queue_url}</QueueUrl></CreateQueueResult>\
         <ResponseMetadata><RequestId>cb919c0a-9bce-4afe-9b48-9bdf2412bb67</RequestId></ResponseMetadata>\
         </CreateQueueResponse>"
    )
}

pub const RECEIVE_MESSAGE: &str = r#"<ReceiveMessageResponse xmlns="http://queue.amazonaws.com/doc/2008-01-01/">
  <ReceiveMessageResult>
    <Message>
      <MessageId>5fea7756-0ea4-451a-a703-a558b933e274</MessageId>
      <ReceiptHandle>MbZj6wDWli+JvwwJaBV+3dcjk2YW2vA3+STFFljTM8tJJg6HRG6PYSasuWXPJB+Cw</ReceiptHandle>
      <MD5OfBody>fafb00f5732ab283681e124bf8747ed1</MD5OfBody>
      <Body>This is a test message</Body>
    </Message>
  </ReceiveMessageResult>
  <ResponseMetadata>
    <RequestId>b6633655-283d-45b4-aee4-4e84e0ae6afa</RequestId>
  </ResponseMetadata>
</ReceiveMessageResponse>"#;

pub const CREATE_DOMAIN: &str = r#"<CreateDomainResponse xmlns="http://sdb.amazonaws.com/doc/2007-11-07">
  <ResponseMetadata>
    <RequestId>2a1305a2-ed1c-43fc-b7c4-e6966b5e2727</RequestId>
    <BoxUsage>0.0000219907</BoxUsage>
  </ResponseMetadata>
</CreateDomainResponse>"#;

pub fn query_page(items: &[&str], next_token: Option<&str>) -> String {
    let mut doc = String::from("<QueryResponse xmlns=\"http://sdb.amazonaws.com/doc/2007-11-07\"><QueryResult>");
    for item in items {
        doc.push_str(&format!("<ItemName>{item}</ItemName>"));
    }
    if let Some(token) = next_token {
        doc.push_str(&format!("<NextToken>{token}</NextToken>"));
    }
    doc.push_str(
        "</QueryResult><ResponseMetadata><RequestId>r-1</RequestId>\
         <BoxUsage>0.0000093222</BoxUsage></ResponseMetadata></QueryResponse>",
    );
    doc
}
