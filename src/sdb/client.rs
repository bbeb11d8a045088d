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

//! Connection to the domain service
//!
//! ```no_run
//! use awsrest::creds::Credentials;
//! use awsrest::factory::ClientFactory;
//! use awsrest::query::QueryApi;
//!
//! # fn main() -> Result<(), awsrest::error::Error> {
//! let factory = ClientFactory::new();
//! let mut sdb = factory.sdb(Credentials::from_env()?).build()?;
//! sdb.create_domain("products").build().send()?;
//! sdb.put_attributes("products", "item-1")
//!     .attributes(vec![("color", "red", true).into()])
//!     .build()
//!     .send()?;
//!
//! let found = sdb.query("products").query_expression("['color' = 'red']").build().send()?;
//! for item in found.item_names.iter() {
//!     println!("{item}");
//! }
//! # Ok(())
//! # }
//! ```

use super::builders::*;
use crate::connection::Connection;
use crate::error::Service;
use crate::factory::ServiceConnection;

/// Default host name of the domain service.
pub const DEFAULT_SDB_HOST: &str = "sdb.amazonaws.com";

#[derive(Debug)]
pub struct SdbConnection {
    inner: Connection,
}

impl ServiceConnection for SdbConnection {
    const SERVICE: Service = Service::Sdb;
    const DEFAULT_HOST: &'static str = DEFAULT_SDB_HOST;

    fn from_connection(connection: Connection) -> Self {
        Self { inner: connection }
    }
}

impl SdbConnection {
    pub fn connection(&self) -> &Connection {
        &self.inner
    }

    pub(crate) fn connection_mut(&mut self) -> &mut Connection {
        &mut self.inner
    }

    pub fn create_domain<S: Into<String>>(&mut self, domain: S) -> CreateDomainBldr<'_> {
        CreateDomain::builder().connection(self).domain(domain)
    }

    pub fn delete_domain<S: Into<String>>(&mut self, domain: S) -> DeleteDomainBldr<'_> {
        DeleteDomain::builder().connection(self).domain(domain)
    }

    /// Creates a [`ListDomains`] request builder. Follow
    /// [`ListDomainsResponse::next_token`](crate::sdb::response::ListDomainsResponse)
    /// to read further pages.
    pub fn list_domains(&mut self) -> ListDomainsBldr<'_> {
        ListDomains::builder().connection(self)
    }

    pub fn put_attributes<S1: Into<String>, S2: Into<String>>(
        &mut self,
        domain: S1,
        item: S2,
    ) -> PutAttributesBldr<'_> {
        PutAttributes::builder().connection(self).domain(domain).item(item)
    }

    /// Creates a [`GetAttributes`] request builder. Without attribute names
    /// every attribute of the item is returned.
    pub fn get_attributes<S1: Into<String>, S2: Into<String>>(
        &mut self,
        domain: S1,
        item: S2,
    ) -> GetAttributesBldr<'_> {
        GetAttributes::builder().connection(self).domain(domain).item(item)
    }

    /// Creates a [`DeleteAttributes`] request builder. Without attributes
    /// the whole item is deleted.
    pub fn delete_attributes<S1: Into<String>, S2: Into<String>>(
        &mut self,
        domain: S1,
        item: S2,
    ) -> DeleteAttributesBldr<'_> {
        DeleteAttributes::builder().connection(self).domain(domain).item(item)
    }

    pub fn query<S: Into<String>>(&mut self, domain: S) -> QueryBldr<'_> {
        Query::builder().connection(self).domain(domain)
    }
}
