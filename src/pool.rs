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

//! Fixed capacity pool of whole connections

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Hands out connections to threads and takes them back after use.
///
/// [`ConnectionPool::get`] never waits: when no idle connection is left it
/// creates a new one. Connections returned while the pool is full are dropped.
pub struct ConnectionPool<C> {
    idle: Mutex<Vec<C>>,
    capacity: usize,
}

impl<C> ConnectionPool<C> {
    pub fn new(capacity: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of idle connections.
    pub fn len(&self) -> usize {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an idle connection, or one built by `create` when none is left.
    pub fn get<E, F>(&self, create: F) -> Result<C, E>
    where
        F: FnOnce() -> Result<C, E>,
    {
        let pooled = self.idle.lock().unwrap_or_else(PoisonError::into_inner).pop();
        match pooled {
            Some(conn) => Ok(conn),
            None => {
                log::debug!("connection pool empty, creating a connection");
                create()
            }
        }
    }

    /// Gives a connection back. Returns false when the pool was full and the
    /// connection was dropped.
    pub fn put(&self, conn: C) -> bool {
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() >= self.capacity {
            drop(idle);
            log::trace!("connection pool full, dropping connection");
            drop(conn);
            return false;
        }
        idle.push(conn);
        true
    }
}

impl<C> fmt::Debug for ConnectionPool<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionPool")
            .field("capacity", &self.capacity)
            .field("idle", &self.len())
            .finish()
    }
}
