// Bigtable Table Admin client for Rust
// Copyright 2025 MinIO, Inc.
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

//! In-process implementation of the table admin service.
//!
//! [`InMemoryTableService`] keeps tables in memory and answers calls the way
//! the remote service does, including `not_found` and `already_exists`
//! failures. [`InMemoryChannel`]s opened on it can be handed to a
//! [`TableAdminClient`](crate::admin::TableAdminClient) to exercise it without a
//! network.
//!
//! ```
//! use bigtable_admin::admin::in_memory::InMemoryTableService;
//! use bigtable_admin::admin::types::ListTablesRequest;
//! use bigtable_admin::admin::TableAdminClient;
//! use bigtable_admin::channel::CloseableChannel;
//!
//! let service = InMemoryTableService::new();
//! let admin = TableAdminClient::new(CloseableChannel::new(service.channel()));
//! let resp = admin
//!     .list_tables(ListTablesRequest::builder().name("projects/p/zones/z/clusters/c").build())
//!     .unwrap();
//! assert!(resp.tables.is_empty());
//! ```

use crate::admin::types::{
    ColumnFamily, CreateColumnFamilyRequest, CreateTableRequest, DeleteColumnFamilyRequest,
    DeleteTableRequest, Empty, GetTableRequest, ListTablesRequest, ListTablesResponse,
    RenameTableRequest, SERVICE_NAME, Table, methods,
};
use crate::channel::{Channel, MethodDescriptor};
use crate::error::{Code, Error, RemoteCallError, Status};
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

const TABLES_SEGMENT: &str = "/tables/";
const COLUMN_FAMILIES_SEGMENT: &str = "/columnFamilies/";

#[derive(Debug, Default)]
struct ServiceState {
    tables: RwLock<BTreeMap<String, Table>>,
    open_channels: AtomicUsize,
    calls: AtomicUsize,
}

/// Tables held in memory, shared by every channel opened on the service.
#[derive(Clone, Debug, Default)]
pub struct InMemoryTableService {
    state: Arc<ServiceState>,
}

impl InMemoryTableService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new channel to this service.
    pub fn channel(&self) -> InMemoryChannel {
        self.state.open_channels.fetch_add(1, Ordering::SeqCst);
        InMemoryChannel {
            service: self.clone(),
        }
    }

    /// Number of channels opened and not yet shut down.
    pub fn open_channels(&self) -> usize {
        self.state.open_channels.load(Ordering::SeqCst)
    }

    /// Number of calls received over all channels.
    pub fn call_count(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    /// Names of all tables, in lexicographic order.
    pub fn table_names(&self) -> Vec<String> {
        self.tables().keys().cloned().collect()
    }

    /// Stores `table` under its name, replacing any table of that name.
    pub fn insert_table(&self, table: Table) {
        self.tables_mut().insert(table.name.clone(), table);
    }

    fn tables(&self) -> RwLockReadGuard<'_, BTreeMap<String, Table>> {
        self.state
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn tables_mut(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Table>> {
        self.state
            .tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, method: &MethodDescriptor, request: &[u8]) -> Result<Bytes, Status> {
        match *method {
            methods::LIST_TABLES => encode(&self.list_tables(decode(request)?)),
            methods::GET_TABLE => encode(&self.get_table(decode(request)?)?),
            methods::CREATE_TABLE => encode(&self.create_table(decode(request)?)?),
            methods::CREATE_COLUMN_FAMILY => {
                encode(&self.create_column_family(decode(request)?)?)
            }
            methods::DELETE_TABLE => encode(&self.delete_table(decode(request)?)?),
            methods::DELETE_COLUMN_FAMILY => {
                encode(&self.delete_column_family(decode(request)?)?)
            }
            methods::RENAME_TABLE => encode(&self.rename_table(decode(request)?)?),
            _ => Err(Status::new(
                Code::Unimplemented,
                format!("method {method} is not implemented by {SERVICE_NAME}"),
            )),
        }
    }

    fn list_tables(&self, request: ListTablesRequest) -> ListTablesResponse {
        let prefix = format!("{}{TABLES_SEGMENT}", request.name);
        let tables = self
            .tables()
            .keys()
            .filter(|name| {
                name.strip_prefix(&prefix)
                    .is_some_and(|id| !id.is_empty() && !id.contains('/'))
            })
            .map(|name| Table {
                name: name.clone(),
                ..Default::default()
            })
            .collect();
        ListTablesResponse { tables }
    }

    fn get_table(&self, request: GetTableRequest) -> Result<Table, Status> {
        self.tables()
            .get(&request.name)
            .cloned()
            .ok_or_else(|| table_not_found(&request.name))
    }

    fn create_table(&self, request: CreateTableRequest) -> Result<Table, Status> {
        check_id("table id", &request.table_id)?;
        let name = format!("{}{TABLES_SEGMENT}{}", request.name, request.table_id);

        let mut tables = self.tables_mut();
        if tables.contains_key(&name) {
            return Err(Status::already_exists(format!(
                "table '{name}' already exists"
            )));
        }

        let mut table = request.table.unwrap_or_default();
        table.name = name.clone();
        table.current_operation = None;
        for (id, family) in table.column_families.iter_mut() {
            family.name = format!("{name}{COLUMN_FAMILIES_SEGMENT}{id}");
        }
        tables.insert(name, table.clone());
        Ok(table)
    }

    fn create_column_family(
        &self,
        request: CreateColumnFamilyRequest,
    ) -> Result<ColumnFamily, Status> {
        check_id("column family id", &request.column_family_id)?;

        let mut tables = self.tables_mut();
        let table = tables
            .get_mut(&request.name)
            .ok_or_else(|| table_not_found(&request.name))?;
        if table.column_families.contains_key(&request.column_family_id) {
            return Err(Status::already_exists(format!(
                "column family '{}' already exists in table '{}'",
                request.column_family_id, request.name
            )));
        }

        let mut family = request.column_family;
        family.name = format!(
            "{}{COLUMN_FAMILIES_SEGMENT}{}",
            request.name, request.column_family_id
        );
        table
            .column_families
            .insert(request.column_family_id, family.clone());
        Ok(family)
    }

    fn delete_table(&self, request: DeleteTableRequest) -> Result<Empty, Status> {
        self.tables_mut()
            .remove(&request.name)
            .map(|_| Empty {})
            .ok_or_else(|| table_not_found(&request.name))
    }

    fn delete_column_family(&self, request: DeleteColumnFamilyRequest) -> Result<Empty, Status> {
        let (table_name, family_id) = request
            .name
            .rsplit_once(COLUMN_FAMILIES_SEGMENT)
            .ok_or_else(|| {
                Status::invalid_argument(format!(
                    "'{}' is not a column family name",
                    request.name
                ))
            })?;

        let mut tables = self.tables_mut();
        let table = tables
            .get_mut(table_name)
            .ok_or_else(|| table_not_found(table_name))?;
        table
            .column_families
            .remove(family_id)
            .map(|_| Empty {})
            .ok_or_else(|| {
                Status::not_found(format!("column family '{}' not found", request.name))
            })
    }

    fn rename_table(&self, request: RenameTableRequest) -> Result<Empty, Status> {
        check_id("new table id", &request.new_id)?;
        let (cluster, _) = request
            .name
            .rsplit_once(TABLES_SEGMENT)
            .ok_or_else(|| table_not_found(&request.name))?;
        let new_name = format!("{cluster}{TABLES_SEGMENT}{}", request.new_id);

        let mut tables = self.tables_mut();
        if !tables.contains_key(&request.name) {
            return Err(table_not_found(&request.name));
        }
        if tables.contains_key(&new_name) {
            return Err(Status::already_exists(format!(
                "table '{new_name}' already exists"
            )));
        }

        let Some(mut table) = tables.remove(&request.name) else {
            return Err(table_not_found(&request.name));
        };
        table.name = new_name.clone();
        for (id, family) in table.column_families.iter_mut() {
            family.name = format!("{new_name}{COLUMN_FAMILIES_SEGMENT}{id}");
        }
        tables.insert(new_name, table);
        Ok(Empty {})
    }
}

/// Channel to an [`InMemoryTableService`].
#[derive(Debug)]
pub struct InMemoryChannel {
    service: InMemoryTableService,
}

impl Channel for InMemoryChannel {
    fn call(&self, method: &MethodDescriptor, request: Bytes) -> Result<Bytes, Error> {
        self.service.state.calls.fetch_add(1, Ordering::SeqCst);
        self.service
            .dispatch(method, &request)
            .map_err(|status| RemoteCallError::new(*method, status).into())
    }

    fn shutdown(self: Box<Self>) -> Result<(), Error> {
        self.service
            .state
            .open_channels
            .fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(request: &[u8]) -> Result<T, Status> {
    serde_json::from_slice(request)
        .map_err(|e| Status::invalid_argument(format!("malformed request: {e}")))
}

fn encode<T: Serialize>(response: &T) -> Result<Bytes, Status> {
    serde_json::to_vec(response)
        .map(Bytes::from)
        .map_err(|e| Status::internal(format!("failed to encode response: {e}")))
}

fn check_id(what: &str, id: &str) -> Result<(), Status> {
    if id.is_empty() || id.contains('/') {
        return Err(Status::invalid_argument(format!("invalid {what} '{id}'")));
    }
    Ok(())
}

fn table_not_found(name: &str) -> Status {
    Status::not_found(format!("table '{name}' not found"))
}
