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

//! Table admin API
//!
//! [`TableAdminClient`] manages the tables and column families of a cluster:
//! list, get, create, rename and delete tables; create and delete column
//! families. It owns the channel it talks over and releases it when closed.
//!
//! Request and response messages live in [`types`]; [`ClusterName`] builds the
//! resource names they refer to. [`in_memory`] provides a service
//! implementation that runs in-process.

pub mod client;
pub mod in_memory;
mod names;
pub mod types;

pub use client::TableAdminClient;
pub use names::ClusterName;

use crate::error::Error;
use types::{
    CreateColumnFamilyRequest, CreateTableRequest, DeleteColumnFamilyRequest, DeleteTableRequest,
    GetTableRequest, ListTablesRequest, ListTablesResponse, RenameTableRequest, Table,
};

/// Table admin operations, one blocking call each.
///
/// Implemented by [`TableAdminClient`]; code that only needs the operations can
/// take `&dyn TableAdmin` and be handed a substitute.
pub trait TableAdmin: Send + Sync {
    fn list_tables(&self, request: ListTablesRequest) -> Result<ListTablesResponse, Error>;

    fn get_table(&self, request: GetTableRequest) -> Result<Table, Error>;

    fn create_table(&self, request: CreateTableRequest) -> Result<(), Error>;

    fn create_column_family(&self, request: CreateColumnFamilyRequest) -> Result<(), Error>;

    fn delete_table(&self, request: DeleteTableRequest) -> Result<(), Error>;

    fn delete_column_family(&self, request: DeleteColumnFamilyRequest) -> Result<(), Error>;

    fn rename_table(&self, request: RenameTableRequest) -> Result<(), Error>;

    /// Releases the underlying transport. Must be safe to call more than once.
    fn close(&self) -> Result<(), Error>;
}

impl TableAdmin for TableAdminClient {
    fn list_tables(&self, request: ListTablesRequest) -> Result<ListTablesResponse, Error> {
        TableAdminClient::list_tables(self, request)
    }

    fn get_table(&self, request: GetTableRequest) -> Result<Table, Error> {
        TableAdminClient::get_table(self, request)
    }

    fn create_table(&self, request: CreateTableRequest) -> Result<(), Error> {
        TableAdminClient::create_table(self, request)
    }

    fn create_column_family(&self, request: CreateColumnFamilyRequest) -> Result<(), Error> {
        TableAdminClient::create_column_family(self, request)
    }

    fn delete_table(&self, request: DeleteTableRequest) -> Result<(), Error> {
        TableAdminClient::delete_table(self, request)
    }

    fn delete_column_family(&self, request: DeleteColumnFamilyRequest) -> Result<(), Error> {
        TableAdminClient::delete_column_family(self, request)
    }

    fn rename_table(&self, request: RenameTableRequest) -> Result<(), Error> {
        TableAdminClient::rename_table(self, request)
    }

    fn close(&self) -> Result<(), Error> {
        TableAdminClient::close(self)
    }
}
