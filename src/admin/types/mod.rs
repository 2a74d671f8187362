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

//! Messages exchanged with the table admin service and the methods that
//! carry them.
//!
//! Each request type implements [`AdminRequest`], which ties it to the remote
//! method it is sent to and to the type of the response that comes back. The
//! admin client treats all of these as opaque payloads: it encodes, sends and
//! decodes them without looking at their fields.

pub mod request;
pub mod table;

pub use request::*;
pub use table::*;

use crate::channel::MethodDescriptor;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fully qualified name of the table admin service.
pub const SERVICE_NAME: &str = "google.bigtable.admin.table.v1.BigtableTableService";

/// Remote methods of the table admin service
pub mod methods {
    use super::SERVICE_NAME;
    use crate::channel::MethodDescriptor;

    pub const LIST_TABLES: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "ListTables");
    pub const GET_TABLE: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "GetTable");
    pub const CREATE_TABLE: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "CreateTable");
    pub const CREATE_COLUMN_FAMILY: MethodDescriptor =
        MethodDescriptor::new(SERVICE_NAME, "CreateColumnFamily");
    pub const DELETE_TABLE: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "DeleteTable");
    pub const DELETE_COLUMN_FAMILY: MethodDescriptor =
        MethodDescriptor::new(SERVICE_NAME, "DeleteColumnFamily");
    pub const RENAME_TABLE: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "RenameTable");
}

/// A request message of the table admin service.
pub trait AdminRequest: Serialize {
    /// Message the service answers with
    type Response: DeserializeOwned;

    /// Remote method this request is sent to
    const METHOD: MethodDescriptor;
}

macro_rules! impl_admin_request {
    ($($req:ty => $resp:ty, $method:expr;)*) => {
        $(
            impl AdminRequest for $req {
                type Response = $resp;
                const METHOD: MethodDescriptor = $method;
            }
        )*
    };
}

impl_admin_request! {
    ListTablesRequest => ListTablesResponse, methods::LIST_TABLES;
    GetTableRequest => Table, methods::GET_TABLE;
    CreateTableRequest => Table, methods::CREATE_TABLE;
    CreateColumnFamilyRequest => ColumnFamily, methods::CREATE_COLUMN_FAMILY;
    DeleteTableRequest => Empty, methods::DELETE_TABLE;
    DeleteColumnFamilyRequest => Empty, methods::DELETE_COLUMN_FAMILY;
    RenameTableRequest => Empty, methods::RENAME_TABLE;
}
