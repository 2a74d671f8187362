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

//! Request and response messages of the table admin service

use crate::admin::types::table::{ColumnFamily, Table};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Empty acknowledgment returned by delete and rename calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Lists the tables of a cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListTablesRequest {
    /// Cluster resource name
    #[builder(setter(into))]
    pub name: String,
}

/// Tables of a cluster. Only the table names are populated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTablesResponse {
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// Fetches a single table with its column families.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct GetTableRequest {
    /// Table resource name
    #[builder(setter(into))]
    pub name: String,
}

/// Creates a table in a cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableRequest {
    /// Cluster resource name
    #[builder(setter(into))]
    pub name: String,
    /// Id of the new table, unique within the cluster
    #[builder(setter(into))]
    pub table_id: String,
    /// Column families and granularity to create the table with
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
    /// Row keys at which the table is pre-split into tablets
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_split_keys: Vec<String>,
}

/// Adds a column family to a table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumnFamilyRequest {
    /// Table resource name
    #[builder(setter(into))]
    pub name: String,
    /// Id of the new column family, unique within the table
    #[builder(setter(into))]
    pub column_family_id: String,
    #[builder(default)]
    #[serde(default)]
    pub column_family: ColumnFamily,
}

/// Deletes a table and all of its data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteTableRequest {
    /// Table resource name
    #[builder(setter(into))]
    pub name: String,
}

/// Deletes a column family and all of its data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteColumnFamilyRequest {
    /// Column family resource name
    #[builder(setter(into))]
    pub name: String,
}

/// Changes the id of a table, keeping it in the same cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct RenameTableRequest {
    /// Table resource name
    #[builder(setter(into))]
    pub name: String,
    /// New table id
    #[builder(setter(into))]
    pub new_id: String,
}
