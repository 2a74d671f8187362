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

//! Client method for CreateTable operation

use crate::admin::client::TableAdminClient;
use crate::admin::types::CreateTableRequest;
use crate::error::Error;

impl TableAdminClient {
    /// Creates a table.
    ///
    /// Returns once the service has accepted the table; the table the service
    /// echoes back is discarded. A table that already exists is reported as an
    /// `already_exists` remote error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bigtable_admin::admin::{ClusterName, TableAdminClient};
    /// use bigtable_admin::admin::types::{ColumnFamily, CreateTableRequest, GcRule, Table};
    ///
    /// # fn example(admin: &TableAdminClient) -> Result<(), bigtable_admin::error::Error> {
    /// let cluster = ClusterName::new("my-project", "us-east1-b", "prod");
    /// let mut table = Table::default();
    /// table.column_families.insert(
    ///     "events".to_string(),
    ///     ColumnFamily {
    ///         gc_rule: Some(GcRule::MaxNumVersions(1)),
    ///         ..Default::default()
    ///     },
    /// );
    ///
    /// admin.create_table(
    ///     CreateTableRequest::builder()
    ///         .name(&cluster)
    ///         .table_id("click_stream")
    ///         .table(table)
    ///         .build(),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_table(&self, request: CreateTableRequest) -> Result<(), Error> {
        self.unary(&request).map(|_| ())
    }
}
