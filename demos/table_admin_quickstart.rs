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

//! Creates a table, adds a column family, lists and renames tables, then
//! cleans up.
//!
//! Talks to the endpoint in `BIGTABLE_ADMIN_ENDPOINT` (see
//! `TransportOptions::from_env`). Pass `--in-memory` to run against the
//! in-process service instead.

use bigtable_admin::admin::in_memory::InMemoryTableService;
use bigtable_admin::admin::types::{
    ColumnFamily, CreateColumnFamilyRequest, CreateTableRequest, DeleteTableRequest, GcRule,
    GetTableRequest, ListTablesRequest, RenameTableRequest, Table,
};
use bigtable_admin::admin::{ClusterName, TableAdminClient};
use bigtable_admin::channel::{
    ChannelOptions, CloseableChannel, ExecutionContext, TransportOptions,
};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="DEBUG" to see every call

    let in_memory = std::env::args().any(|arg| arg == "--in-memory");
    let admin = if in_memory {
        TableAdminClient::new(CloseableChannel::new(
            InMemoryTableService::new().channel(),
        ))
    } else {
        let context = ExecutionContext::multi_thread(2)?;
        let transport = TransportOptions::from_env()?.app_info(Some((
            "table_admin_quickstart".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )));
        let options = ChannelOptions::default().timeout(Some(Duration::from_secs(30)));
        TableAdminClient::create_client(&transport, &options, &context)?
    };

    let cluster = ClusterName::new("my-project", "us-east1-b", "quickstart");
    let table_id = "quickstart_orders";

    let mut table = Table::default();
    table.column_families.insert(
        "cf1".to_string(),
        ColumnFamily {
            gc_rule: Some(GcRule::MaxNumVersions(3)),
            ..Default::default()
        },
    );
    admin.create_table(
        CreateTableRequest::builder()
            .name(&cluster)
            .table_id(table_id)
            .table(table)
            .build(),
    )?;
    println!("created table {}", cluster.table_name(table_id));

    admin.create_column_family(
        CreateColumnFamilyRequest::builder()
            .name(cluster.table_name(table_id))
            .column_family_id("history")
            .column_family(ColumnFamily {
                gc_rule: Some(GcRule::MaxAge(Duration::from_secs(30 * 24 * 3600))),
                ..Default::default()
            })
            .build(),
    )?;

    let renamed_id = "quickstart_orders_v2";
    admin.rename_table(
        RenameTableRequest::builder()
            .name(cluster.table_name(table_id))
            .new_id(renamed_id)
            .build(),
    )?;

    let resp = admin.list_tables(ListTablesRequest::builder().name(&cluster).build())?;
    for table in &resp.tables {
        println!("table: {}", table.name);
    }

    let table = admin.get_table(
        GetTableRequest::builder()
            .name(cluster.table_name(renamed_id))
            .build(),
    )?;
    for (id, family) in &table.column_families {
        println!("  column family {id}: {:?}", family.gc_rule);
    }

    admin.delete_table(
        DeleteTableRequest::builder()
            .name(cluster.table_name(renamed_id))
            .build(),
    )?;
    admin.close()?;
    Ok(())
}
