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

//! List tables tests

use super::common::*;
use bigtable_admin::admin::ClusterName;
use bigtable_admin::admin::types::{ListTablesRequest, Table};

#[test]
fn list_tables_of_empty_cluster() {
    let (admin, service) = in_memory_admin();
    let cluster = test_cluster();

    let resp = admin
        .list_tables(ListTablesRequest::builder().name(&cluster).build())
        .unwrap();
    assert!(resp.tables.is_empty());
    assert_eq!(service.call_count(), 1);
}

#[test]
fn list_tables_returns_only_tables_of_cluster() {
    let (admin, service) = in_memory_admin();
    let cluster = test_cluster();
    let other = ClusterName::new("test-project", "us-east1-b", "other-cluster");

    let mine = rand_table_id();
    let theirs = rand_table_id();
    admin.create_table(create_table_request(&cluster, &mine)).unwrap();
    admin.create_table(create_table_request(&other, &theirs)).unwrap();
    assert_eq!(service.table_names().len(), 2);

    let resp = admin
        .list_tables(ListTablesRequest::builder().name(&cluster).build())
        .unwrap();
    let names: Vec<&str> = resp.tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec![cluster.table_name(&mine)]);
}

#[test]
fn list_tables_reports_names_only() {
    let (admin, service) = in_memory_admin();
    let cluster = test_cluster();
    let table_id = rand_table_id();
    admin
        .create_table(create_table_request(&cluster, &table_id))
        .unwrap();

    let resp = admin
        .list_tables(ListTablesRequest::builder().name(&cluster).build())
        .unwrap();
    assert_eq!(
        resp.tables,
        vec![Table {
            name: cluster.table_name(&table_id),
            ..Default::default()
        }]
    );
    assert_eq!(
        service.table_names(),
        vec![cluster.table_name(&table_id)],
        "listing must not modify the service"
    );
}
