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

//! Create and get table tests

use super::common::*;
use bigtable_admin::admin::types::{
    ColumnFamily, CreateTableRequest, GcRule, GetTableRequest, Table,
};
use bigtable_admin::error::Code;
use std::time::Duration;

#[test]
fn create_then_get_table() {
    let (admin, _service) = in_memory_admin();
    let cluster = test_cluster();
    let table_id = rand_table_id();

    admin
        .create_table(create_table_request(&cluster, &table_id))
        .unwrap();

    let table: Table = admin
        .get_table(
            GetTableRequest::builder()
                .name(cluster.table_name(&table_id))
                .build(),
        )
        .unwrap();
    assert_eq!(table.name, cluster.table_name(&table_id));
    assert_eq!(table.table_id(), table_id);

    let family = &table.column_families["cf1"];
    assert_eq!(
        family.name,
        cluster.column_family_name(&table_id, "cf1")
    );
    assert_eq!(family.gc_rule, Some(GcRule::MaxNumVersions(1)));
}

#[test]
fn create_table_without_schema() {
    let (admin, _service) = in_memory_admin();
    let cluster = test_cluster();
    let table_id = rand_table_id();

    admin
        .create_table(
            CreateTableRequest::builder()
                .name(&cluster)
                .table_id(&table_id)
                .initial_split_keys(vec!["a".to_string(), "m".to_string()])
                .build(),
        )
        .unwrap();

    let table = admin
        .get_table(
            GetTableRequest::builder()
                .name(cluster.table_name(&table_id))
                .build(),
        )
        .unwrap();
    assert!(table.column_families.is_empty());
    assert!(table.current_operation.is_none());
}

#[test]
fn create_table_keeps_nested_gc_rules() {
    let (admin, _service) = in_memory_admin();
    let cluster = test_cluster();
    let table_id = rand_table_id();

    let rule = GcRule::Union {
        rules: vec![
            GcRule::MaxAge(Duration::from_secs(7 * 24 * 3600)),
            GcRule::Intersection {
                rules: vec![
                    GcRule::MaxNumVersions(3),
                    GcRule::MaxAge(Duration::from_millis(1500)),
                ],
            },
        ],
    };
    let mut table = Table::default();
    table.column_families.insert(
        "events".to_string(),
        ColumnFamily {
            gc_rule: Some(rule.clone()),
            ..Default::default()
        },
    );

    admin
        .create_table(
            CreateTableRequest::builder()
                .name(&cluster)
                .table_id(&table_id)
                .table(table)
                .build(),
        )
        .unwrap();

    let table = admin
        .get_table(
            GetTableRequest::builder()
                .name(cluster.table_name(&table_id))
                .build(),
        )
        .unwrap();
    assert_eq!(table.column_families["events"].gc_rule, Some(rule));
}

#[test]
fn create_existing_table_fails() {
    let (admin, service) = in_memory_admin();
    let cluster = test_cluster();
    let table_id = rand_table_id();

    admin
        .create_table(create_table_request(&cluster, &table_id))
        .unwrap();
    let err = admin
        .create_table(create_table_request(&cluster, &table_id))
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::AlreadyExists));
    assert_eq!(service.table_names().len(), 1);
}

#[test]
fn get_missing_table_fails() {
    let (admin, _service) = in_memory_admin();
    let cluster = test_cluster();

    let err = admin
        .get_table(
            GetTableRequest::builder()
                .name(cluster.table_name(&rand_table_id()))
                .build(),
        )
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::NotFound));
}
