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

//! Malformed and unsupported requests

use super::common::*;
use bigtable_admin::admin::types::{
    CreateTableRequest, DeleteColumnFamilyRequest, SERVICE_NAME,
};
use bigtable_admin::channel::{Channel, MethodDescriptor};
use bigtable_admin::error::Code;
use bytes::Bytes;

#[test]
fn create_table_with_invalid_id_fails() {
    let (admin, service) = in_memory_admin();
    let cluster = test_cluster();

    for table_id in ["", "a/b"] {
        let err = admin
            .create_table(
                CreateTableRequest::builder()
                    .name(&cluster)
                    .table_id(table_id)
                    .build(),
            )
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::InvalidArgument), "id {table_id:?}");
    }
    assert!(service.table_names().is_empty());
}

#[test]
fn delete_column_family_with_table_name_fails() {
    let (admin, _service) = in_memory_admin();
    let cluster = test_cluster();
    let table_id = rand_table_id();
    admin
        .create_table(create_table_request(&cluster, &table_id))
        .unwrap();

    let err = admin
        .delete_column_family(
            DeleteColumnFamilyRequest::builder()
                .name(cluster.table_name(&table_id))
                .build(),
        )
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::InvalidArgument));
}

#[test]
fn unsupported_method_is_unimplemented() {
    let (_admin, service) = in_memory_admin();
    let channel = service.channel();

    let err = channel
        .call(
            &MethodDescriptor::new(SERVICE_NAME, "ModifyColumnFamilies"),
            Bytes::from_static(b"{}"),
        )
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::Unimplemented));
}

#[test]
fn malformed_payload_is_invalid_argument() {
    let (_admin, service) = in_memory_admin();
    let channel = service.channel();

    let err = channel
        .call(
            &bigtable_admin::admin::types::methods::GET_TABLE,
            Bytes::from_static(b"not json"),
        )
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::InvalidArgument));
}
