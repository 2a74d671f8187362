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

//! Channel ownership and close tests

use super::common::*;
use bigtable_admin::admin::types::{
    CreateColumnFamilyRequest, CreateTableRequest, DeleteColumnFamilyRequest, DeleteTableRequest,
    GetTableRequest, ListTablesRequest, RenameTableRequest,
};
use bigtable_admin::admin::{TableAdmin, TableAdminClient};
use bigtable_admin::channel::{Channel, CloseableChannel, MethodDescriptor};
use bigtable_admin::error::{Code, Error, RemoteCallError, Status};
use bytes::Bytes;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn assert_channel_closed<T: std::fmt::Debug>(op: &str, result: Result<T, Error>) {
    match result {
        Err(Error::ChannelClosed) => {}
        other => panic!("{op}: expected ChannelClosed, got {other:?}"),
    }
}

#[test]
fn every_operation_fails_after_close() {
    let (admin, service) = in_memory_admin();
    let cluster = test_cluster();
    let table_id = rand_table_id();
    let table_name = cluster.table_name(&table_id);
    admin
        .create_table(create_table_request(&cluster, &table_id))
        .unwrap();
    let calls_before_close = service.call_count();

    admin.close().unwrap();
    assert!(admin.is_closed());

    assert_channel_closed(
        "list_tables",
        admin.list_tables(ListTablesRequest::builder().name(&cluster).build()),
    );
    assert_channel_closed(
        "get_table",
        admin.get_table(GetTableRequest::builder().name(&table_name).build()),
    );
    assert_channel_closed(
        "create_table",
        admin.create_table(
            CreateTableRequest::builder()
                .name(&cluster)
                .table_id(rand_table_id())
                .build(),
        ),
    );
    assert_channel_closed(
        "create_column_family",
        admin.create_column_family(
            CreateColumnFamilyRequest::builder()
                .name(&table_name)
                .column_family_id("cf2")
                .build(),
        ),
    );
    assert_channel_closed(
        "delete_table",
        admin.delete_table(DeleteTableRequest::builder().name(&table_name).build()),
    );
    assert_channel_closed(
        "delete_column_family",
        admin.delete_column_family(
            DeleteColumnFamilyRequest::builder()
                .name(cluster.column_family_name(&table_id, "cf1"))
                .build(),
        ),
    );
    assert_channel_closed(
        "rename_table",
        admin.rename_table(
            RenameTableRequest::builder()
                .name(&table_name)
                .new_id(rand_table_id())
                .build(),
        ),
    );

    assert_eq!(
        service.call_count(),
        calls_before_close,
        "no call may reach the service after close"
    );
    assert_eq!(service.table_names(), vec![table_name]);
}

#[test]
fn close_is_idempotent() {
    let (admin, service) = in_memory_admin();
    assert_eq!(service.open_channels(), 1);

    admin.close().unwrap();
    admin.close().unwrap();
    assert_eq!(service.open_channels(), 0);

    drop(admin);
    assert_eq!(service.open_channels(), 0);
}

#[test]
fn drop_releases_channel() {
    let (admin, service) = in_memory_admin();
    admin
        .list_tables(ListTablesRequest::builder().name(&test_cluster()).build())
        .unwrap();
    assert_eq!(service.open_channels(), 1);

    drop(admin);
    assert_eq!(service.open_channels(), 0);
}

#[test]
fn drop_releases_channel_on_early_return() {
    fn fails_midway(admin: TableAdminClient) -> Result<(), Error> {
        admin.get_table(
            GetTableRequest::builder()
                .name(test_cluster().table_name("nonexistent_table"))
                .build(),
        )?;
        admin.close()
    }

    let (admin, service) = in_memory_admin();
    let err = fails_midway(admin).unwrap_err();
    assert_eq!(err.code(), Some(Code::NotFound));
    assert_eq!(service.open_channels(), 0);
}

#[test]
fn close_through_trait_object() {
    let (admin, service) = in_memory_admin();
    let admin: Box<dyn TableAdmin> = Box::new(admin);

    admin
        .list_tables(ListTablesRequest::builder().name(&test_cluster()).build())
        .unwrap();
    admin.close().unwrap();
    admin.close().unwrap();
    assert_eq!(service.open_channels(), 0);
    assert_channel_closed(
        "list_tables",
        admin.list_tables(ListTablesRequest::builder().name(&test_cluster()).build()),
    );
}

#[derive(Debug)]
struct FailingShutdownChannel {
    shutdowns: Arc<AtomicUsize>,
}

impl Channel for FailingShutdownChannel {
    fn call(&self, _method: &MethodDescriptor, _request: Bytes) -> Result<Bytes, Error> {
        Ok(Bytes::new())
    }

    fn shutdown(self: Box<Self>) -> Result<(), Error> {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
        Err(RemoteCallError::new(
            MethodDescriptor::new("test.Transport", "Shutdown"),
            Status::unavailable("connection reset during shutdown"),
        )
        .into())
    }
}

#[test]
fn close_failure_propagates_once() {
    let shutdowns = Arc::new(AtomicUsize::new(0));
    let admin = TableAdminClient::new(CloseableChannel::new(FailingShutdownChannel {
        shutdowns: shutdowns.clone(),
    }));

    let err = admin.close().unwrap_err();
    assert_eq!(err.code(), Some(Code::Unavailable));
    assert!(admin.is_closed());

    admin.close().unwrap();
    drop(admin);
    assert_eq!(shutdowns.load(Ordering::SeqCst), 1);
}

#[test]
fn close_drains_in_flight_calls() {
    init_logger();
    let (channel, gate) = gated_channel();
    let admin = Arc::new(TableAdminClient::new(CloseableChannel::new(channel)));
    let table_name = test_cluster().table_name(&rand_table_id());

    let in_flight = {
        let admin = admin.clone();
        let table_name = table_name.clone();
        thread::spawn(move || {
            admin.get_table(GetTableRequest::builder().name(table_name).build())
        })
    };
    gate.entered
        .recv_timeout(Duration::from_secs(5))
        .expect("call never reached the channel");

    let close_returned = Arc::new(AtomicBool::new(false));
    let closer = {
        let admin = admin.clone();
        let close_returned = close_returned.clone();
        thread::spawn(move || {
            let result = admin.close();
            close_returned.store(true, Ordering::SeqCst);
            result
        })
    };

    // Closing has started, so new calls are refused straight away.
    while !admin.is_closed() {
        thread::sleep(Duration::from_millis(5));
    }
    assert_channel_closed(
        "get_table",
        admin.get_table(GetTableRequest::builder().name(&table_name).build()),
    );

    thread::sleep(Duration::from_millis(100));
    assert!(
        !close_returned.load(Ordering::SeqCst),
        "close returned while a call was in flight"
    );
    assert_eq!(gate.shutdown_count(), 0);

    gate.release.send(()).unwrap();
    let table = in_flight.join().unwrap().unwrap();
    assert_eq!(table.name, "gated");

    closer.join().unwrap().unwrap();
    assert!(close_returned.load(Ordering::SeqCst));
    assert_eq!(gate.shutdown_count(), 1);
}
