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

//! Common helper functions for table admin integration tests

use bigtable_admin::admin::in_memory::InMemoryTableService;
use bigtable_admin::admin::types::{ColumnFamily, CreateTableRequest, GcRule, SERVICE_NAME, Table};
use bigtable_admin::admin::{ClusterName, TableAdminClient};
use bigtable_admin::channel::http::BaseUrl;
use bigtable_admin::channel::{Channel, CloseableChannel, ExecutionContext, MethodDescriptor};
use bigtable_admin::error::Error;
use bytes::Bytes;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, mpsc};
use std::time::Duration;
use wiremock::{Mock, MockServer, Request};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn test_cluster() -> ClusterName {
    ClusterName::new("test-project", "us-east1-b", "test-cluster")
}

/// Generate a random table id
pub fn rand_table_id() -> String {
    format!("table_{}", uuid::Uuid::new_v4().simple())
}

/// Client talking to a fresh in-memory service
pub fn in_memory_admin() -> (TableAdminClient, InMemoryTableService) {
    init_logger();
    let service = InMemoryTableService::new();
    let admin = TableAdminClient::new(CloseableChannel::new(service.channel()));
    (admin, service)
}

/// Create table request with one column family keeping a single version
pub fn create_table_request(cluster: &ClusterName, table_id: &str) -> CreateTableRequest {
    let mut table = Table::default();
    table.column_families.insert(
        "cf1".to_string(),
        ColumnFamily {
            gc_rule: Some(GcRule::MaxNumVersions(1)),
            ..Default::default()
        },
    );
    CreateTableRequest::builder()
        .name(cluster)
        .table_id(table_id)
        .table(table)
        .build()
}

/// Channel whose calls block until the test releases them.
///
/// Each call reports on `entered` and then waits for one message on
/// `release`. Shutdowns are counted.
#[derive(Debug)]
pub struct GatedChannel {
    entered: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
    shutdowns: Arc<AtomicUsize>,
}

pub struct Gate {
    pub entered: Receiver<()>,
    pub release: Sender<()>,
    pub shutdowns: Arc<AtomicUsize>,
}

impl Gate {
    pub fn shutdown_count(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }
}

pub fn gated_channel() -> (GatedChannel, Gate) {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let shutdowns = Arc::new(AtomicUsize::new(0));
    (
        GatedChannel {
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
            shutdowns: shutdowns.clone(),
        },
        Gate {
            entered: entered_rx,
            release: release_tx,
            shutdowns,
        },
    )
}

impl Channel for GatedChannel {
    fn call(&self, _method: &MethodDescriptor, _request: Bytes) -> Result<Bytes, Error> {
        self.entered.lock().unwrap().send(()).unwrap();
        self.release
            .lock()
            .unwrap()
            .recv_timeout(Duration::from_secs(10))
            .expect("gated call was never released");
        Ok(Bytes::from_static(br#"{"name":"gated"}"#))
    }

    fn shutdown(self: Box<Self>) -> Result<(), Error> {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Mock admin endpoint driven from blocking test code
pub struct MockAdmin {
    server: MockServer,
    context: ExecutionContext,
}

impl MockAdmin {
    pub fn start(context: &ExecutionContext) -> Self {
        let server = context.handle().block_on(MockServer::start());
        Self {
            server,
            context: context.clone(),
        }
    }

    pub fn base_url(&self) -> BaseUrl {
        self.server.uri().parse().unwrap()
    }

    pub fn mount(&self, mock: Mock) {
        self.context.handle().block_on(mock.mount(&self.server));
    }

    pub fn received_requests(&self) -> Vec<Request> {
        self.context
            .handle()
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn verify(&self) {
        self.context.handle().block_on(self.server.verify());
    }
}

/// Request path of an admin method
pub fn admin_path(method: &str) -> String {
    format!("/{SERVICE_NAME}/{method}")
}

/// Base URL of a local port nothing listens on
pub fn unused_local_url() -> BaseUrl {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}").parse().unwrap()
}
