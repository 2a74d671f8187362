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

//! # Bigtable Table Admin client (`bigtable-admin`)
//!
//! A blocking, strongly-typed client for the Bigtable table admin service:
//! list, get, create, rename and delete tables, and create and delete column
//! families.
//!
//! The crate is split in two layers:
//!
//! - [`channel`]: the transport. A [`channel::Channel`] carries encoded unary
//!   calls; [`channel::CloseableChannel`] is the single owner of one channel and
//!   releases it exactly once. [`channel::HttpChannel`] speaks JSON over HTTP
//!   with its I/O running on a tokio runtime supplied through
//!   [`channel::ExecutionContext`].
//! - [`admin`]: the facade. [`admin::TableAdminClient`] takes ownership of a
//!   `CloseableChannel` and exposes one blocking method per admin operation.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use bigtable_admin::admin::{ClusterName, TableAdminClient};
//! use bigtable_admin::admin::types::ListTablesRequest;
//! use bigtable_admin::channel::{ChannelOptions, ExecutionContext, TransportOptions};
//!
//! fn main() -> Result<(), bigtable_admin::error::Error> {
//!     let context = ExecutionContext::multi_thread(2)?;
//!     let transport = TransportOptions::from_env()?;
//!     let admin = TableAdminClient::create_client(&transport, &ChannelOptions::default(), &context)?;
//!
//!     let cluster = ClusterName::new("my-project", "us-east1-b", "prod");
//!     let tables = admin.list_tables(ListTablesRequest::builder().name(&cluster).build())?;
//!     for table in tables.tables {
//!         println!("{}", table.name);
//!     }
//!
//!     admin.close()
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`error::Error`]. Failures reported by the service or
//! the transport come back unchanged as [`error::Error::RemoteCall`] with the
//! remote [`error::Status`]; calls after `close()` fail with
//! [`error::Error::ChannelClosed`].

pub mod admin;
pub mod channel;
pub mod error;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
