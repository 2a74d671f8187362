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

//! Blocking client for table admin operations

use crate::admin::types::AdminRequest;
use crate::channel::{ChannelOptions, CloseableChannel, ExecutionContext, TransportOptions};
use crate::error::{CodecDirection, CodecError, Error};
use bytes::Bytes;

mod create_column_family;
mod create_table;
mod delete_column_family;
mod delete_table;
mod get_table;
mod list_tables;
mod rename_table;

/// Client for the table admin service.
///
/// Owns exactly one [`CloseableChannel`], received at construction. Every
/// operation is a single blocking request/response exchange over that
/// channel: the calling thread waits until the response or a failure arrives.
/// Failures are returned exactly as the channel reports them; the client adds
/// no retries, timeouts or validation.
///
/// The client is `Send + Sync`, so one instance can be shared between threads
/// (e.g. behind an `Arc`) and called concurrently.
///
/// # Closing
///
/// [`close`](Self::close) releases the channel. It waits for in-flight calls to
/// finish first; afterwards every operation fails with
/// [`Error::ChannelClosed`]. Closing again is a no-op, and dropping the client
/// closes the channel if that has not happened yet.
///
/// # Example
///
/// ```no_run
/// use bigtable_admin::admin::{ClusterName, TableAdminClient};
/// use bigtable_admin::admin::types::{CreateTableRequest, GetTableRequest};
/// use bigtable_admin::channel::{ChannelOptions, ExecutionContext, TransportOptions};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let context = ExecutionContext::multi_thread(2)?;
/// let transport = TransportOptions::new("http://localhost:8086".parse()?);
/// let admin = TableAdminClient::create_client(&transport, &ChannelOptions::default(), &context)?;
///
/// let cluster = ClusterName::new("my-project", "us-east1-b", "prod");
/// admin.create_table(
///     CreateTableRequest::builder()
///         .name(&cluster)
///         .table_id("orders")
///         .build(),
/// )?;
/// let table = admin.get_table(GetTableRequest::builder().name(cluster.table_name("orders")).build())?;
/// println!("created {}", table.name);
///
/// admin.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TableAdminClient {
    channel: CloseableChannel,
}

impl TableAdminClient {
    /// Creates a client that takes ownership of `channel`.
    ///
    /// From here on only the client closes the channel.
    pub fn new(channel: CloseableChannel) -> Self {
        Self { channel }
    }

    /// Acquires a channel from the given configuration and wraps it in a
    /// client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportConstruction`] if the channel cannot be built.
    pub fn create_client(
        transport: &TransportOptions,
        options: &ChannelOptions,
        context: &ExecutionContext,
    ) -> Result<Self, Error> {
        let channel = CloseableChannel::acquire(transport, options, context)?;
        Ok(Self::new(channel))
    }

    /// Returns true once the client has been closed.
    pub fn is_closed(&self) -> bool {
        self.channel.is_closed()
    }

    /// Releases the channel. See the type-level docs for the close policy.
    ///
    /// # Errors
    ///
    /// Propagates a failure to release the channel.
    pub fn close(&self) -> Result<(), Error> {
        self.channel.close()
    }

    /// Sends `request` to its method and decodes the reply.
    ///
    /// Encoding and decoding failures are local and come back as
    /// [`Error::Codec`]; an empty reply decodes as `{}`.
    fn unary<R: AdminRequest>(&self, request: &R) -> Result<R::Response, Error> {
        let method = R::METHOD;
        let payload = serde_json::to_vec(request)
            .map_err(|e| CodecError::new(method, CodecDirection::Encode, e.to_string()))?;

        log::debug!("calling {method}");
        let body = self.channel.call(&method, Bytes::from(payload))?;

        let body: &[u8] = if body.is_empty() { b"{}" } else { &body };
        serde_json::from_slice(body)
            .map_err(|e| CodecError::new(method, CodecDirection::Decode, e.to_string()).into())
    }
}
