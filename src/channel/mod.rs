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

//! Transport channel and its lifecycle owner.
//!
//! A [`Channel`] performs one synchronous unary call at a time per invocation,
//! and may be shared by many threads. [`CloseableChannel`] is the exclusive owner
//! of a channel: it routes calls to it while open and releases it exactly once.
//!
//! # Close policy
//!
//! [`CloseableChannel::close`] *drains*: it stops admitting new calls, waits for
//! the calls already in flight to finish, then releases the transport. A call
//! that arrives once closing has started fails immediately with
//! [`Error::ChannelClosed`].

pub mod creds;
pub mod http;
mod http_channel;
pub mod options;

pub use http_channel::HttpChannel;
pub use options::{ChannelOptions, ConnectionPoolConfig, ExecutionContext, TransportOptions};

use crate::error::Error;
use bytes::Bytes;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

/// Identifies a remote method: the fully qualified service name plus the
/// method name within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    service: &'static str,
    method: &'static str,
}

impl MethodDescriptor {
    pub const fn new(service: &'static str, method: &'static str) -> Self {
        Self { service, method }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Request path of this method, `/{service}/{method}`.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.service, self.method)
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.service, self.method)
    }
}

/// A transport capable of carrying unary calls.
///
/// Payloads are opaque, already-encoded bytes; the channel does not look at
/// them. Implementations must tolerate concurrent calls from several threads.
pub trait Channel: fmt::Debug + Send + Sync {
    /// Performs a blocking unary call and returns the encoded response.
    fn call(&self, method: &MethodDescriptor, request: Bytes) -> Result<Bytes, Error>;

    /// Releases the sockets, threads and other resources held by the channel.
    fn shutdown(self: Box<Self>) -> Result<(), Error> {
        Ok(())
    }
}

/// Exclusive owner of a single [`Channel`].
///
/// Not `Clone`: whoever holds the `CloseableChannel` is the only party that can
/// close the channel. Dropping an open `CloseableChannel` closes it.
pub struct CloseableChannel {
    closing: AtomicBool,
    channel: RwLock<Option<Box<dyn Channel>>>,
}

impl CloseableChannel {
    /// Takes ownership of an already constructed channel.
    pub fn new<C: Channel + 'static>(channel: C) -> Self {
        Self {
            closing: AtomicBool::new(false),
            channel: RwLock::new(Some(Box::new(channel))),
        }
    }

    /// Builds an [`HttpChannel`] from the given configuration and takes
    /// ownership of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportConstruction`] if the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn acquire(
        transport: &TransportOptions,
        options: &ChannelOptions,
        context: &ExecutionContext,
    ) -> Result<Self, Error> {
        let channel = HttpChannel::new(transport, options, context)?;
        log::debug!("acquired channel to {}", transport.base_url());
        Ok(Self::new(channel))
    }

    /// Dispatches a call to the owned channel.
    ///
    /// Fails with [`Error::ChannelClosed`] once [`close`](Self::close) has been
    /// called; everything else comes back from the channel untouched.
    pub fn call(&self, method: &MethodDescriptor, request: Bytes) -> Result<Bytes, Error> {
        if self.closing.load(Ordering::Acquire) {
            return Err(Error::ChannelClosed);
        }
        let guard = self.channel.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(channel) => channel.call(method, request),
            None => Err(Error::ChannelClosed),
        }
    }

    /// Returns true once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closing.load(Ordering::Acquire)
    }

    /// Closes the channel, waiting for in-flight calls to drain first.
    ///
    /// Only the first call releases the channel; later calls return `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns whatever the channel reports while shutting down. The channel
    /// counts as closed even then.
    pub fn close(&self) -> Result<(), Error> {
        self.closing.store(true, Ordering::Release);
        let channel = self
            .channel
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match channel {
            Some(channel) => {
                log::debug!("closing channel {channel:?}");
                channel.shutdown()
            }
            None => Ok(()),
        }
    }
}

impl fmt::Debug for CloseableChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseableChannel")
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Drop for CloseableChannel {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::warn!("failed to close channel on drop: {e}");
        }
    }
}

/// Creates a channel from the given configuration.
///
/// The returned [`CloseableChannel`] is meant to be moved into a
/// [`TableAdminClient`](crate::admin::TableAdminClient), which then owns it.
pub fn create_channel(
    transport: &TransportOptions,
    options: &ChannelOptions,
    context: &ExecutionContext,
) -> Result<CloseableChannel, Error> {
    CloseableChannel::acquire(transport, options, context)
}
