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

//! Transport and channel configuration.
//!
//! [`TransportOptions`] says *where* and *as whom* to connect, [`ChannelOptions`]
//! says *how* the connection behaves, and [`ExecutionContext`] supplies the
//! tokio runtime on which the channel's asynchronous I/O runs.

use crate::channel::creds::{Provider, StaticProvider};
use crate::channel::http::BaseUrl;
use crate::error::{Error, TransportConstructionError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Handle, Runtime};

/// Environment variable holding the admin endpoint, e.g. `http://localhost:8086`.
pub const ENV_ENDPOINT: &str = "BIGTABLE_ADMIN_ENDPOINT";
/// Environment variable holding a bearer token.
pub const ENV_TOKEN: &str = "BIGTABLE_ADMIN_TOKEN";
/// Environment variable holding a PEM bundle of extra CA certificates.
pub const ENV_SSL_CERT_FILE: &str = "BIGTABLE_ADMIN_SSL_CERT_FILE";
/// Environment variable that disables certificate checks when set to `true`.
pub const ENV_IGNORE_CERT_CHECK: &str = "BIGTABLE_ADMIN_IGNORE_CERT_CHECK";

/// Where to connect and which credentials to present.
#[derive(Clone, Debug, Default)]
pub struct TransportOptions {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    ssl_cert_file: Option<PathBuf>,
    ignore_cert_check: Option<bool>,
    app_info: Option<(String, String)>,
}

impl TransportOptions {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            ..Default::default()
        }
    }

    /// Reads the transport options from `BIGTABLE_ADMIN_*` environment variables.
    ///
    /// Unset variables fall back to the public endpoint with anonymous access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportConstruction`] if the endpoint does not parse.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = match std::env::var(ENV_ENDPOINT) {
            Ok(v) if !v.is_empty() => v.parse::<BaseUrl>()?,
            _ => BaseUrl::default(),
        };
        log::debug!("{ENV_ENDPOINT}={base_url}");

        let provider = std::env::var(ENV_TOKEN)
            .ok()
            .filter(|v| !v.is_empty())
            .map(|token| StaticProvider::new(&token));
        log::debug!("{ENV_TOKEN}={}", if provider.is_some() { "*****" } else { "" });

        let ssl_cert_file = std::env::var(ENV_SSL_CERT_FILE)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        log::debug!("{ENV_SSL_CERT_FILE}={ssl_cert_file:?}");

        let ignore_cert_check = std::env::var(ENV_IGNORE_CERT_CHECK)
            .ok()
            .and_then(|v| v.parse::<bool>().ok());
        log::debug!("{ENV_IGNORE_CERT_CHECK}={ignore_cert_check:?}");

        Ok(Self::new(base_url)
            .provider(provider)
            .ssl_cert_file(ssl_cert_file.as_deref())
            .ignore_cert_check(ignore_cert_check))
    }

    /// Set the credential provider. If not set, requests are sent anonymously.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set file for loading CAs certs to trust, in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub(crate) fn credential_provider(&self) -> Option<&Arc<dyn Provider + Send + Sync + 'static>> {
        self.provider.as_ref()
    }

    pub(crate) fn ssl_cert_path(&self) -> Option<&Path> {
        self.ssl_cert_file.as_deref()
    }

    pub(crate) fn ignores_cert_check(&self) -> Option<bool> {
        self.ignore_cert_check
    }

    pub(crate) fn user_agent(&self) -> String {
        let mut user_agent = String::from("bigtable-admin (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") bigtable-admin-rs/"
            + env!("CARGO_PKG_VERSION");
        if let Some((app_name, app_version)) = &self.app_info {
            user_agent.push_str(&format!(" {app_name}/{app_version}"));
        }
        user_agent
    }
}

/// Tuning for the HTTP connection pool behind a channel.
///
/// # Example
///
/// ```
/// use bigtable_admin::channel::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(4)
///     .idle_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections kept per host. Default: 8
    pub max_idle_per_host: usize,
    /// How long an idle connection stays pooled. Default: 90 seconds
    pub idle_timeout: Duration,
    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: Duration,
    /// Disable Nagle's algorithm. Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 8,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// How the channel behaves once connected.
///
/// The `timeout` is the only deadline applied to calls; the admin client adds
/// none of its own.
#[derive(Debug, Clone)]
pub struct ChannelOptions {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool: ConnectionPoolConfig,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Some(Duration::from_secs(20)),
            pool: ConnectionPoolConfig::default(),
        }
    }
}

impl ChannelOptions {
    /// Deadline for a whole call, from sending the request to reading the
    /// response body. `None` means no deadline.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deadline for establishing a connection.
    pub fn connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.pool = config;
        self
    }

    pub(crate) fn call_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn connection_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub(crate) fn pool(&self) -> &ConnectionPoolConfig {
        &self.pool
    }
}

/// The tokio runtime a channel runs its asynchronous I/O on.
///
/// The runtime must be multi-threaded: calls block the caller with
/// [`Handle::block_on`], which cannot drive the I/O of a current-thread
/// runtime. Channels built on a current-thread handle fail with
/// [`TransportConstructionError::UnsupportedRuntime`].
#[derive(Clone, Debug)]
pub struct ExecutionContext {
    handle: Handle,
    // keeps an owned runtime alive for as long as any channel uses it
    _runtime: Option<Arc<Runtime>>,
}

impl ExecutionContext {
    /// Uses a runtime owned by the caller.
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            _runtime: None,
        }
    }

    /// Starts a dedicated multi-threaded runtime with `worker_threads` workers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportConstruction`] if the runtime cannot start.
    pub fn multi_thread(worker_threads: usize) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads.max(1))
            .thread_name("bigtable-admin-io")
            .enable_all()
            .build()
            .map_err(TransportConstructionError::Runtime)?;
        Ok(Self {
            handle: runtime.handle().clone(),
            _runtime: Some(Arc::new(runtime)),
        })
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}
