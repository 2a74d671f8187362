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

//! HTTP/JSON implementation of [`Channel`].
//!
//! Every call is a `POST {base_url}/{service}/{method}` carrying the encoded
//! request as a JSON body. A 2xx response carries the encoded response; any
//! other response carries `{"code": "...", "message": "..."}`, or failing that,
//! a status derived from the HTTP status code.

use crate::channel::creds::Provider;
use crate::channel::http::BaseUrl;
use crate::channel::options::{ChannelOptions, ExecutionContext, TransportOptions};
use crate::channel::{Channel, MethodDescriptor};
use crate::error::{Code, Error, RemoteCallError, Status, TransportConstructionError};
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task::block_in_place;
use uuid::Uuid;

const JSON_CONTENT_TYPE: &str = "application/json";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Channel speaking JSON over HTTP, with the I/O driven by an
/// [`ExecutionContext`].
pub struct HttpChannel {
    http_client: reqwest::Client,
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    context: ExecutionContext,
}

impl HttpChannel {
    /// Builds a channel from the given configuration.
    ///
    /// No connection is opened here; the first call connects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportConstruction`] if the execution context is not
    /// a multi-thread runtime, the CA file cannot be read or holds no valid
    /// certificate, or the HTTP client cannot be built.
    pub fn new(
        transport: &TransportOptions,
        options: &ChannelOptions,
        context: &ExecutionContext,
    ) -> Result<Self, Error> {
        let flavor = context.handle().runtime_flavor();
        if flavor != RuntimeFlavor::MultiThread {
            return Err(
                TransportConstructionError::UnsupportedRuntime(format!("{flavor:?}")).into(),
            );
        }

        let pool = options.pool();
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .user_agent(transport.user_agent())
            .tcp_nodelay(pool.tcp_nodelay)
            .tcp_keepalive(pool.tcp_keepalive)
            .pool_max_idle_per_host(pool.max_idle_per_host)
            .pool_idle_timeout(pool.idle_timeout);

        if let Some(timeout) = options.call_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = options.connection_timeout() {
            builder = builder.connect_timeout(timeout);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = transport.ignores_cert_check() {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(path) = transport.ssl_cert_path() {
            let buf = std::fs::read(path).map_err(TransportConstructionError::Io)?;
            let certs = reqwest::Certificate::from_pem_bundle(&buf)
                .map_err(TransportConstructionError::Tls)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let http_client = builder.build().map_err(TransportConstructionError::Client)?;

        Ok(Self {
            http_client,
            base_url: transport.base_url().clone(),
            provider: transport.credential_provider().cloned(),
            context: context.clone(),
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    async fn execute(&self, method: &MethodDescriptor, request: Bytes) -> Result<Bytes, Status> {
        let request_id = Uuid::new_v4().to_string();
        let url = self.base_url.build_url(&method.path());
        log::debug!("{REQUEST_ID_HEADER}={request_id} POST {url}");

        let mut req = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(REQUEST_ID_HEADER, &request_id)
            .body(request);
        if let Some(provider) = &self.provider {
            req = req.bearer_auth(provider.fetch().access_token);
        }

        let resp = req.send().await.map_err(status_from_reqwest)?;
        let http_status = resp.status();
        let body = resp.bytes().await.map_err(status_from_reqwest)?;
        log::debug!("{REQUEST_ID_HEADER}={request_id} status={http_status}");

        if http_status.is_success() {
            Ok(body)
        } else {
            Err(status_from_error_response(http_status, &body))
        }
    }
}

impl Channel for HttpChannel {
    /// Blocks on the call.
    ///
    /// From inside a task of a multi-thread runtime the worker is handed off
    /// with [`block_in_place`] first. A current-thread runtime cannot give up
    /// its only thread, so calls made while one is current are refused with
    /// [`Error::CalledFromAsyncContext`].
    fn call(&self, method: &MethodDescriptor, request: Bytes) -> Result<Bytes, Error> {
        let block = || self.context.handle().block_on(self.execute(method, request));
        let result = match Handle::try_current().map(|h| h.runtime_flavor()) {
            Err(_) => block(),
            Ok(RuntimeFlavor::MultiThread) => block_in_place(block),
            Ok(_) => return Err(Error::CalledFromAsyncContext(*method)),
        };
        result.map_err(|status| RemoteCallError::new(*method, status).into())
    }

    fn shutdown(self: Box<Self>) -> Result<(), Error> {
        log::debug!("releasing HTTP channel to {}", self.base_url);
        // the reqwest client closes its pooled connections when dropped
        drop(self);
        Ok(())
    }
}

impl fmt::Debug for HttpChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpChannel")
            .field("base_url", &self.base_url.to_string())
            .field("authenticated", &self.provider.is_some())
            .finish()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    #[serde(default)]
    message: String,
}

fn status_from_reqwest(e: reqwest::Error) -> Status {
    let code = if e.is_timeout() {
        Code::DeadlineExceeded
    } else if e.is_connect() {
        Code::Unavailable
    } else if e.is_decode() || e.is_body() {
        Code::Internal
    } else {
        Code::Unknown
    };
    Status::new(code, e.to_string())
}

pub(crate) fn status_from_error_response(http_status: http::StatusCode, body: &[u8]) -> Status {
    let fallback = Code::from_http_status(http_status);
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(err) => {
            let code = match err.code.parse::<Code>() {
                Ok(Code::Ok) | Err(_) => fallback,
                Ok(code) => code,
            };
            Status::new(code, err.message)
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            let message = if text.is_empty() {
                http_status
                    .canonical_reason()
                    .unwrap_or("unexpected HTTP status")
                    .to_string()
            } else {
                text
            };
            Status::new(fallback, message)
        }
    }
}
