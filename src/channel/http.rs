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

//! HTTP endpoint of the admin service

use crate::error::TransportConstructionError;
use http::Uri;
use std::fmt;
use std::str::FromStr;

/// Host serving the public table admin API.
pub const DEFAULT_ADMIN_HOST: &str = "bigtabletableadmin.googleapis.com";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents Base URL of the table admin endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    path_prefix: String,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: DEFAULT_ADMIN_HOST.to_string(),
            port: 0,
            path_prefix: String::new(),
        }
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, or 0 when the scheme default applies.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path prepended to every request path; empty or starting with `/`.
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Builds the full URL for the given request path.
    pub fn build_url(&self, path: &str) -> String {
        let scheme = if self.https { "https" } else { "http" };
        let mut url = format!("{scheme}://{}", self.host);
        if self.port > 0 {
            url.push_str(&format!(":{}", self.port));
        }
        url.push_str(&self.path_prefix);
        url.push_str(path);
        url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_url(""))
    }
}

impl FromStr for BaseUrl {
    type Err = TransportConstructionError;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigtable_admin::channel::http::BaseUrl;
    ///
    /// // Get base URL from host name
    /// let base_url = "bigtabletableadmin.googleapis.com".parse::<BaseUrl>().unwrap();
    /// // Get base URL from host:port, e.g. a local emulator
    /// let base_url: BaseUrl = "http://localhost:8086".parse().unwrap();
    /// // Get base URL behind a proxy path
    /// let base_url: BaseUrl = "https://gateway.internal/bigtable".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = s
            .parse::<Uri>()
            .map_err(|e| TransportConstructionError::InvalidBaseUrl(format!("{s}: {e}")))?;

        let https = match url.scheme_str() {
            None => true,
            Some("http") => false,
            Some("https") => true,
            Some(_) => {
                return Err(TransportConstructionError::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let mut host = match url.host() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(TransportConstructionError::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = format!("[{host}]");
        }

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.query().is_some() {
            return Err(TransportConstructionError::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let path_prefix = url.path().trim_end_matches('/').to_string();

        Ok(BaseUrl {
            https,
            host,
            port,
            path_prefix,
        })
    }
}
